use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tracks which query identities are still live.
///
/// Nothing cancels an in-flight scan; a query whose identity has left this
/// set by resolution time simply has its outcome dropped. Once an identity
/// is removed it never re-enters the live set under the same token, so the
/// live/discarded transition is one-way.
#[derive(Debug, Default)]
pub struct QueryTracker {
    live: Mutex<HashSet<String>>,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a query identity as live. Must happen before resolution starts.
    pub fn admit(&self, query_id: &str) {
        self.live().insert(query_id.to_string());
    }

    /// Whether the identity is still eligible to have its outcome delivered.
    pub fn is_live(&self, query_id: &str) -> bool {
        self.live().contains(query_id)
    }

    /// Remove the identity from the live set, returning whether it was
    /// present. Removing an absent identity is a no-op.
    pub fn resolve(&self, query_id: &str) -> bool {
        self.live().remove(query_id)
    }

    fn live(&self) -> MutexGuard<'_, HashSet<String>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
