use std::fmt;

/// Unified error type for the searchsync crate.
#[derive(Debug, Clone)]
pub enum SyncError {
    /// The record source failed while answering a query.
    DataSource(String),
    /// The host workspace manager rejected or failed an operation.
    Workspace(String),
    /// The host sink refused an individual delivery.
    Delivery(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::DataSource(msg) => write!(f, "data source error: {msg}"),
            SyncError::Workspace(msg) => write!(f, "workspace error: {msg}"),
            SyncError::Delivery(msg) => write!(f, "delivery error: {msg}"),
            SyncError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for SyncError {}

/// Result type alias using [`SyncError`].
pub type SyncResult<T> = Result<T, SyncError>;
