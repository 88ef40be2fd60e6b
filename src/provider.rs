use std::sync::Arc;

use crate::config::PluginConfig;
use crate::error::{SyncError, SyncResult};
use crate::queries::QueryTracker;
use crate::records::SharedRecordSource;
use crate::search::{tokenize, Matcher};
use crate::types::{ProviderQuery, ResultEntry};

/// Delivered when a resolution failure carries no usable message.
pub const DATA_SOURCE_ERROR_FALLBACK: &str = "Cannot send the query to the data source.";

/// Host-side sink for one query's outcome: zero or more individually
/// delivered results followed by a completion signal, or exactly one error
/// string.
pub trait ResultSink: Send + Sync {
    fn send_result(&self, entry: ResultEntry) -> SyncResult<()>;
    fn send_error(&self, message: &str) -> SyncResult<()>;
    fn done(&self);
}

/// Answers host search queries over the configured record collections.
///
/// Each query runs as one asynchronous task: admitted into the live set,
/// resolved against the record source, then either delivered or silently
/// suppressed when the identity left the live set mid-flight. The live set
/// is owned per provider instance, so multiple providers can coexist.
pub struct SearchProvider {
    name: String,
    source: SharedRecordSource,
    matcher: Matcher,
    tracker: QueryTracker,
}

impl SearchProvider {
    pub fn new(config: &PluginConfig, source: SharedRecordSource) -> Self {
        Self {
            name: config.provider_name.clone(),
            source,
            matcher: Matcher::new(config),
            tracker: QueryTracker::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Answer one host query.
    ///
    /// On success the matching entries are delivered individually; a failed
    /// individual delivery is logged and the remaining entries still go out,
    /// followed by the completion signal. On failure a single error string
    /// is delivered instead. Either way, a query that was cancelled or
    /// superseded while resolving produces no outcome at all.
    pub async fn handle_query(&self, query: &ProviderQuery, sink: &dyn ResultSink) {
        self.tracker.admit(&query.id);

        match self.run_query(&query.search).await {
            Ok(entries) => {
                if !self.tracker.resolve(&query.id) {
                    return;
                }
                self.deliver(entries, sink);
            }
            Err(error) => {
                if !self.tracker.resolve(&query.id) {
                    return;
                }
                let message = host_error_message(&error);
                if let Err(delivery) = sink.send_error(&message) {
                    tracing::warn!("failed to deliver query error to host: {delivery}");
                }
            }
        }
    }

    /// Drop a query from the live set. Its in-flight computation still runs
    /// to completion, but the outcome is discarded at resolution time.
    pub fn cancel(&self, query_id: &str) {
        self.tracker.resolve(query_id);
    }

    async fn run_query(&self, raw: &str) -> SyncResult<Vec<ResultEntry>> {
        let collections = self.source.fetch().await?;
        let pattern = tokenize(raw);
        Ok(self.matcher.search(&collections, &pattern))
    }

    fn deliver(&self, entries: Vec<ResultEntry>, sink: &dyn ResultSink) {
        for entry in entries {
            let entry_id = entry.id.clone();
            if let Err(error) = sink.send_result(entry) {
                tracing::warn!("failed to deliver result '{entry_id}' to host: {error}");
            }
        }
        sink.done();
    }
}

fn host_error_message(error: &SyncError) -> String {
    match error {
        SyncError::DataSource(message) if !message.trim().is_empty() => message.clone(),
        SyncError::DataSource(_) => DATA_SOURCE_ERROR_FALLBACK.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{RecordCollection, RecordSource, StaticRecordSource};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct RecordingSink {
        results: Mutex<Vec<ResultEntry>>,
        errors: Mutex<Vec<String>>,
        completed: AtomicBool,
        fail_first_sends: AtomicUsize,
    }

    impl RecordingSink {
        fn failing_first(count: usize) -> Self {
            let sink = Self::default();
            sink.fail_first_sends.store(count, Ordering::SeqCst);
            sink
        }

        fn results(&self) -> Vec<ResultEntry> {
            self.results.lock().expect("results lock").clone()
        }

        fn errors(&self) -> Vec<String> {
            self.errors.lock().expect("errors lock").clone()
        }
    }

    impl ResultSink for RecordingSink {
        fn send_result(&self, entry: ResultEntry) -> SyncResult<()> {
            let remaining = self.fail_first_sends.load(Ordering::SeqCst);
            if remaining > 0 {
                self.fail_first_sends.store(remaining - 1, Ordering::SeqCst);
                return Err(SyncError::Delivery("sink refused entry".to_string()));
            }
            self.results.lock().expect("results lock").push(entry);
            Ok(())
        }

        fn send_error(&self, message: &str) -> SyncResult<()> {
            self.errors
                .lock()
                .expect("errors lock")
                .push(message.to_string());
            Ok(())
        }

        fn done(&self) {
            self.completed.store(true, Ordering::SeqCst);
        }
    }

    struct FailingSource {
        message: String,
    }

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch(&self) -> SyncResult<Vec<RecordCollection>> {
            Err(SyncError::DataSource(self.message.clone()))
        }
    }

    /// Parks fetches until released, so a test can interleave cancellation
    /// with an in-flight query.
    struct BlockingSource {
        started: Notify,
        release: Notify,
        fail: bool,
        inner: StaticRecordSource,
    }

    impl BlockingSource {
        fn new() -> Self {
            Self {
                started: Notify::new(),
                release: Notify::new(),
                fail: false,
                inner: StaticRecordSource::new(),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl RecordSource for BlockingSource {
        async fn fetch(&self) -> SyncResult<Vec<RecordCollection>> {
            self.started.notify_one();
            self.release.notified().await;
            if self.fail {
                return Err(SyncError::DataSource("upstream outage".to_string()));
            }
            self.inner.fetch().await
        }
    }

    fn provider_with(source: SharedRecordSource) -> SearchProvider {
        SearchProvider::new(&PluginConfig::default(), source)
    }

    fn query(id: &str, search: &str) -> ProviderQuery {
        ProviderQuery {
            id: id.to_string(),
            search: search.to_string(),
        }
    }

    #[tokio::test]
    async fn live_query_delivers_results_and_completes() {
        let provider = provider_with(Arc::new(StaticRecordSource::new()));
        let sink = RecordingSink::default();

        provider.handle_query(&query("q1", "morgan"), &sink).await;

        let results = sink.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "MS");
        assert!(sink.completed.load(Ordering::SeqCst));
        assert!(sink.errors().is_empty());
    }

    #[tokio::test]
    async fn cancelled_query_delivers_nothing() {
        let source = Arc::new(BlockingSource::new());
        let provider = Arc::new(provider_with(source.clone()));
        let sink = Arc::new(RecordingSink::default());

        let task = {
            let provider = provider.clone();
            let sink = sink.clone();
            tokio::spawn(async move {
                provider
                    .handle_query(&query("q1", "morgan"), sink.as_ref())
                    .await;
            })
        };

        // Wait for the query task to park inside the record source, then
        // supersede it before letting resolution finish.
        source.started.notified().await;
        provider.cancel("q1");
        source.release.notify_one();
        task.await.expect("query task");

        assert!(sink.results().is_empty());
        assert!(sink.errors().is_empty());
        assert!(!sink.completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn cancelled_query_suppresses_errors_too() {
        let source = Arc::new(BlockingSource::failing());
        let provider = Arc::new(provider_with(source.clone()));
        let sink = Arc::new(RecordingSink::default());

        let task = {
            let provider = provider.clone();
            let sink = sink.clone();
            tokio::spawn(async move {
                provider
                    .handle_query(&query("q1", "morgan"), sink.as_ref())
                    .await;
            })
        };

        source.started.notified().await;
        provider.cancel("q1");
        source.release.notify_one();
        task.await.expect("query task");

        assert!(sink.results().is_empty());
        assert!(sink.errors().is_empty());
    }

    #[tokio::test]
    async fn failed_resolution_delivers_single_error_message() {
        let provider = provider_with(Arc::new(FailingSource {
            message: "upstream outage".to_string(),
        }));
        let sink = RecordingSink::default();

        provider.handle_query(&query("q1", "morgan"), &sink).await;

        assert!(sink.results().is_empty());
        assert_eq!(sink.errors(), vec!["upstream outage".to_string()]);
        assert!(!sink.completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn blank_failure_message_falls_back_to_generic_text() {
        let provider = provider_with(Arc::new(FailingSource {
            message: "   ".to_string(),
        }));
        let sink = RecordingSink::default();

        provider.handle_query(&query("q1", "morgan"), &sink).await;

        assert_eq!(sink.errors(), vec![DATA_SOURCE_ERROR_FALLBACK.to_string()]);
    }

    #[tokio::test]
    async fn one_refused_delivery_does_not_abort_the_batch() {
        let provider = provider_with(Arc::new(StaticRecordSource::new()));
        let sink = RecordingSink::failing_first(1);

        provider.handle_query(&query("q1", "morgan"), &sink).await;

        // First of the two entries was refused; the second still went out
        // and the batch completed.
        assert_eq!(sink.results().len(), 1);
        assert!(sink.completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn queries_resolve_independently() {
        let provider = provider_with(Arc::new(StaticRecordSource::new()));
        let first = RecordingSink::default();
        let second = RecordingSink::default();

        provider.handle_query(&query("q1", "morgan"), &first).await;
        provider.handle_query(&query("q2", "goldman"), &second).await;

        assert_eq!(first.results()[0].id, "MS");
        assert_eq!(second.results()[0].id, "GS");
    }
}
