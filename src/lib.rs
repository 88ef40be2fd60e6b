pub mod error;
pub mod types;

pub mod config;
pub mod context;
pub mod records;

pub mod queries;
pub mod search;
pub mod provider;
pub mod sync;
pub mod plugin;

pub use crate::config::PluginConfig;
pub use crate::context::ContextPayload;
pub use crate::error::{SyncError, SyncResult};
pub use crate::provider::{ResultSink, SearchProvider};
pub use crate::sync::{ContextSync, SyncOutcome, WorkspaceApi};
pub use crate::types::{ProviderQuery, ResultEntry};
