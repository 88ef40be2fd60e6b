use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::context::ContextPayload;
use crate::error::{SyncError, SyncResult};
use crate::types::RestoreParams;

/// A saved workspace layout, as listed by the host workspace manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub name: String,
}

/// Host workspace manager boundary.
///
/// The host enforces that at most one workspace is selected at a time.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// Name of the currently selected workspace, if any.
    async fn selected_workspace(&self) -> SyncResult<Option<String>>;
    /// Write a context object onto the named workspace.
    async fn set_workspace_context(&self, workspace: &str, context: Value) -> SyncResult<()>;
    /// Saved workspace layouts known to the host.
    async fn layout_summaries(&self) -> SyncResult<Vec<LayoutSummary>>;
    /// Restore a workspace by name, injecting the given context.
    async fn restore_workspace(&self, workspace: &str, context: Value) -> SyncResult<()>;
}

pub type SharedWorkspaceApi = Arc<dyn WorkspaceApi>;

/// What became of a best-effort sync invocation.
///
/// Both remote handlers are fire-and-forget by contract: every outcome here
/// is logged and none is ever surfaced to the remote caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Context written onto the selected workspace.
    Applied,
    /// Workspace restored with the context injected.
    Restored,
    /// No workspace is currently selected; nothing was written.
    NoSelectedWorkspace,
    /// No saved layout carries the requested name; restore skipped.
    UnknownWorkspace(String),
    /// The arguments did not parse as a known payload shape.
    UnrecognizedContext,
    /// The host workspace manager failed mid-operation.
    Failed(String),
}

/// The two remote-invokable context-sync operations.
pub struct ContextSync {
    workspaces: SharedWorkspaceApi,
}

impl ContextSync {
    pub fn new(workspaces: SharedWorkspaceApi) -> Self {
        Self { workspaces }
    }

    /// Write a context payload onto the currently selected workspace.
    ///
    /// Instruments land under a `searchSync.instrument` key with the
    /// identifier bag copied by value; orders land verbatim under
    /// `searchSync.fixedIncomeOrder`.
    pub async fn apply_to_selected(&self, args: Value) -> SyncOutcome {
        let payload: ContextPayload = match serde_json::from_value(args) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!("unrecognized context payload: {error}");
                return SyncOutcome::UnrecognizedContext;
            }
        };

        match self.try_apply(&payload).await {
            Ok(SyncOutcome::NoSelectedWorkspace) => {
                tracing::debug!("no workspace selected, skipping context write");
                SyncOutcome::NoSelectedWorkspace
            }
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!("error writing to workspace context: {error}");
                SyncOutcome::Failed(error.to_string())
            }
        }
    }

    /// Restore the named workspace with the payload injected, provided a
    /// saved layout with that exact name exists. Restore failures are
    /// swallowed; restore is best-effort.
    pub async fn restore_with_context(&self, args: Value) -> SyncOutcome {
        let params: RestoreParams = match serde_json::from_value(args) {
            Ok(params) => params,
            Err(error) => {
                tracing::warn!("unrecognized restore arguments: {error}");
                return SyncOutcome::UnrecognizedContext;
            }
        };

        match self.try_restore(&params).await {
            Ok(SyncOutcome::UnknownWorkspace(name)) => {
                tracing::debug!("no saved layout named '{name}', skipping restore");
                SyncOutcome::UnknownWorkspace(name)
            }
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!("error restoring workspace with context: {error}");
                SyncOutcome::Failed(error.to_string())
            }
        }
    }

    async fn try_apply(&self, payload: &ContextPayload) -> SyncResult<SyncOutcome> {
        let Some(selected) = self.workspaces.selected_workspace().await? else {
            return Ok(SyncOutcome::NoSelectedWorkspace);
        };

        let context = selected_workspace_context(payload)?;
        self.workspaces
            .set_workspace_context(&selected, context)
            .await?;
        Ok(SyncOutcome::Applied)
    }

    async fn try_restore(&self, params: &RestoreParams) -> SyncResult<SyncOutcome> {
        let summaries = self.workspaces.layout_summaries().await?;
        if !summaries
            .iter()
            .any(|summary| summary.name == params.workspace_name)
        {
            return Ok(SyncOutcome::UnknownWorkspace(params.workspace_name.clone()));
        }

        let context = restore_context(&params.context)?;
        self.workspaces
            .restore_workspace(&params.workspace_name, context)
            .await?;
        Ok(SyncOutcome::Restored)
    }
}

fn selected_workspace_context(payload: &ContextPayload) -> SyncResult<Value> {
    let value = to_context_value(payload)?;
    let key = match payload {
        ContextPayload::Instrument(_) => "instrument",
        ContextPayload::Order(_) => "fixedIncomeOrder",
    };

    let mut search_sync = Map::new();
    search_sync.insert(key.to_string(), value);
    let mut root = Map::new();
    root.insert("searchSync".to_string(), Value::Object(search_sync));
    Ok(Value::Object(root))
}

/// The restored context carries the payload twice: nested under `searchSync`
/// and merged at top level. Consumers exist for both placements.
fn restore_context(payload: &ContextPayload) -> SyncResult<Value> {
    let value = to_context_value(payload)?;

    let mut root = Map::new();
    root.insert("searchSync".to_string(), value.clone());
    if let Value::Object(fields) = value {
        for (key, field) in fields {
            root.insert(key, field);
        }
    }
    Ok(Value::Object(root))
}

fn to_context_value(payload: &ContextPayload) -> SyncResult<Value> {
    serde_json::to_value(payload)
        .map_err(|error| SyncError::Internal(format!("failed to serialize context: {error}")))
}
