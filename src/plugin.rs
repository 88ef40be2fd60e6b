//! Startup glue: attaches the search provider and the two context-sync
//! remote methods to the host platform.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::config::PluginConfig;
use crate::error::SyncResult;
use crate::provider::SearchProvider;
use crate::records::SharedRecordSource;
use crate::sync::{ContextSync, SharedWorkspaceApi};
use crate::types::{RESTORE_WORKSPACE_WITH_CONTEXT_METHOD, UPDATE_WORKSPACE_CONTEXT_METHOD};

pub const PLUGIN_NAME: &str = "fixed-income-search-plugin";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registration record for a remote-invokable method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodDefinition {
    pub name: &'static str,
    pub accepts: &'static str,
    pub returns: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

/// Handler invoked by the host with caller-supplied JSON arguments. Both
/// sync methods are fire-and-forget, so handlers return nothing.
pub type MethodHandler =
    Arc<dyn Fn(Value) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Host remote-method registry.
#[async_trait]
pub trait InteropApi: Send + Sync {
    async fn register_method(
        &self,
        definition: MethodDefinition,
        handler: MethodHandler,
    ) -> SyncResult<()>;
}

/// Host search-provider registry.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn register_provider(&self, name: &str) -> SyncResult<()>;
}

/// The host surfaces the plugin attaches to. `search` is optional because
/// hosts without the search capability still load the plugin.
pub struct PluginHost {
    pub search: Option<Arc<dyn SearchApi>>,
    pub interop: Arc<dyn InteropApi>,
    pub workspaces: SharedWorkspaceApi,
}

/// Register the provider and the two sync methods with the host.
///
/// Returns the provider the host should feed queries into, or `None` when
/// the host has no search registry (nothing is registered in that case).
pub async fn start(
    config: PluginConfig,
    host: PluginHost,
    source: SharedRecordSource,
) -> SyncResult<Option<Arc<SearchProvider>>> {
    tracing::info!("{PLUGIN_NAME} v{PLUGIN_VERSION} initializing");

    let Some(search) = host.search else {
        tracing::warn!("host search registry is unavailable, cannot register search provider");
        return Ok(None);
    };

    search.register_provider(&config.provider_name).await?;

    let sync = Arc::new(ContextSync::new(host.workspaces));

    let apply_sync = sync.clone();
    let apply: MethodHandler = Arc::new(move |args| {
        let sync = apply_sync.clone();
        Box::pin(async move {
            sync.apply_to_selected(args).await;
        })
    });
    host.interop
        .register_method(update_context_definition(), apply)
        .await?;

    let restore_sync = sync.clone();
    let restore: MethodHandler = Arc::new(move |args| {
        let sync = restore_sync.clone();
        Box::pin(async move {
            sync.restore_with_context(args).await;
        })
    });
    host.interop
        .register_method(restore_workspace_definition(), restore)
        .await?;

    Ok(Some(Arc::new(SearchProvider::new(&config, source))))
}

fn update_context_definition() -> MethodDefinition {
    MethodDefinition {
        name: UPDATE_WORKSPACE_CONTEXT_METHOD,
        accepts: "Fdc3Instrument",
        returns: "",
        display_name: "Write data to active workspace context",
        description: "Writes the passed in context object to the currently selected workspace context",
    }
}

fn restore_workspace_definition() -> MethodDefinition {
    MethodDefinition {
        name: RESTORE_WORKSPACE_WITH_CONTEXT_METHOD,
        accepts: "string workspaceName, Fdc3Instrument context",
        returns: "",
        display_name: "Restore workspace with passed context",
        description: "Restore the passed workspace with the passed in context object",
    }
}
