use serde::{Deserialize, Serialize};

use crate::types::FIXED_INCOME_WORKSPACE;

pub const DEFAULT_PROVIDER_NAME: &str = "fixed-income-search-provider";

/// Flattening bound applied while matching. The shipped record schemas are
/// flat, so only top-level scalar fields participate in the scan.
pub const DEFAULT_MATCH_DEPTH: usize = 0;

/// Host-overridable plugin settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Name the search provider registers under.
    pub provider_name: String,
    /// Workspace targeted by restore actions and embedded in display strings.
    pub workspace_name: String,
    /// How deep record flattening descends into nested fields.
    pub match_depth: usize,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            workspace_name: FIXED_INCOME_WORKSPACE.to_string(),
            match_depth: DEFAULT_MATCH_DEPTH,
        }
    }
}
