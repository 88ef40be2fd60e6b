use serde::{Deserialize, Serialize};

use crate::context::ContextPayload;

/// Name of the workspace targeted by restore actions. Must match the saved
/// layout name exactly for the restore lookup to succeed.
pub const FIXED_INCOME_WORKSPACE: &str = "Buy-side Fixed Income";

/// Remote method that writes a context payload onto the selected workspace.
pub const UPDATE_WORKSPACE_CONTEXT_METHOD: &str = "FIUpdateSelectedWorkspaceContext";

/// Remote method that restores a named workspace with an injected context.
pub const RESTORE_WORKSPACE_WITH_CONTEXT_METHOD: &str = "FIRestoreWorkspaceWithContext";

/// Category label for the restore-workspace result entries.
pub const RESTORE_WORKSPACE_SECTION: &str = "Restore Workspace";

/// A search query as delivered by the host: an opaque identity token plus
/// the raw search string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderQuery {
    pub id: String,
    pub search: String,
}

/// Category of a result entry, as the host renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultKind {
    pub name: String,
}

/// A single actionable search result handed back to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub action: ResultAction,
}

/// The remote invocation embedded in a result entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultAction {
    pub method: String,
    pub params: ActionParams,
}

/// Parameter payload of a result action. Apply actions carry a bare context
/// payload; restore actions pair the payload with a workspace name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionParams {
    Context(ContextPayload),
    Restore(RestoreParams),
}

/// Input shape of the restore-workspace remote method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreParams {
    pub workspace_name: String,
    pub context: ContextPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{InstrumentContext, OrderContext};

    #[test]
    fn result_entry_serializes_to_host_shape() {
        let entry = ResultEntry {
            kind: ResultKind {
                name: "Order".to_string(),
            },
            id: "3223".to_string(),
            display_name: "order 3223".to_string(),
            action: ResultAction {
                method: UPDATE_WORKSPACE_CONTEXT_METHOD.to_string(),
                params: ActionParams::Context(ContextPayload::Order(OrderContext {
                    id: "3223".to_string(),
                    ..Default::default()
                })),
            },
        };

        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["type"]["name"], "Order");
        assert_eq!(value["id"], "3223");
        assert_eq!(value["displayName"], "order 3223");
        assert_eq!(value["action"]["method"], "FIUpdateSelectedWorkspaceContext");
        assert_eq!(value["action"]["params"]["type"], "fixedIncome.order");
    }

    #[test]
    fn restore_params_use_camel_case_on_the_wire() {
        let params = RestoreParams {
            workspace_name: FIXED_INCOME_WORKSPACE.to_string(),
            context: ContextPayload::Instrument(InstrumentContext::default()),
        };

        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["workspaceName"], FIXED_INCOME_WORKSPACE);
        assert_eq!(value["context"]["type"], "fdc3.instrument");
    }

    #[test]
    fn action_params_deserialize_by_shape() {
        let restore: ActionParams = serde_json::from_value(serde_json::json!({
            "workspaceName": "Buy-side Fixed Income",
            "context": { "type": "fixedIncome.order", "id": "1026" }
        }))
        .expect("restore params");
        assert!(matches!(restore, ActionParams::Restore(_)));

        let context: ActionParams = serde_json::from_value(serde_json::json!({
            "type": "fdc3.instrument",
            "name": "DNB Bank ASA"
        }))
        .expect("context params");
        assert!(matches!(context, ActionParams::Context(_)));
    }
}
