use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A context object synchronized between search selections and workspaces.
///
/// The tag values follow the wire convention of the host platform:
/// `fdc3.instrument` for instruments, `fixedIncome.order` for orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContextPayload {
    #[serde(rename = "fdc3.instrument")]
    Instrument(InstrumentContext),
    #[serde(rename = "fixedIncome.order")]
    Order(OrderContext),
}

/// Instrument context: a display name plus an identifier bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<InstrumentIdentifiers>,
}

/// The recognized instrument identifier schemes, plus an open extension map
/// for schemes the crate does not know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentIdentifiers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(rename = "RIC", skip_serializing_if = "Option::is_none")]
    pub ric: Option<String>,
    #[serde(rename = "ISIN", skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    #[serde(rename = "BBG", skip_serializing_if = "Option::is_none")]
    pub bbg: Option<String>,
    #[serde(rename = "bbgExchange", skip_serializing_if = "Option::is_none")]
    pub bbg_exchange: Option<String>,
    #[serde(rename = "CUSIP", skip_serializing_if = "Option::is_none")]
    pub cusip: Option<String>,
    #[serde(rename = "FIGI", skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    #[serde(rename = "PERMID", skip_serializing_if = "Option::is_none")]
    pub permid: Option<String>,
    #[serde(rename = "SEDOL", skip_serializing_if = "Option::is_none")]
    pub sedol: Option<String>,
    #[serde(rename = "FDS_ID", skip_serializing_if = "Option::is_none")]
    pub fds_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fixed-income order context.
///
/// Only `id` is guaranteed; the shipped order records carry no client or
/// ticker information, so those fields are omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderContext {
    pub id: String,
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}
