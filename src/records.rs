pub mod data;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::SyncResult;

/// Label of the shipped instrument collection.
pub const INSTRUMENT_COLLECTION: &str = "Instrument";

/// Label of the shipped order collection.
pub const ORDER_COLLECTION: &str = "Order";

/// Instrument type discriminator carried by the static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstrumentType {
    Fund,
    FixedIncome,
}

/// A fixed-income instrument record.
///
/// Fields beyond the known schema land in `extra` and still participate in
/// flattening and matching; they are never mapped into action payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub isin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ticker: String,
    #[serde(rename = "LEI")]
    pub lei: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "instrumentType")]
    pub instrument_type: InstrumentType,
    #[serde(rename = "bbgExchange", skip_serializing_if = "Option::is_none")]
    pub bbg_exchange: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fixed-income order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderId")]
    pub order_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A searchable record: one of the two known schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Instrument(Instrument),
    Order(Order),
}

/// A labeled set of records scanned by the matcher. Collections are scanned
/// in registration order and records in collection order.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    pub label: String,
    pub records: Vec<Record>,
}

/// Source of the record collections scanned per query.
///
/// The static tables back this today; a live data API can stand in behind
/// the same seam without touching the matcher.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> SyncResult<Vec<RecordCollection>>;
}

pub type SharedRecordSource = Arc<dyn RecordSource>;

/// Record source backed by the shipped static tables.
#[derive(Debug, Clone)]
pub struct StaticRecordSource {
    collections: Vec<RecordCollection>,
}

impl StaticRecordSource {
    pub fn new() -> Self {
        Self {
            collections: vec![
                RecordCollection {
                    label: INSTRUMENT_COLLECTION.to_string(),
                    records: data::fixed_income_instruments()
                        .into_iter()
                        .map(Record::Instrument)
                        .collect(),
                },
                RecordCollection {
                    label: ORDER_COLLECTION.to_string(),
                    records: data::fixed_income_orders()
                        .into_iter()
                        .map(Record::Order)
                        .collect(),
                },
            ],
        }
    }

    pub fn with_collections(collections: Vec<RecordCollection>) -> Self {
        Self { collections }
    }
}

impl Default for StaticRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch(&self) -> SyncResult<Vec<RecordCollection>> {
        Ok(self.collections.clone())
    }
}
