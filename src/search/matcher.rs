use regex::Regex;
use serde_json::Value;

use crate::config::PluginConfig;
use crate::context::{ContextPayload, InstrumentContext, InstrumentIdentifiers, OrderContext};
use crate::records::{Instrument, Order, Record, RecordCollection};
use crate::search::flatten::flatten;
use crate::types::{
    ActionParams, RestoreParams, ResultAction, ResultEntry, ResultKind,
    RESTORE_WORKSPACE_SECTION, RESTORE_WORKSPACE_WITH_CONTEXT_METHOD,
    UPDATE_WORKSPACE_CONTEXT_METHOD,
};

/// Scans record collections against a compiled query pattern and builds the
/// actionable result entries for every match.
///
/// Every matching record produces exactly two entries: one under the
/// collection's own category that applies the record's context to the active
/// workspace, and one under the restore category that restores the
/// configured workspace with the same context injected.
pub struct Matcher {
    workspace_name: String,
    match_depth: usize,
}

impl Matcher {
    pub fn new(config: &PluginConfig) -> Self {
        Self {
            workspace_name: config.workspace_name.clone(),
            match_depth: config.match_depth,
        }
    }

    /// Linear scan over all collections, in registration order. No index is
    /// kept; the collections hold tens of records.
    pub fn search(&self, collections: &[RecordCollection], pattern: &Regex) -> Vec<ResultEntry> {
        let mut entries = Vec::new();

        for collection in collections {
            for record in &collection.records {
                let blob = flatten_record(record, self.match_depth);
                if !pattern.is_match(&blob) {
                    continue;
                }
                match record {
                    Record::Instrument(instrument) => {
                        self.push_instrument_entries(&collection.label, instrument, &mut entries)
                    }
                    Record::Order(order) => {
                        self.push_order_entries(&collection.label, order, &mut entries)
                    }
                }
            }
        }

        entries
    }

    fn push_instrument_entries(
        &self,
        label: &str,
        instrument: &Instrument,
        entries: &mut Vec<ResultEntry>,
    ) {
        let display = instrument
            .description
            .clone()
            .unwrap_or_else(|| instrument.ticker.clone());
        let context = instrument_context(instrument);

        entries.push(ResultEntry {
            kind: ResultKind {
                name: label.to_string(),
            },
            id: instrument.ticker.clone(),
            display_name: display.clone(),
            action: ResultAction {
                method: UPDATE_WORKSPACE_CONTEXT_METHOD.to_string(),
                params: ActionParams::Context(context.clone()),
            },
        });

        entries.push(ResultEntry {
            kind: ResultKind {
                name: RESTORE_WORKSPACE_SECTION.to_string(),
            },
            id: format!(
                "{} restore Workspace with {}",
                instrument.ticker, self.workspace_name
            ),
            display_name: format!("'{}' Workspace with {}", self.workspace_name, display),
            action: self.restore_action(context),
        });
    }

    fn push_order_entries(&self, label: &str, order: &Order, entries: &mut Vec<ResultEntry>) {
        let context = ContextPayload::Order(OrderContext {
            id: order.order_id.clone(),
            client_id: None,
            ticker: None,
        });

        entries.push(ResultEntry {
            kind: ResultKind {
                name: label.to_string(),
            },
            id: order.order_id.clone(),
            display_name: format!(
                "'{}' order with ID - {}",
                self.workspace_name, order.order_id
            ),
            action: ResultAction {
                method: UPDATE_WORKSPACE_CONTEXT_METHOD.to_string(),
                params: ActionParams::Context(context.clone()),
            },
        });

        entries.push(ResultEntry {
            kind: ResultKind {
                name: RESTORE_WORKSPACE_SECTION.to_string(),
            },
            id: format!(
                "{} restore Workspace with {}",
                order.order_id, self.workspace_name
            ),
            display_name: format!(
                "'{}' Workspace with Order ID {}",
                self.workspace_name, order.order_id
            ),
            action: self.restore_action(context),
        });
    }

    fn restore_action(&self, context: ContextPayload) -> ResultAction {
        ResultAction {
            method: RESTORE_WORKSPACE_WITH_CONTEXT_METHOD.to_string(),
            params: ActionParams::Restore(RestoreParams {
                workspace_name: self.workspace_name.clone(),
                context,
            }),
        }
    }
}

fn flatten_record(record: &Record, max_depth: usize) -> String {
    let node = serde_json::to_value(record).unwrap_or(Value::Null);
    flatten(&node, max_depth)
}

fn instrument_context(instrument: &Instrument) -> ContextPayload {
    // RIC is synthesized from ticker + exchange; ticker alone when the
    // record carries no exchange.
    let ric = match &instrument.bbg_exchange {
        Some(exchange) => format!("{} {}", instrument.ticker, exchange),
        None => instrument.ticker.clone(),
    };

    ContextPayload::Instrument(InstrumentContext {
        name: instrument.description.clone(),
        id: Some(InstrumentIdentifiers {
            ticker: Some(instrument.ticker.clone()),
            ric: Some(ric),
            isin: Some(instrument.isin.clone()),
            bbg_exchange: instrument.bbg_exchange.clone(),
            ..Default::default()
        }),
    })
}
