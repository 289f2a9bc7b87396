//! NEP-297 log assembly shared by every emitter.

use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Map, Value};
use near_sdk::{AccountId, env};

use super::{PREFIX, STANDARD, VERSION};
use crate::Listing;

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EventLog<'a> {
    standard: &'static str,
    version: &'static str,
    event: &'static str,
    data: [EventData<'a>; 1],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EventData<'a> {
    operation: &'static str,
    author: &'a AccountId,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Amounts and ids are logged as decimal strings; flags stay JSON booleans.
pub(crate) trait EventField {
    fn to_value(self) -> Value;
}

impl EventField for &str {
    fn to_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl EventField for &AccountId {
    fn to_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl EventField for u64 {
    fn to_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl EventField for u128 {
    fn to_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl EventField for U128 {
    fn to_value(self) -> Value {
        self.0.to_value()
    }
}

impl EventField for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

pub(crate) struct EventBuilder<'a> {
    family: &'static str,
    operation: &'static str,
    author: &'a AccountId,
    fields: Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    pub(crate) fn new(family: &'static str, operation: &'static str, author: &'a AccountId) -> Self {
        Self {
            family,
            operation,
            author,
            fields: Map::new(),
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl EventField) -> Self {
        self.fields.insert(key.to_owned(), value.to_value());
        self
    }

    pub(crate) fn field_opt(self, key: &str, value: Option<impl EventField>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Collection, token and seller of the listing the event is about.
    pub(crate) fn listing(self, listing: &Listing) -> Self {
        self.field("nft_contract_id", &listing.nft_contract_id)
            .field("token_id", listing.token_id.as_str())
            .field("seller_id", &listing.seller_id)
    }

    pub(crate) fn emit(self) {
        let log = EventLog {
            standard: STANDARD,
            version: VERSION,
            event: self.family,
            data: [EventData {
                operation: self.operation,
                author: self.author,
                fields: self.fields,
            }],
        };
        match serde_json::to_string(&log) {
            Ok(json) => env::log_str(&format!("{PREFIX}{json}")),
            Err(_) => env::panic_str("event serialization failed"),
        }
    }
}
