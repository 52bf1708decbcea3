//! Selector - attribute-equality predicate handed to the store's rich query.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};

/// `{"selector": {"attr": "value", ...}}`, every condition an equality.
///
/// Rendered through `serde_json`, so quotes, backslashes and control
/// characters in a value are escaped by the encoder rather than spliced into
/// the query text. Any value `placeBet` can store is therefore queryable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    selector: BTreeMap<String, String>,
}

impl Selector {
    pub fn equals(attribute: &str, value: &str) -> LedgerResult<Self> {
        Self {
            selector: BTreeMap::new(),
        }
        .and(attribute, value)
    }

    pub fn and(mut self, attribute: &str, value: &str) -> LedgerResult<Self> {
        validate_attribute_name(attribute)?;
        self.selector
            .insert(attribute.to_string(), value.to_string());
        Ok(self)
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selector.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Query document passed verbatim to `KvStore::rich_query`.
    pub fn to_query_string(&self) -> LedgerResult<String> {
        serde_json::to_string(self).map_err(|e| LedgerError::InvalidQuery(e.to_string()))
    }

    /// Evaluate against a raw payload. Non-object payloads never match.
    pub fn matches(&self, payload: &[u8]) -> bool {
        let Ok(Value::Object(record)) = serde_json::from_slice::<Value>(payload) else {
            return false;
        };
        self.selector.iter().all(|(field, expected)| {
            matches!(record.get(field), Some(Value::String(actual)) if actual == expected)
        })
    }
}

fn validate_attribute_name(attribute: &str) -> LedgerResult<()> {
    if attribute.is_empty()
        || !attribute
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(LedgerError::InvalidQuery(format!(
            "attribute name {:?} must be non-empty and contain only [A-Za-z0-9_]",
            attribute
        )));
    }
    Ok(())
}
