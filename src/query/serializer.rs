//! ResultSerializer - renders a result set as a JSON array of `{Key, Record}`.

use serde::Serialize;
use serde_json::value::RawValue;

use crate::error::{LedgerError, LedgerResult};
use crate::store::KeyValue;

#[derive(Serialize)]
struct QueryRecord<'a> {
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Record")]
    record: RecordPayload,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RecordPayload {
    /// Stored JSON embedded as-is, not re-escaped.
    Json(Box<RawValue>),
    /// Lenient mode only: a payload that is not JSON, carried as a string.
    Text(String),
}

/// Serializes result sets, preserving input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSerializer {
    strict: bool,
}

impl Default for ResultSerializer {
    fn default() -> Self {
        Self::strict()
    }
}

impl ResultSerializer {
    /// Fail with `MalformedRecord` on the first payload that is not JSON.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Embed non-JSON payloads as strings so the document stays valid.
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn serialize(&self, entries: &[KeyValue]) -> LedgerResult<Vec<u8>> {
        let mut records = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            records.push(QueryRecord {
                key,
                record: self.payload(key, value)?,
            });
        }

        serde_json::to_vec(&records).map_err(|e| LedgerError::MalformedRecord {
            key: String::new(),
            reason: e.to_string(),
        })
    }

    fn payload(&self, key: &str, value: &[u8]) -> LedgerResult<RecordPayload> {
        let parsed = std::str::from_utf8(value)
            .map_err(|e| e.to_string())
            .and_then(|text| RawValue::from_string(text.to_string()).map_err(|e| e.to_string()));

        match parsed {
            Ok(raw) => Ok(RecordPayload::Json(raw)),
            Err(reason) if self.strict => Err(LedgerError::MalformedRecord {
                key: key.to_string(),
                reason,
            }),
            Err(_) => Ok(RecordPayload::Text(
                String::from_utf8_lossy(value).into_owned(),
            )),
        }
    }
}
