//! Error types for ledger operations.

use serde::{Deserialize, Serialize};

/// Machine-checkable failure kind carried by every error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    BadArgumentCount,
    UnknownOperation,
    NotFound,
    InvalidAttribute,
    InvalidQuery,
    MalformedKey,
    StoreUnavailable,
    QueryUnsupported,
    MalformedRecord,
    Config,
}

/// Error type for every ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// Operation invoked with the wrong number of positional arguments.
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    BadArgumentCount {
        operation: String,
        expected: String,
        actual: usize,
    },

    /// No operation registered under this name.
    #[error("not a valid operation: {0}")]
    UnknownOperation(String),

    /// Point lookup found nothing at the key.
    #[error("record does not exist: {0}")]
    NotFound(String),

    /// Namespace or attribute cannot be part of a composite key.
    #[error("invalid key attribute {value:?}: {reason}")]
    InvalidAttribute { value: String, reason: String },

    /// Selector could not be built or parsed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Key does not decode under the composite-key layout.
    #[error("malformed composite key {key:?}: {reason}")]
    MalformedKey { key: String, reason: String },

    /// Substrate could not serve the call.
    #[error("state store unavailable: {0}")]
    StoreUnavailable(String),

    /// Store cannot evaluate selector queries.
    #[error("rich query is not supported by this state store")]
    QueryUnsupported,

    /// Stored bytes are not a valid JSON record.
    #[error("record at key {key:?} is not valid JSON: {reason}")]
    MalformedRecord { key: String, reason: String },

    /// Config could not be parsed or validated.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// The kind reported in an `ErrorBody`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::BadArgumentCount { .. } => ErrorKind::BadArgumentCount,
            LedgerError::UnknownOperation(_) => ErrorKind::UnknownOperation,
            LedgerError::NotFound(_) => ErrorKind::NotFound,
            LedgerError::InvalidAttribute { .. } => ErrorKind::InvalidAttribute,
            LedgerError::InvalidQuery(_) => ErrorKind::InvalidQuery,
            LedgerError::MalformedKey { .. } => ErrorKind::MalformedKey,
            LedgerError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            LedgerError::QueryUnsupported => ErrorKind::QueryUnsupported,
            LedgerError::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            LedgerError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            LedgerError::BadArgumentCount { .. } => 400,
            LedgerError::UnknownOperation(_) => 404,
            LedgerError::NotFound(_) => 404,
            LedgerError::InvalidAttribute { .. } => 400,
            LedgerError::InvalidQuery(_) => 400,
            LedgerError::MalformedKey { .. } => 400,
            LedgerError::StoreUnavailable(_) => 503,
            LedgerError::QueryUnsupported => 501,
            LedgerError::MalformedRecord { .. } => 500,
            LedgerError::Config(_) => 500,
        }
    }

    /// Structured body returned to the caller in place of a payload.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        }
    }

    pub(crate) fn invalid_attribute(value: &str, reason: impl Into<String>) -> Self {
        LedgerError::InvalidAttribute {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_key(key: &str, reason: impl Into<String>) -> Self {
        LedgerError::MalformedKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Serialized failure: `{"kind": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<toml::de::Error> for LedgerError {
    fn from(err: toml::de::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}
