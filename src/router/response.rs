//! Response - what the host gets back from one invocation.

use crate::error::{ErrorBody, LedgerError};

pub const STATUS_OK: u16 = 200;

/// Status plus payload. A success carries the operation's payload (possibly
/// empty); a failure carries a JSON `ErrorBody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub payload: Vec<u8>,
}

impl Response {
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: STATUS_OK,
            payload: payload.unwrap_or_default(),
        }
    }

    pub fn failure(err: &LedgerError) -> Self {
        let body = err.to_body();
        let payload = serde_json::to_vec(&body).unwrap_or_else(|_| body.message.into_bytes());
        Self {
            status: err.status_code(),
            payload,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The decoded error body, if this is a failure response.
    pub fn error(&self) -> Option<ErrorBody> {
        if self.is_ok() {
            return None;
        }
        serde_json::from_slice(&self.payload).ok()
    }
}
