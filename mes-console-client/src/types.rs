//! Wire types shared across the layer.

use serde::{Deserialize, Serialize};

/// Business success code inside a delivered envelope.
pub const SUCCESS_CODE: i64 = 200;

/// Decoded response body: `{code, message?, data}`.
///
/// `code == 200` marks business success. Any other code is a business
/// failure delivered as a normal value, not an `Err` — callers branch on
/// [`is_success`](Self::is_success) explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Business status code.
    pub code: i64,
    /// Server-provided message, preferred over catalog wording when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload; cleared by the dispatcher on business failure so callers
    /// never observe a partial payload under a failure code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Whether the envelope carries the business success code.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Same envelope with the payload stripped.
    #[must_use]
    pub(crate) fn without_data(mut self) -> Self {
        self.data = None;
        self
    }
}
