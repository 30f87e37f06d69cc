//! JSON response envelopes.

use serde::Serialize;

/// A `{success, data}` JSON envelope with an HTTP status code.
///
/// Success envelopes carry the payload in `data`; error envelopes carry
/// `{"message": ...}` there with a 4xx/5xx status.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload, or error details.
    pub data: serde_json::Value,
    /// HTTP status code, not serialized into the body.
    #[serde(skip)]
    pub status: u16,
}

impl ApiResponse {
    /// A 200 success envelope.
    #[must_use]
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
            status: 200,
        }
    }

    /// An error envelope with the given 4xx/5xx status.
    #[must_use]
    pub fn error(message: &str, status: u16) -> Self {
        Self {
            success: false,
            data: serde_json::json!({ "message": message }),
            status,
        }
    }

    /// The serialized body.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "success": self.success, "data": self.data })
    }

    /// Whether the status is an error status.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}
