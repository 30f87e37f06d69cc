//! Request-body glue between HTTP callers and the nonce store.
//!
//! Callers speak a small JSON protocol in the request body:
//!
//! - `{"action": "...", "isNonceRetrieval": true}` issues a nonce for the
//!   action and returns it.
//! - `{"action": "...", "nonce": "..."}` verifies (and consumes) a nonce.
//! - `{"action": "...", "secure": true, ...}` marks the request as one that
//!   must carry a valid nonce; missing or failed verification is a 403.

use crate::request::HttpRequest;
use crate::response::ApiResponse;
use satchel_secrets::NonceStore;

/// Handles nonce retrieval and verification for a request.
///
/// Returns a JSON envelope either carrying the fresh nonce, confirming the
/// verification, or describing the failure with a 4xx status.
#[must_use]
pub fn handle_nonce_request(store: &NonceStore, request: &HttpRequest) -> ApiResponse {
    let Ok(body) = request.body_json() else {
        return ApiResponse::error("request body is not valid JSON", 400);
    };

    let Some(action) = body.get("action").and_then(|v| v.as_str()) else {
        return ApiResponse::error("missing `action`", 400);
    };

    let is_retrieval = body
        .get("isNonceRetrieval")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    if is_retrieval {
        return match store.issue(action) {
            Ok(nonce) => ApiResponse::success(serde_json::json!({ "nonce": nonce })),
            Err(err) => ApiResponse::error(&err.to_string(), 500),
        };
    }

    let secure = body
        .get("secure")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    match body.get("nonce").and_then(|v| v.as_str()) {
        Some(nonce) => match store.verify(action, nonce) {
            Ok(()) => ApiResponse::success(serde_json::json!({ "verified": true })),
            Err(err) => ApiResponse::error(&err.to_string(), 403),
        },
        None if secure => ApiResponse::error("secure request requires a nonce", 403),
        None => ApiResponse::error("missing `nonce` or `isNonceRetrieval`", 400),
    }
}
