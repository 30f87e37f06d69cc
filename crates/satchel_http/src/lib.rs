//! # Satchel HTTP
//!
//! Transport-agnostic HTTP request helpers.
//!
//! This crate provides:
//! - A request model the embedding application maps its transport onto
//! - AJAX detection and component-wise origin validation
//! - CORS header decisions, set only on an origin match
//! - `{success, data}` JSON envelopes with status codes
//! - Nonce retrieval/verification glue over [`satchel_secrets::NonceStore`]
//! - Template key → file resolution with directory auto-discovery
//!
//! There is no server in this crate; in a real application you would expose
//! HTTP endpoints that call these helpers.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod ajax;
mod error;
mod nonce_endpoint;
mod origin;
mod request;
mod response;
mod router;

pub use ajax::is_ajax;
pub use error::{HttpError, HttpResult};
pub use nonce_endpoint::handle_nonce_request;
pub use origin::{cors_headers, parse_origin, validate_origin, OriginParts};
pub use request::HttpRequest;
pub use response::ApiResponse;
pub use router::TemplateRouter;
