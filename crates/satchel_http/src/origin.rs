//! Origin validation and CORS header decisions.

use crate::request::HttpRequest;

/// Components of a parsed `Origin` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginParts {
    /// URL scheme, lowercase.
    pub scheme: String,
    /// Host, lowercase.
    pub host: String,
    /// Port, explicit or inferred from the scheme.
    pub port: u16,
}

/// Parses `scheme://host[:port]` into components.
///
/// Ports default to 443 for `https` and 80 for `http`. Returns `None` for
/// anything that does not look like an origin.
#[must_use]
pub fn parse_origin(origin: &str) -> Option<OriginParts> {
    let (scheme, rest) = origin.trim().split_once("://")?;
    let scheme = scheme.to_ascii_lowercase();
    if scheme.is_empty() || rest.is_empty() || rest.contains('/') {
        return None;
    }

    let (host, port) = match rest.rsplit_once(':') {
        Some((host, port_str)) => (host, port_str.parse::<u16>().ok()?),
        None => {
            let default = match scheme.as_str() {
                "https" => 443,
                "http" => 80,
                _ => return None,
            };
            (rest, default)
        }
    };
    if host.is_empty() {
        return None;
    }

    Some(OriginParts {
        scheme,
        host: host.to_ascii_lowercase(),
        port,
    })
}

/// Whether the request's `Origin` header matches one of the allowed origins,
/// compared component-wise after parsing.
#[must_use]
pub fn validate_origin(request: &HttpRequest, allowed: &[&str]) -> bool {
    let Some(origin) = request.header_value("Origin").and_then(parse_origin) else {
        return false;
    };
    allowed
        .iter()
        .filter_map(|candidate| parse_origin(candidate))
        .any(|candidate| candidate == origin)
}

/// CORS headers for a request, set only when its origin is allowed.
///
/// Returns `None` (no headers at all) on a mismatch, mirroring the
/// conditional-header behavior of the original toolkit.
#[must_use]
pub fn cors_headers(request: &HttpRequest, allowed: &[&str]) -> Option<Vec<(String, String)>> {
    if !validate_origin(request, allowed) {
        return None;
    }
    let origin = request.header_value("Origin")?.to_string();
    Some(vec![
        ("Access-Control-Allow-Origin".to_string(), origin),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET, POST, PUT, DELETE, OPTIONS".to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type, X-Requested-With".to_string(),
        ),
        ("Vary".to_string(), "Origin".to_string()),
    ])
}
