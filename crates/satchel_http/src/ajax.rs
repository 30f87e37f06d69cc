//! AJAX request detection.

use crate::request::HttpRequest;

/// Whether a request looks like an AJAX/fetch call.
///
/// Checks, in order: the `X-Requested-With: XMLHttpRequest` convention, a
/// JSON `Content-Type`, and a JSON-only `Accept` header.
#[must_use]
pub fn is_ajax(request: &HttpRequest) -> bool {
    if request
        .header_value("X-Requested-With")
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
    {
        return true;
    }

    if request
        .header_value("Content-Type")
        .is_some_and(|v| v.to_ascii_lowercase().contains("application/json"))
    {
        return true;
    }

    request
        .header_value("Accept")
        .is_some_and(|v| {
            let accept = v.to_ascii_lowercase();
            accept.contains("application/json") && !accept.contains("text/html")
        })
}
