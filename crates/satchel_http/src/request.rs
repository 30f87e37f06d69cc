//! Transport-agnostic request model.

use std::collections::BTreeMap;

/// An HTTP request as seen by the helpers in this crate.
///
/// There is no server here; the embedding application maps whatever
/// transport it uses onto this shape and calls the helpers with it.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    /// Request method, uppercase.
    pub method: String,
    /// Request path.
    pub path: String,
    /// Header name/value pairs, order preserved.
    pub headers: Vec<(String, String)>,
    /// Query parameters.
    pub query: BTreeMap<String, String>,
    /// Raw request body.
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            ..Self::default()
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query_param(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the body from a JSON value.
    #[must_use]
    pub fn json_body(self, value: &serde_json::Value) -> Self {
        self.body(value.to_string())
    }

    /// First header with this name, case-insensitively.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parses the body as JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
