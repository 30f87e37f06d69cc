//! Identifier quoting.

/// Quotes an identifier for interpolation into SQL.
///
/// Uses double quotes with embedded quotes doubled, which both supported
/// dialects accept.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Whether a name is a valid unquoted identifier: `[A-Za-z_][A-Za-z0-9_]*`,
/// at most 64 characters.
#[must_use]
pub fn is_valid_ident(name: &str) -> bool {
    if name.is_empty() || name.len() > 64 {
        return false;
    }
    let mut chars = name.chars();
    let first = chars.next().expect("non-empty");
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
