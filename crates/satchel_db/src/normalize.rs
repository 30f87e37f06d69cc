//! Placeholder normalization.
//!
//! Queries may mix three placeholder styles: positional `?`, named `:name`,
//! and printf-style `%s`/`%d`/`%f`. [`normalize_sql`] rewrites them all to
//! `?` and asserts the placeholder count equals the parameter count, so a
//! partially-bound statement can never reach a driver. Printf placeholders
//! also coerce their parameter (`%d` → integer, `%f` → real, `%s` → text).
//!
//! Single-quoted string literals and double-quoted identifiers are left
//! untouched, including `''`/`""` escapes. A `::` sequence is treated as a
//! cast, not a named placeholder, and `%%` is a literal percent.

use crate::error::{DbError, DbResult};
use crate::value::SqlValue;

/// A query rewritten to `?`-only placeholders, with coerced parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuery {
    /// The rewritten SQL.
    pub sql: String,
    /// Parameters after printf-style coercion, one per placeholder.
    pub params: Vec<SqlValue>,
    /// How many placeholders the rewritten SQL contains.
    pub placeholder_count: usize,
}

impl NormalizedQuery {
    /// Whether the statement binds any parameter.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.placeholder_count > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coerce {
    Int,
    Real,
    Text,
}

/// Rewrites mixed placeholders to `?` and validates the parameter count.
///
/// # Errors
///
/// [`DbError::PlaceholderMismatch`] when the rewritten placeholder count and
/// `params.len()` differ; [`DbError::Coercion`] when a `%d`/`%f`/`%s`
/// parameter cannot be converted.
pub fn normalize_sql(sql: &str, params: &[SqlValue]) -> DbResult<NormalizedQuery> {
    let mut rewritten = String::with_capacity(sql.len());
    let mut coercions: Vec<Option<Coerce>> = Vec::new();

    let bytes = sql.as_bytes();
    let mut i = 0;
    // Delimiter of the literal/identifier being skipped, if any.
    let mut quote: Option<u8> = None;

    while i < bytes.len() {
        let b = bytes[i];

        if let Some(delimiter) = quote {
            if b == delimiter {
                // Either the terminator or the first half of a doubled
                // escape ('' or "").
                if bytes.get(i + 1) == Some(&delimiter) {
                    rewritten.push(delimiter as char);
                    rewritten.push(delimiter as char);
                    i += 2;
                } else {
                    rewritten.push(delimiter as char);
                    quote = None;
                    i += 1;
                }
            } else {
                let ch_len = utf8_len(b);
                rewritten.push_str(&sql[i..i + ch_len]);
                i += ch_len;
            }
            continue;
        }

        match b {
            b'\'' | b'"' => {
                quote = Some(b);
                rewritten.push(b as char);
                i += 1;
            }
            b'?' => {
                rewritten.push('?');
                coercions.push(None);
                i += 1;
            }
            b':' => {
                // `::` is a cast; a bare `:` only names a placeholder when an
                // identifier follows.
                let prev_colon = i > 0 && bytes[i - 1] == b':';
                let next = bytes.get(i + 1).copied();
                let starts_ident =
                    next.is_some_and(|c| c.is_ascii_alphabetic() || c == b'_');
                if !prev_colon && next != Some(b':') && starts_ident {
                    let mut end = i + 1;
                    while end < bytes.len()
                        && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                    {
                        end += 1;
                    }
                    rewritten.push('?');
                    coercions.push(None);
                    i = end;
                } else {
                    rewritten.push(':');
                    i += 1;
                }
            }
            b'%' => match bytes.get(i + 1).copied() {
                Some(b'%') => {
                    rewritten.push('%');
                    i += 2;
                }
                Some(b's') => {
                    rewritten.push('?');
                    coercions.push(Some(Coerce::Text));
                    i += 2;
                }
                Some(b'd') => {
                    rewritten.push('?');
                    coercions.push(Some(Coerce::Int));
                    i += 2;
                }
                Some(b'f') => {
                    rewritten.push('?');
                    coercions.push(Some(Coerce::Real));
                    i += 2;
                }
                _ => {
                    rewritten.push('%');
                    i += 1;
                }
            },
            _ => {
                // Copy the full UTF-8 scalar, not just the lead byte.
                let ch_len = utf8_len(b);
                rewritten.push_str(&sql[i..i + ch_len]);
                i += ch_len;
            }
        }
    }

    let placeholder_count = coercions.len();
    if placeholder_count != params.len() {
        return Err(DbError::PlaceholderMismatch {
            expected: placeholder_count,
            actual: params.len(),
        });
    }

    let mut coerced = Vec::with_capacity(params.len());
    for (index, (param, coercion)) in params.iter().zip(&coercions).enumerate() {
        coerced.push(apply_coercion(param, *coercion, index)?);
    }

    Ok(NormalizedQuery {
        sql: rewritten,
        params: coerced,
        placeholder_count,
    })
}

fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

fn apply_coercion(value: &SqlValue, coercion: Option<Coerce>, index: usize) -> DbResult<SqlValue> {
    let Some(coercion) = coercion else {
        return Ok(value.clone());
    };
    match (coercion, value) {
        (_, SqlValue::Null) => Ok(SqlValue::Null),

        (Coerce::Int, SqlValue::Integer(i)) => Ok(SqlValue::Integer(*i)),
        (Coerce::Int, SqlValue::Real(f)) => Ok(SqlValue::Integer(*f as i64)),
        (Coerce::Int, SqlValue::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(SqlValue::Integer)
            .map_err(|_| DbError::Coercion {
                index,
                target: "integer",
            }),

        (Coerce::Real, SqlValue::Integer(i)) => Ok(SqlValue::Real(*i as f64)),
        (Coerce::Real, SqlValue::Real(f)) => Ok(SqlValue::Real(*f)),
        (Coerce::Real, SqlValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(SqlValue::Real)
            .map_err(|_| DbError::Coercion {
                index,
                target: "real",
            }),

        (Coerce::Text, SqlValue::Integer(i)) => Ok(SqlValue::Text(i.to_string())),
        (Coerce::Text, SqlValue::Real(f)) => Ok(SqlValue::Text(f.to_string())),
        (Coerce::Text, SqlValue::Text(s)) => Ok(SqlValue::Text(s.clone())),

        (Coerce::Int, SqlValue::Blob(_)) => Err(DbError::Coercion {
            index,
            target: "integer",
        }),
        (Coerce::Real, SqlValue::Blob(_)) => Err(DbError::Coercion {
            index,
            target: "real",
        }),
        (Coerce::Text, SqlValue::Blob(_)) => Err(DbError::Coercion {
            index,
            target: "text",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_params;

    #[test]
    fn plain_query_passes_through() {
        let normalized = normalize_sql("SELECT 1", &[]).unwrap();
        assert_eq!(normalized.sql, "SELECT 1");
        assert_eq!(normalized.placeholder_count, 0);
        assert!(!normalized.has_placeholders());
    }

    #[test]
    fn question_marks_counted() {
        let normalized =
            normalize_sql("SELECT * FROM t WHERE a = ? AND b = ?", &sql_params![1i64, 2i64])
                .unwrap();
        assert_eq!(normalized.placeholder_count, 2);
    }

    #[test]
    fn named_placeholders_rewritten_positionally() {
        let normalized = normalize_sql(
            "UPDATE t SET name = :name WHERE id = :id",
            &sql_params!["ada", 1i64],
        )
        .unwrap();
        assert_eq!(normalized.sql, "UPDATE t SET name = ? WHERE id = ?");
        assert_eq!(normalized.params[0], SqlValue::Text("ada".into()));
    }

    #[test]
    fn printf_placeholders_rewrite_and_coerce() {
        let normalized = normalize_sql(
            "INSERT INTO t VALUES (%d, %s, %f)",
            &sql_params!["42", 7i64, "2.5"],
        )
        .unwrap();
        assert_eq!(normalized.sql, "INSERT INTO t VALUES (?, ?, ?)");
        assert_eq!(normalized.params[0], SqlValue::Integer(42));
        assert_eq!(normalized.params[1], SqlValue::Text("7".into()));
        assert_eq!(normalized.params[2], SqlValue::Real(2.5));
    }

    #[test]
    fn mixed_styles_in_one_query() {
        let normalized = normalize_sql(
            "SELECT * FROM t WHERE a = ? AND b = :b AND c = %d",
            &sql_params![1i64, 2i64, 3i64],
        )
        .unwrap();
        assert_eq!(normalized.sql, "SELECT * FROM t WHERE a = ? AND b = ? AND c = ?");
        assert_eq!(normalized.placeholder_count, 3);
    }

    #[test]
    fn count_mismatch_fails_before_execution() {
        let err = normalize_sql("SELECT ? + ?", &sql_params![1i64]).unwrap_err();
        assert!(matches!(
            err,
            DbError::PlaceholderMismatch {
                expected: 2,
                actual: 1
            }
        ));

        let err = normalize_sql("SELECT 1", &sql_params![1i64]).unwrap_err();
        assert!(matches!(
            err,
            DbError::PlaceholderMismatch {
                expected: 0,
                actual: 1
            }
        ));
    }

    #[test]
    fn string_literals_are_untouched() {
        let normalized =
            normalize_sql("SELECT 'a?b' || ':not_a_param' || '%s'", &[]).unwrap();
        assert_eq!(normalized.sql, "SELECT 'a?b' || ':not_a_param' || '%s'");
        assert_eq!(normalized.placeholder_count, 0);
    }

    #[test]
    fn escaped_quote_stays_inside_literal() {
        let normalized = normalize_sql("SELECT 'it''s ? here'", &[]).unwrap();
        assert_eq!(normalized.placeholder_count, 0);
        assert_eq!(normalized.sql, "SELECT 'it''s ? here'");
    }

    #[test]
    fn quoted_identifiers_are_untouched() {
        let normalized =
            normalize_sql("SELECT \"odd?col\" FROM t WHERE v = ?", &sql_params![1i64]).unwrap();
        assert_eq!(normalized.sql, "SELECT \"odd?col\" FROM t WHERE v = ?");
        assert_eq!(normalized.placeholder_count, 1);
    }

    #[test]
    fn double_colon_cast_is_not_a_placeholder() {
        let normalized = normalize_sql("SELECT 1::INTEGER", &[]).unwrap();
        assert_eq!(normalized.sql, "SELECT 1::INTEGER");
        assert_eq!(normalized.placeholder_count, 0);
    }

    #[test]
    fn percent_escape_and_bare_percent() {
        let normalized = normalize_sql("SELECT 100%%, 5 % 2", &[]).unwrap();
        assert_eq!(normalized.sql, "SELECT 100%, 5 % 2");
        assert_eq!(normalized.placeholder_count, 0);
    }

    #[test]
    fn coercion_failure_reports_index() {
        let err =
            normalize_sql("SELECT %d", &sql_params!["not a number"]).unwrap_err();
        assert!(matches!(err, DbError::Coercion { index: 0, .. }));
    }

    #[test]
    fn null_survives_any_coercion() {
        let normalized =
            normalize_sql("SELECT %d, %f, %s", &[SqlValue::Null, SqlValue::Null, SqlValue::Null])
                .unwrap();
        assert!(normalized.params.iter().all(SqlValue::is_null));
    }

    #[test]
    fn unicode_text_is_preserved() {
        let normalized = normalize_sql("SELECT 'naïve ☃' WHERE x = ?", &sql_params![1i64]).unwrap();
        assert_eq!(normalized.sql, "SELECT 'naïve ☃' WHERE x = ?");
    }
}
