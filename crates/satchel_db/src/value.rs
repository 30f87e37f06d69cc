//! SQL values and result rows.

use crate::error::{DbError, DbResult};
use std::sync::Arc;

/// A single SQL value, uniform across drivers.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// 64-bit integer.
    Integer(i64),
    /// 64-bit float.
    Real(f64),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

/// Marker key used to round-trip blobs through JSON.
const BLOB_KEY: &str = "__blob__";

impl SqlValue {
    /// Converts to a JSON value.
    ///
    /// Blobs become `{"__blob__": "<hex>"}` since JSON has no byte type.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Integer(i) => serde_json::Value::from(*i),
            Self::Real(f) => serde_json::Value::from(*f),
            Self::Text(s) => serde_json::Value::from(s.clone()),
            Self::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                serde_json::json!({ BLOB_KEY: hex })
            }
        }
    }

    /// Converts back from a JSON value produced by [`to_json`](Self::to_json).
    ///
    /// Booleans map to 0/1 integers, matching driver behavior.
    pub fn from_json(value: &serde_json::Value) -> DbResult<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Integer(i64::from(*b))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Real(f))
                } else {
                    Err(DbError::backup(format!("unrepresentable number: {n}")))
                }
            }
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Object(map) => {
                let hex = map
                    .get(BLOB_KEY)
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| DbError::backup("object value is not a blob marker"))?;
                if hex.len() % 2 != 0 {
                    return Err(DbError::backup("odd-length blob hex"));
                }
                let bytes = (0..hex.len())
                    .step_by(2)
                    .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                    .collect::<Result<Vec<u8>, _>>()
                    .map_err(|_| DbError::backup("invalid blob hex"))?;
                Ok(Self::Blob(bytes))
            }
            serde_json::Value::Array(_) => Err(DbError::backup("array is not a scalar SQL value")),
        }
    }

    /// Whether this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value as an integer, if it is one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The value as text, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Builds a `Vec<SqlValue>` parameter list from mixed Rust values.
///
/// ```
/// use satchel_db::{sql_params, SqlValue};
///
/// let params = sql_params![1i64, "two", 3.0];
/// assert_eq!(params[1], SqlValue::Text("two".into()));
/// ```
#[macro_export]
macro_rules! sql_params {
    () => {
        ::std::vec::Vec::<$crate::SqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::SqlValue::from($value)),+]
    };
}

/// How result rows serialize to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One JSON object per row, keyed by column name.
    #[default]
    Assoc,
    /// One JSON array per row, in column order.
    Indexed,
}

/// One result row: a shared column list plus a value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<SqlValue>,
}

impl Row {
    /// Creates a row. `values` must align with `columns`.
    #[must_use]
    pub fn new(columns: Arc<Vec<String>>, values: Vec<SqlValue>) -> Self {
        Self { columns, values }
    }

    /// The column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Looks up a value by column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.values.get(i))
    }

    /// Looks up a value by column index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the row, returning its values in column order.
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }

    /// Serializes the row per the fetch mode.
    #[must_use]
    pub fn to_json(&self, mode: FetchMode) -> serde_json::Value {
        match mode {
            FetchMode::Assoc => {
                let mut map = serde_json::Map::with_capacity(self.values.len());
                for (column, value) in self.columns.iter().zip(&self.values) {
                    map.insert(column.clone(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
            FetchMode::Indexed => {
                serde_json::Value::Array(self.values.iter().map(SqlValue::to_json).collect())
            }
        }
    }
}
