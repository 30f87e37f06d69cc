//! DuckDB driver via the `duckdb` crate.

use crate::driver::Driver;
use crate::dsn::Credentials;
use crate::error::{DbError, DbResult};
use crate::value::{Row, SqlValue};
use duckdb::types::ValueRef;
use duckdb::Connection;
use std::sync::Arc;

/// DuckDB driver.
///
/// DuckDB has no savepoint API, no rowid counter, and no foreign-key
/// enforcement toggle; the façade falls back to pure depth counting for
/// nested transactions on this driver.
pub struct DuckDbDriver {
    conn: Connection,
}

impl DuckDbDriver {
    /// Opens the database named by the credentials (`:memory:` for an
    /// ephemeral database).
    pub fn connect(credentials: &Credentials) -> DbResult<Self> {
        let conn = if credentials.is_in_memory() {
            Connection::open_in_memory()?
        } else {
            Connection::open(&credentials.dbname)?
        };
        Ok(Self { conn })
    }

    fn bind(params: &[SqlValue]) -> Vec<duckdb::types::Value> {
        params.iter().map(to_duckdb).collect()
    }
}

fn to_duckdb(value: &SqlValue) -> duckdb::types::Value {
    match value {
        SqlValue::Null => duckdb::types::Value::Null,
        SqlValue::Integer(i) => duckdb::types::Value::BigInt(*i),
        SqlValue::Real(f) => duckdb::types::Value::Double(*f),
        SqlValue::Text(s) => duckdb::types::Value::Text(s.clone()),
        SqlValue::Blob(b) => duckdb::types::Value::Blob(b.clone()),
    }
}

fn from_duckdb(value: ValueRef<'_>) -> DbResult<SqlValue> {
    Ok(match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Boolean(b) => SqlValue::Integer(i64::from(b)),
        ValueRef::TinyInt(i) => SqlValue::Integer(i64::from(i)),
        ValueRef::SmallInt(i) => SqlValue::Integer(i64::from(i)),
        ValueRef::Int(i) => SqlValue::Integer(i64::from(i)),
        ValueRef::BigInt(i) => SqlValue::Integer(i),
        ValueRef::UTinyInt(i) => SqlValue::Integer(i64::from(i)),
        ValueRef::USmallInt(i) => SqlValue::Integer(i64::from(i)),
        ValueRef::UInt(i) => SqlValue::Integer(i64::from(i)),
        ValueRef::UBigInt(i) => i64::try_from(i)
            .map(SqlValue::Integer)
            .map_err(|_| DbError::driver(format!("unsigned value out of range: {i}")))?,
        ValueRef::Float(f) => SqlValue::Real(f64::from(f)),
        ValueRef::Double(f) => SqlValue::Real(f),
        ValueRef::Text(bytes) => SqlValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
        other => {
            return Err(DbError::driver(format!(
                "unsupported duckdb value type: {:?}",
                other.data_type()
            )))
        }
    })
}

impl Driver for DuckDbDriver {
    fn name(&self) -> &'static str {
        "duckdb"
    }

    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        let affected = self
            .conn
            .execute(sql, duckdb::params_from_iter(Self::bind(params)))?;
        Ok(affected)
    }

    fn query(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql)?;

        let mut rows = stmt.query(duckdb::params_from_iter(Self::bind(params)))?;
        let mut out = Vec::new();
        let mut columns: Option<Arc<Vec<String>>> = None;
        while let Some(row) = rows.next()? {
            let names = columns.get_or_insert_with(|| {
                Arc::new(
                    row.as_ref()
                        .column_names()
                        .into_iter()
                        .map(|name| name.to_string())
                        .collect::<Vec<String>>(),
                )
            });
            let column_count = names.len();
            let mut values = Vec::with_capacity(column_count);
            for index in 0..column_count {
                values.push(from_duckdb(row.get_ref(index)?)?);
            }
            out.push(Row::new(Arc::clone(names), values));
        }
        Ok(out)
    }

    fn last_insert_id(&self) -> Option<i64> {
        // DuckDB has no rowid counter.
        None
    }

    fn begin(&mut self) -> DbResult<()> {
        self.conn.execute_batch("BEGIN TRANSACTION")?;
        Ok(())
    }

    fn commit(&mut self) -> DbResult<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn rollback(&mut self) -> DbResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }

    fn list_tables_sql(&self) -> &'static str {
        "SELECT table_name AS name FROM duckdb_tables() ORDER BY table_name"
    }

    fn create_table_sql_query(&self) -> &'static str {
        "SELECT sql FROM duckdb_tables() WHERE table_name = ?"
    }

    fn list_index_sql_query(&self) -> &'static str {
        "SELECT sql FROM duckdb_indexes() WHERE table_name = ? ORDER BY index_name"
    }

    fn set_foreign_key_checks(&mut self, _enabled: bool) -> DbResult<()> {
        // DuckDB has no session toggle for constraint enforcement.
        Ok(())
    }
}

impl std::fmt::Debug for DuckDbDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuckDbDriver").finish_non_exhaustive()
    }
}
