//! SQLite driver via `rusqlite`.

use crate::driver::Driver;
use crate::dsn::Credentials;
use crate::error::DbResult;
use crate::value::{Row, SqlValue};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::sync::Arc;

/// SQLite driver.
///
/// Savepoints, rowids, and the `foreign_keys` pragma are all available, so
/// this driver exposes the full capability surface.
pub struct SqliteDriver {
    conn: Connection,
}

impl SqliteDriver {
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

    fn bind(params: &[SqlValue]) -> Vec<rusqlite::types::Value> {
        params.iter().map(to_sqlite).collect()
    }
}

fn to_sqlite(value: &SqlValue) -> rusqlite::types::Value {
    match value {
        SqlValue::Null => rusqlite::types::Value::Null,
        SqlValue::Integer(i) => rusqlite::types::Value::Integer(*i),
        SqlValue::Real(f) => rusqlite::types::Value::Real(*f),
        SqlValue::Text(s) => rusqlite::types::Value::Text(s.clone()),
        SqlValue::Blob(b) => rusqlite::types::Value::Blob(b.clone()),
    }
}

fn from_sqlite(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::Integer(i),
        ValueRef::Real(f) => SqlValue::Real(f),
        ValueRef::Text(bytes) => SqlValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
    }
}

impl Driver for SqliteDriver {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        let affected = self
            .conn
            .execute(sql, rusqlite::params_from_iter(Self::bind(params)))?;
        Ok(affected)
    }

    fn query(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Arc<Vec<String>> = Arc::new(
            stmt.column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
        let column_count = columns.len();

        let mut rows = stmt.query(rusqlite::params_from_iter(Self::bind(params)))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for index in 0..column_count {
                values.push(from_sqlite(row.get_ref(index)?));
            }
            out.push(Row::new(Arc::clone(&columns), values));
        }
        Ok(out)
    }

    fn last_insert_id(&self) -> Option<i64> {
        Some(self.conn.last_insert_rowid())
    }

    fn begin(&mut self) -> DbResult<()> {
        self.conn.execute_batch("BEGIN")?;
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

    fn supports_savepoints(&self) -> bool {
        true
    }

    fn savepoint(&mut self, name: &str) -> DbResult<()> {
        self.conn.execute_batch(&format!("SAVEPOINT {name}"))?;
        Ok(())
    }

    fn release_savepoint(&mut self, name: &str) -> DbResult<()> {
        self.conn.execute_batch(&format!("RELEASE SAVEPOINT {name}"))?;
        Ok(())
    }

    fn rollback_to_savepoint(&mut self, name: &str) -> DbResult<()> {
        self.conn
            .execute_batch(&format!("ROLLBACK TO SAVEPOINT {name}"))?;
        Ok(())
    }

    fn list_tables_sql(&self) -> &'static str {
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
    }

    fn create_table_sql_query(&self) -> &'static str {
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?"
    }

    fn list_index_sql_query(&self) -> &'static str {
        // Auto-indexes carry a NULL sql and cannot (and need not) be replayed.
        "SELECT sql FROM sqlite_master WHERE type = 'index' AND tbl_name = ? AND sql IS NOT NULL ORDER BY name"
    }

    fn set_foreign_key_checks(&mut self, enabled: bool) -> DbResult<()> {
        self.conn.pragma_update(None, "foreign_keys", enabled)?;
        Ok(())
    }

    fn auto_increment_clause(&self) -> Option<&'static str> {
        Some("INTEGER PRIMARY KEY AUTOINCREMENT")
    }
}

impl std::fmt::Debug for SqliteDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDriver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> SqliteDriver {
        let credentials = Credentials::parse("sqlite:dbname=:memory:").unwrap();
        SqliteDriver::connect(&credentials).unwrap()
    }

    #[test]
    fn execute_and_query() {
        let mut driver = driver();
        driver
            .execute("CREATE TABLE t (id INTEGER, name TEXT)", &[])
            .unwrap();
        let affected = driver
            .execute(
                "INSERT INTO t VALUES (?, ?)",
                &[SqlValue::Integer(1), SqlValue::Text("ada".into())],
            )
            .unwrap();
        assert_eq!(affected, 1);

        let rows = driver.query("SELECT id, name FROM t", &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("id"), Some(&SqlValue::Integer(1)));
        assert_eq!(rows[0].get("name"), Some(&SqlValue::Text("ada".into())));
    }

    #[test]
    fn value_types_round_trip() {
        let mut driver = driver();
        driver
            .execute("CREATE TABLE v (a, b, c, d, e)", &[])
            .unwrap();
        driver
            .execute(
                "INSERT INTO v VALUES (?, ?, ?, ?, ?)",
                &[
                    SqlValue::Null,
                    SqlValue::Integer(-5),
                    SqlValue::Real(1.25),
                    SqlValue::Text("text".into()),
                    SqlValue::Blob(vec![1, 2, 3]),
                ],
            )
            .unwrap();

        let rows = driver.query("SELECT a, b, c, d, e FROM v", &[]).unwrap();
        let row = &rows[0];
        assert_eq!(row.get_index(0), Some(&SqlValue::Null));
        assert_eq!(row.get_index(1), Some(&SqlValue::Integer(-5)));
        assert_eq!(row.get_index(2), Some(&SqlValue::Real(1.25)));
        assert_eq!(row.get_index(3), Some(&SqlValue::Text("text".into())));
        assert_eq!(row.get_index(4), Some(&SqlValue::Blob(vec![1, 2, 3])));
    }

    #[test]
    fn last_insert_id_advances() {
        let mut driver = driver();
        driver
            .execute("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT)", &[])
            .unwrap();
        driver
            .execute("INSERT INTO t (v) VALUES (?)", &[SqlValue::Text("a".into())])
            .unwrap();
        assert_eq!(driver.last_insert_id(), Some(1));
        driver
            .execute("INSERT INTO t (v) VALUES (?)", &[SqlValue::Text("b".into())])
            .unwrap();
        assert_eq!(driver.last_insert_id(), Some(2));
    }

    #[test]
    fn savepoints_nest() {
        let mut driver = driver();
        driver.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

        driver.begin().unwrap();
        driver
            .execute("INSERT INTO t VALUES (1)", &[])
            .unwrap();
        driver.savepoint("sp_1").unwrap();
        driver
            .execute("INSERT INTO t VALUES (2)", &[])
            .unwrap();
        driver.rollback_to_savepoint("sp_1").unwrap();
        driver.release_savepoint("sp_1").unwrap();
        driver.commit().unwrap();

        let rows = driver.query("SELECT v FROM t ORDER BY v", &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("v"), Some(&SqlValue::Integer(1)));
    }

    #[test]
    fn introspection_sql_returns_stored_ddl() {
        let mut driver = driver();
        driver
            .execute("CREATE TABLE widgets (id INTEGER PRIMARY KEY, name TEXT NOT NULL)", &[])
            .unwrap();

        let tables = driver.query(driver.list_tables_sql(), &[]).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].get("name"),
            Some(&SqlValue::Text("widgets".into()))
        );

        let ddl = driver
            .query(
                driver.create_table_sql_query(),
                &[SqlValue::Text("widgets".into())],
            )
            .unwrap();
        let sql = ddl[0].get("sql").unwrap().as_text().unwrap().to_string();
        assert!(sql.starts_with("CREATE TABLE widgets"));
        assert!(sql.contains("name TEXT NOT NULL"));
    }

    #[test]
    fn foreign_key_toggle_is_accepted() {
        let mut driver = driver();
        driver.set_foreign_key_checks(true).unwrap();
        driver.set_foreign_key_checks(false).unwrap();
    }
}
