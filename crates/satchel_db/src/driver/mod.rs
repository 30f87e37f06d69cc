//! Driver capability trait and implementations.

use crate::error::{DbError, DbResult};
use crate::value::{Row, SqlValue};

mod sqlite;
pub use sqlite::SqliteDriver;

#[cfg(feature = "duckdb")]
mod duckdb;
#[cfg(feature = "duckdb")]
pub use self::duckdb::DuckDbDriver;

/// Capability interface implemented once per native driver.
///
/// The façade calls only through this trait; nothing else inspects which
/// engine is underneath. SQL reaching a driver is already normalized to
/// `?`-only placeholders with a validated parameter count.
///
/// # Invariants
///
/// - `execute` and `query` bind exactly `params.len()` values
/// - transaction methods issue native statements without bookkeeping; depth
///   tracking lives in the façade
/// - a driver with `supports_savepoints() == false` never receives a
///   savepoint call
pub trait Driver: Send {
    /// The driver's DSN name.
    fn name(&self) -> &'static str;

    /// Executes a statement and returns the number of affected rows.
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;

    /// Runs a query and returns every result row.
    fn query(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>>;

    /// Rowid of the most recent insert, where the engine has one.
    fn last_insert_id(&self) -> Option<i64>;

    /// Opens a native top-level transaction.
    fn begin(&mut self) -> DbResult<()>;

    /// Commits the native transaction.
    fn commit(&mut self) -> DbResult<()>;

    /// Rolls back the native transaction.
    fn rollback(&mut self) -> DbResult<()>;

    /// Whether the engine has a savepoint API.
    fn supports_savepoints(&self) -> bool {
        false
    }

    /// Creates a named savepoint.
    fn savepoint(&mut self, name: &str) -> DbResult<()> {
        let _ = name;
        Err(DbError::invalid_operation(format!(
            "driver {} has no savepoint support",
            self.name()
        )))
    }

    /// Releases a named savepoint.
    fn release_savepoint(&mut self, name: &str) -> DbResult<()> {
        let _ = name;
        Err(DbError::invalid_operation(format!(
            "driver {} has no savepoint support",
            self.name()
        )))
    }

    /// Rolls back to a named savepoint without ending the transaction.
    fn rollback_to_savepoint(&mut self, name: &str) -> DbResult<()> {
        let _ = name;
        Err(DbError::invalid_operation(format!(
            "driver {} has no savepoint support",
            self.name()
        )))
    }

    /// Query returning one `name` column per user table.
    fn list_tables_sql(&self) -> &'static str;

    /// Query returning the stored `CREATE TABLE` statement; binds the table
    /// name as its single parameter.
    fn create_table_sql_query(&self) -> &'static str;

    /// Query returning one stored `CREATE INDEX` statement per secondary
    /// index on a table; binds the table name as its single parameter.
    ///
    /// Both dialects store index DDL separately from the table DDL, so a
    /// full-fidelity backup must capture it too.
    fn list_index_sql_query(&self) -> &'static str;

    /// Toggles foreign-key enforcement, where the engine has a toggle.
    fn set_foreign_key_checks(&mut self, enabled: bool) -> DbResult<()>;

    /// Column clause for an auto-incrementing integer primary key, where the
    /// engine has one.
    fn auto_increment_clause(&self) -> Option<&'static str> {
        None
    }
}

/// Constructs the driver named by the credentials.
pub(crate) fn connect(credentials: &crate::dsn::Credentials) -> DbResult<Box<dyn Driver>> {
    match credentials.driver {
        crate::dsn::DriverKind::Sqlite => Ok(Box::new(SqliteDriver::connect(credentials)?)),
        #[cfg(feature = "duckdb")]
        crate::dsn::DriverKind::DuckDb => Ok(Box::new(DuckDbDriver::connect(credentials)?)),
        #[cfg(not(feature = "duckdb"))]
        crate::dsn::DriverKind::DuckDb => Err(DbError::unknown_driver(
            "duckdb (build with the `duckdb` feature)",
        )),
    }
}
