//! Database façade.

use crate::driver::{self, Driver};
use crate::dsn::Credentials;
use crate::error::DbResult;
use crate::normalize::normalize_sql;
use crate::value::{FetchMode, Row, SqlValue};
use tracing::debug;

/// The main database handle.
///
/// `Database` presents one uniform calling convention over whichever driver
/// the DSN named. It owns exactly one live driver handle, created at
/// construction and torn down on drop; switching drivers means constructing
/// a new `Database`.
///
/// Queries pass through placeholder normalization before reaching the
/// driver, so mixed `?`/`:name`/`%s` styles work identically on every
/// engine and a placeholder/parameter count mismatch fails before any
/// execution.
///
/// # Example
///
/// ```
/// use satchel_db::{Database, sql_params};
///
/// let mut db = Database::connect("sqlite:dbname=:memory:")?;
/// db.execute("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)", &[])?;
/// db.execute("INSERT INTO users (name) VALUES (:name)", &sql_params!["ada"])?;
///
/// let rows = db.get_results("SELECT name FROM users", &[])?;
/// assert_eq!(rows.len(), 1);
/// # Ok::<(), satchel_db::DbError>(())
/// ```
pub struct Database {
    credentials: Credentials,
    driver: Box<dyn Driver>,
    fetch_mode: FetchMode,
    txn_depth: usize,
}

impl Database {
    /// Connects using a DSN credential string.
    ///
    /// Credential validation happens before any driver handle is opened; a
    /// malformed DSN never touches the engine.
    pub fn connect(dsn: &str) -> DbResult<Self> {
        Self::connect_with(Credentials::parse(dsn)?)
    }

    /// Connects using already-parsed credentials.
    pub fn connect_with(credentials: Credentials) -> DbResult<Self> {
        let driver = driver::connect(&credentials)?;
        debug!(driver = driver.name(), dbname = %credentials.dbname, "connected");
        Ok(Self {
            credentials,
            driver,
            fetch_mode: FetchMode::default(),
            txn_depth: 0,
        })
    }

    /// The active driver's name.
    #[must_use]
    pub fn driver_name(&self) -> &str {
        self.driver.name()
    }

    /// The parsed credentials this handle was built from.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The fetch mode used by [`rows_to_json`](Self::rows_to_json).
    #[must_use]
    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    /// Sets the fetch mode.
    pub fn set_fetch_mode(&mut self, mode: FetchMode) {
        self.fetch_mode = mode;
    }

    /// Applies the configured table prefix to a bare table name.
    #[must_use]
    pub fn prefix_table(&self, name: &str) -> String {
        format!("{}{}", self.credentials.prefix, name)
    }

    /// Executes a statement, returning the number of affected rows.
    ///
    /// No-placeholder statements run on the direct path; anything else is
    /// prepared with bound parameters.
    pub fn execute(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        let normalized = normalize_sql(sql, params)?;
        if normalized.has_placeholders() {
            self.driver.execute(&normalized.sql, &normalized.params)
        } else {
            self.driver.execute(&normalized.sql, &[])
        }
    }

    /// Runs a query and returns every result row.
    pub fn get_results(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        let normalized = normalize_sql(sql, params)?;
        if normalized.has_placeholders() {
            self.driver.query(&normalized.sql, &normalized.params)
        } else {
            self.driver.query(&normalized.sql, &[])
        }
    }

    /// Runs a query and returns the first row, if any.
    pub fn get_row(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>> {
        Ok(self.get_results(sql, params)?.into_iter().next())
    }

    /// Runs a query and returns the first column of every row.
    pub fn get_col(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<SqlValue>> {
        Ok(self
            .get_results(sql, params)?
            .into_iter()
            .filter_map(|row| row.into_values().into_iter().next())
            .collect())
    }

    /// Runs a query and returns the first value of the first row, if any.
    pub fn get_var(&mut self, sql: &str, params: &[SqlValue]) -> DbResult<Option<SqlValue>> {
        Ok(self
            .get_row(sql, params)?
            .and_then(|row| row.into_values().into_iter().next()))
    }

    /// Rowid of the most recent insert, where the engine has one.
    #[must_use]
    pub fn last_insert_id(&self) -> Option<i64> {
        self.driver.last_insert_id()
    }

    /// Serializes rows per the configured fetch mode.
    #[must_use]
    pub fn rows_to_json(&self, rows: &[Row]) -> serde_json::Value {
        serde_json::Value::Array(rows.iter().map(|row| row.to_json(self.fetch_mode)).collect())
    }

    // === Transactions ===

    /// Starts a transaction, or one nesting level inside an active one.
    ///
    /// At depth 0 this opens a native transaction. Deeper calls never open a
    /// second top-level transaction: they create a savepoint on drivers that
    /// have them and otherwise only increment the depth counter.
    pub fn begin_transaction(&mut self) -> DbResult<()> {
        if self.txn_depth == 0 {
            self.driver.begin()?;
        } else if self.driver.supports_savepoints() {
            let name = Self::savepoint_name(self.txn_depth);
            self.driver.savepoint(&name)?;
        }
        self.txn_depth += 1;
        Ok(())
    }

    /// Commits exactly one transaction level.
    ///
    /// Returns `false` (a no-op) when no transaction is active. At depth 1
    /// the native transaction commits; deeper levels release one savepoint.
    pub fn commit(&mut self) -> DbResult<bool> {
        match self.txn_depth {
            0 => Ok(false),
            1 => {
                self.driver.commit()?;
                self.txn_depth = 0;
                Ok(true)
            }
            depth => {
                if self.driver.supports_savepoints() {
                    let name = Self::savepoint_name(depth - 1);
                    self.driver.release_savepoint(&name)?;
                }
                self.txn_depth = depth - 1;
                Ok(true)
            }
        }
    }

    /// Rolls back exactly one transaction level.
    ///
    /// Returns `false` (a no-op) when no transaction is active. At depth 1
    /// the native transaction rolls back; deeper levels roll back to their
    /// savepoint only, leaving the outer transaction intact. Counter-only
    /// drivers just unwind the depth.
    pub fn rollback(&mut self) -> DbResult<bool> {
        match self.txn_depth {
            0 => Ok(false),
            1 => {
                self.driver.rollback()?;
                self.txn_depth = 0;
                Ok(true)
            }
            depth => {
                if self.driver.supports_savepoints() {
                    let name = Self::savepoint_name(depth - 1);
                    self.driver.rollback_to_savepoint(&name)?;
                    self.driver.release_savepoint(&name)?;
                }
                self.txn_depth = depth - 1;
                Ok(true)
            }
        }
    }

    /// Current transaction nesting depth.
    #[must_use]
    pub fn transaction_depth(&self) -> usize {
        self.txn_depth
    }

    /// Whether any transaction is active.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.txn_depth > 0
    }

    /// Runs `f` inside one transaction level, committing on `Ok` and rolling
    /// back on `Err`.
    pub fn transaction<T, F>(&mut self, f: F) -> DbResult<T>
    where
        F: FnOnce(&mut Self) -> DbResult<T>,
    {
        self.begin_transaction()?;
        match f(self) {
            Ok(value) => {
                self.commit()?;
                Ok(value)
            }
            Err(err) => {
                self.rollback()?;
                Err(err)
            }
        }
    }

    fn savepoint_name(level: usize) -> String {
        format!("sp_{level}")
    }

    // === Schema introspection ===

    /// Names of every user table, sorted.
    pub fn list_tables(&mut self) -> DbResult<Vec<String>> {
        let sql = self.driver.list_tables_sql();
        let rows = self.driver.query(sql, &[])?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                row.into_values()
                    .into_iter()
                    .next()
                    .and_then(|v| v.as_text().map(str::to_string))
            })
            .collect())
    }

    /// The stored `CREATE TABLE` statement for a table, if it exists.
    pub fn create_table_sql(&mut self, table: &str) -> DbResult<Option<String>> {
        let sql = self.driver.create_table_sql_query();
        let rows = self
            .driver
            .query(sql, &[SqlValue::Text(table.to_string())])?;
        Ok(rows.into_iter().next().and_then(|row| {
            row.into_values()
                .into_iter()
                .next()
                .and_then(|v| v.as_text().map(str::to_string))
        }))
    }

    /// Stored `CREATE INDEX` statements for a table's secondary indexes.
    pub fn index_sql(&mut self, table: &str) -> DbResult<Vec<String>> {
        let sql = self.driver.list_index_sql_query();
        let rows = self
            .driver
            .query(sql, &[SqlValue::Text(table.to_string())])?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                row.into_values()
                    .into_iter()
                    .next()
                    .and_then(|v| v.as_text().map(str::to_string))
            })
            .collect())
    }

    /// Toggles foreign-key enforcement where the engine has a toggle.
    ///
    /// On SQLite this must be called outside a transaction to take effect.
    pub fn set_foreign_key_checks(&mut self, enabled: bool) -> DbResult<()> {
        self.driver.set_foreign_key_checks(enabled)
    }

    /// Whether the active driver has a savepoint API.
    #[must_use]
    pub fn supports_savepoints(&self) -> bool {
        self.driver.supports_savepoints()
    }

    pub(crate) fn auto_increment_clause(&self) -> Option<&'static str> {
        self.driver.auto_increment_clause()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("driver", &self.driver.name())
            .field("dbname", &self.credentials.dbname)
            .field("txn_depth", &self.txn_depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::sql_params;

    fn db() -> Database {
        Database::connect("sqlite:dbname=:memory:").unwrap()
    }

    #[test]
    fn select_one_on_direct_path() {
        let mut db = db();
        let rows = db.get_results("SELECT 1", &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_index(0), Some(&SqlValue::Integer(1)));
    }

    #[test]
    fn bad_dsn_fails_before_any_handle_opens() {
        assert!(matches!(
            Database::connect("sqlite:host=localhost"),
            Err(DbError::Configuration { .. })
        ));
        assert!(matches!(
            Database::connect("oracle:dbname=x"),
            Err(DbError::UnknownDriver { .. })
        ));
    }

    #[test]
    fn mismatched_params_do_not_execute() {
        let mut db = db();
        db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

        let err = db
            .execute("INSERT INTO t VALUES (?)", &sql_params![1i64, 2i64])
            .unwrap_err();
        assert!(matches!(err, DbError::PlaceholderMismatch { .. }));

        // Nothing reached the driver.
        let count = db.get_var("SELECT COUNT(*) FROM t", &[]).unwrap();
        assert_eq!(count, Some(SqlValue::Integer(0)));
    }

    #[test]
    fn convenience_accessors() {
        let mut db = db();
        db.execute("CREATE TABLE t (id INTEGER, name TEXT)", &[])
            .unwrap();
        db.execute(
            "INSERT INTO t VALUES (1, 'a'), (2, 'b'), (3, 'c')",
            &[],
        )
        .unwrap();

        let row = db
            .get_row("SELECT * FROM t WHERE id = %d", &sql_params!["2"])
            .unwrap()
            .unwrap();
        assert_eq!(row.get("name"), Some(&SqlValue::Text("b".into())));

        let col = db.get_col("SELECT name FROM t ORDER BY id", &[]).unwrap();
        assert_eq!(col.len(), 3);
        assert_eq!(col[2], SqlValue::Text("c".into()));

        let var = db
            .get_var("SELECT COUNT(*) FROM t WHERE id > :min", &sql_params![1i64])
            .unwrap();
        assert_eq!(var, Some(SqlValue::Integer(2)));
        assert!(db.get_row("SELECT * FROM t WHERE id = 99", &[]).unwrap().is_none());
    }

    #[test]
    fn prefix_applies_to_table_names() {
        let db = Database::connect("sqlite:dbname=:memory:;prefix=app_").unwrap();
        assert_eq!(db.prefix_table("users"), "app_users");
    }

    #[test]
    fn commit_and_rollback_are_noops_outside_transaction() {
        let mut db = db();
        assert!(!db.commit().unwrap());
        assert!(!db.rollback().unwrap());
        assert_eq!(db.transaction_depth(), 0);
    }

    #[test]
    fn nested_begin_increments_depth_without_new_transaction() {
        let mut db = db();
        db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

        db.begin_transaction().unwrap();
        assert_eq!(db.transaction_depth(), 1);

        // A second BEGIN on the native connection would error; a savepoint
        // does not.
        db.begin_transaction().unwrap();
        assert_eq!(db.transaction_depth(), 2);
        assert!(db.in_transaction());

        assert!(db.commit().unwrap());
        assert_eq!(db.transaction_depth(), 1);
        assert!(db.commit().unwrap());
        assert_eq!(db.transaction_depth(), 0);
    }

    #[test]
    fn inner_rollback_preserves_outer_writes() {
        let mut db = db();
        db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

        db.begin_transaction().unwrap();
        db.execute("INSERT INTO t VALUES (1)", &[]).unwrap();

        db.begin_transaction().unwrap();
        db.execute("INSERT INTO t VALUES (2)", &[]).unwrap();
        // Unwind only the inner level.
        assert!(db.rollback().unwrap());
        assert_eq!(db.transaction_depth(), 1);

        assert!(db.commit().unwrap());

        let col = db.get_col("SELECT v FROM t ORDER BY v", &[]).unwrap();
        assert_eq!(col, vec![SqlValue::Integer(1)]);
    }

    #[test]
    fn transaction_closure_commits_on_ok() {
        let mut db = db();
        db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

        db.transaction(|db| db.execute("INSERT INTO t VALUES (1)", &[]))
            .unwrap();
        assert_eq!(db.transaction_depth(), 0);
        assert_eq!(
            db.get_var("SELECT COUNT(*) FROM t", &[]).unwrap(),
            Some(SqlValue::Integer(1))
        );
    }

    #[test]
    fn transaction_closure_rolls_back_on_err() {
        let mut db = db();
        db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

        let result: DbResult<()> = db.transaction(|db| {
            db.execute("INSERT INTO t VALUES (1)", &[])?;
            db.execute("INSERT INTO missing_table VALUES (2)", &[])?;
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(db.transaction_depth(), 0);
        assert_eq!(
            db.get_var("SELECT COUNT(*) FROM t", &[]).unwrap(),
            Some(SqlValue::Integer(0))
        );
    }

    #[test]
    fn list_tables_and_stored_ddl() {
        let mut db = db();
        db.execute("CREATE TABLE b_table (v INTEGER)", &[]).unwrap();
        db.execute("CREATE TABLE a_table (v INTEGER)", &[]).unwrap();

        assert_eq!(db.list_tables().unwrap(), vec!["a_table", "b_table"]);

        let ddl = db.create_table_sql("a_table").unwrap().unwrap();
        assert!(ddl.starts_with("CREATE TABLE a_table"));
        assert!(db.create_table_sql("missing").unwrap().is_none());
    }

    #[test]
    fn rows_to_json_respects_fetch_mode() {
        let mut db = db();
        db.execute("CREATE TABLE t (id INTEGER, name TEXT)", &[])
            .unwrap();
        db.execute("INSERT INTO t VALUES (1, 'ada')", &[]).unwrap();
        let rows = db.get_results("SELECT * FROM t", &[]).unwrap();

        let assoc = db.rows_to_json(&rows);
        assert_eq!(assoc[0]["name"], "ada");

        db.set_fetch_mode(FetchMode::Indexed);
        let indexed = db.rows_to_json(&rows);
        assert_eq!(indexed[0][1], "ada");
    }
}
