//! Table-level backup and restore.
//!
//! A backup captures the *exact* stored `CREATE TABLE` statement, the stored
//! DDL of every secondary index, and every row, so constraints and indexes
//! survive a restore. The on-disk format is a JSON mapping of table name →
//! `{table_name, create_sql, index_sql, rows, backup_timestamp, row_count}`
//! with an optional `__metadata__` entry describing the whole backup.
//!
//! Restore optionally drops each table, recreates it from the captured DDL,
//! disables foreign-key checks for the bulk insert, and wraps the whole
//! operation in one transaction rolled back on any row-insert failure.

use crate::database::Database;
use crate::error::{DbError, DbResult};
use crate::ident::quote_ident;
use crate::value::SqlValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Current backup format version.
pub const BACKUP_FORMAT_VERSION: u16 = 1;

/// Key of the metadata entry in the backup mapping.
pub const METADATA_KEY: &str = "__metadata__";

/// Whole-backup metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupMetadata {
    /// Format version for compatibility checks.
    pub format_version: u16,
    /// Name of the driver the backup was taken from.
    pub driver: String,
    /// Unix timestamp (seconds) of the backup.
    pub created_at: u64,
    /// Number of tables captured.
    pub table_count: usize,
}

/// One table's backup: exact DDL plus all rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBackup {
    /// The table's name.
    pub table_name: String,
    /// The stored `CREATE TABLE` statement, verbatim.
    pub create_sql: String,
    /// Stored `CREATE INDEX` statements for secondary indexes, verbatim.
    ///
    /// Both dialects keep index DDL outside the table DDL, so it is captured
    /// separately to keep restores full-fidelity.
    #[serde(default)]
    pub index_sql: Vec<String>,
    /// Every row, column name → JSON value.
    pub rows: Vec<BTreeMap<String, serde_json::Value>>,
    /// Unix timestamp (seconds) of the capture.
    pub backup_timestamp: u64,
    /// Number of rows captured.
    pub row_count: usize,
}

/// Result of a restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Tables recreated.
    pub tables: usize,
    /// Rows inserted.
    pub rows: usize,
}

/// Configuration for backup and restore operations.
#[derive(Debug, Clone)]
pub struct BackupOptions {
    /// Whether restore drops an existing table before recreating it.
    pub drop_existing: bool,
    /// Whether backups carry a `__metadata__` entry.
    pub include_metadata: bool,
}

impl Default for BackupOptions {
    fn default() -> Self {
        Self {
            drop_existing: true,
            include_metadata: true,
        }
    }
}

impl BackupOptions {
    /// Creates options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether restore drops existing tables first.
    #[must_use]
    pub fn drop_existing(mut self, value: bool) -> Self {
        self.drop_existing = value;
        self
    }

    /// Sets whether backups carry metadata.
    #[must_use]
    pub fn include_metadata(mut self, value: bool) -> Self {
        self.include_metadata = value;
        self
    }
}

/// Manages backup and restore against a [`Database`] handle.
pub struct BackupManager {
    options: BackupOptions,
}

impl BackupManager {
    /// Creates a manager with the given options.
    #[must_use]
    pub fn new(options: BackupOptions) -> Self {
        Self { options }
    }

    /// Creates a manager with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(BackupOptions::default())
    }

    /// Captures one table: exact stored DDL plus all rows.
    pub fn backup_table(&self, db: &mut Database, table: &str) -> DbResult<TableBackup> {
        let create_sql = db
            .create_table_sql(table)?
            .ok_or_else(|| DbError::backup(format!("no such table: {table}")))?;
        let index_sql = db.index_sql(table)?;

        let result_rows = db.get_results(&format!("SELECT * FROM {}", quote_ident(table)), &[])?;
        let rows: Vec<BTreeMap<String, serde_json::Value>> = result_rows
            .iter()
            .map(|row| {
                row.columns()
                    .iter()
                    .enumerate()
                    .map(|(index, column)| {
                        let value = row
                            .get_index(index)
                            .map_or(serde_json::Value::Null, SqlValue::to_json);
                        (column.clone(), value)
                    })
                    .collect()
            })
            .collect();

        let row_count = rows.len();
        Ok(TableBackup {
            table_name: table.to_string(),
            create_sql,
            index_sql,
            rows,
            backup_timestamp: unix_now(),
            row_count,
        })
    }

    /// Captures every user table into the backup mapping.
    pub fn backup_db(&self, db: &mut Database) -> DbResult<serde_json::Value> {
        let tables = db.list_tables()?;
        let mut mapping = serde_json::Map::new();

        for table in &tables {
            let backup = self.backup_table(db, table)?;
            mapping.insert(table.clone(), serde_json::to_value(&backup)?);
        }

        if self.options.include_metadata {
            let metadata = BackupMetadata {
                format_version: BACKUP_FORMAT_VERSION,
                driver: db.driver_name().to_string(),
                created_at: unix_now(),
                table_count: tables.len(),
            };
            mapping.insert(METADATA_KEY.to_string(), serde_json::to_value(&metadata)?);
        }

        info!(tables = tables.len(), "captured database backup");
        Ok(serde_json::Value::Object(mapping))
    }

    /// Captures every user table and writes the backup to `path`.
    pub fn backup_db_to_file(&self, db: &mut Database, path: &Path) -> DbResult<usize> {
        let backup = self.backup_db(db)?;
        let table_count = backup
            .as_object()
            .map(|m| m.keys().filter(|k| *k != METADATA_KEY).count())
            .unwrap_or(0);
        fs::write(path, serde_json::to_vec_pretty(&backup)?)?;
        info!(path = %path.display(), table_count, "wrote backup file");
        Ok(table_count)
    }

    /// Reads a backup's metadata without touching table data.
    pub fn read_metadata(backup: &serde_json::Value) -> DbResult<Option<BackupMetadata>> {
        match backup.get(METADATA_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Parses the backup mapping into table backups plus metadata.
    pub fn parse_backup(
        backup: &serde_json::Value,
    ) -> DbResult<(Vec<TableBackup>, Option<BackupMetadata>)> {
        let mapping = backup
            .as_object()
            .ok_or_else(|| DbError::backup("backup is not a JSON object"))?;

        let metadata = Self::read_metadata(backup)?;
        let mut tables = Vec::new();
        for (key, value) in mapping {
            if key == METADATA_KEY {
                continue;
            }
            let table: TableBackup = serde_json::from_value(value.clone())?;
            tables.push(table);
        }
        Ok((tables, metadata))
    }

    /// Restores one table from its backup.
    ///
    /// Foreign-key checks are off for the duration and the whole restore is
    /// one transaction, rolled back on any row-insert failure.
    pub fn restore_table(&self, db: &mut Database, backup: &TableBackup) -> DbResult<usize> {
        let summary = self.restore_tables(db, std::slice::from_ref(backup))?;
        Ok(summary.rows)
    }

    /// Restores every table in a backup mapping.
    pub fn restore_db(&self, db: &mut Database, backup: &serde_json::Value) -> DbResult<RestoreSummary> {
        let (tables, _metadata) = Self::parse_backup(backup)?;
        self.restore_tables(db, &tables)
    }

    /// Reads a backup file and restores every table in it.
    pub fn restore_db_from_file(&self, db: &mut Database, path: &Path) -> DbResult<RestoreSummary> {
        let data = fs::read(path)?;
        let backup: serde_json::Value = serde_json::from_slice(&data)?;
        self.restore_db(db, &backup)
    }

    fn restore_tables(&self, db: &mut Database, tables: &[TableBackup]) -> DbResult<RestoreSummary> {
        // The SQLite toggle is a no-op inside a transaction, so order
        // matters here.
        db.set_foreign_key_checks(false)?;
        db.begin_transaction()?;

        let result = self.restore_tables_inner(db, tables);

        match result {
            Ok(summary) => {
                db.commit()?;
                db.set_foreign_key_checks(true)?;
                info!(tables = summary.tables, rows = summary.rows, "restored backup");
                Ok(summary)
            }
            Err(err) => {
                db.rollback()?;
                db.set_foreign_key_checks(true)?;
                Err(err)
            }
        }
    }

    fn restore_tables_inner(
        &self,
        db: &mut Database,
        tables: &[TableBackup],
    ) -> DbResult<RestoreSummary> {
        let mut rows_inserted = 0usize;

        for table in tables {
            if self.options.drop_existing {
                db.execute(
                    &format!("DROP TABLE IF EXISTS {}", quote_ident(&table.table_name)),
                    &[],
                )?;
            }
            db.execute(&table.create_sql, &[])?;
            for index in &table.index_sql {
                db.execute(index, &[])?;
            }

            for row in &table.rows {
                let columns: Vec<String> = row.keys().map(|c| quote_ident(c)).collect();
                let placeholders = vec!["?"; row.len()].join(", ");
                let sql = format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    quote_ident(&table.table_name),
                    columns.join(", "),
                    placeholders
                );
                let params: Vec<SqlValue> = row
                    .values()
                    .map(SqlValue::from_json)
                    .collect::<DbResult<_>>()?;
                db.execute(&sql, &params)?;
                rows_inserted += 1;
            }
        }

        Ok(RestoreSummary {
            tables: tables.len(),
            rows: rows_inserted,
        })
    }
}

impl Default for BackupManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_params;

    fn seeded_db() -> Database {
        let mut db = Database::connect("sqlite:dbname=:memory:").unwrap();
        db.execute(
            "CREATE TABLE authors (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
            &[],
        )
        .unwrap();
        db.execute("CREATE INDEX idx_authors_name ON authors (name)", &[])
            .unwrap();
        db.execute(
            "CREATE TABLE books (id INTEGER PRIMARY KEY AUTOINCREMENT, author_id INTEGER NOT NULL REFERENCES authors (id), title TEXT, data BLOB)",
            &[],
        )
        .unwrap();
        db.execute("INSERT INTO authors (name) VALUES ('ada'), ('alan')", &[])
            .unwrap();
        db.execute(
            "INSERT INTO books (author_id, title, data) VALUES (?, ?, ?)",
            &sql_params![1i64, "On Computing", vec![0u8, 1, 2]],
        )
        .unwrap();
        db
    }

    #[test]
    fn backup_table_captures_exact_ddl_and_rows() {
        let mut db = seeded_db();
        let manager = BackupManager::with_defaults();

        let backup = manager.backup_table(&mut db, "authors").unwrap();
        assert_eq!(backup.table_name, "authors");
        assert_eq!(backup.row_count, 2);
        assert!(backup.create_sql.contains("AUTOINCREMENT"));
        assert_eq!(backup.index_sql.len(), 1);
        assert!(backup.index_sql[0].contains("idx_authors_name"));
        assert_eq!(backup.rows[0]["name"], "ada");
    }

    #[test]
    fn backup_missing_table_fails() {
        let mut db = seeded_db();
        let manager = BackupManager::with_defaults();
        assert!(manager.backup_table(&mut db, "ghost").is_err());
    }

    #[test]
    fn backup_db_includes_metadata() {
        let mut db = seeded_db();
        let manager = BackupManager::with_defaults();

        let backup = manager.backup_db(&mut db).unwrap();
        let metadata = BackupManager::read_metadata(&backup).unwrap().unwrap();
        assert_eq!(metadata.format_version, BACKUP_FORMAT_VERSION);
        assert_eq!(metadata.driver, "sqlite");
        assert_eq!(metadata.table_count, 2);

        let (tables, _) = BackupManager::parse_backup(&backup).unwrap();
        assert_eq!(tables.len(), 2);
    }

    #[test]
    fn metadata_can_be_omitted() {
        let mut db = seeded_db();
        let manager = BackupManager::new(BackupOptions::new().include_metadata(false));
        let backup = manager.backup_db(&mut db).unwrap();
        assert!(BackupManager::read_metadata(&backup).unwrap().is_none());
    }

    #[test]
    fn restore_round_trips_schema_and_rows() {
        let mut db = seeded_db();
        let manager = BackupManager::with_defaults();
        let backup = manager.backup_db(&mut db).unwrap();
        let original_ddl = db.create_table_sql("books").unwrap().unwrap();

        // Mutate the database, then restore over it.
        db.execute("DELETE FROM books", &[]).unwrap();
        db.execute("DROP TABLE authors", &[]).unwrap();

        let summary = manager.restore_db(&mut db, &backup).unwrap();
        assert_eq!(summary.tables, 2);
        assert_eq!(summary.rows, 3);

        // DDL survived verbatim, constraints included.
        assert_eq!(db.create_table_sql("books").unwrap().unwrap(), original_ddl);

        // Secondary indexes were replayed from their captured DDL.
        let indexes = db.index_sql("authors").unwrap();
        assert_eq!(indexes.len(), 1);
        assert!(indexes[0].contains("idx_authors_name"));

        let title = db
            .get_var("SELECT title FROM books WHERE id = 1", &[])
            .unwrap();
        assert_eq!(title, Some(SqlValue::Text("On Computing".into())));

        let blob = db
            .get_var("SELECT data FROM books WHERE id = 1", &[])
            .unwrap();
        assert_eq!(blob, Some(SqlValue::Blob(vec![0, 1, 2])));
    }

    #[test]
    fn failed_restore_rolls_back_everything() {
        let mut db = seeded_db();
        let manager = BackupManager::with_defaults();

        let mut bad_row = BTreeMap::new();
        bad_row.insert(
            "no_such_column".to_string(),
            serde_json::Value::from("boom"),
        );
        let bad = TableBackup {
            table_name: "authors".to_string(),
            create_sql: "CREATE TABLE authors (id INTEGER, name TEXT)".to_string(),
            index_sql: Vec::new(),
            rows: vec![bad_row],
            backup_timestamp: 0,
            row_count: 1,
        };

        let err = manager.restore_table(&mut db, &bad);
        assert!(err.is_err());
        assert_eq!(db.transaction_depth(), 0);

        // The drop and recreate were rolled back with the failed insert.
        let names = db.get_col("SELECT name FROM authors ORDER BY id", &[]).unwrap();
        assert_eq!(names.len(), 2);
        assert!(db
            .create_table_sql("authors")
            .unwrap()
            .unwrap()
            .contains("AUTOINCREMENT"));
    }

    #[test]
    fn backup_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        let mut db = seeded_db();
        let manager = BackupManager::with_defaults();
        let table_count = manager.backup_db_to_file(&mut db, &path).unwrap();
        assert_eq!(table_count, 2);

        let mut fresh = Database::connect("sqlite:dbname=:memory:").unwrap();
        let summary = manager.restore_db_from_file(&mut fresh, &path).unwrap();
        assert_eq!(summary.tables, 2);

        let count = fresh.get_var("SELECT COUNT(*) FROM authors", &[]).unwrap();
        assert_eq!(count, Some(SqlValue::Integer(2)));
    }
}
