//! # Satchel DB
//!
//! A dual-driver embedded database façade.
//!
//! This crate provides:
//! - One uniform calling convention over SQLite and DuckDB, selected by DSN
//! - Placeholder normalization: mixed `?`/`:name`/`%s` styles rewritten to
//!   `?` with the parameter count validated before execution
//! - Transaction nesting via savepoints (or depth counting where the engine
//!   has no savepoint API)
//! - A fluent DDL builder ([`TableBuilder`])
//! - Full-fidelity backup/restore from the stored `CREATE TABLE` statements
//!
//! ## Example
//!
//! ```
//! use satchel_db::{Database, sql_params};
//!
//! let mut db = Database::connect("sqlite:dbname=:memory:")?;
//! db.execute("CREATE TABLE t (v INTEGER)", &[])?;
//! db.execute("INSERT INTO t VALUES (%d)", &sql_params!["42"])?;
//!
//! let value = db.get_var("SELECT v FROM t", &[])?;
//! assert_eq!(value, Some(satchel_db::SqlValue::Integer(42)));
//! # Ok::<(), satchel_db::DbError>(())
//! ```
//!
//! DuckDB support is gated behind the `duckdb` cargo feature.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backup;
mod builder;
mod database;
mod driver;
mod dsn;
mod error;
mod ident;
mod normalize;
mod value;

pub use backup::{
    BackupManager, BackupMetadata, BackupOptions, RestoreSummary, TableBackup,
    BACKUP_FORMAT_VERSION, METADATA_KEY,
};
pub use builder::{RefAction, TableBuilder};
pub use database::Database;
pub use driver::{Driver, SqliteDriver};
#[cfg(feature = "duckdb")]
pub use driver::DuckDbDriver;
pub use dsn::{Credentials, DriverKind};
pub use error::{DbError, DbResult};
pub use ident::{is_valid_ident, quote_ident};
pub use normalize::{normalize_sql, NormalizedQuery};
pub use value::{FetchMode, Row, SqlValue};
