//! Fluent DDL builder.

use crate::database::Database;
use crate::error::{DbError, DbResult};
use crate::ident::{is_valid_ident, quote_ident};
use crate::value::SqlValue;
use tracing::debug;

/// Referential action for foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefAction {
    /// `NO ACTION`.
    #[default]
    NoAction,
    /// `CASCADE`.
    Cascade,
    /// `SET NULL`.
    SetNull,
    /// `RESTRICT`.
    Restrict,
}

impl RefAction {
    fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::Restrict => "RESTRICT",
        }
    }
}

/// Base data types the builder accepts, beyond parameterized
/// `VARCHAR(n)`/`CHAR(n)`/`DECIMAL(p,s)`/`NUMERIC(p,s)`.
const ALLOWED_TYPES: &[&str] = &[
    "TEXT", "INTEGER", "BIGINT", "SMALLINT", "REAL", "DOUBLE", "FLOAT", "BOOLEAN", "BLOB",
    "DATE", "TIME", "TIMESTAMP", "DATETIME",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Creating,
    Altering,
}

/// Session-scoped accumulator for `CREATE TABLE`/`ALTER TABLE` DDL.
///
/// A session opens with [`new_table`](Self::new_table) or
/// [`alter_table`](Self::alter_table), accumulates fragments, and flushes
/// with [`create_table`](Self::create_table) /
/// [`update_table`](Self::update_table), which reset the builder. Exactly
/// one table per session: flushing twice without opening a new session
/// fails.
///
/// Any validation failure leaves the accumulator unchanged, so a rejected
/// fragment never leaks into the emitted DDL.
///
/// # Example
///
/// ```
/// use satchel_db::{Database, TableBuilder};
///
/// let mut db = Database::connect("sqlite:dbname=:memory:")?;
/// let mut builder = TableBuilder::new(&mut db);
/// builder
///     .new_table("users")?
///     .set_id("id")?
///     .add_varchar("name", 120)?
///     .add_index("name")?;
/// builder.create_table()?;
/// # Ok::<(), satchel_db::DbError>(())
/// ```
pub struct TableBuilder<'a> {
    db: &'a mut Database,
    mode: Mode,
    table: String,
    id_clause: Option<String>,
    primary_key: Option<String>,
    columns: Vec<String>,
    column_names: Vec<String>,
    foreign_keys: Vec<String>,
    indexes: Vec<(String, bool)>,
}

impl<'a> TableBuilder<'a> {
    /// Creates an idle builder over a database handle.
    pub fn new(db: &'a mut Database) -> Self {
        Self {
            db,
            mode: Mode::Idle,
            table: String::new(),
            id_clause: None,
            primary_key: None,
            columns: Vec::new(),
            column_names: Vec::new(),
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Opens a "creating" session for `name`.
    pub fn new_table(&mut self, name: &str) -> DbResult<&mut Self> {
        self.open_session(name, Mode::Creating)
    }

    /// Opens an "altering" session for `name`.
    pub fn alter_table(&mut self, name: &str) -> DbResult<&mut Self> {
        self.open_session(name, Mode::Altering)
    }

    fn open_session(&mut self, name: &str, mode: Mode) -> DbResult<&mut Self> {
        if self.mode != Mode::Idle {
            return Err(DbError::builder(format!(
                "a session for `{}` is already open; flush or reset it first",
                self.table
            )));
        }
        Self::check_ident(name)?;
        self.table = name.to_string();
        self.mode = mode;
        Ok(self)
    }

    /// Abandons the current session, clearing every buffer.
    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.table.clear();
        self.id_clause = None;
        self.primary_key = None;
        self.columns.clear();
        self.column_names.clear();
        self.foreign_keys.clear();
        self.indexes.clear();
    }

    /// Adds a column of an allowed data type.
    ///
    /// `default` renders as a properly quoted literal.
    pub fn add_field(
        &mut self,
        name: &str,
        data_type: &str,
        nullable: bool,
        default: Option<&SqlValue>,
    ) -> DbResult<&mut Self> {
        self.ensure_open()?;
        Self::check_ident(name)?;
        self.check_duplicate(name)?;
        let data_type = Self::check_type(data_type)?;

        let mut fragment = format!("{} {}", quote_ident(name), data_type);
        if !nullable {
            fragment.push_str(" NOT NULL");
        }
        if let Some(value) = default {
            fragment.push_str(" DEFAULT ");
            fragment.push_str(&Self::render_literal(value)?);
        }

        self.columns.push(fragment);
        self.column_names.push(name.to_string());
        Ok(self)
    }

    /// Adds a `VARCHAR(len)` column.
    pub fn add_varchar(&mut self, name: &str, len: u32) -> DbResult<&mut Self> {
        if len == 0 {
            return Err(DbError::builder("varchar length must be non-zero"));
        }
        self.add_field(name, &format!("VARCHAR({len})"), true, None)
    }

    /// Adds a nullable `INTEGER` column.
    pub fn add_int(&mut self, name: &str) -> DbResult<&mut Self> {
        self.add_field(name, "INTEGER", true, None)
    }

    /// Adds `created_at`/`updated_at` timestamp columns.
    pub fn add_timestamps(&mut self) -> DbResult<&mut Self> {
        self.ensure_open()?;
        for name in ["created_at", "updated_at"] {
            self.check_duplicate(name)?;
        }
        for name in ["created_at", "updated_at"] {
            self.columns.push(format!(
                "{} TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP",
                quote_ident(name)
            ));
            self.column_names.push(name.to_string());
        }
        Ok(self)
    }

    /// Declares an auto-incrementing integer primary key column.
    ///
    /// Only one primary key and one auto-increment column per table. This
    /// short-circuits validation of the clause itself: the column definition
    /// is assigned directly from the driver's auto-increment capability.
    pub fn set_id(&mut self, name: &str) -> DbResult<&mut Self> {
        self.ensure_open()?;
        if self.mode != Mode::Creating {
            return Err(DbError::builder("primary keys cannot be added by ALTER"));
        }
        Self::check_ident(name)?;
        self.check_duplicate(name)?;
        if self.id_clause.is_some() {
            return Err(DbError::builder("auto-increment column already set"));
        }
        if self.primary_key.is_some() {
            return Err(DbError::builder("table already has a primary key"));
        }

        let clause = self
            .db
            .auto_increment_clause()
            .unwrap_or("INTEGER PRIMARY KEY");
        self.id_clause = Some(format!("{} {}", quote_ident(name), clause));
        self.column_names.push(name.to_string());
        Ok(self)
    }

    /// Declares an already-added column as the primary key.
    pub fn primary_key(&mut self, field: &str) -> DbResult<&mut Self> {
        self.ensure_open()?;
        if self.mode != Mode::Creating {
            return Err(DbError::builder("primary keys cannot be added by ALTER"));
        }
        if self.id_clause.is_some() || self.primary_key.is_some() {
            return Err(DbError::builder("table already has a primary key"));
        }
        if !self.column_names.iter().any(|c| c == field) {
            return Err(DbError::builder(format!(
                "primary key field `{field}` has not been added"
            )));
        }
        self.primary_key = Some(field.to_string());
        Ok(self)
    }

    /// Queues an index on an already-added column.
    pub fn add_index(&mut self, field: &str) -> DbResult<&mut Self> {
        self.queue_index(field, false)
    }

    /// Queues a unique index on an already-added column.
    pub fn add_unique_index(&mut self, field: &str) -> DbResult<&mut Self> {
        self.queue_index(field, true)
    }

    fn queue_index(&mut self, field: &str, unique: bool) -> DbResult<&mut Self> {
        self.ensure_open()?;
        if !self.column_names.iter().any(|c| c == field) {
            return Err(DbError::builder(format!(
                "index field `{field}` has not been added"
            )));
        }
        self.indexes.push((field.to_string(), unique));
        Ok(self)
    }

    /// Adds a foreign key from an already-added local column to
    /// `ref_table(ref_field)`.
    pub fn reference_table(
        &mut self,
        ref_table: &str,
        ref_field: &str,
        local_field: &str,
        on_delete: RefAction,
        on_update: RefAction,
    ) -> DbResult<&mut Self> {
        self.ensure_open()?;
        if self.mode != Mode::Creating {
            return Err(DbError::builder("foreign keys cannot be added by ALTER"));
        }
        Self::check_ident(ref_table)?;
        Self::check_ident(ref_field)?;
        if !self.column_names.iter().any(|c| c == local_field) {
            return Err(DbError::builder(format!(
                "foreign key field `{local_field}` has not been added"
            )));
        }

        let referenced = self.db.prefix_table(ref_table);
        self.foreign_keys.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {} ON UPDATE {}",
            quote_ident(local_field),
            quote_ident(&referenced),
            quote_ident(ref_field),
            on_delete.as_sql(),
            on_update.as_sql(),
        ));
        Ok(self)
    }

    /// Assembles and executes the `CREATE TABLE`, then resets the builder.
    pub fn create_table(&mut self) -> DbResult<()> {
        if self.mode != Mode::Creating {
            return Err(DbError::builder(
                "no table is being created; call new_table first",
            ));
        }
        if self.id_clause.is_none() && self.columns.is_empty() {
            return Err(DbError::builder("table has no columns"));
        }

        let table = self.db.prefix_table(&self.table);
        let mut clauses: Vec<String> = Vec::new();
        if let Some(id) = &self.id_clause {
            clauses.push(id.clone());
        }
        clauses.extend(self.columns.iter().cloned());
        if let Some(pk) = &self.primary_key {
            clauses.push(format!("PRIMARY KEY ({})", quote_ident(pk)));
        }
        clauses.extend(self.foreign_keys.iter().cloned());

        let ddl = format!(
            "CREATE TABLE {} (\n  {}\n)",
            quote_ident(&table),
            clauses.join(",\n  ")
        );
        debug!(table = %table, "creating table");
        self.db.execute(&ddl, &[])?;
        self.flush_indexes(&table)?;
        self.reset();
        Ok(())
    }

    /// Executes the buffered `ALTER TABLE` additions, then resets.
    pub fn update_table(&mut self) -> DbResult<()> {
        if self.mode != Mode::Altering {
            return Err(DbError::builder(
                "no table is being altered; call alter_table first",
            ));
        }
        if self.columns.is_empty() && self.indexes.is_empty() {
            return Err(DbError::builder("nothing to alter"));
        }

        let table = self.db.prefix_table(&self.table);
        for column in self.columns.clone() {
            let ddl = format!("ALTER TABLE {} ADD COLUMN {}", quote_ident(&table), column);
            self.db.execute(&ddl, &[])?;
        }
        self.flush_indexes(&table)?;
        self.reset();
        Ok(())
    }

    fn flush_indexes(&mut self, table: &str) -> DbResult<()> {
        for (field, unique) in self.indexes.clone() {
            let index_name = format!("idx_{table}_{field}");
            let ddl = format!(
                "CREATE {}INDEX {} ON {} ({})",
                if unique { "UNIQUE " } else { "" },
                quote_ident(&index_name),
                quote_ident(table),
                quote_ident(&field),
            );
            self.db.execute(&ddl, &[])?;
        }
        Ok(())
    }

    fn ensure_open(&self) -> DbResult<()> {
        if self.mode == Mode::Idle {
            return Err(DbError::builder(
                "no session open; call new_table or alter_table first",
            ));
        }
        Ok(())
    }

    fn check_ident(name: &str) -> DbResult<()> {
        if !is_valid_ident(name) {
            return Err(DbError::builder(format!("invalid identifier: `{name}`")));
        }
        Ok(())
    }

    fn check_duplicate(&self, name: &str) -> DbResult<()> {
        if self.column_names.iter().any(|c| c == name) {
            return Err(DbError::builder(format!("duplicate column: `{name}`")));
        }
        Ok(())
    }

    fn check_type(data_type: &str) -> DbResult<String> {
        let upper = data_type.trim().to_ascii_uppercase();
        if ALLOWED_TYPES.contains(&upper.as_str()) {
            return Ok(upper);
        }
        // Parameterized types: NAME(digits[,digits])
        if let Some((base, rest)) = upper.split_once('(') {
            let args = rest.strip_suffix(')');
            let args_valid = args.is_some_and(|a| {
                !a.is_empty()
                    && a.split(',').all(|part| {
                        let part = part.trim();
                        !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
                    })
            });
            let base_allowed = matches!(base, "VARCHAR" | "CHAR" | "DECIMAL" | "NUMERIC");
            if base_allowed && args_valid {
                return Ok(upper);
            }
        }
        Err(DbError::builder(format!(
            "data type not allowed: `{data_type}`"
        )))
    }

    fn render_literal(value: &SqlValue) -> DbResult<String> {
        match value {
            SqlValue::Null => Ok("NULL".to_string()),
            SqlValue::Integer(i) => Ok(i.to_string()),
            SqlValue::Real(f) => Ok(f.to_string()),
            SqlValue::Text(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
            SqlValue::Blob(_) => Err(DbError::builder("blob defaults are not supported")),
        }
    }
}

impl std::fmt::Debug for TableBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableBuilder")
            .field("mode", &self.mode)
            .field("table", &self.table)
            .field("columns", &self.columns.len())
            .finish_non_exhaustive()
    }
}
