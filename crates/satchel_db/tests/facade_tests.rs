//! End-to-end façade tests across drivers.

use satchel_db::{
    sql_params, BackupManager, Database, DbError, FetchMode, SqlValue, TableBuilder,
};
use tempfile::tempdir;

#[test]
fn select_one_returns_single_row() {
    let mut db = Database::connect("sqlite:dbname=:memory:").unwrap();
    let rows = db.get_results("SELECT 1", &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_index(0), Some(&SqlValue::Integer(1)));
}

#[test]
fn file_backed_database_persists() {
    let dir = tempdir().unwrap();
    let dbfile = dir.path().join("app.db");
    let dsn = format!("sqlite:dbname={}", dbfile.display());

    {
        let mut db = Database::connect(&dsn).unwrap();
        db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();
        db.execute("INSERT INTO t VALUES (7)", &[]).unwrap();
    }

    let mut db = Database::connect(&dsn).unwrap();
    let v = db.get_var("SELECT v FROM t", &[]).unwrap();
    assert_eq!(v, Some(SqlValue::Integer(7)));
}

#[test]
fn mixed_placeholder_styles_execute_uniformly() {
    let mut db = Database::connect("sqlite:dbname=:memory:").unwrap();
    db.execute("CREATE TABLE people (id INTEGER, name TEXT, score REAL)", &[])
        .unwrap();
    db.execute(
        "INSERT INTO people VALUES (%d, :name, ?)",
        &sql_params!["1", "ada", 9.5],
    )
    .unwrap();

    let row = db
        .get_row(
            "SELECT * FROM people WHERE id = ? AND name = :name",
            &sql_params![1i64, "ada"],
        )
        .unwrap()
        .unwrap();
    assert_eq!(row.get("score"), Some(&SqlValue::Real(9.5)));
}

#[test]
fn placeholder_mismatch_never_reaches_the_driver() {
    let mut db = Database::connect("sqlite:dbname=:memory:").unwrap();
    db.execute("CREATE TABLE log (v TEXT)", &[]).unwrap();

    for (sql, params) in [
        ("INSERT INTO log VALUES (?)", sql_params![]),
        ("INSERT INTO log VALUES (?, ?)", sql_params!["a"]),
        ("INSERT INTO log VALUES ('x')", sql_params!["extra"]),
    ] {
        let err = db.execute(sql, &params).unwrap_err();
        assert!(matches!(err, DbError::PlaceholderMismatch { .. }));
    }

    assert_eq!(
        db.get_var("SELECT COUNT(*) FROM log", &[]).unwrap(),
        Some(SqlValue::Integer(0))
    );
}

#[test]
fn builder_backup_restore_full_cycle() {
    let mut db = Database::connect("sqlite:dbname=:memory:;prefix=app_").unwrap();

    let mut builder = TableBuilder::new(&mut db);
    builder
        .new_table("notes")
        .unwrap()
        .set_id("id")
        .unwrap()
        .add_varchar("title", 80)
        .unwrap()
        .add_timestamps()
        .unwrap()
        .add_index("title")
        .unwrap();
    builder.create_table().unwrap();

    db.execute(
        "INSERT INTO app_notes (title) VALUES (:t)",
        &sql_params!["first"],
    )
    .unwrap();

    let manager = BackupManager::with_defaults();
    let backup = manager.backup_db(&mut db).unwrap();

    db.execute("DELETE FROM app_notes", &[]).unwrap();
    let summary = manager.restore_db(&mut db, &backup).unwrap();
    assert_eq!(summary.tables, 1);
    assert_eq!(summary.rows, 1);

    let title = db.get_var("SELECT title FROM app_notes", &[]).unwrap();
    assert_eq!(title, Some(SqlValue::Text("first".into())));

    // The builder's index came back with the restore.
    let indexes = db.index_sql("app_notes").unwrap();
    assert!(indexes.iter().any(|sql| sql.contains("idx_app_notes_title")));
}

#[test]
fn deep_nesting_unwinds_one_level_per_call() {
    let mut db = Database::connect("sqlite:dbname=:memory:").unwrap();
    db.execute("CREATE TABLE t (v INTEGER)", &[]).unwrap();

    db.begin_transaction().unwrap();
    db.execute("INSERT INTO t VALUES (1)", &[]).unwrap();
    db.begin_transaction().unwrap();
    db.execute("INSERT INTO t VALUES (2)", &[]).unwrap();
    db.begin_transaction().unwrap();
    db.execute("INSERT INTO t VALUES (3)", &[]).unwrap();
    assert_eq!(db.transaction_depth(), 3);

    // Roll back only the innermost write.
    db.rollback().unwrap();
    assert_eq!(db.transaction_depth(), 2);
    db.commit().unwrap();
    db.commit().unwrap();
    assert_eq!(db.transaction_depth(), 0);

    let values = db.get_col("SELECT v FROM t ORDER BY v", &[]).unwrap();
    assert_eq!(values, vec![SqlValue::Integer(1), SqlValue::Integer(2)]);
}

#[test]
fn fetch_mode_shapes_json_output() {
    let mut db = Database::connect("sqlite:dbname=:memory:").unwrap();
    db.execute("CREATE TABLE t (id INTEGER, name TEXT)", &[])
        .unwrap();
    db.execute("INSERT INTO t VALUES (1, 'ada')", &[]).unwrap();

    let rows = db.get_results("SELECT * FROM t", &[]).unwrap();
    assert_eq!(db.rows_to_json(&rows)[0]["id"], 1);

    db.set_fetch_mode(FetchMode::Indexed);
    assert_eq!(db.rows_to_json(&rows)[0][0], 1);
}

#[cfg(feature = "duckdb")]
mod duckdb_driver {
    use super::*;

    #[test]
    fn same_calling_convention_as_sqlite() {
        let mut db = Database::connect("duckdb:dbname=:memory:").unwrap();
        db.execute("CREATE TABLE t (id BIGINT, name VARCHAR)", &[])
            .unwrap();
        db.execute(
            "INSERT INTO t VALUES (:id, :name)",
            &sql_params![1i64, "ada"],
        )
        .unwrap();

        let row = db
            .get_row("SELECT * FROM t WHERE id = %d", &sql_params!["1"])
            .unwrap()
            .unwrap();
        assert_eq!(row.get("name"), Some(&SqlValue::Text("ada".into())));
    }

    #[test]
    fn nested_transactions_count_depth_without_savepoints() {
        let mut db = Database::connect("duckdb:dbname=:memory:").unwrap();
        assert!(!db.supports_savepoints());
        db.execute("CREATE TABLE t (v BIGINT)", &[]).unwrap();

        db.begin_transaction().unwrap();
        db.execute("INSERT INTO t VALUES (1)", &[]).unwrap();
        // Inner level is bookkeeping only on this driver.
        db.begin_transaction().unwrap();
        assert_eq!(db.transaction_depth(), 2);
        db.commit().unwrap();
        assert_eq!(db.transaction_depth(), 1);
        db.commit().unwrap();

        let count = db.get_var("SELECT COUNT(*) FROM t", &[]).unwrap();
        assert_eq!(count, Some(SqlValue::Integer(1)));
    }

    #[test]
    fn backup_restore_works_on_duckdb() {
        let mut db = Database::connect("duckdb:dbname=:memory:").unwrap();
        db.execute("CREATE TABLE t (id BIGINT, name VARCHAR)", &[])
            .unwrap();
        db.execute("INSERT INTO t VALUES (1, 'ada')", &[]).unwrap();

        let manager = BackupManager::with_defaults();
        let backup = manager.backup_db(&mut db).unwrap();

        db.execute("DELETE FROM t", &[]).unwrap();
        let summary = manager.restore_db(&mut db, &backup).unwrap();
        assert_eq!(summary.rows, 1);

        let name = db.get_var("SELECT name FROM t", &[]).unwrap();
        assert_eq!(name, Some(SqlValue::Text("ada".into())));
    }
}
