//! Restore command.

use satchel_db::{BackupManager, BackupOptions, Database};
use std::fs;
use std::path::Path;
use tracing::info;

/// Restores a backup file into the database.
///
/// Refuses to touch a non-empty database unless `force` is set. The restore
/// itself validates the backup, runs in one transaction, and rolls back on
/// any failure.
pub fn run(
    dsn: &str,
    input: &Path,
    drop_existing: bool,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(input = %input.display(), "restoring backup");

    let mut db = Database::connect(dsn)?;

    let existing = db.list_tables()?;
    if !existing.is_empty() && !force {
        return Err(format!(
            "target database already has {} table(s). Use --force to overwrite.",
            existing.len()
        )
        .into());
    }

    let data = fs::read(input)?;
    let backup: serde_json::Value = serde_json::from_slice(&data)?;

    if let Some(metadata) = BackupManager::read_metadata(&backup)? {
        info!(
            driver = %metadata.driver,
            tables = metadata.table_count,
            "backup metadata"
        );
    }

    let manager = BackupManager::new(BackupOptions::new().drop_existing(drop_existing));
    let summary = manager.restore_db(&mut db, &backup)?;

    println!("✓ Database restored successfully");
    println!("  Tables: {}", summary.tables);
    println!("  Rows: {}", summary.rows);

    Ok(())
}
