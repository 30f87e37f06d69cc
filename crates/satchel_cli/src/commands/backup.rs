//! Backup command.

use satchel_db::{BackupManager, Database};
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes a backup of the whole database, or one table, to `output`.
pub fn run(
    dsn: &str,
    output: &Path,
    table: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(output = %output.display(), "creating backup");

    let mut db = Database::connect(dsn)?;
    let manager = BackupManager::with_defaults();

    let table_count = match table {
        Some(table) => {
            let backup = manager.backup_table(&mut db, table)?;
            let mut mapping = serde_json::Map::new();
            mapping.insert(backup.table_name.clone(), serde_json::to_value(&backup)?);
            fs::write(
                output,
                serde_json::to_vec_pretty(&serde_json::Value::Object(mapping))?,
            )?;
            1
        }
        None => manager.backup_db_to_file(&mut db, output)?,
    };

    println!("✓ Backup created successfully");
    println!("  Path: {}", output.display());
    println!("  Tables: {table_count}");
    println!("  Size: {} bytes", fs::metadata(output)?.len());

    Ok(())
}
