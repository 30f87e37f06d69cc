//! Inspect command.

use satchel_db::{quote_ident, Database};

/// Prints every user table with its row count, as text or JSON.
pub fn run(dsn: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::connect(dsn)?;
    let tables = db.list_tables()?;

    let mut counts = Vec::with_capacity(tables.len());
    for table in &tables {
        let count = db
            .get_var(&format!("SELECT COUNT(*) FROM {}", quote_ident(table)), &[])?
            .and_then(|v| v.as_integer())
            .unwrap_or(0);
        counts.push((table.clone(), count));
    }

    match format {
        "json" => {
            let mut mapping = serde_json::Map::new();
            for (table, count) in &counts {
                mapping.insert(table.clone(), serde_json::Value::from(*count));
            }
            let report = serde_json::json!({
                "driver": db.driver_name(),
                "tables": mapping,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("Driver: {}", db.driver_name());
            println!("Tables: {}", counts.len());
            for (table, count) in &counts {
                println!("  {table}: {count} row(s)");
            }
        }
        other => return Err(format!("unknown format: {other}").into()),
    }

    Ok(())
}
