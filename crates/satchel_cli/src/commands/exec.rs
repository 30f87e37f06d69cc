//! Exec command.

use satchel_db::{Database, SqlValue};

/// Runs one statement, binding each `--param` as text.
///
/// SELECT-shaped statements print their rows as JSON per the fetch mode;
/// anything else prints the affected-row count.
pub fn run(dsn: &str, sql: &str, params: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::connect(dsn)?;
    let bound: Vec<SqlValue> = params
        .iter()
        .map(|p| SqlValue::Text(p.clone()))
        .collect();

    let is_query = sql
        .trim_start()
        .to_ascii_uppercase()
        .starts_with("SELECT");

    if is_query {
        let rows = db.get_results(sql, &bound)?;
        println!("{}", serde_json::to_string_pretty(&db.rows_to_json(&rows))?);
        println!("({} row(s))", rows.len());
    } else {
        let affected = db.execute(sql, &bound)?;
        println!("✓ {affected} row(s) affected");
    }

    Ok(())
}
