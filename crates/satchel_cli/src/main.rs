//! Satchel CLI
//!
//! Command-line tools for Satchel-managed databases.
//!
//! # Commands
//!
//! - `backup` - Write a database (or one table) to a backup file
//! - `restore` - Recreate tables and rows from a backup file
//! - `inspect` - List tables with row counts
//! - `exec` - Run one SQL statement

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Satchel command-line database tools.
#[derive(Parser)]
#[command(name = "satchel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// DSN credential string, e.g. `sqlite:dbname=/path/app.db`
    #[arg(global = true, short, long)]
    dsn: Option<String>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a database (or one table) to a backup file
    Backup {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Back up only this table
        #[arg(short, long)]
        table: Option<String>,
    },

    /// Recreate tables and rows from a backup file
    Restore {
        /// Backup file path
        #[arg(short, long)]
        input: PathBuf,

        /// Keep existing tables instead of dropping them first
        #[arg(long)]
        keep_existing: bool,

        /// Restore even when the target database already has tables
        #[arg(short, long)]
        force: bool,
    },

    /// List tables with row counts
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run one SQL statement
    Exec {
        /// The statement to run
        sql: String,

        /// Positional parameters, bound as text
        #[arg(short, long)]
        param: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let dsn = cli.dsn.ok_or("DSN required; pass --dsn")?;

    match cli.command {
        Commands::Backup { output, table } => {
            commands::backup::run(&dsn, &output, table.as_deref())?;
        }
        Commands::Restore {
            input,
            keep_existing,
            force,
        } => {
            commands::restore::run(&dsn, &input, !keep_existing, force)?;
        }
        Commands::Inspect { format } => {
            commands::inspect::run(&dsn, &format)?;
        }
        Commands::Exec { sql, param } => {
            commands::exec::run(&dsn, &sql, &param)?;
        }
    }

    Ok(())
}
