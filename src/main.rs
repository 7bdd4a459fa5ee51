//! Command line entry point for the SQLite → JSON export.
//!
//! # Usage
//!
//! ```bash
//! # Export ./database.db to ./sqlite_export.json
//! sqlite-export
//!
//! # Explicit paths
//! sqlite-export --database data/links.db --output site/import.json
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH`, `EXPORT_PATH` - Default paths when flags are omitted
//! - `RUST_LOG`, `LOG_FORMAT` - Logging
//!
//! Exits with status 0 on success and 1 on any failure.

use clap::Parser;
use colored::*;
use sqlite_export::config;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Export catalogues and links from SQLite to a JSON file for static-site import.
#[derive(Parser)]
#[command(name = "sqlite-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source database file [env: DATABASE_PATH, default: database.db]
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Output JSON file [env: EXPORT_PATH, default: sqlite_export.json]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match config::load(cli.database, cli.output) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    config.init_tracing();
    config.print_summary();

    println!("{}", "Starting SQLite to JSON export...".bright_blue().bold());
    println!("{}", "-".repeat(40).bright_black());

    match sqlite_export::run(&config).await {
        Ok(outcome) => {
            print_next_steps(&outcome.output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            if e.is_not_found() {
                eprintln!(
                    "{} pass --database <FILE> or set DATABASE_PATH",
                    "Hint:".yellow().bold()
                );
            }
            ExitCode::FAILURE
        }
    }
}

/// Prints the completion banner and the manual import guide.
fn print_next_steps(output: &Path) {
    let rule = "=".repeat(50);
    let file = output.display().to_string();

    println!();
    println!("{}", rule.bright_black());
    println!("{}", "EXPORT COMPLETED SUCCESSFULLY!".green().bold());
    println!("{}", rule.bright_black());
    println!("File created: {}", file.cyan());
    println!("{}", "Next steps:".bright_white().bold());
    println!("   1. Open your static site in browser");
    println!("   2. Go to Admin panel (Ctrl+M)");
    println!("   3. Data tab -> 'Nhap du lieu'");
    println!("   4. Select {}", file.cyan());
    println!("   5. All your data will be imported!");
}
