//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `notion_export` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use notion_export::initialization::init_logger_with;
use notion_export::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so
    // NOTION_TOKEN can be configured without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    // Run the export using the library
    match run_export(config).await {
        Ok(report) => {
            // Summary goes to stderr: stdout may be the CSV sink
            eprintln!(
                "✅ Exported {} row{} across {} page{} ({} columns) in {:.1}s",
                report.rows,
                if report.rows == 1 { "" } else { "s" },
                report.pages,
                if report.pages == 1 { "" } else { "s" },
                report.columns,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("notion_export error: {:#}", e);
            process::exit(1);
        }
    }
}
