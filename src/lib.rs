//! notion_export library: Notion database → CSV export.
//!
//! This library streams the rows of a Notion database to CSV: one schema
//! fetch to fix the header, then sequential paginated queries, one CSV line
//! per row, flushed after every page.
//!
//! # Example
//!
//! ```no_run
//! use notion_export::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     database_id: "668d797c-76fa-4934-9b05-ad288df2d136".to_string(),
//!     token: std::env::var("NOTION_TOKEN")?,
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! eprintln!("Exported {} rows across {} pages", report.rows, report.pages);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, SortDirection};
pub use export::{ExportOptions, ExportStats};
pub use run::{run_export, ExportReport};

// Internal run module (contains the export orchestration)
mod run {
    use std::fs::File;
    use std::io::{self, Write};
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::api::NotionClient;
    use crate::config::Config;
    use crate::export::{export_database, ExportOptions};
    use crate::initialization::init_client;

    /// Results of a finished export run.
    ///
    /// Contains summary statistics about the completed export.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Data rows written
        pub rows: usize,
        /// Pages fetched from the API
        pub pages: usize,
        /// Columns in the CSV header
        pub columns: usize,
        /// Output file, or `None` for stdout
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export with the provided configuration.
    ///
    /// This is the main entry point for the library. It builds the HTTP
    /// client, selects the output sink (file or stdout), and streams the
    /// database to CSV.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the export (database id, token, sort,
    ///   output path, etc.)
    ///
    /// # Returns
    ///
    /// Returns an `ExportReport` containing summary statistics, or an error
    /// if the export failed.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be constructed (e.g. a malformed token)
    /// - The output file cannot be created
    /// - The schema fetch, any page fetch, or any row formatting fails
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let notion =
            NotionClient::new(client, &config.api_url).context("Invalid API base URL")?;

        let options = ExportOptions {
            sort_property: config.sort_property.clone(),
            direction: config.direction,
            page_size: config.page_size,
        };

        let sink: Box<dyn Write> = match &config.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        let start_time = std::time::Instant::now();
        info!("Starting export of database {}", config.database_id);

        let stats = export_database(&notion, &config.database_id, &options, sink).await?;

        Ok(ExportReport {
            rows: stats.rows,
            pages: stats.pages,
            columns: stats.columns,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
