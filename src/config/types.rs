//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and programmatic configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE, NOTION_API_BASE_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Direction of the export sort.
///
/// Doubles as the CLI value enum and the wire representation inside a sort
/// directive; both spell the variants `ascending`/`descending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest/oldest values first
    Ascending,
    /// Largest/newest values first (default)
    Descending,
}

/// Configuration for an export run.
///
/// Doubles as the CLI argument definition (via `clap::Parser`) and the
/// library configuration struct. Programmatic callers can construct it with
/// struct-update syntax over [`Config::default()`].
///
/// # Examples
///
/// ```no_run
/// use notion_export::Config;
///
/// let config = Config {
///     database_id: "668d797c-76fa-4934-9b05-ad288df2d136".to_string(),
///     token: std::env::var("NOTION_TOKEN").unwrap_or_default(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "notion_export",
    version,
    about = "Export a Notion database to CSV"
)]
pub struct Config {
    /// Identifier of the Notion database to export
    pub database_id: String,

    /// Notion integration token used as the bearer credential
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Property to sort by; defaults to the created-time timestamp
    #[arg(long)]
    pub sort_property: Option<String>,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortDirection::Descending)]
    pub direction: SortDirection,

    /// Rows per page request (1-100); the service default applies when unset
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub page_size: Option<u32>,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Base URL of the Notion API
    #[arg(long, default_value = NOTION_API_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_id: String::new(),
            token: String::new(),
            sort_property: None,
            direction: SortDirection::Descending,
            page_size: None,
            output: None,
            api_url: NOTION_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_sort_direction_wire_spelling() {
        // The serialized form must match what the query endpoint expects.
        assert_eq!(
            serde_json::to_string(&SortDirection::Ascending).unwrap(),
            "\"ascending\""
        );
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"descending\""
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.direction, SortDirection::Descending);
        assert_eq!(config.api_url, NOTION_API_BASE_URL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert!(config.sort_property.is_none());
        assert!(config.page_size.is_none());
        assert!(config.output.is_none());
    }
}
