//! Error handling.
//!
//! Typed errors for initialization, Notion API calls, and the export loop.
//! All of them are fatal: the exporter never retries or recovers locally.

mod types;

pub use types::{ApiError, ExportError, InitializationError};
