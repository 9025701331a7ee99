//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The API token cannot be carried in an HTTP header.
    #[error("API token is not a valid header value")]
    InvalidToken,
}

/// Error types for Notion API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP request error: {0}")]
    Http(#[from] ReqwestError),

    /// The service answered with an error body.
    #[error("Notion API error ({status}, {code}): {message}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Machine-readable error code from the body, e.g. `object_not_found`.
        code: String,
        /// Human-readable message from the body.
        message: String,
    },

    /// The request URL could not be built from the configured base URL.
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Error types for the export loop and the property formatter.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A row does not carry a column announced by the schema.
    #[error("row {page_id} is missing column {column:?}")]
    MissingColumn {
        /// Identifier of the offending row.
        page_id: String,
        /// Name of the absent column.
        column: String,
    },

    /// Button properties are interactive-only and have no cell value.
    #[error("button properties are not supported")]
    ButtonProperty,

    /// Formula result kind outside string/number/boolean/date.
    #[error("unsupported formula result type")]
    UnsupportedFormulaResult,

    /// Rollup result kind outside number/date.
    #[error("unsupported rollup result type")]
    UnsupportedRollupResult,

    /// A property kind this exporter does not know how to render.
    #[error("unsupported property type")]
    UnsupportedProperty,
}
