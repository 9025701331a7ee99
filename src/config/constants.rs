//! Configuration constants.
//!
//! Notion API endpoints, protocol headers, and default limits used across
//! the exporter.

/// Base URL of the Notion REST API.
///
/// Overridable via the `--api-url` flag, which the integration tests use to
/// point the exporter at a local mock server.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com";

/// Name of the request header carrying the Notion API version, in the
/// lowercase wire form `HeaderName::from_static` requires.
pub const NOTION_VERSION_HEADER: &str = "notion-version";

/// Notion API version this crate speaks.
///
/// Pinned so upstream API evolution cannot silently change the wire shapes
/// the models in `api::models` expect.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Largest page size the query endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Timestamp key used for the fallback sort when no sort property is given.
pub const CREATED_TIME_TIMESTAMP: &str = "created_time";

/// User-Agent header value sent with every request.
pub const USER_AGENT: &str = concat!("notion_export/", env!("CARGO_PKG_VERSION"));
