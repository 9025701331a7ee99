//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` that carries authentication and
//! protocol headers for every Notion API call.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::ClientBuilder;

use crate::config::{Config, NOTION_API_VERSION, NOTION_VERSION_HEADER, USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for all Notion API calls.
///
/// Creates a `reqwest::Client` configured with:
/// - `Authorization: Bearer <token>` default header, marked sensitive so the
///   credential never shows up in debug output
/// - `Notion-Version` default header pinning the API version
/// - Timeout from the configuration
/// - A `notion_export/<version>` User-Agent
///
/// # Arguments
///
/// * `config` - Configuration containing the token and timeout settings
///
/// # Errors
///
/// Returns `InitializationError::InvalidToken` if the token contains bytes
/// that cannot be carried in an HTTP header, or
/// `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
        .map_err(|_| InitializationError::InvalidToken)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        HeaderName::from_static(NOTION_VERSION_HEADER),
        HeaderValue::from_static(NOTION_API_VERSION),
    );

    let client = ClientBuilder::new()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_succeeds_with_plain_token() {
        let config = Config {
            token: "secret_abc123".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_token_with_control_bytes() {
        let config = Config {
            token: "secret\nwith-newline".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_client(&config),
            Err(InitializationError::InvalidToken)
        ));
    }
}
