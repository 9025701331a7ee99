//! Notion API client.
//!
//! Thin wrapper over `reqwest` exposing the two endpoints the exporter
//! needs: fetching a database's schema and querying its rows one page at a
//! time. Non-success responses are decoded into the service's error body.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::api::models::{Database, QueryRequest, QueryResponse};
use crate::error_handling::ApiError;

/// Client for the Notion REST API.
///
/// Authentication and the API version header are carried by the underlying
/// `reqwest::Client` (see `initialization::init_client`), so any pre-built
/// client can be injected here. The integration tests use that to point the
/// exporter at a mock server.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body returned by the Notion API.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl NotionClient {
    /// Creates a client from a pre-built HTTP client and a base URL.
    ///
    /// The base URL must be an absolute URL naming the API origin, e.g.
    /// `https://api.notion.com`; endpoint paths are appended to it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if `base_url` does not parse.
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the database object, schema included.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failures and `ApiError::Api`
    /// when the service answers with an error status.
    pub async fn get_database(&self, database_id: &str) -> Result<Database, ApiError> {
        let url = self.endpoint(&format!("v1/databases/{database_id}"));
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// Queries one page of rows.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failures and `ApiError::Api`
    /// when the service answers with an error status.
    pub async fn query_database(
        &self,
        database_id: &str,
        request: &QueryRequest,
    ) -> Result<QueryResponse, ApiError> {
        let url = self.endpoint(&format!("v1/databases/{database_id}/query"));
        debug!("POST {url}");
        let response = self.http.post(url).json(request).send().await?;
        Self::decode(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Decodes a success body, or turns an error status into `ApiError::Api`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        // Error bodies are JSON on every documented path; fall back to an
        // empty code/message if the body is something else entirely.
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        Err(ApiError::Api {
            status,
            code: body.code,
            message: body.message,
        })
    }
}
