//! HTTP client for the Notion API.
//!
//! Only the three calls the activity log needs are exposed: create a page in
//! a database, query a database with sorts, and update a page (used to set the
//! archived flag). [`NotionApi`] is the seam the repository depends on so it
//! can be exercised without a network.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use daylog_core::errors::{Error, Result, StoreError};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the Notion API.
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Largest page size the query endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

const NOTION_VERSION_HEADER: &str = "notion-version";

// ─────────────────────────────────────────────────────────────────────────────
// Request / Response Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatabaseParent {
    pub database_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatePageRequest {
    pub parent: DatabaseParent,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertySort {
    pub property: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryDatabaseRequest {
    pub sorts: Vec<PropertySort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    pub page_size: u32,
}

/// One page of query results. Pages are kept as raw JSON so that decoding
/// can tolerate properties the mapper does not expect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryDatabaseResponse {
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UpdatePageRequest {
    pub archived: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// API trait
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait NotionApi: Send + Sync {
    /// `POST /pages`. Returns the created page object.
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value>;

    /// `POST /databases/{id}/query`. Archived pages are excluded by the API.
    async fn query_database(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<QueryDatabaseResponse>;

    /// `PATCH /pages/{id}`. Returns the updated page object.
    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> Result<Value>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Notion API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the Notion API.
///
/// Build it once at start-up and share it; `reqwest::Client` pools
/// connections internally.
///
/// # Example
///
/// ```ignore
/// let client = NotionClient::new(DEFAULT_NOTION_API_URL, "secret_xxx")?;
/// let page = client.create_page(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl NotionClient {
    /// Create a new Notion API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be used as a header value or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::InvalidConfigValue(format!("Invalid Notion token format: {}", e)))?;
        auth_header.set_sensitive(true);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers.insert(
            HeaderName::from_static(NOTION_VERSION_HEADER),
            HeaderValue::from_static(NOTION_API_VERSION),
        );
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[NotionApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        parse_response(response).await
    }

    async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[NotionApi] PATCH {}", url);

        let response = self
            .client
            .patch(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        parse_response(response).await
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value> {
        self.post("/pages", request).await
    }

    async fn query_database(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<QueryDatabaseResponse> {
        let path = format!("/databases/{}/query", urlencoding::encode(database_id));
        self.post(&path, request).await
    }

    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> Result<Value> {
        let path = format!("/pages/{}", urlencoding::encode(page_id));
        self.patch(&path, request).await
    }
}

/// Parse an HTTP response, handling errors appropriately.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| StoreError::RequestFailed(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(store_error_from_response(status, &body).into());
    }

    serde_json::from_str(&body).map_err(|e| {
        StoreError::UnexpectedResponse(format!("Failed to parse response: {}", e)).into()
    })
}

/// Maps a non-success response onto the store error taxonomy.
///
/// The Notion error body is `{"object":"error","status":..,"code":..,"message":..}`;
/// when it cannot be parsed the first 200 characters of the body are kept.
pub(crate) fn store_error_from_response(status: StatusCode, body: &str) -> StoreError {
    let detail = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => match (err.code, err.message) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (None, Some(message)) => message,
            (Some(code), None) => code,
            (None, None) => format!("HTTP {}", status),
        },
        Err(_) => format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        ),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized(detail),
        StatusCode::NOT_FOUND => StoreError::NotFound(detail),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            StoreError::InvalidRequest(detail)
        }
        StatusCode::TOO_MANY_REQUESTS => StoreError::RateLimited(detail),
        s if s.is_server_error() => StoreError::Unavailable(detail),
        _ => StoreError::UnexpectedResponse(detail),
    }
}
