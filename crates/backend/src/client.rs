//! HTTP client for the hosted backend's REST interface.
//!
//! The backend exposes its tables PostgREST-style under `/rest/v1/{table}`
//! and authenticates with a project API key sent both as `apikey` and as a
//! bearer token.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RANGE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use proreview_core::errors::{BackendError, Result};

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const REST_PREFIX: &str = "/rest/v1";

/// Rows requested per page. PostgREST-style backends commonly cap a single
/// response at 1000 rows.
const DEFAULT_PAGE_SIZE: usize = 1000;

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// HTTP client for the hosted backend.
///
/// # Example
///
/// ```ignore
/// let client = BackendClient::new("https://project.backend.example", "anon-key")?;
/// let rows: Vec<serde_json::Value> = client.get_rows("professions", "select=*").await?;
/// ```
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be used as a header value or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| BackendError::Unauthorized(format!("Invalid API key format: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| BackendError::Unauthorized(format!("Invalid API key format: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                BackendError::RequestFailed(format!("Failed to initialize HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a table read with an already-encoded query string.
    pub fn table_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}/{}", self.base_url, REST_PREFIX, table)
        } else {
            format!("{}{}/{}?{}", self.base_url, REST_PREFIX, table, query)
        }
    }

    /// Read every row of a table and decode them.
    pub async fn get_rows<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<Vec<T>> {
        self.get_pages(table, query, DEFAULT_PAGE_SIZE).await
    }

    /// Reads one `Range` page at a time until a short page comes back, so a
    /// server-side row cap cannot truncate the result.
    async fn get_pages<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
        page_size: usize,
    ) -> Result<Vec<T>> {
        let page_size = page_size.max(1);
        let mut rows = Vec::new();
        loop {
            let offset = rows.len();
            let page: Vec<T> = self
                .fetch(table, query, page_range(offset, page_size))
                .await?;
            let fetched = page.len();
            rows.extend(page);
            if fetched < page_size {
                break;
            }
            debug!("[Backend] {} page full at offset {}, reading next", table, offset);
        }
        Ok(rows)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
        range: String,
    ) -> Result<Vec<T>> {
        let url = self.table_url(table, query);
        debug!("[Backend] GET {} (range {})", url, range);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .header("Range-Unit", "items")
            .header(RANGE, range)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::RequestFailed(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(status_error(status, &body).into());
        }

        serde_json::from_str(&body).map_err(|e| {
            BackendError::InvalidResponse(format!("Failed to parse {} rows: {}", table, e)).into()
        })
    }
}

/// Inclusive item range for the page starting at `offset`.
fn page_range(offset: usize, page_size: usize) -> String {
    format!("{}-{}", offset, offset + page_size - 1)
}

/// Maps a non-2xx backend answer to an error, preferring the backend's message.
fn status_error(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message.or(err.error).or(err.hint))
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized(message),
        StatusCode::NOT_FOUND => BackendError::NotFound(message),
        _ => BackendError::RequestFailed(message),
    }
}
