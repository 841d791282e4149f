//! HTTP client for the Alpha Vantage query API.

use std::time::Duration;

use url::Url;

use crate::{
    query::{IntradayQuery, OverviewQuery, Query},
    Error,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on a response body. Full-range intraday series run to a few MB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// HTTP client for the Alpha Vantage query API.
///
/// Holds one `reqwest::Client` that is reused across requests. The client
/// only moves bytes; interpreting the body is the parser's job, since the
/// upstream reports most failures inside a 200 response.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://www.alphavantage.co`.
    base_api_url: String,
    api_key: String,
    timeout: Duration,
    max_body_bytes: usize,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("timeout", &self.timeout)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url("https://www.alphavantage.co", api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("finance-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the largest response body accepted before giving up.
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/query", &self.base_api_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }

    /// Sends the query and returns the raw response body.
    pub async fn fetch(&self, query: &impl Query) -> Result<Vec<u8>, Error> {
        let url = self.get_url(query)?;
        tracing::debug!(
            "GET {} for {}",
            query.function(),
            query.symbol().trim().to_uppercase()
        );

        let resp = self
            .http
            .get(url)
            .timeout(self.timeout)
            .header("accept", "application/json")
            .header("cache-control", "no-cache")
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidApiKey);
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Forbidden);
        }

        let body = self.read_body(resp).await?;
        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Reads the body, failing as soon as it is known to exceed the cap.
    async fn read_body(&self, mut resp: reqwest::Response) -> Result<Vec<u8>, Error> {
        let limit = self.max_body_bytes;
        let too_large = || {
            tracing::error!("Response body exceeds {} bytes", limit);
            Error::ResponseTooLarge { limit }
        };

        if let Some(len) = resp.content_length() {
            if len > limit as u64 {
                return Err(too_large());
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(|e| self.map_send_error(e))? {
            if body.len() + chunk.len() > limit {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    /// Fetches the raw `TIME_SERIES_INTRADAY` payload.
    pub async fn get_intraday(&self, query: &IntradayQuery) -> Result<Vec<u8>, Error> {
        self.fetch(query).await
    }

    /// Fetches the raw `OVERVIEW` payload.
    pub async fn get_overview(&self, query: &OverviewQuery) -> Result<Vec<u8>, Error> {
        self.fetch(query).await
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            tracing::error!("Request timed out after {:?}", self.timeout);
            Error::Timeout(self.timeout.as_secs())
        } else {
            tracing::error!("Failed to get resource: {}", e.without_url());
            Error::RequestFailed
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
