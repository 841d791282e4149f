//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// These cover the transport only. A 200 response whose body signals an
/// upstream error is reported by the parser as a [`crate::ParseError`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
    /// The API answered with HTTP 429.
    #[error("API rate limit exceeded (HTTP 429)")]
    RateLimited,
    /// The API rejected the key (HTTP 401).
    #[error("Invalid API key (HTTP 401)")]
    InvalidApiKey,
    /// The key lacks permission for this function (HTTP 403).
    #[error("Access forbidden, check API permissions (HTTP 403)")]
    Forbidden,
    /// The response body was larger than the client accepts.
    #[error("Response body exceeds {limit} bytes")]
    ResponseTooLarge { limit: usize },
    /// The API returned another non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// Whether retrying the same request later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RequestFailed | Error::Timeout(_) | Error::RateLimited => true,
            Error::HttpStatus { status, .. } => *status >= 500,
            Error::InvalidApiKey | Error::Forbidden | Error::ResponseTooLarge { .. } => false,
        }
    }
}
