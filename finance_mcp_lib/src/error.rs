//! Error types for the library layer.

use std::fmt;

use alphavantage_api::ParseError;

/// Errors produced by the library layer, wrapping transport and
/// normalization errors and adding input validation and configuration failures.
#[derive(Debug)]
pub enum FinanceError {
    /// The HTTP exchange with the upstream failed.
    Api(alphavantage_api::Error),
    /// The upstream answered but its payload could not be normalized.
    Parse(ParseError),
    /// The ticker symbol failed validation.
    InvalidSymbol(String),
    /// A non-symbol tool argument failed validation.
    InvalidParameter { name: String, message: String },
    /// An environment setting could not be used.
    Config(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// A background task ended without producing a result.
    Internal(String),
}

impl FinanceError {
    /// Whether the caller may back off and retry the same call.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            Self::Parse(e) => e.is_retryable(),
            _ => false,
        }
    }

    pub(crate) fn invalid_parameter(name: &str, message: String) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            message,
        }
    }
}

impl fmt::Display for FinanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Parse(e) => write!(f, "{}", e),
            Self::InvalidSymbol(msg) => write!(f, "{}", msg),
            Self::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{}': {}", name, message)
            }
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for FinanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<alphavantage_api::Error> for FinanceError {
    fn from(e: alphavantage_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<ParseError> for FinanceError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
