//! Response normalization: turns a raw upstream payload into typed output.
//!
//! An intraday payload flows through these stages, each of which aborts the
//! whole call on failure:
//!
//! 1. [`classify_envelope`] rejects error, rate-limit and informational envelopes.
//! 2. [`resolve_time_series`] finds the `"Time Series (<interval>)"` object and
//!    extracts well-shaped records, silently dropping malformed ones.
//! 3. [`decode_record`] turns each record into a [`crate::types::Bar`].
//! 4. [`Normalizer`] assembles the bars, optionally in parallel, and sorts them.
//! 5. [`check_integrity`] rejects series with no usable metadata or no bars.

mod assemble;
mod classify;
mod decode;
mod integrity;
mod resolve;

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{CompanyOverview, IntradaySeries, MetaData};

pub use self::assemble::{Normalizer, DEFAULT_PARALLEL_THRESHOLD};
pub use self::classify::classify_envelope;
pub use self::decode::{decode_record, TIMESTAMP_FORMAT};
pub use self::integrity::check_integrity;
pub use self::resolve::resolve_time_series;

/// The decoded top-level JSON object of one upstream response.
pub type Envelope = Map<String, Value>;

/// Key of the series-level metadata object.
pub const META_DATA_KEY: &str = "Meta Data";

/// Errors produced while normalizing an upstream response.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The body is not a JSON object.
    #[error("error parsing JSON response: {0}")]
    InvalidJson(String),
    /// `"Meta Data"` is present but not shaped as expected.
    #[error("error parsing metadata: {0}")]
    InvalidMetadata(String),
    /// The envelope carried an `"Error Message"`.
    #[error("API error: {0}")]
    UpstreamError(String),
    /// The envelope carried a `"Note"`, or an `"Information"` about quotas.
    #[error("API rate limit reached: {0}")]
    UpstreamRateLimited(String),
    /// The envelope carried some other `"Information"` advisory.
    #[error("API information: {0}")]
    UpstreamInformational(String),
    #[error("no time series data found in response")]
    NoTimeSeriesFound,
    #[error("time series data under '{key}' is not in expected format")]
    MalformedTimeSeries { key: String },
    #[error("error parsing timestamp '{timestamp}': {reason}")]
    InvalidTimestamp { timestamp: String, reason: String },
    #[error("error parsing {field} price for {timestamp}: '{value}' is not a number")]
    InvalidPrice {
        field: PriceField,
        timestamp: String,
        value: String,
    },
    #[error("error parsing volume for {timestamp}: '{value}' is not an integer")]
    InvalidVolume { timestamp: String, value: String },
    #[error("no data returned for symbol '{symbol}' - symbol may not exist or API limit reached")]
    NoDataForSymbol { symbol: String },
    #[error("invalid response: missing interval information for symbol '{symbol}'")]
    MalformedResponse { symbol: String },
    #[error("no time series data returned for symbol '{symbol}' - check if market is open or try a different time period")]
    NoTimeSeriesData { symbol: String },
}

impl ParseError {
    /// Whether retrying later could succeed. Only rate limiting qualifies;
    /// everything else needs different input or an upstream fix.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ParseError::UpstreamRateLimited(_))
    }
}

/// The four price columns of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PriceField::Open => "open",
                PriceField::High => "high",
                PriceField::Low => "low",
                PriceField::Close => "close",
            }
        )
    }
}

/// Decodes the body into an [`Envelope`]. Anything but a JSON object fails.
pub fn parse_envelope(body: &[u8]) -> Result<Envelope, ParseError> {
    serde_json::from_slice::<Envelope>(body).map_err(|e| ParseError::InvalidJson(e.to_string()))
}

/// Decodes the `"Meta Data"` object. An absent object yields empty metadata,
/// which [`check_integrity`] later reports.
pub fn decode_metadata(envelope: &Envelope) -> Result<MetaData, ParseError> {
    match envelope.get(META_DATA_KEY) {
        Some(value) => {
            MetaData::deserialize(value).map_err(|e| ParseError::InvalidMetadata(e.to_string()))
        }
        None => Ok(MetaData::default()),
    }
}

impl Normalizer {
    /// Runs classification, key resolution, decoding and sorting on an
    /// intraday payload. The result has not been integrity-checked.
    pub fn decode_intraday(&self, body: &[u8]) -> Result<IntradaySeries, ParseError> {
        let envelope = parse_envelope(body)?;
        classify_envelope(&envelope)?;
        let meta_data = decode_metadata(&envelope)?;
        let records = resolve_time_series(&envelope)?;
        let time_series = self.assemble(&records)?;
        Ok(IntradaySeries {
            meta_data,
            time_series,
        })
    }

    /// Full intraday pipeline for a payload requested for `symbol`.
    pub fn normalize_intraday(
        &self,
        body: &[u8],
        symbol: &str,
    ) -> Result<IntradaySeries, ParseError> {
        let series = self.decode_intraday(body)?;
        check_integrity(&series, symbol)?;
        tracing::debug!(
            "Normalized {} bars for {} ({})",
            series.time_series.len(),
            series.meta_data.symbol,
            series.meta_data.interval
        );
        Ok(series)
    }

    /// Normalizes an `OVERVIEW` payload. An overview without a `Symbol` field
    /// means the upstream knows nothing about `symbol`.
    pub fn normalize_overview(
        &self,
        body: &[u8],
        symbol: &str,
    ) -> Result<CompanyOverview, ParseError> {
        let envelope = parse_envelope(body)?;
        classify_envelope(&envelope)?;
        let overview = CompanyOverview::deserialize(Value::Object(envelope))
            .map_err(|e| ParseError::InvalidJson(e.to_string()))?;
        match overview.symbol.as_deref() {
            Some(s) if !s.is_empty() => Ok(overview),
            _ => Err(ParseError::NoDataForSymbol {
                symbol: symbol.to_string(),
            }),
        }
    }
}

/// Renders an envelope value as text: strings verbatim, anything else as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
