use serde_json::{Map, Value};

use super::{Envelope, ParseError};
use crate::types::RawRecord;

/// Lowercase substring identifying the series container key, whose full
/// name embeds the interval (e.g. `"Time Series (5min)"`).
const TIME_SERIES_MARKER: &str = "time series";

const OPEN_KEY: &str = "1. open";
const HIGH_KEY: &str = "2. high";
const LOW_KEY: &str = "3. low";
const CLOSE_KEY: &str = "4. close";
const VOLUME_KEY: &str = "5. volume";

/// Locates the time-series object and extracts its records.
///
/// When several keys match, the lexicographically smallest one wins.
/// Entries that are not objects, or that lack one of the five OHLCV strings,
/// are dropped; a series where every entry is dropped comes back empty and
/// is rejected later by [`super::check_integrity`].
pub fn resolve_time_series(envelope: &Envelope) -> Result<Vec<RawRecord>, ParseError> {
    let matches: Vec<(&String, &Value)> = envelope
        .iter()
        .filter(|(key, _)| key.to_lowercase().contains(TIME_SERIES_MARKER))
        .collect();

    let (key, value) = matches
        .iter()
        .min_by(|a, b| a.0.cmp(b.0))
        .copied()
        .ok_or(ParseError::NoTimeSeriesFound)?;
    if matches.len() > 1 {
        tracing::warn!(
            "Found {} time series keys, using '{}'",
            matches.len(),
            key
        );
    }

    let series = value
        .as_object()
        .ok_or_else(|| ParseError::MalformedTimeSeries { key: key.clone() })?;

    let mut records = Vec::with_capacity(series.len());
    let mut skipped = 0usize;
    for (timestamp, entry) in series {
        match entry.as_object().and_then(|fields| extract_record(timestamp, fields)) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} malformed entries out of {} under '{}'",
            skipped,
            series.len(),
            key
        );
    }

    Ok(records)
}

fn extract_record(timestamp: &str, fields: &Map<String, Value>) -> Option<RawRecord> {
    let field = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_string);

    Some(RawRecord {
        timestamp: timestamp.to_string(),
        open: field(OPEN_KEY)?,
        high: field(HIGH_KEY)?,
        low: field(LOW_KEY)?,
        close: field(CLOSE_KEY)?,
        volume: field(VOLUME_KEY)?,
    })
}
