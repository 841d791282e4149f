use chrono::{NaiveDateTime, Timelike};

use super::{ParseError, PriceField};
use crate::types::{Bar, RawRecord};

/// Layout of a series timestamp: 24-hour, zero-padded, no zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Byte layout of a timestamp in [`TIMESTAMP_FORMAT`]; `d` is an ASCII digit.
const TIMESTAMP_SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

/// Decodes one raw record into a [`Bar`].
///
/// Only lexical shape is checked; values are not range-checked, so a
/// negative price passes through unchanged.
pub fn decode_record(raw: &RawRecord) -> Result<Bar, ParseError> {
    let timestamp = parse_timestamp(&raw.timestamp)?;
    let open = parse_price(PriceField::Open, &raw.open, &raw.timestamp)?;
    let high = parse_price(PriceField::High, &raw.high, &raw.timestamp)?;
    let low = parse_price(PriceField::Low, &raw.low, &raw.timestamp)?;
    let close = parse_price(PriceField::Close, &raw.close, &raw.timestamp)?;
    let volume = raw
        .volume
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidVolume {
            timestamp: raw.timestamp.clone(),
            value: raw.volume.clone(),
        })?;

    Ok(Bar {
        timestamp,
        open,
        high,
        low,
        close,
        volume,
    })
}

fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime, ParseError> {
    let invalid = |reason: String| ParseError::InvalidTimestamp {
        timestamp: timestamp.to_string(),
        reason,
    };

    // chrono skips padding, takes one-digit fields and signed years
    if !has_timestamp_shape(timestamp) {
        return Err(invalid(format!(
            "expected zero-padded {}",
            TIMESTAMP_FORMAT
        )));
    }
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(invalid("leap seconds are not accepted".to_string()));
    }
    Ok(parsed)
}

fn has_timestamp_shape(timestamp: &str) -> bool {
    let bytes = timestamp.as_bytes();
    bytes.len() == TIMESTAMP_SHAPE.len()
        && bytes
            .iter()
            .zip(TIMESTAMP_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'd' => b.is_ascii_digit(),
                sep => b == sep,
            })
}

fn parse_price(field: PriceField, value: &str, timestamp: &str) -> Result<f64, ParseError> {
    // NaN and infinities parse but have no JSON number form
    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ParseError::InvalidPrice {
            field,
            timestamp: timestamp.to_string(),
            value: value.to_string(),
        })
}
