use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::MetaData;

/// One timestamp's OHLCV values exactly as received, before numeric decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// `YYYY-MM-DD HH:MM:SS` in the zone named by [`MetaData::time_zone`].
    pub timestamp: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// A decoded OHLCV bar.
///
/// The timestamp carries no zone; it is wall-clock time in the series' time
/// zone, which is not applied numerically.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Metadata plus bars sorted ascending by timestamp.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IntradaySeries {
    pub meta_data: MetaData,
    pub time_series: Vec<Bar>,
}

impl IntradaySeries {
    /// The most recent bar, if any.
    pub fn latest(&self) -> Option<&Bar> {
        self.time_series.last()
    }
}
