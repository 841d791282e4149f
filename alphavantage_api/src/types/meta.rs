use serde::{Deserialize, Serialize};

/// Series-level metadata, the `"Meta Data"` object of a time-series response.
///
/// Every field is text on the wire. Missing fields decode as empty strings so
/// that integrity checks can tell "absent" apart from a decode failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetaData {
    #[serde(rename = "1. Information")]
    pub information: String,
    #[serde(rename = "2. Symbol")]
    pub symbol: String,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,
    #[serde(rename = "4. Interval")]
    pub interval: String,
    #[serde(rename = "5. Output Size")]
    pub output_size: String,
    #[serde(rename = "6. Time Zone")]
    pub time_zone: String,
}
