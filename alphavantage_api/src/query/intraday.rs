use std::str::FromStr;

use super::Query;

/// Query for the `TIME_SERIES_INTRADAY` function.
///
/// Optional fields are only serialized when set. Flags serialize as the
/// literal strings `true`/`false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntradayQuery {
    pub symbol: String,
    pub interval: Interval,
    pub adjusted: Option<bool>,
    pub extended_hours: Option<bool>,
    /// Reporting month in `YYYY-MM` form.
    pub month: Option<String>,
    pub output_size: Option<OutputSize>,
}

impl IntradayQuery {
    pub fn new(symbol: &str, interval: Interval) -> Self {
        Self {
            symbol: symbol.to_string(),
            interval,
            adjusted: None,
            extended_hours: None,
            month: None,
            output_size: None,
        }
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }

    pub fn with_extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = Some(extended_hours);
        self
    }

    pub fn with_month(mut self, month: &str) -> Self {
        self.month = Some(month.to_string());
        self
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = Some(output_size);
        self
    }
}

impl Query for IntradayQuery {
    fn function(&self) -> &'static str {
        "TIME_SERIES_INTRADAY"
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("function".to_string(), self.function().to_string()),
            ("interval".to_string(), self.interval.to_string()),
        ];

        if let Some(adjusted) = self.adjusted {
            params.push(("adjusted".to_string(), adjusted.to_string()));
        }
        if let Some(extended_hours) = self.extended_hours {
            params.push(("extended_hours".to_string(), extended_hours.to_string()));
        }
        if let Some(ref month) = self.month {
            params.push(("month".to_string(), month.clone()));
        }
        if let Some(output_size) = self.output_size {
            params.push(("outputsize".to_string(), output_size.to_string()));
        }

        params
    }
}

/// Sampling granularity of an intraday series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    SixtyMinutes,
}

impl Interval {
    pub const ALL: [Interval; 5] = [
        Interval::OneMinute,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::ThirtyMinutes,
        Interval::SixtyMinutes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1min",
            Interval::FiveMinutes => "5min",
            Interval::FifteenMinutes => "15min",
            Interval::ThirtyMinutes => "30min",
            Interval::SixtyMinutes => "60min",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or(())
    }
}

/// How many data points the upstream returns: the latest 100, or the full range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputSize {
    #[default]
    Compact,
    Full,
}

impl OutputSize {
    pub const ALL: [OutputSize; 2] = [OutputSize::Compact, OutputSize::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

impl std::fmt::Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            _ => Err(()),
        }
    }
}
