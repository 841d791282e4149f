use alphavantage_api::{Interval, OutputSize};

use crate::error::FinanceError;

pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Length of a `YYYY-MM` month.
const MONTH_LENGTH: usize = 7;

/// Validate a ticker symbol: non-empty after trimming, at most
/// [`MAX_SYMBOL_LENGTH`] characters, letters, digits and `.` only.
///
/// The symbol is not transformed; callers uppercase it when they build a query.
pub fn validate_symbol(input: &str) -> Result<(), FinanceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::InvalidSymbol(
            "symbol cannot be empty".to_string(),
        ));
    }

    if trimmed.chars().count() > MAX_SYMBOL_LENGTH {
        return Err(FinanceError::InvalidSymbol(format!(
            "symbol '{}' appears to be invalid (too long)",
            trimmed
        )));
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
        return Err(FinanceError::InvalidSymbol(format!(
            "symbol '{}' contains invalid characters",
            trimmed
        )));
    }

    Ok(())
}

/// Validate an interval label. Exact match only, so `1MIN` is rejected.
pub fn validate_interval(input: &str) -> Result<Interval, FinanceError> {
    input.parse::<Interval>().map_err(|_| {
        FinanceError::invalid_parameter(
            "interval",
            format!(
                "invalid interval '{}'. Valid intervals are: {}",
                input,
                join(Interval::ALL.iter().map(Interval::as_str))
            ),
        )
    })
}

/// Validate an output size label (`compact` or `full`).
pub fn validate_output_size(input: &str) -> Result<OutputSize, FinanceError> {
    input.parse::<OutputSize>().map_err(|_| {
        FinanceError::invalid_parameter(
            "outputsize",
            format!(
                "invalid output size '{}'. Valid sizes are: {}",
                input,
                join(OutputSize::ALL.iter().map(OutputSize::as_str))
            ),
        )
    })
}

/// Validate the shape of a `YYYY-MM` month: seven bytes with a hyphen at
/// offset 4. Digits and calendar ranges are not checked, so `2024-13`
/// passes and is left for the upstream to reject.
pub fn validate_month(input: &str) -> Result<(), FinanceError> {
    if input.len() != MONTH_LENGTH || input.as_bytes()[4] != b'-' {
        return Err(FinanceError::invalid_parameter(
            "month",
            format!("invalid month format '{}'. Expected format: YYYY-MM", input),
        ));
    }
    Ok(())
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_message(input: &str) -> String {
        match validate_symbol(input) {
            Err(FinanceError::InvalidSymbol(msg)) => msg,
            other => panic!("expected InvalidSymbol for {:?}, got {:?}", input, other),
        }
    }

    // -- Symbol validation --

    #[test]
    fn symbol_valid() {
        for s in ["AAPL", "msft", "BRK.B", "  IBM  ", "A", "0700.HK", "ABCDEFGHIJ"] {
            assert!(validate_symbol(s).is_ok(), "{:?} should be valid", s);
        }
    }

    #[test]
    fn symbol_empty() {
        assert_eq!(symbol_message(""), "symbol cannot be empty");
    }

    #[test]
    fn symbol_whitespace_only_is_empty() {
        assert_eq!(symbol_message("   \t "), "symbol cannot be empty");
    }

    #[test]
    fn symbol_too_long() {
        assert_eq!(
            symbol_message("ABCDEFGHIJK"),
            "symbol 'ABCDEFGHIJK' appears to be invalid (too long)"
        );
    }

    #[test]
    fn symbol_length_counted_after_trim() {
        assert!(validate_symbol("  ABCDEFGHIJ  ").is_ok());
    }

    #[test]
    fn symbol_invalid_characters() {
        for s in ["BRK-B", "AB CD", "$SPY", "ÄPPL"] {
            assert!(
                symbol_message(s).contains("contains invalid characters"),
                "{:?}",
                s
            );
        }
    }

    // -- Interval validation --

    #[test]
    fn interval_valid() {
        assert_eq!(validate_interval("1min").unwrap(), Interval::OneMinute);
        assert_eq!(validate_interval("60min").unwrap(), Interval::SixtyMinutes);
    }

    #[test]
    fn interval_invalid() {
        for s in ["2min", "1MIN", "", "daily"] {
            match validate_interval(s) {
                Err(FinanceError::InvalidParameter { name, message }) => {
                    assert_eq!(name, "interval");
                    assert!(message.contains("1min, 5min, 15min, 30min, 60min"));
                }
                other => panic!("expected InvalidParameter for {:?}, got {:?}", s, other),
            }
        }
    }

    // -- Output size validation --

    #[test]
    fn output_size_valid() {
        assert_eq!(validate_output_size("compact").unwrap(), OutputSize::Compact);
        assert_eq!(validate_output_size("full").unwrap(), OutputSize::Full);
    }

    #[test]
    fn output_size_invalid() {
        assert!(matches!(
            validate_output_size("medium"),
            Err(FinanceError::InvalidParameter { ref name, .. }) if name == "outputsize"
        ));
    }

    // -- Month validation --

    #[test]
    fn month_valid() {
        assert!(validate_month("2024-01").is_ok());
    }

    #[test]
    fn month_shape_only() {
        assert!(validate_month("2024-13").is_ok());
        assert!(validate_month("abcd-ef").is_ok());
    }

    #[test]
    fn month_invalid() {
        for s in ["2024-1", "2024/01", "202401", "2024-011", ""] {
            assert!(
                matches!(
                    validate_month(s),
                    Err(FinanceError::InvalidParameter { ref name, .. }) if name == "month"
                ),
                "{:?}",
                s
            );
        }
    }
}
