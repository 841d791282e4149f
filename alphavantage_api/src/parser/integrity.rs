use super::ParseError;
use crate::types::IntradaySeries;

/// Rejects a decoded series that carries no usable data.
///
/// Checks run in order and the first failure wins: empty metadata symbol,
/// empty interval, no bars. An empty symbol is how the upstream answers both
/// unknown tickers and exhausted quotas, and no bars can mean a closed
/// market or an unsupported range, so the errors keep that ambiguity.
pub fn check_integrity(series: &IntradaySeries, symbol: &str) -> Result<(), ParseError> {
    if series.meta_data.symbol.is_empty() {
        return Err(ParseError::NoDataForSymbol {
            symbol: symbol.to_string(),
        });
    }

    if series.meta_data.interval.is_empty() {
        return Err(ParseError::MalformedResponse {
            symbol: symbol.to_string(),
        });
    }

    if series.time_series.is_empty() {
        return Err(ParseError::NoTimeSeriesData {
            symbol: symbol.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::{Bar, MetaData};

    fn series(symbol: &str, interval: &str, bars: usize) -> IntradaySeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        IntradaySeries {
            meta_data: MetaData {
                symbol: symbol.to_string(),
                interval: interval.to_string(),
                ..MetaData::default()
            },
            time_series: (0..bars)
                .map(|i| Bar {
                    timestamp: start + chrono::Duration::minutes(i as i64),
                    open: 1.0,
                    high: 1.0,
                    low: 1.0,
                    close: 1.0,
                    volume: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn valid_series_passes() {
        assert_eq!(check_integrity(&series("IBM", "5min", 2), "IBM"), Ok(()));
    }

    #[test]
    fn empty_symbol() {
        let err = check_integrity(&series("", "5min", 2), "ZZZZ").unwrap_err();
        assert_eq!(
            err,
            ParseError::NoDataForSymbol {
                symbol: "ZZZZ".to_string()
            }
        );
        assert!(err.to_string().contains("symbol may not exist or API limit reached"));
    }

    #[test]
    fn empty_interval() {
        assert!(matches!(
            check_integrity(&series("IBM", "", 2), "IBM"),
            Err(ParseError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn no_bars() {
        let err = check_integrity(&series("IBM", "5min", 0), "IBM").unwrap_err();
        assert!(matches!(err, ParseError::NoTimeSeriesData { .. }));
        assert!(err.to_string().contains("market is open"));
    }

    #[test]
    fn symbol_check_runs_first() {
        assert!(matches!(
            check_integrity(&series("", "", 0), "IBM"),
            Err(ParseError::NoDataForSymbol { .. })
        ));
        assert!(matches!(
            check_integrity(&series("IBM", "", 0), "IBM"),
            Err(ParseError::MalformedResponse { .. })
        ));
    }
}
