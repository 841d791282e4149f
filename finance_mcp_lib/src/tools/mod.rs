//! Per-tool glue: validate arguments, fetch, normalize.

mod intraday;
mod overview;

pub use self::intraday::{IntradayPriceInput, IntradayPriceTool};
pub use self::overview::{OverviewTool, SymbolInput};

use std::future::Future;

use alphavantage_api::Client;

use crate::error::FinanceError;

/// Bounds the whole fetch, including reading the body, by the client's timeout.
async fn fetch_with_timeout<F>(client: &Client, fetch: F) -> Result<Vec<u8>, FinanceError>
where
    F: Future<Output = Result<Vec<u8>, alphavantage_api::Error>>,
{
    let limit = client.timeout();
    match tokio::time::timeout(limit, fetch).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            tracing::warn!("Upstream call exceeded {:?}", limit);
            Err(alphavantage_api::Error::Timeout(limit.as_secs()).into())
        }
    }
}
