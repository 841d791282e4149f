use alphavantage_api::types::IntradaySeries;
use alphavantage_api::{Client, IntradayQuery, Normalizer};
use serde::{Deserialize, Serialize};

use super::fetch_with_timeout;
use crate::config::Config;
use crate::error::FinanceError;
use crate::validation::{validate_interval, validate_month, validate_output_size, validate_symbol};

/// Arguments of the `get-intraday-price-stock` tool.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct IntradayPriceInput {
    pub symbol: String,
    pub interval: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_hours: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputsize: Option<String>,
}

/// Fetches and normalizes `TIME_SERIES_INTRADAY` data.
#[derive(Clone, Debug)]
pub struct IntradayPriceTool {
    client: Client,
    normalizer: Normalizer,
}

impl IntradayPriceTool {
    pub fn new(client: Client, normalizer: Normalizer) -> Self {
        Self { client, normalizer }
    }

    pub fn from_config(config: &Config) -> Result<Self, FinanceError> {
        Ok(Self::new(config.client()?, config.normalizer()?))
    }

    /// Validates the arguments into a query without touching the network.
    pub fn build_query(input: &IntradayPriceInput) -> Result<IntradayQuery, FinanceError> {
        validate_symbol(&input.symbol)?;
        let interval = validate_interval(&input.interval)?;

        let symbol = input.symbol.trim().to_uppercase();
        let mut query = IntradayQuery::new(&symbol, interval);
        if let Some(adjusted) = input.adjusted {
            query = query.with_adjusted(adjusted);
        }
        if let Some(extended_hours) = input.extended_hours {
            query = query.with_extended_hours(extended_hours);
        }
        if let Some(ref month) = input.month {
            validate_month(month)?;
            query = query.with_month(month);
        }
        if let Some(ref outputsize) = input.outputsize {
            query = query.with_output_size(validate_output_size(outputsize)?);
        }
        Ok(query)
    }

    /// Returns the integrity-checked series, bars ascending by timestamp.
    pub async fn get(&self, input: &IntradayPriceInput) -> Result<IntradaySeries, FinanceError> {
        let query = Self::build_query(input)?;
        let symbol = query.symbol.clone();

        let body = fetch_with_timeout(&self.client, self.client.get_intraday(&query)).await?;
        tracing::debug!("Received {} bytes for {}", body.len(), symbol);

        let normalizer = self.normalizer.clone();
        let series = tokio::task::spawn_blocking(move || {
            normalizer.normalize_intraday(&body, &symbol)
        })
        .await
        .map_err(|e| FinanceError::Internal(format!("normalization task failed: {}", e)))??;

        Ok(series)
    }
}
