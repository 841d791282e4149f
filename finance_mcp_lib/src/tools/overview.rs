use alphavantage_api::types::CompanyOverview;
use alphavantage_api::{Client, Normalizer, OverviewQuery};
use serde::{Deserialize, Serialize};

use super::fetch_with_timeout;
use crate::config::Config;
use crate::error::FinanceError;
use crate::validation::validate_symbol;

/// Arguments of the `get-stock` tool.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SymbolInput {
    pub symbol: String,
}

/// Fetches the company overview for one symbol.
#[derive(Clone, Debug)]
pub struct OverviewTool {
    client: Client,
    normalizer: Normalizer,
}

impl OverviewTool {
    pub fn new(client: Client, normalizer: Normalizer) -> Self {
        Self { client, normalizer }
    }

    pub fn from_config(config: &Config) -> Result<Self, FinanceError> {
        Ok(Self::new(config.client()?, config.normalizer()?))
    }

    pub async fn get(&self, input: &SymbolInput) -> Result<CompanyOverview, FinanceError> {
        validate_symbol(&input.symbol)?;
        let symbol = input.symbol.trim().to_uppercase();
        let query = OverviewQuery::new(&symbol);

        let body = fetch_with_timeout(&self.client, self.client.get_overview(&query)).await?;
        Ok(self.normalizer.normalize_overview(&body, &symbol)?)
    }
}
