//! Tool registry: names, descriptions and input schemas, plus dispatch.

use finance_mcp_lib::{
    Config, FinanceError, IntradayPriceInput, IntradayPriceTool, OverviewTool, SymbolInput,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

pub const GET_STOCK: &str = "get-stock";
pub const GET_INTRADAY_PRICE_STOCK: &str = "get-intraday-price-stock";

const GET_STOCK_SCHEMA: &str = include_str!("../../schema/get-stock.input.schema.json");
const GET_INTRADAY_SCHEMA: &str =
    include_str!("../../schema/get-intraday-price-stock.input.schema.json");

/// Why a `tools/call` could not produce a result.
#[derive(Debug)]
pub enum CallError {
    /// No tool by that name; a protocol-level error.
    UnknownTool(String),
    /// The arguments do not deserialize into the tool's input; a protocol-level error.
    InvalidArguments(String),
    /// The tool ran and failed; reported to the caller as a tool result.
    Tool(FinanceError),
}

#[derive(Clone, Debug)]
pub struct Tools {
    intraday: IntradayPriceTool,
    overview: OverviewTool,
}

impl Tools {
    pub fn new(intraday: IntradayPriceTool, overview: OverviewTool) -> Self {
        Self { intraday, overview }
    }

    pub fn from_config(config: &Config) -> Result<Self, FinanceError> {
        let client = config.client()?;
        let normalizer = config.normalizer()?;
        Ok(Self::new(
            IntradayPriceTool::new(client.clone(), normalizer.clone()),
            OverviewTool::new(client, normalizer),
        ))
    }

    /// Descriptors for `tools/list`.
    pub fn list(&self) -> Result<Value, FinanceError> {
        Ok(json!({
            "tools": [
                {
                    "name": GET_STOCK,
                    "description": "Get company overview and fundamentals for a stock symbol",
                    "inputSchema": serde_json::from_str::<Value>(GET_STOCK_SCHEMA)?,
                },
                {
                    "name": GET_INTRADAY_PRICE_STOCK,
                    "description": "Get intraday OHLCV prices for a stock symbol, oldest bar first",
                    "inputSchema": serde_json::from_str::<Value>(GET_INTRADAY_SCHEMA)?,
                },
            ]
        }))
    }

    /// Runs the named tool and returns its structured output.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<Value, CallError> {
        match name {
            GET_STOCK => {
                let input: SymbolInput = arguments_as(arguments)?;
                let overview = self.overview.get(&input).await.map_err(CallError::Tool)?;
                to_value(&overview)
            }
            GET_INTRADAY_PRICE_STOCK => {
                let input: IntradayPriceInput = arguments_as(arguments)?;
                let series = self.intraday.get(&input).await.map_err(CallError::Tool)?;
                tracing::info!(
                    "{} returned {} bars for {}",
                    GET_INTRADAY_PRICE_STOCK,
                    series.time_series.len(),
                    series.meta_data.symbol
                );
                to_value(&series)
            }
            other => Err(CallError::UnknownTool(other.to_string())),
        }
    }
}

fn arguments_as<T: DeserializeOwned>(arguments: Value) -> Result<T, CallError> {
    serde_json::from_value(arguments).map_err(|e| CallError::InvalidArguments(e.to_string()))
}

fn to_value<T: serde::Serialize>(output: &T) -> Result<Value, CallError> {
    serde_json::to_value(output).map_err(|e| CallError::Tool(e.into()))
}
