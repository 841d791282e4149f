//! Library layer for the finance tool server: input validation, configuration,
//! and the per-tool glue between the `alphavantage_api` client and its
//! normalization pipeline.

pub mod config;
pub mod error;
pub mod tools;
pub mod validation;

pub use alphavantage_api;
pub use alphavantage_api::types;
pub use alphavantage_api::{Interval, OutputSize};

pub use config::Config;
pub use error::FinanceError;
pub use tools::{IntradayPriceInput, IntradayPriceTool, OverviewTool, SymbolInput};
