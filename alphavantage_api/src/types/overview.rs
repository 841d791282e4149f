//! Company fundamentals returned by the `OVERVIEW` function.

use serde::{Deserialize, Serialize};

/// Company overview record.
///
/// The upstream sends every value as text and omits fields it has no data
/// for, so all fields are optional strings and absent fields are skipped on
/// output. Monetary values are in the listing currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyOverview {
    // Identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// SEC Central Index Key.
    #[serde(rename = "CIK", skip_serializing_if = "Option::is_none")]
    pub cik: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_quarter: Option<String>,

    // Market data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_capitalization: Option<String>,
    #[serde(rename = "EBITDA", skip_serializing_if = "Option::is_none")]
    pub ebitda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_outstanding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_per_share: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<String>,
    #[serde(rename = "EPS", skip_serializing_if = "Option::is_none")]
    pub eps: Option<String>,
    #[serde(rename = "RevenuePerShareTTM", skip_serializing_if = "Option::is_none")]
    pub revenue_per_share_ttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<String>,
    #[serde(rename = "OperatingMarginTTM", skip_serializing_if = "Option::is_none")]
    pub operating_margin_ttm: Option<String>,
    #[serde(rename = "ReturnOnAssetsTTM", skip_serializing_if = "Option::is_none")]
    pub return_on_assets_ttm: Option<String>,
    #[serde(rename = "ReturnOnEquityTTM", skip_serializing_if = "Option::is_none")]
    pub return_on_equity_ttm: Option<String>,
    #[serde(rename = "RevenueTTM", skip_serializing_if = "Option::is_none")]
    pub revenue_ttm: Option<String>,
    #[serde(rename = "GrossProfitTTM", skip_serializing_if = "Option::is_none")]
    pub gross_profit_ttm: Option<String>,
    #[serde(rename = "DilutedEPSTTM", skip_serializing_if = "Option::is_none")]
    pub diluted_eps_ttm: Option<String>,
    #[serde(rename = "QuarterlyEarningsGrowthYOY", skip_serializing_if = "Option::is_none")]
    pub quarterly_earnings_growth_yoy: Option<String>,
    #[serde(rename = "QuarterlyRevenueGrowthYOY", skip_serializing_if = "Option::is_none")]
    pub quarterly_revenue_growth_yoy: Option<String>,

    // Ratios
    #[serde(rename = "PERatio", skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<String>,
    #[serde(rename = "PEGRatio", skip_serializing_if = "Option::is_none")]
    pub peg_ratio: Option<String>,
    #[serde(rename = "ForwardPE", skip_serializing_if = "Option::is_none")]
    pub forward_pe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_book_ratio: Option<String>,
    #[serde(rename = "PriceToSalesRatioTTM", skip_serializing_if = "Option::is_none")]
    pub price_to_sales_ratio_ttm: Option<String>,
    #[serde(rename = "EVToRevenue", skip_serializing_if = "Option::is_none")]
    pub ev_to_revenue: Option<String>,
    #[serde(rename = "EVToEBITDA", skip_serializing_if = "Option::is_none")]
    pub ev_to_ebitda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst_target_price: Option<String>,

    // Trading
    #[serde(rename = "52WeekHigh", skip_serializing_if = "Option::is_none")]
    pub week_52_high: Option<String>,
    #[serde(rename = "52WeekLow", skip_serializing_if = "Option::is_none")]
    pub week_52_low: Option<String>,
    #[serde(rename = "50DayMovingAverage", skip_serializing_if = "Option::is_none")]
    pub day_50_moving_average: Option<String>,
    #[serde(rename = "200DayMovingAverage", skip_serializing_if = "Option::is_none")]
    pub day_200_moving_average: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex_dividend_date: Option<String>,
}
