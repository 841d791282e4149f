use super::Query;

/// Query for the `OVERVIEW` function: company fundamentals for one symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewQuery {
    pub symbol: String,
}

impl OverviewQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }
}

impl Query for OverviewQuery {
    fn function(&self) -> &'static str {
        "OVERVIEW"
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![("function".to_string(), self.function().to_string())]
    }
}
