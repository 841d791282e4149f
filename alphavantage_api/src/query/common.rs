//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all query builders. Provides the ordered parameter
/// list and URL serialization.
pub trait Query {
    /// The upstream function identifier (e.g. `TIME_SERIES_INTRADAY`).
    fn function(&self) -> &'static str;

    /// The ticker symbol as given by the caller.
    fn symbol(&self) -> &str;

    /// Returns the ordered `(name, value)` pairs for this query: the function
    /// identifier first, then the mandatory and present optional parameters.
    /// The symbol and API key are not included.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters and the normalized symbol to the given
    /// URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (name, value) in self.to_query_pairs() {
            if name == "function" {
                url.query_pairs_mut()
                    .append_pair(&name, &value.to_uppercase());
            } else {
                url.query_pairs_mut().append_pair(&name, &value);
            }
        }
        url.query_pairs_mut()
            .append_pair("symbol", &self.symbol().trim().to_uppercase());
        url
    }
}
