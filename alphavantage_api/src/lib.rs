mod client;
mod errors;
pub mod parser;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::parser::{Normalizer, ParseError};
pub use self::query::{Interval, IntradayQuery, OutputSize, OverviewQuery, Query};
