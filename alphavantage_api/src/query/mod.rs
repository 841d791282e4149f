mod common;
pub use self::common::Query;

mod intraday;
pub use self::intraday::{Interval, IntradayQuery, OutputSize};

mod overview;
pub use self::overview::OverviewQuery;
