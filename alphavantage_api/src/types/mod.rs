mod meta;
pub use self::meta::MetaData;

mod intraday;
pub use self::intraday::{Bar, IntradaySeries, RawRecord};

mod overview;
pub use self::overview::CompanyOverview;
