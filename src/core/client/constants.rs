//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Quote server base for the index summary (the code list goes into the query).
pub(crate) const DEFAULT_BASE_MARKET: &str = "http://qt.gtimg.cn/";

/// Quote server base for stock quotes (`q=<tickers>` is appended to the path).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "http://qt.gtimg.cn/";

/// Index codes requested by the market summary, in request order.
pub(crate) const MARKET_CODES: [&str; 8] = [
    "sh000001", "sz399001", "sz399006", "hkHSI", "hkHSCEI", "usDJI", "usINX", "usIXIC",
];
