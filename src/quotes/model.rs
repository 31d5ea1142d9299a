use serde::Serialize;

/// One stock's quote, as text straight from the feed.
///
/// Fields the feed does not provide hold [`NOT_AVAILABLE`](crate::core::NOT_AVAILABLE).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StockQuote {
    /// Display name, decoded from GBK.
    pub name: String,
    /// Instrument code, e.g. `sh600519`.
    pub ticker: String,
    pub last_trade: String,
    /// Real-time change amount.
    pub change: String,
    /// Real-time change percent.
    pub change_pct: String,
    pub open: String,
    pub low: String,
    pub high: String,
    pub low_52: String,
    pub high_52: String,
    pub volume: String,
    pub avg_volume: String,
    pub turnover: String,
    /// P/E ratio, real-time with fallback to `pe_ratio_x`.
    pub pe_ratio: String,
    /// Delayed P/E ratio.
    pub pe_ratio_x: String,
    pub dividend: String,
    pub yield_pct: String,
    /// Market cap, real-time with fallback to `market_cap_x`.
    pub market_cap: String,
    /// Delayed market cap.
    pub market_cap_x: String,
    /// `true` unless the change carries a leading `-`; zero counts as advancing.
    pub advancing: bool,
}
