//! Global index summary (Shanghai, Shenzhen, ChiNext, Hang Seng, Dow, S&P 500, Nasdaq).

mod api;
mod hours;
mod model;
mod parse;

pub use api::MarketSnapshot;
pub use hours::MarketHours;
pub use model::{IndexBoard, IndexSummary, MarketIndex};
pub use parse::{parse_index_record, parse_market};

/// Market-open indicator consulted by the quote book's readiness gate.
pub trait MarketStatus {
    /// `true` once the trading session is over.
    fn is_closed(&self) -> bool;
}
