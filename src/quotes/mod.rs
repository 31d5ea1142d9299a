//! Per-stock quotes for a caller-supplied ticker list.

mod api;
mod model;
mod parse;

pub use api::QuoteBook;
pub use model::StockQuote;
pub use parse::{is_advancing, parse_quotes, parse_stock_record, resolve_fallback};
