//! qtquote-rs: index summaries and stock quotes from the `qt.gtimg.cn` quote server.
//!
//! Two services share one pipeline (GET → sanitize → (GBK decode) → split records →
//! extract code → project columns):
//! - [`MarketSnapshot`] keeps the latest summary of a fixed set of global indices.
//! - [`QuoteBook`] keeps quotes for the tickers of a [`Profile`], and skips the network
//!   once it has data and the [`MarketStatus`] reports the session as closed.
//!
//! Both are polled by the caller; neither spawns anything.

pub mod core;
pub mod market;
pub mod profile;
pub mod quotes;

pub use crate::core::{QtClient, QtClientBuilder, QtError};
pub use market::{IndexBoard, IndexSummary, MarketHours, MarketIndex, MarketSnapshot, MarketStatus};
pub use profile::Profile;
pub use quotes::{QuoteBook, StockQuote};
