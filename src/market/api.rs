use chrono::Utc;
use std::sync::Arc;

use crate::core::{QtClient, QtError};

use super::{MarketStatus, hours::MarketHours, model::IndexBoard, parse::parse_market};

/// Summary of the tracked global indices, refreshed on demand.
///
/// Each successful refresh swaps in a freshly built [`IndexBoard`]; readers holding an
/// earlier `Arc` keep seeing the board they took. A failed refresh leaves the board as it
/// was and records the failure for [`MarketSnapshot::ok`].
///
/// # Example
///
/// ```no_run
/// # use qtquote_rs::{MarketIndex, MarketSnapshot, QtClient};
/// # #[tokio::main]
/// # async fn main() {
/// let client = QtClient::default();
/// let mut market = MarketSnapshot::new(&client);
///
/// market.refresh().await;
/// match market.ok() {
///     (true, _) => println!("Dow: {:?}", market.board().index(MarketIndex::Dow).latest()),
///     (false, message) => eprintln!("{message}"),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    client: QtClient,
    hours: MarketHours,
    board: Arc<IndexBoard>,
    closed: bool,
    error: Option<String>,
}

impl MarketSnapshot {
    /// Create a snapshot with every bucket empty. Nothing is fetched yet.
    pub fn new(client: &QtClient) -> Self {
        Self {
            client: client.clone(),
            hours: MarketHours::default(),
            board: Arc::new(IndexBoard::default()),
            closed: false,
            error: None,
        }
    }

    /// Select how the market-open flag is derived.
    #[must_use]
    pub const fn hours(mut self, hours: MarketHours) -> Self {
        self.hours = hours;
        self
    }

    /// Fetch and parse the index summary, recording any failure for [`MarketSnapshot::ok`].
    pub async fn refresh(&mut self) -> &mut Self {
        if let Err(e) = self.try_refresh().await {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "market refresh failed");
            self.error = Some(format!("error fetching market data: {e}"));
        }
        self
    }

    /// Fetch and parse the index summary.
    ///
    /// # Errors
    ///
    /// Any transport, status or body-read failure. The current board is kept on error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn try_refresh(&mut self) -> Result<(), QtError> {
        let url = self.client.market_url();
        let body = self.client.fetch(&url, "market").await?;

        self.board = Arc::new(parse_market(&body));
        self.closed = !self.hours.is_open_at(Utc::now());
        self.error = None;
        Ok(())
    }

    /// `(true, "")` when the last refresh succeeded, `(false, message)` otherwise.
    pub fn ok(&self) -> (bool, &str) {
        match &self.error {
            None => (true, ""),
            Some(message) => (false, message.as_str()),
        }
    }

    /// The board built by the last successful refresh.
    pub fn board(&self) -> Arc<IndexBoard> {
        Arc::clone(&self.board)
    }
}

impl MarketStatus for MarketSnapshot {
    fn is_closed(&self) -> bool {
        self.closed
    }
}
