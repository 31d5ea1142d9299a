use std::sync::Arc;

use crate::{
    core::{QtClient, QtError},
    market::MarketStatus,
    profile::Profile,
};

use super::{model::StockQuote, parse::parse_quotes};

/// Quotes for the tickers of a [`Profile`], refreshed on demand.
///
/// The stock list is replaced as a whole by every successful fetch and dropped whenever
/// the ticker list changes, which forces the next refresh to go to the network even if
/// the market is closed.
///
/// # Example
///
/// ```no_run
/// # use qtquote_rs::{MarketSnapshot, Profile, QtClient, QuoteBook};
/// # #[tokio::main]
/// # async fn main() -> Result<(), qtquote_rs::QtError> {
/// let client = QtClient::default();
/// let mut market = MarketSnapshot::new(&client);
/// let mut quotes = QuoteBook::new(&client, Profile::with_tickers(["sh600519", "sz000001"])?);
///
/// market.refresh().await;
/// quotes.refresh(&market).await;
///
/// if let Some(stocks) = quotes.stocks() {
///     for stock in stocks.iter() {
///         println!("{} {} {}", stock.ticker, stock.last_trade, stock.change_pct);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuoteBook {
    client: QtClient,
    profile: Profile,
    stocks: Option<Arc<[StockQuote]>>,
    error: Option<String>,
}

impl QuoteBook {
    pub fn new(client: &QtClient, profile: Profile) -> Self {
        Self {
            client: client.clone(),
            profile,
            stocks: None,
            error: None,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Stocks from the last successful fetch; `None` before the first one and after a
    /// ticker-list change.
    pub fn stocks(&self) -> Option<Arc<[StockQuote]>> {
        self.stocks.clone()
    }

    /// Whether a refresh would hit the network: nothing fetched yet (or invalidated) or
    /// the market still open, and at least one ticker tracked.
    pub fn is_ready(&self, market: &impl MarketStatus) -> bool {
        (self.stocks.is_none() || !market.is_closed()) && !self.profile.is_empty()
    }

    /// Fetch quotes when [`QuoteBook::is_ready`], recording any failure for [`QuoteBook::ok`].
    pub async fn refresh(&mut self, market: &impl MarketStatus) -> &mut Self {
        if let Err(e) = self.try_refresh(market).await {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "quote refresh failed");
            self.error = Some(format!("error fetching stock quotes: {e}"));
        }
        self
    }

    /// Fetch quotes when [`QuoteBook::is_ready`]. Returns whether a request was made.
    ///
    /// # Errors
    ///
    /// Transport, status, body-read and GBK decoding failures. The stored stocks are
    /// kept on error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, market), err, fields(tickers = self.profile.tickers().len()))
    )]
    pub async fn try_refresh(&mut self, market: &impl MarketStatus) -> Result<bool, QtError> {
        if !self.is_ready(market) {
            #[cfg(feature = "tracing")]
            tracing::debug!("quote refresh skipped");
            return Ok(false);
        }

        let tickers = self.profile.tickers();
        let url = self.client.quotes_url(tickers)?;
        let endpoint = format!("quotes_{}", tickers.join("-"));
        let body = self.client.fetch(&url, &endpoint).await?;

        let stocks = parse_quotes(&body)?;
        self.stocks = Some(stocks.into());
        self.error = None;
        Ok(true)
    }

    /// `(true, "")` when the last refresh succeeded, `(false, message)` otherwise.
    pub fn ok(&self) -> (bool, &str) {
        match &self.error {
            None => (true, ""),
            Some(message) => (false, message.as_str()),
        }
    }

    /// Track more tickers; any addition invalidates the stored stocks.
    ///
    /// # Errors
    ///
    /// [`QtError::InvalidTicker`] from the profile.
    pub fn add_tickers<I, S>(&mut self, tickers: I) -> Result<usize, QtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = self.profile.add_tickers(tickers)?;
        if added > 0 {
            self.stocks = None;
        }
        Ok(added)
    }

    /// Stop tracking tickers; any removal invalidates the stored stocks.
    ///
    /// # Errors
    ///
    /// Propagates profile errors.
    pub fn remove_tickers<I, S>(&mut self, tickers: I) -> Result<usize, QtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = self.profile.remove_tickers(tickers)?;
        if removed > 0 {
            self.stocks = None;
        }
        Ok(removed)
    }
}
