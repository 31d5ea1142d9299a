//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::{QtError, net};
use constants::{DEFAULT_BASE_MARKET, DEFAULT_BASE_QUOTE, MARKET_CODES, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP handle for the quote server.
///
/// Cheap to clone: the underlying connection pool is shared. Each service keeps its own
/// clone and issues exactly one GET per refresh through [`QtClient::fetch`].
#[derive(Debug, Clone)]
pub struct QtClient {
    http: Client,
    base_market: Url,
    base_quote: Url,
}

impl Default for QtClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl QtClient {
    /// Create a new builder.
    pub fn builder() -> QtClientBuilder {
        QtClientBuilder::default()
    }

    /// URL of the index summary request: the base with `q=<eight index codes>` as its query.
    pub fn market_url(&self) -> Url {
        let mut url = self.base_market.clone();
        // set_query keeps the commas literal, which the quote server expects.
        url.set_query(Some(&format!("q={}", MARKET_CODES.join(","))));
        url
    }

    /// URL of a quote request for `tickers`: the base with `q=<comma-joined tickers>` appended to its path.
    ///
    /// # Errors
    ///
    /// Returns [`QtError::Url`] if the joined path cannot be parsed.
    pub fn quotes_url<S: AsRef<str>>(&self, tickers: &[S]) -> Result<Url, QtError> {
        let joined = tickers
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        Ok(self.base_quote.join(&format!("q={joined}"))?)
    }

    /// One-shot GET returning the full response body.
    ///
    /// `endpoint` only tags recorded fixtures (see the `test-mode` feature).
    ///
    /// # Errors
    ///
    /// - [`QtError::Http`] when the request cannot be sent,
    /// - [`QtError::Status`] on a non-2xx response,
    /// - [`QtError::Read`] when the body cannot be read to the end.
    pub async fn fetch(&self, url: &Url, endpoint: &str) -> Result<Vec<u8>, QtError> {
        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QtError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        net::get_bytes(resp, endpoint)
            .await
            .map_err(|source| QtError::Read {
                url: url.to_string(),
                source,
            })
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QtClientBuilder {
    user_agent: Option<String>,
    base_market: Option<Url>,
    base_quote: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl QtClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the index summary base (e.g., `http://qt.gtimg.cn/`).
    #[must_use]
    pub fn base_market(mut self, url: Url) -> Self {
        self.base_market = Some(url);
        self
    }

    /// Override the stock quote base (e.g., `http://qt.gtimg.cn/`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if a default URL cannot be parsed or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<QtClient, QtError> {
        let base_market = match self.base_market {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_MARKET)?,
        };
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(QtClient {
            http,
            base_market,
            base_quote,
        })
    }
}
