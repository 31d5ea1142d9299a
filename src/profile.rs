//! The tracked ticker list.
//!
//! Persisting it is up to the caller; the type is serde-(de)serializable for that.

use serde::{Deserialize, Serialize};

use crate::core::QtError;

/// Ordered, duplicate-free list of instrument codes to quote (e.g. `sh600519`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    tickers: Vec<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from `tickers`, applying the same rules as [`Profile::add_tickers`].
    ///
    /// # Errors
    ///
    /// [`QtError::InvalidTicker`] on the first ticker that fails validation.
    pub fn with_tickers<I, S>(tickers: I) -> Result<Self, QtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut profile = Self::new();
        profile.add_tickers(tickers)?;
        Ok(profile)
    }

    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Append tickers not tracked yet, keeping their order. Returns how many were added.
    ///
    /// Tickers are trimmed; the whole call is rejected if any of them is empty or contains
    /// anything but ASCII letters, digits and `.`.
    ///
    /// # Errors
    ///
    /// [`QtError::InvalidTicker`]; the profile is unchanged in that case.
    pub fn add_tickers<I, S>(&mut self, tickers: I) -> Result<usize, QtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = tickers
            .into_iter()
            .map(|t| validate(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let before = self.tickers.len();
        for ticker in candidates {
            if !self.tickers.contains(&ticker) {
                self.tickers.push(ticker);
            }
        }
        Ok(self.tickers.len() - before)
    }

    /// Drop the given tickers. Returns how many were actually tracked.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` mirrors [`Profile::add_tickers`].
    pub fn remove_tickers<I, S>(&mut self, tickers: I) -> Result<usize, QtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: Vec<String> = tickers
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .collect();

        let before = self.tickers.len();
        self.tickers.retain(|t| !doomed.contains(t));
        Ok(before - self.tickers.len())
    }
}

fn validate(raw: &str) -> Result<String, QtError> {
    let ticker = raw.trim();
    if ticker.is_empty()
        || !ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
    {
        return Err(QtError::InvalidTicker(raw.to_string()));
    }
    Ok(ticker.to_string())
}
