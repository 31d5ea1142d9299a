//! Positional column schemas for the quote server's records.
//!
//! The feed has no header row. Which column holds which value is a fixed contract with
//! the upstream provider, kept in exactly two tables here. A provider format change means
//! editing a table (and bumping its `version`), never touching the parsers.

use std::collections::BTreeMap;

use crate::core::QtError;

/// Sentinel for values this feed does not carry (or carries as unavailable).
pub const NOT_AVAILABLE: &str = "N/A";

/// Field names produced by the schemas below.
pub mod field {
    pub const NAME: &str = "name";
    pub const LATEST: &str = "latest";
    pub const LAST_TRADE: &str = "last_trade";
    pub const OPEN: &str = "open";
    pub const CHANGE: &str = "change";
    pub const PERCENT: &str = "percent";
    pub const CHANGE_PCT: &str = "change_pct";
    pub const HIGH: &str = "high";
    pub const LOW: &str = "low";
    pub const VOLUME: &str = "volume";
    pub const TURNOVER: &str = "turnover";
    pub const PE_RATIO: &str = "pe_ratio";
    pub const MARKET_CAP: &str = "market_cap";
}

/// A named, versioned `field name → column index` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub version: u16,
    pub columns: &'static [(&'static str, usize)],
}

/// Index records: three values per index.
pub static INDEX_SCHEMA: Schema = Schema {
    name: "index",
    version: 1,
    columns: &[
        (field::LATEST, 3),
        (field::CHANGE, 31),
        (field::PERCENT, 32),
    ],
};

/// Stock records. Columns the feed lacks (52-week range, average volume, dividend,
/// yield, delayed P/E and market cap) are not listed; they are [`NOT_AVAILABLE`].
pub static STOCK_SCHEMA: Schema = Schema {
    name: "stock",
    version: 1,
    columns: &[
        (field::NAME, 1),
        (field::LAST_TRADE, 3),
        (field::OPEN, 5),
        (field::CHANGE, 31),
        (field::CHANGE_PCT, 32),
        (field::HIGH, 33),
        (field::LOW, 34),
        (field::VOLUME, 36),
        (field::TURNOVER, 37),
        (field::PE_RATIO, 39),
        (field::MARKET_CAP, 45),
    ],
};

impl Schema {
    /// Minimum number of columns a record needs for this schema.
    pub fn width(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, index)| index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Project a record's columns onto the schema's named fields.
    ///
    /// # Errors
    ///
    /// Returns [`QtError::Parse`] when `columns` is shorter than [`Schema::width`];
    /// nothing is projected in that case.
    pub fn project(&self, code: &str, columns: &[&[u8]]) -> Result<Row, QtError> {
        let required = self.width();
        if columns.len() < required {
            return Err(QtError::Parse {
                code: code.to_string(),
                columns: columns.len(),
                required,
            });
        }

        let values = self
            .columns
            .iter()
            .map(|&(name, index)| {
                (name, String::from_utf8_lossy(columns[index]).into_owned())
            })
            .collect();

        Ok(Row { values })
    }
}

/// One projected record: field name → column text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: BTreeMap<&'static str, String>,
}

impl Row {
    /// Value of `name`, if the schema produced it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Move a value out of the row; empty when absent.
    pub fn take(&mut self, name: &str) -> String {
        self.values.remove(name).unwrap_or_default()
    }

    pub(crate) fn into_values(self) -> BTreeMap<&'static str, String> {
        self.values
    }
}
