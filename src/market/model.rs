use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::schema::field;

/// The index buckets shown in the dashboard header.
///
/// Only the first seven are routed from the feed; the rest are placeholders that
/// stay empty until a source for them exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MarketIndex {
    /// 上证指数
    Shanghai,
    /// 深证成指
    Shenzhen,
    /// 创业板指
    ChiNext,
    HongKong,
    Dow,
    Sp500,
    Nasdaq,
    Tokyo,
    London,
    Frankfurt,
    Yield,
    Oil,
    Yen,
    Euro,
    Gold,
}

impl MarketIndex {
    /// Number of buckets.
    pub const COUNT: usize = 15;

    /// Every bucket, in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Shanghai,
        Self::Shenzhen,
        Self::ChiNext,
        Self::HongKong,
        Self::Dow,
        Self::Sp500,
        Self::Nasdaq,
        Self::Tokyo,
        Self::London,
        Self::Frankfurt,
        Self::Yield,
        Self::Oil,
        Self::Yen,
        Self::Euro,
        Self::Gold,
    ];

    /// Feed code routed into this bucket, if any.
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::Shanghai => Some("sh000001"),
            Self::Shenzhen => Some("sz399001"),
            Self::ChiNext => Some("sz399006"),
            Self::HongKong => Some("hkHSI"),
            Self::Dow => Some("usDJI"),
            Self::Sp500 => Some("usINX"),
            Self::Nasdaq => Some("usIXIC"),
            _ => None,
        }
    }

    /// Exact-match routing of a feed code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|index| index.code() == Some(code))
    }
}

/// `latest` / `change` / `percent` of one index, as transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    fields: BTreeMap<&'static str, String>,
}

impl IndexSummary {
    pub(crate) fn from_fields(fields: BTreeMap<&'static str, String>) -> Self {
        Self { fields }
    }

    /// Value of a field by name (`latest`, `change` or `percent`).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.get(field::LATEST)
    }

    pub fn change(&self) -> Option<&str> {
        self.get(field::CHANGE)
    }

    pub fn percent(&self) -> Option<&str> {
        self.get(field::PERCENT)
    }

    /// `true` until the bucket has been filled by a fetch.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// All index buckets from one fetch. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexBoard {
    buckets: [IndexSummary; MarketIndex::COUNT],
}

impl Default for IndexBoard {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| IndexSummary::default()),
        }
    }
}

impl IndexBoard {
    /// Summary of `index`; empty if the last fetch did not carry it.
    pub fn index(&self, index: MarketIndex) -> &IndexSummary {
        &self.buckets[index as usize]
    }

    /// Buckets that hold data, in display order.
    pub fn populated(&self) -> impl Iterator<Item = (MarketIndex, &IndexSummary)> {
        MarketIndex::ALL
            .into_iter()
            .map(|index| (index, self.index(index)))
            .filter(|(_, summary)| !summary.is_empty())
    }

    pub(crate) fn set(&mut self, index: MarketIndex, summary: IndexSummary) {
        self.buckets[index as usize] = summary;
    }
}
