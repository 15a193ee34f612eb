//! Shared newtypes and the fixed timeframe table used across domain modules.
//!
//! `AssetId` is serialization-transparent: it serializes/deserializes exactly as
//! the string the upstream API sends, so wire types can use it directly.

pub mod fmt;

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Upstream asset identifier (e.g. `"bitcoin"`, `"wrapped-steth"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Sampling granularity of a historical price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Lookback window and sampling interval for one timeframe label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeSpec {
    /// Lookback window in days, string-encoded as the upstream expects it.
    pub days: &'static str,
    pub interval: Interval,
}

/// User-facing chart timeframe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[default]
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    /// Every timeframe, in selector order.
    pub const ALL: [Timeframe; 5] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::OneYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::OneYear => "1Y",
        }
    }

    pub fn spec(&self) -> TimeframeSpec {
        let (days, interval) = match self {
            Self::OneDay => ("1", Interval::Hourly),
            Self::OneWeek => ("7", Interval::Daily),
            Self::OneMonth => ("30", Interval::Daily),
            Self::ThreeMonths => ("90", Interval::Daily),
            Self::OneYear => ("365", Interval::Daily),
        };
        TimeframeSpec { days, interval }
    }

    /// Look up a label. Unknown labels are an error, never a default.
    pub fn from_label(label: &str) -> Result<Self, SdkError> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.label() == label)
            .ok_or_else(|| SdkError::UnknownTimeframe(label.to_string()))
    }
}

impl FromStr for Timeframe {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
