//! Common types for EOL lifecycle data

use serde::{Deserialize, Serialize};

/// A field the endoflife.date API reports either as an ISO date string
/// or as a boolean flag (`true` = already ended, `false` = none planned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateFlag {
    Flag(bool),
    Date(String),
}

impl DateFlag {
    /// Returns the date string if this field holds one
    pub fn as_date(&self) -> Option<&str> {
        match self {
            DateFlag::Date(date) => Some(date.as_str()),
            DateFlag::Flag(_) => None,
        }
    }

    /// Returns true only for the boolean `true` sentinel
    pub fn is_true(&self) -> bool {
        matches!(self, DateFlag::Flag(true))
    }
}

impl Default for DateFlag {
    fn default() -> Self {
        DateFlag::Flag(false)
    }
}

impl From<bool> for DateFlag {
    fn from(flag: bool) -> Self {
        DateFlag::Flag(flag)
    }
}

impl From<&str> for DateFlag {
    fn from(date: &str) -> Self {
        DateFlag::Date(date.to_string())
    }
}

/// One support window for a product version line, as returned by the
/// endoflife.date API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EolCycle {
    /// Version-line identifier (e.g. "18", "22.04", "latest")
    pub cycle: String,
    /// Release date in YYYY-MM-DD format, or "unknown"
    #[serde(default = "unknown_date")]
    pub release_date: String,
    /// EOL date, `true` if already ended with no date on record,
    /// `false` if indefinite
    #[serde(default)]
    pub eol: DateFlag,
    /// Latest patch release in this line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether this line is a long-term-support / recommended channel
    #[serde(default)]
    pub lts: DateFlag,
    /// Separate "active support ends" marker, distinct from EOL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<DateFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discontinued: Option<DateFlag>,
}

fn unknown_date() -> String {
    "unknown".to_string()
}

impl EolCycle {
    /// Build a minimal cycle record; used by tests and by AI model conversion
    pub fn new(cycle: impl Into<String>, eol: impl Into<DateFlag>) -> Self {
        Self {
            cycle: cycle.into(),
            release_date: unknown_date(),
            eol: eol.into(),
            latest: None,
            link: None,
            lts: DateFlag::Flag(false),
            support: None,
            discontinued: None,
        }
    }
}

/// Persisted cache envelope: one per product key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub product: String,
    /// Epoch milliseconds at which the data was fetched
    pub timestamp: i64,
    pub data: Vec<EolCycle>,
}
