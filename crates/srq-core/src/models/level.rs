use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordinal distress classification derived from an SRQ-20 total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DistressLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

impl DistressLevel {
    /// All levels, lowest first.
    pub const ALL: [DistressLevel; 4] = [
        DistressLevel::None,
        DistressLevel::Mild,
        DistressLevel::Moderate,
        DistressLevel::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistressLevel::None => "none",
            DistressLevel::Mild => "mild",
            DistressLevel::Moderate => "moderate",
            DistressLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for DistressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistressLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistressLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidLevel(s.to_string()))
    }
}
