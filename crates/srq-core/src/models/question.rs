use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One item of the screening questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    /// Display position, 1-based and unique within the catalog.
    pub order: u8,
    pub text: String,
    pub category: QuestionCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionCategory {
    Physical,
    PsychoEmotional,
    Other,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Physical => "physical",
            QuestionCategory::PsychoEmotional => "psycho_emotional",
            QuestionCategory::Other => "other",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "physical" => Ok(QuestionCategory::Physical),
            "psycho_emotional" => Ok(QuestionCategory::PsychoEmotional),
            "other" => Ok(QuestionCategory::Other),
            _ => Err(CoreError::InvalidCategory(s.to_string())),
        }
    }
}
