use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::level::DistressLevel;

/// The scored outcome of one questionnaire submission. Immutable once stored.
///
/// `level` is always derived from `score`; build one with
/// `srq_instruments::scoring::evaluate` rather than by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub user_id: String,
    pub score: u8,
    pub level: DistressLevel,
    pub created_at: jiff::Timestamp,
}
