use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single yes/no answer recorded for one question of one submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub id: Uuid,
    pub user_id: String,
    pub question_id: Uuid,
    pub value: bool,
    /// The evaluation produced by the submission this answer belongs to.
    pub evaluation_id: Uuid,
    pub created_at: jiff::Timestamp,
}

/// An answer as supplied by the caller, before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerInput {
    pub question_id: Uuid,
    pub value: bool,
}
