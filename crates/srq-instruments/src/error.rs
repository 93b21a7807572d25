use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("score {0} is outside the valid range [0, 20]")]
    InvalidScore(u32),

    #[error("question {0} does not exist")]
    UnknownQuestion(Uuid),

    #[error("question {0} was answered more than once")]
    DuplicateQuestion(Uuid),
}
