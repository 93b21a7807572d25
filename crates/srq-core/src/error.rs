use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid distress level: {0}")]
    InvalidLevel(String),

    #[error("invalid question category: {0}")]
    InvalidCategory(String),
}
