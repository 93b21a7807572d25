use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format '{0}', use \"json\" or \"csv\"")]
    BadFormat(String),

    #[error("CSV generation failed: {0}")]
    Csv(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e.to_string())
    }
}
