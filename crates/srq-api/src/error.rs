use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use srq_instruments::error::ScoringError;

use crate::submission::SubmissionError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// A client error with a machine-readable reason code.
    Rejected { reason: &'static str, message: String },
    Unauthorized(String),
    Forbidden(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, reason) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Rejected { reason, message } => {
                (StatusCode::BAD_REQUEST, message, Some(reason))
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error: message, reason })).into_response()
    }
}

impl From<srq_storage::error::StorageError> for ApiError {
    fn from(e: srq_storage::error::StorageError) -> Self {
        match e {
            srq_storage::error::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("object not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<srq_audit::error::AuditError> for ApiError {
    fn from(e: srq_audit::error::AuditError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<srq_auth::error::AuthError> for ApiError {
    fn from(e: srq_auth::error::AuthError) -> Self {
        ApiError::Unauthorized(e.to_string())
    }
}

impl From<srq_core::error::CoreError> for ApiError {
    fn from(e: srq_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<srq_export::error::ExportError> for ApiError {
    fn from(e: srq_export::error::ExportError) -> Self {
        match e {
            srq_export::error::ExportError::BadFormat(_) => ApiError::Rejected {
                reason: "bad_format",
                message: e.to_string(),
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::Scoring(ScoringError::UnknownQuestion(_)) => ApiError::Rejected {
                reason: "unknown_question",
                message: e.to_string(),
            },
            SubmissionError::Scoring(ScoringError::DuplicateQuestion(_)) => ApiError::Rejected {
                reason: "duplicate_question",
                message: e.to_string(),
            },
            SubmissionError::Scoring(ScoringError::InvalidScore(_)) => {
                ApiError::Internal(e.to_string())
            }
            SubmissionError::Storage(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Rejected {
            reason: "invalid_request",
            message: e.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::Rejected {
            reason: "invalid_request",
            message: e.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Rejected {
            reason: "invalid_request",
            message: e.body_text(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

/// Reject callers without staff privileges.
pub fn require_staff(caller: &srq_auth::caller::Caller) -> Result<(), ApiError> {
    if caller.is_staff {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "you do not have permission to access this resource".to_string(),
        ))
    }
}
