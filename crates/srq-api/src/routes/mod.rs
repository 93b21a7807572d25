use srq_auth::caller::Caller;

use crate::error::ApiError;

pub mod access;
pub mod activities;
pub mod answers;
pub mod evaluations;
pub mod health;
pub mod questionnaire;
pub mod questions;
pub mod users;

/// Resolve whose records a listing covers.
///
/// Regular callers only ever see their own records and may not name another
/// user. Staff see everyone's unless they name one.
pub(crate) fn record_owner(
    caller: &Caller,
    requested: Option<&str>,
) -> Result<Option<String>, ApiError> {
    if let Some(user_id) = requested {
        if user_id.is_empty() || user_id.contains('/') {
            return Err(ApiError::BadRequest(format!("invalid user_id: {user_id:?}")));
        }
    }

    if caller.is_staff {
        return Ok(requested.map(str::to_string));
    }
    match requested {
        Some(user_id) if user_id != caller.user_id => Err(ApiError::Forbidden(
            "you may only list your own records".to_string(),
        )),
        _ => Ok(Some(caller.user_id.clone())),
    }
}
