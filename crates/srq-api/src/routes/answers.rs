use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use srq_auth::caller::Caller;
use srq_core::models::answer::Answer;

use crate::error::ApiError;
use crate::records;
use crate::routes::record_owner;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnswerFilter {
    user_id: Option<String>,
    question_id: Option<Uuid>,
}

/// The caller's answers, newest first. Staff see everyone's, optionally
/// narrowed to one user.
pub async fn list_answers(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    filter: Result<Query<AnswerFilter>, QueryRejection>,
) -> Result<Json<Vec<Answer>>, ApiError> {
    let Query(filter) = filter?;
    let owner = record_owner(&caller, filter.user_id.as_deref())?;

    let mut answers = records::load_answers(&state.store, owner.as_deref()).await?;
    if let Some(question_id) = filter.question_id {
        answers.retain(|a| a.question_id == question_id);
    }
    Ok(Json(answers))
}
