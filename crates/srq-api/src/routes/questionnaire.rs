use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use serde::Serialize;

use srq_auth::caller::Caller;
use srq_core::models::question::Question;
use srq_instruments::srq20;

use crate::catalog;
use crate::error::ApiError;
use crate::state::AppState;
use crate::submission::{self, SubmissionOutcome, SubmissionRequest};

#[derive(Serialize)]
pub struct Questionnaire {
    id: &'static str,
    name: &'static str,
    questions: Vec<Question>,
}

pub async fn get_questionnaire(
    State(state): State<AppState>,
) -> Result<Json<Questionnaire>, ApiError> {
    let questions = catalog::load_questions(&state.store).await?;
    Ok(Json(Questionnaire {
        id: srq20::ID,
        name: srq20::NAME,
        questions,
    }))
}

pub async fn submit_questionnaire(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<SubmissionOutcome>, ApiError> {
    let Json(request) = payload?;
    let outcome = submission::submit(&state.store, &caller, &request.answers).await?;
    Ok(Json(outcome))
}
