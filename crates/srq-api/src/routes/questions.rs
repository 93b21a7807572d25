use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use srq_core::keys;
use srq_core::models::question::{Question, QuestionCategory};
use srq_storage::state::load_json_opt;

use crate::catalog;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuestionFilter {
    category: Option<String>,
}

pub async fn list_questions(
    State(state): State<AppState>,
    filter: Result<Query<QuestionFilter>, QueryRejection>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let Query(filter) = filter?;
    let category = filter
        .category
        .as_deref()
        .map(str::parse::<QuestionCategory>)
        .transpose()?;

    let mut questions = catalog::load_questions(&state.store).await?;
    if let Some(category) = category {
        questions.retain(|q| q.category == category);
    }
    Ok(Json(questions))
}

pub async fn get_question(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path(id) = id?;
    load_json_opt(&state.store, &keys::question(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("question not found: {id}")))
}
