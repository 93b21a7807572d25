use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use srq_core::models::activity::SuggestedActivity;
use srq_core::models::level::DistressLevel;
use srq_instruments::recommend::suggestions_for;

use crate::catalog;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ActivityFilter {
    level: Option<String>,
}

pub async fn list_activities(
    State(state): State<AppState>,
    filter: Result<Query<ActivityFilter>, QueryRejection>,
) -> Result<Json<Vec<SuggestedActivity>>, ApiError> {
    let Query(filter) = filter?;
    let level = filter
        .level
        .as_deref()
        .map(str::parse::<DistressLevel>)
        .transpose()?;

    let activities = catalog::load_activities(&state.store).await?;
    Ok(Json(match level {
        Some(level) => suggestions_for(level, &activities),
        None => activities,
    }))
}
