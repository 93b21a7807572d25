use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use srq_audit::events::AuditEvent;
use srq_auth::caller::Caller;
use srq_core::models::evaluation::Evaluation;
use srq_core::models::level::DistressLevel;
use srq_export::records::{self as export, ExportFormat};
use srq_export::stats::{self, Statistics};

use crate::error::{ApiError, require_staff};
use crate::records;
use crate::routes::record_owner;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EvaluationFilter {
    level: Option<String>,
    user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct ExportParams {
    format: Option<String>,
}

/// The caller's evaluations, newest first. Staff see everyone's, optionally
/// narrowed to one user.
pub async fn list_evaluations(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    filter: Result<Query<EvaluationFilter>, QueryRejection>,
) -> Result<Json<Vec<Evaluation>>, ApiError> {
    let Query(filter) = filter?;
    let level = filter
        .level
        .as_deref()
        .map(str::parse::<DistressLevel>)
        .transpose()?;

    let owner = record_owner(&caller, filter.user_id.as_deref())?;
    let mut evaluations = records::load_evaluations(&state.store, owner.as_deref()).await?;
    if let Some(level) = level {
        evaluations.retain(|e| e.level == level);
    }
    Ok(Json(evaluations))
}

pub async fn get_evaluation(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Evaluation>, ApiError> {
    let Path(id) = id?;
    let owner = (!caller.is_staff).then_some(caller.user_id.as_str());
    records::find_evaluation(&state.store, id, owner)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("evaluation not found: {id}")))
}

pub async fn evaluation_statistics(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<Statistics>, ApiError> {
    require_staff(&caller)?;

    let evaluations = records::load_evaluations(&state.store, None).await?;
    let profiles = records::profiles_by_id(&state.store).await?;
    Ok(Json(stats::compute(&evaluations, &profiles)))
}

pub async fn export_evaluations(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    params: Result<Query<ExportParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    require_staff(&caller)?;
    let Query(params) = params?;
    let format: ExportFormat = params.format.as_deref().unwrap_or("json").parse()?;

    let evaluations = records::load_evaluations(&state.store, None).await?;
    let profiles = records::profiles_by_id(&state.store).await?;
    let rows = export::rows(&evaluations, &profiles);
    let body = export::render(format, &rows)?;

    AuditEvent::new("export", "evaluation", "*", caller.user_id.as_str())
        .with_details(serde_json::json!({
            "format": format.as_str(),
            "rows": rows.len(),
        }))
        .emit();

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
