use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;

use srq_audit::access;
use srq_auth::caller::Caller;
use srq_core::models::access::AccessRecord;

use crate::error::{ApiError, require_staff};
use crate::routes::record_owner;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AccessFilter {
    user_id: Option<String>,
}

pub async fn list_access_history(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    filter: Result<Query<AccessFilter>, QueryRejection>,
) -> Result<Json<Vec<AccessRecord>>, ApiError> {
    require_staff(&caller)?;
    let Query(filter) = filter?;
    let owner = record_owner(&caller, filter.user_id.as_deref())?;
    Ok(Json(access::list_access(&state.store, owner.as_deref()).await?))
}
