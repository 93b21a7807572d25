use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

use srq_auth::caller::Caller;
use srq_core::keys;
use srq_core::models::user::{UserProfile, UserProfileInput};
use srq_storage::state::{load_json_opt, save_json};

use crate::error::{ApiError, require_staff};
use crate::records;
use crate::state::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    require_staff(&caller)?;
    Ok(Json(records::load_profiles(&state.store).await?))
}

pub async fn get_me(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<UserProfile>, ApiError> {
    load_json_opt(&state.store, &keys::user(&caller.user_id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("no profile for the current user".to_string()))
}

/// Create or replace the caller's profile.
pub async fn update_me(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<UserProfileInput>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Json(input) = payload?;
    let username = match (input.username.trim(), caller.username.as_deref()) {
        ("", Some(from_token)) if !from_token.trim().is_empty() => from_token.trim().to_string(),
        ("", _) => return Err(ApiError::BadRequest("username must not be empty".to_string())),
        (given, _) => given.to_string(),
    };
    if !input.email.contains('@') {
        return Err(ApiError::BadRequest(format!("invalid email: {}", input.email)));
    }

    let key = keys::user(&caller.user_id);
    let existing: Option<UserProfile> = load_json_opt(&state.store, &key).await?;
    let now = jiff::Timestamp::now();

    let profile = UserProfile {
        id: caller.user_id.clone(),
        username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        gender: input.gender,
        birth_date: input.birth_date,
        created_at: existing.map(|p| p.created_at).unwrap_or(now),
        updated_at: now,
    };
    save_json(&state.store, &key, &profile).await?;
    Ok(Json(profile))
}
