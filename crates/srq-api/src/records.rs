//! Loading of per-user records (answers, evaluations, profiles).

use std::collections::HashMap;

use srq_core::keys;
use srq_core::models::answer::Answer;
use srq_core::models::evaluation::Evaluation;
use srq_core::models::user::UserProfile;
use srq_storage::error::StorageError;
use srq_storage::state::{list_json, load_json, load_json_opt};
use srq_storage::store::Store;
use uuid::Uuid;

/// Evaluations newest first; all users when `user_id` is `None`.
pub async fn load_evaluations(
    store: &Store,
    user_id: Option<&str>,
) -> Result<Vec<Evaluation>, StorageError> {
    let prefix = match user_id {
        Some(id) => keys::user_evaluations_prefix(id),
        None => keys::EVALUATIONS_PREFIX.to_string(),
    };
    let mut evaluations: Vec<Evaluation> = list_json(store, &prefix).await?;
    evaluations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(evaluations)
}

/// Find one evaluation. With `owner` set only that user's evaluations are
/// searched; otherwise every user's.
pub async fn find_evaluation(
    store: &Store,
    id: Uuid,
    owner: Option<&str>,
) -> Result<Option<Evaluation>, StorageError> {
    if let Some(user_id) = owner {
        return load_json_opt(store, &keys::evaluation(user_id, id)).await;
    }

    let candidates = store.list(keys::EVALUATIONS_PREFIX).await?;
    match candidates.iter().find(|k| keys::is_evaluation_key(k, id)) {
        Some(key) => Ok(Some(load_json(store, key).await?)),
        None => Ok(None),
    }
}

/// Answers newest first; all users when `user_id` is `None`.
pub async fn load_answers(store: &Store, user_id: Option<&str>) -> Result<Vec<Answer>, StorageError> {
    let prefix = match user_id {
        Some(id) => keys::user_answers_prefix(id),
        None => keys::ANSWERS_PREFIX.to_string(),
    };
    let mut answers: Vec<Answer> = list_json(store, &prefix).await?;
    answers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(answers)
}

pub async fn load_profiles(store: &Store) -> Result<Vec<UserProfile>, StorageError> {
    list_json(store, keys::USERS_PREFIX).await
}

/// Profiles keyed by user id, for joining against evaluations.
pub async fn profiles_by_id(store: &Store) -> Result<HashMap<String, UserProfile>, StorageError> {
    Ok(load_profiles(store)
        .await?
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect())
}
