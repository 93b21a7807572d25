//! Object key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the SRQ bucket. Per-user records are grouped under the
//! owner's subject so a caller's history is a single prefix listing.

use uuid::Uuid;

pub const QUESTIONS_PREFIX: &str = "catalog/questions/";

pub const ACTIVITIES_PREFIX: &str = "catalog/activities/";

pub const ANSWERS_PREFIX: &str = "answers/";

pub const EVALUATIONS_PREFIX: &str = "evaluations/";

pub const USERS_PREFIX: &str = "users/";

pub const ACCESS_PREFIX: &str = "access/";

pub fn question(id: Uuid) -> String {
    format!("{QUESTIONS_PREFIX}{id}.json")
}

pub fn activity(id: Uuid) -> String {
    format!("{ACTIVITIES_PREFIX}{id}.json")
}

pub fn answer(user_id: &str, id: Uuid) -> String {
    format!("{ANSWERS_PREFIX}{user_id}/{id}.json")
}

pub fn user_answers_prefix(user_id: &str) -> String {
    format!("{ANSWERS_PREFIX}{user_id}/")
}

pub fn evaluation(user_id: &str, id: Uuid) -> String {
    format!("{EVALUATIONS_PREFIX}{user_id}/{id}.json")
}

pub fn user_evaluations_prefix(user_id: &str) -> String {
    format!("{EVALUATIONS_PREFIX}{user_id}/")
}

/// Whether `key` names the evaluation `id`, regardless of its owner.
pub fn is_evaluation_key(key: &str, id: Uuid) -> bool {
    key.starts_with(EVALUATIONS_PREFIX) && key.ends_with(&format!("/{id}.json"))
}

pub fn user(id: &str) -> String {
    format!("{USERS_PREFIX}{id}.json")
}

pub fn access(user_id: &str, id: Uuid) -> String {
    format!("{ACCESS_PREFIX}{user_id}/{id}.json")
}

pub fn user_access_prefix(user_id: &str) -> String {
    format!("{ACCESS_PREFIX}{user_id}/")
}
