use srq_core::keys;
use srq_core::models::activity::SuggestedActivity;
use srq_core::models::question::Question;
use srq_instruments::srq20;
use srq_storage::error::StorageError;
use srq_storage::state::{list_json, save_json};
use srq_storage::store::Store;

/// What a seeding run added. Zero on both counts means the catalog was
/// already complete.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub questions_created: usize,
    pub activities_created: usize,
}

/// Write the SRQ-20 questions and suggested activities into `store`.
///
/// Idempotent: catalog ids are derived from each entry's natural key
/// (question order, activity level + description), and existing entries are
/// left untouched.
pub async fn seed(store: &Store) -> Result<SeedReport, StorageError> {
    let mut report = SeedReport::default();

    for question in srq20::questions() {
        let key = keys::question(question.id);
        if !store.exists(&key).await? {
            save_json(store, &key, question).await?;
            report.questions_created += 1;
        }
    }

    for activity in srq20::activities() {
        let key = keys::activity(activity.id);
        if !store.exists(&key).await? {
            save_json(store, &key, activity).await?;
            report.activities_created += 1;
        }
    }

    tracing::info!(
        questions_created = report.questions_created,
        activities_created = report.activities_created,
        "catalog seeded"
    );
    Ok(report)
}

/// Stored questions in display order.
pub async fn load_questions(store: &Store) -> Result<Vec<Question>, StorageError> {
    let mut questions: Vec<Question> = list_json(store, keys::QUESTIONS_PREFIX).await?;
    questions.sort_by_key(|q| q.order);
    Ok(questions)
}

/// Stored activities in catalog order.
pub async fn load_activities(store: &Store) -> Result<Vec<SuggestedActivity>, StorageError> {
    let mut activities: Vec<SuggestedActivity> = list_json(store, keys::ACTIVITIES_PREFIX).await?;
    activities.sort_by_key(|a| a.position);
    Ok(activities)
}
