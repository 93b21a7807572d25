use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use srq_audit::events::AuditEvent;
use srq_auth::caller::Caller;
use srq_core::keys;
use srq_core::models::activity::SuggestedActivity;
use srq_core::models::answer::{Answer, AnswerInput};
use srq_core::models::evaluation::Evaluation;
use srq_instruments::error::ScoringError;
use srq_instruments::recommend::suggestions_for;
use srq_instruments::scoring;
use srq_storage::error::StorageError;
use srq_storage::state::save_json;
use srq_storage::store::Store;

use crate::catalog;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub evaluation: Evaluation,
    pub suggested_activities: Vec<SuggestedActivity>,
}

/// Score one questionnaire submission for `caller` and persist it.
///
/// The whole batch is checked against the stored catalog before anything is
/// written, so a rejected submission leaves no trace. Answers are written
/// first and the evaluation last; if a write fails, the answers already
/// written for this submission are removed on a best-effort basis before the
/// storage error is returned. Nothing is retried.
pub async fn submit(
    store: &Store,
    caller: &Caller,
    answers: &[AnswerInput],
) -> Result<SubmissionOutcome, SubmissionError> {
    let questions = catalog::load_questions(store).await?;
    scoring::validate_answers(answers, &questions)?;

    let evaluation = scoring::evaluate(&caller.user_id, answers)?;
    let activities = catalog::load_activities(store).await?;

    let mut written: Vec<String> = Vec::with_capacity(answers.len());
    for input in answers {
        let answer = Answer {
            id: Uuid::new_v4(),
            user_id: caller.user_id.clone(),
            question_id: input.question_id,
            value: input.value,
            evaluation_id: evaluation.id,
            created_at: evaluation.created_at,
        };
        let key = keys::answer(&caller.user_id, answer.id);
        if let Err(e) = save_json(store, &key, &answer).await {
            discard(store, &written).await;
            return Err(e.into());
        }
        written.push(key);
    }

    let key = keys::evaluation(&caller.user_id, evaluation.id);
    if let Err(e) = save_json(store, &key, &evaluation).await {
        discard(store, &written).await;
        return Err(e.into());
    }

    AuditEvent::new(
        "submit",
        "evaluation",
        evaluation.id.to_string(),
        caller.user_id.as_str(),
    )
    .with_details(serde_json::json!({
        "answers": answers.len(),
        "score": evaluation.score,
        "level": evaluation.level,
    }))
    .emit();

    let suggested_activities = suggestions_for(evaluation.level, &activities);
    Ok(SubmissionOutcome {
        evaluation,
        suggested_activities,
    })
}

async fn discard(store: &Store, keys: &[String]) {
    for key in keys {
        if let Err(e) = store.delete(key).await {
            tracing::warn!(key = %key, error = %e, "failed to remove answer of aborted submission");
        }
    }
}
