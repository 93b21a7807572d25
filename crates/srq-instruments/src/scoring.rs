use std::collections::HashSet;

use srq_core::models::answer::AnswerInput;
use srq_core::models::evaluation::Evaluation;
use srq_core::models::level::DistressLevel;
use srq_core::models::question::Question;
use uuid::Uuid;

use crate::error::ScoringError;

/// Highest possible SRQ-20 total.
pub const MAX_SCORE: u32 = 20;

/// Map a total score to its distress level.
///
/// | score  | level    |
/// |--------|----------|
/// | 0      | None     |
/// | 1–7    | Mild     |
/// | 8–14   | Moderate |
/// | 15–20  | Severe   |
///
/// Scores above [`MAX_SCORE`] are rejected rather than clamped.
pub fn classify(total_score: u32) -> Result<DistressLevel, ScoringError> {
    match total_score {
        0 => Ok(DistressLevel::None),
        1..=7 => Ok(DistressLevel::Mild),
        8..=14 => Ok(DistressLevel::Moderate),
        15..=MAX_SCORE => Ok(DistressLevel::Severe),
        other => Err(ScoringError::InvalidScore(other)),
    }
}

/// Number of affirmative answers in one batch.
pub fn total_score(answers: &[AnswerInput]) -> u32 {
    answers.iter().filter(|a| a.value).count() as u32
}

/// Check a batch against the question catalog.
///
/// Every question id must exist and appear at most once. The first offending
/// id, in batch order, is reported.
pub fn validate_answers(answers: &[AnswerInput], questions: &[Question]) -> Result<(), ScoringError> {
    let known: HashSet<Uuid> = questions.iter().map(|q| q.id).collect();
    let mut seen = HashSet::with_capacity(answers.len());

    for answer in answers {
        if !known.contains(&answer.question_id) {
            return Err(ScoringError::UnknownQuestion(answer.question_id));
        }
        if !seen.insert(answer.question_id) {
            return Err(ScoringError::DuplicateQuestion(answer.question_id));
        }
    }
    Ok(())
}

/// Score a batch and build the resulting evaluation for `user_id`.
///
/// This is the only place an [`Evaluation`] is assembled, which keeps its
/// level consistent with its score.
pub fn evaluate(user_id: &str, answers: &[AnswerInput]) -> Result<Evaluation, ScoringError> {
    let score = total_score(answers);
    let level = classify(score)?;

    Ok(Evaluation {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        // classify bounds score to MAX_SCORE
        score: score as u8,
        level,
        created_at: jiff::Timestamp::now(),
    })
}
