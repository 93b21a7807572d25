use std::sync::LazyLock;

use srq_core::models::activity::SuggestedActivity;
use srq_core::models::level::DistressLevel;
use srq_core::models::question::{Question, QuestionCategory};
use uuid::Uuid;

/// SRQ-20: Self-Reporting Questionnaire, 20 items.
/// Each item is answered yes/no; the total is the number of "yes" answers (0–20).
pub const ID: &str = "srq20";

pub const NAME: &str = "SRQ-20";

pub const ITEM_COUNT: usize = 20;

/// Namespace for catalog identifiers. Question and activity ids are derived
/// from their natural keys so that seeding the same catalog twice yields the
/// same ids.
const CATALOG_NAMESPACE: Uuid = Uuid::from_u128(0x5f0c_2a4e_8b1d_4c6a_9e37_1d2b_6a80_f3c1);

/// Stable id of the question shown at `order`.
pub fn question_id(order: u8) -> Uuid {
    Uuid::new_v5(&CATALOG_NAMESPACE, format!("{ID}:question:{order}").as_bytes())
}

/// Stable id of an activity, keyed by level and description.
pub fn activity_id(level: DistressLevel, description: &str) -> Uuid {
    Uuid::new_v5(
        &CATALOG_NAMESPACE,
        format!("{ID}:activity:{level}:{description}").as_bytes(),
    )
}

/// The 20 questions, in display order.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        use QuestionCategory::{Physical, PsychoEmotional};

        let items = [
            ("Do you often have headaches?", Physical),
            ("Is your appetite poor?", Physical),
            ("Do you sleep badly?", Physical),
            ("Are you easily frightened?", PsychoEmotional),
            ("Do your hands shake?", Physical),
            ("Do you feel nervous, tense or worried?", PsychoEmotional),
            ("Is your digestion poor?", Physical),
            ("Do you have trouble thinking clearly?", PsychoEmotional),
            ("Do you feel unhappy?", PsychoEmotional),
            ("Do you cry more than usual?", PsychoEmotional),
            ("Do you find it difficult to enjoy your daily activities?", PsychoEmotional),
            ("Do you find it difficult to make decisions?", PsychoEmotional),
            ("Is your daily work suffering?", PsychoEmotional),
            ("Are you unable to play a useful part in life?", PsychoEmotional),
            ("Have you lost interest in things?", PsychoEmotional),
            ("Do you feel that you are a worthless person?", PsychoEmotional),
            ("Has the thought of ending your life been on your mind?", PsychoEmotional),
            ("Do you feel tired all the time?", Physical),
            ("Do you have uncomfortable feelings in your stomach?", Physical),
            ("Are you easily tired?", Physical),
        ];

        items
            .iter()
            .zip(1u8..)
            .map(|((text, category), order)| Question {
                id: question_id(order),
                order,
                text: text.to_string(),
                category: *category,
            })
            .collect()
    });
    &QUESTIONS
}

/// The suggested activities, in catalog order.
pub fn activities() -> &'static [SuggestedActivity] {
    static ACTIVITIES: LazyLock<Vec<SuggestedActivity>> = LazyLock::new(|| {
        use DistressLevel::{Mild, Moderate, Severe};

        let items = [
            (
                Mild,
                "Exercise regularly, at least 30 minutes a day, three times a week",
            ),
            (
                Mild,
                "Make time for leisure and relaxation, such as outdoor walks, reading or hobbies",
            ),
            (
                Mild,
                "Keep a healthy sleep routine of 7 to 8 hours a night",
            ),
            (
                Moderate,
                "Reach out to friends and family to talk and share how you feel",
            ),
            (
                Moderate,
                "Practice breathing and meditation techniques daily to reduce stress",
            ),
            (
                Moderate,
                "Consider seeing a mental health professional for guidance",
            ),
            (
                Severe,
                "Seek psychological or psychiatric care as soon as possible",
            ),
            (
                Severe,
                "Do not hesitate to look for urgent specialised professional help",
            ),
            (
                Severe,
                "If you have suicidal thoughts, contact the Centro de Valorização da Vida (CVV) immediately by calling 188",
            ),
        ];

        items
            .iter()
            .zip(0u32..)
            .map(|((level, description), position)| SuggestedActivity {
                id: activity_id(*level, description),
                level: *level,
                description: description.to_string(),
                position,
            })
            .collect()
    });
    &ACTIVITIES
}
