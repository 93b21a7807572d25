use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use srq_core::models::evaluation::Evaluation;
use srq_core::models::level::DistressLevel;
use srq_core::models::user::{Gender, UserProfile};

/// Aggregate view over a set of evaluations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_evaluations: usize,
    /// `None` when there are no evaluations.
    pub average_score: Option<f64>,
    /// One entry per level that occurs, lowest level first.
    pub level_distribution: Vec<LevelCount>,
    /// One entry per gender that occurs; users without a recorded gender
    /// are grouped under `gender: null`, listed last.
    pub by_gender: Vec<GenderStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: DistressLevel,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderStats {
    pub gender: Option<Gender>,
    pub average_score: f64,
    pub total: usize,
}

/// Compute statistics. `profiles` is keyed by user id and supplies the
/// demographic grouping.
pub fn compute(evaluations: &[Evaluation], profiles: &HashMap<String, UserProfile>) -> Statistics {
    let total_evaluations = evaluations.len();
    let average_score = mean(evaluations.iter().map(|e| e.score));

    let mut levels: BTreeMap<DistressLevel, usize> = BTreeMap::new();
    for evaluation in evaluations {
        *levels.entry(evaluation.level).or_default() += 1;
    }

    let mut genders: BTreeMap<Option<Gender>, Vec<u8>> = BTreeMap::new();
    for evaluation in evaluations {
        let gender = profiles.get(&evaluation.user_id).and_then(|p| p.gender);
        genders.entry(gender).or_default().push(evaluation.score);
    }

    let mut by_gender: Vec<GenderStats> = genders
        .into_iter()
        .map(|(gender, scores)| GenderStats {
            gender,
            average_score: mean(scores.iter().copied()).unwrap_or_default(),
            total: scores.len(),
        })
        .collect();
    // Option orders None first; report the ungrouped bucket last instead.
    let shift = usize::from(by_gender.first().is_some_and(|g| g.gender.is_none()));
    by_gender.rotate_left(shift);

    Statistics {
        total_evaluations,
        average_score,
        level_distribution: levels
            .into_iter()
            .map(|(level, total)| LevelCount { level, total })
            .collect(),
        by_gender,
    }
}

fn mean(scores: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = scores.fold((0u64, 0u64), |(sum, count), s| {
        (sum + u64::from(s), count + 1)
    });
    (count > 0).then(|| sum as f64 / count as f64)
}
