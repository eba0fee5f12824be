//! The scoring pipeline: completed answers in, [`ScoreResult`] out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sprout_core::models::answer::AnswerSet;
use sprout_core::models::instrument::{InstrumentKind, Item};
use sprout_core::models::score::ScoreResult;

use crate::instruments::behavioral;
use crate::norms;
use crate::severity::classify;

/// A named group of behavioral item ids scored as a mean. Factors may
/// overlap — an item can belong to more than one factor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorDefinition {
    pub id: String,
    pub item_ids: Vec<u32>,
}

/// Score the behavioral instrument.
///
/// Each factor is the mean of its *answered* items, rounded to two
/// decimals; unanswered items are excluded from both numerator and
/// denominator, and a factor with nothing answered scores 0. The headline
/// total is the hyperactivity-index mean itself, not an average of
/// factors.
pub fn score_behavioral(answers: &AnswerSet) -> ScoreResult {
    let mut dimension_scores = HashMap::new();
    let mut dimension_levels = HashMap::new();

    for factor in behavioral::factors() {
        let mean = factor_mean(&factor.item_ids, answers);
        dimension_levels.insert(
            factor.id.clone(),
            classify(InstrumentKind::Behavioral, mean, Some(&factor.id)),
        );
        dimension_scores.insert(factor.id.clone(), mean);
    }

    let total_score = dimension_scores
        .get(behavioral::HYPERACTIVITY_INDEX)
        .copied()
        .unwrap_or(0.0);
    let total_level = classify(
        InstrumentKind::Behavioral,
        total_score,
        Some(behavioral::HYPERACTIVITY_INDEX),
    );

    ScoreResult {
        dimension_scores,
        dimension_raw_scores: None,
        total_score,
        dimension_levels,
        total_level,
    }
}

/// Score the sensory instrument over the age-filtered active item list.
///
/// Raw sums accumulate per dimension (unanswered items count as 0, so
/// every active dimension gets an entry), are standardized to T-scores,
/// and the total is the mean T-score rounded to the nearest integer.
pub fn score_sensory(active_items: &[&Item], answers: &AnswerSet) -> ScoreResult {
    let mut raw_scores: HashMap<String, i32> = HashMap::new();
    for item in active_items {
        let score = answers.get(&item.id).copied().unwrap_or(0);
        *raw_scores.entry(item.dimension.clone()).or_insert(0) += score;
    }

    let mut dimension_scores = HashMap::new();
    let mut dimension_levels = HashMap::new();
    let mut t_score_sum = 0.0;

    for (dimension, &raw_sum) in &raw_scores {
        let t_score = f64::from(norms::standardize(dimension, raw_sum));
        dimension_levels.insert(
            dimension.clone(),
            classify(InstrumentKind::Sensory, t_score, Some(dimension)),
        );
        dimension_scores.insert(dimension.clone(), t_score);
        t_score_sum += t_score;
    }

    let total_score = if dimension_scores.is_empty() {
        0.0
    } else {
        (t_score_sum / dimension_scores.len() as f64).round()
    };
    let total_level = classify(InstrumentKind::Sensory, total_score, None);

    ScoreResult {
        dimension_scores,
        dimension_raw_scores: Some(raw_scores),
        total_score,
        dimension_levels,
        total_level,
    }
}

/// Mean over the answered items of a factor, rounded to two decimals.
fn factor_mean(item_ids: &[u32], answers: &AnswerSet) -> f64 {
    let mut sum = 0i32;
    let mut count = 0u32;
    for id in item_ids {
        if let Some(&score) = answers.get(id) {
            sum += score;
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    (f64::from(sum) / f64::from(count) * 100.0).round() / 100.0
}
