use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::SeverityLevel;

/// The outcome of scoring one completed quiz submission.
///
/// `dimension_scores` holds the headline per-dimension value: the factor
/// mean for the behavioral instrument, the standardized T-score for the
/// sensory instrument. Raw sums are kept alongside for the sensory report
/// (`dimension_raw_scores`); the behavioral instrument has no raw layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub dimension_scores: HashMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dimension_raw_scores: Option<HashMap<String, i32>>,
    pub total_score: f64,
    pub dimension_levels: HashMap<String, SeverityLevel>,
    pub total_level: SeverityLevel,
}
