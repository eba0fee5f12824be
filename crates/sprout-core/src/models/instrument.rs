use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which of the two questionnaires a record or session refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    /// 48-item parent behavioral inventory, items rated 0–3.
    Behavioral,
    /// 64-item sensory-processing inventory, items rated 1–5.
    Sensory,
}

/// A single questionnaire item.
///
/// `dimension` groups items for score aggregation. `section` is a
/// display-only sub-heading (sensory instrument only) and never affects
/// scoring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: u32,
    pub text: String,
    pub dimension: String,
    pub section: Option<String>,
}

/// One selectable answer, shared by every item of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub score: i32,
}
