use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordered severity tiers. Derived from a score via instrument-specific
/// thresholds, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}
