//! Severity classification thresholds.

use sprout_core::models::instrument::InstrumentKind;
use sprout_core::models::severity::SeverityLevel;

/// Classify a score into a severity tier. Total — every score maps to a
/// tier.
///
/// Behavioral scores are factor means on the 0–3 scale (higher is worse).
/// Sensory scores are standardized T-scores (higher is better). The
/// `dimension` argument is accepted for call-site uniformity; neither
/// instrument's thresholds currently vary by dimension.
pub fn classify(kind: InstrumentKind, score: f64, dimension: Option<&str>) -> SeverityLevel {
    let _ = dimension;
    match kind {
        InstrumentKind::Behavioral => {
            if score < 1.5 {
                SeverityLevel::Normal
            } else if score < 2.0 {
                SeverityLevel::Mild
            } else if score < 2.5 {
                SeverityLevel::Moderate
            } else {
                SeverityLevel::Severe
            }
        }
        InstrumentKind::Sensory => {
            if score >= 50.0 {
                SeverityLevel::Normal
            } else if score >= 40.0 {
                SeverityLevel::Mild
            } else if score >= 30.0 {
                SeverityLevel::Moderate
            } else {
                SeverityLevel::Severe
            }
        }
    }
}
