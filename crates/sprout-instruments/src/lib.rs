//! sprout-instruments
//!
//! Questionnaire definitions and the scoring pipeline. Pure data and total
//! functions — no I/O, no clock. Defines the item catalogs, answer-option
//! sets, standardization tables, and severity rules for both instruments.

pub mod descriptions;
pub mod instruments;
pub mod norms;
pub mod scoring;
pub mod severity;

use sprout_core::models::answer::AnswerSet;
use sprout_core::models::instrument::{AnswerOption, InstrumentKind, Item};
use sprout_core::models::score::ScoreResult;

/// Trait implemented by each questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Which instrument this is.
    fn kind(&self) -> InstrumentKind;

    /// Human-readable title shown on the quiz and report.
    fn title(&self) -> &str;

    /// One-paragraph description for the landing screen.
    fn description(&self) -> &str;

    /// The full, ordered item catalog.
    fn items(&self) -> &[Item];

    /// The answer options shared by every item of this instrument.
    fn options(&self) -> &[AnswerOption];

    /// The items to administer for a respondent of the declared age.
    ///
    /// Decided once at quiz start; excluded items are never shown and
    /// never contribute to any score.
    fn active_items(&self, age_years: Option<f64>) -> Vec<&Item> {
        let _ = age_years;
        self.items().iter().collect()
    }

    /// Score a completed submission over the active item list.
    fn score(&self, active_items: &[&Item], answers: &AnswerSet) -> ScoreResult;
}

/// Return both registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::behavioral::Behavioral),
        Box::new(instruments::sensory::Sensory),
    ]
}

/// Look up an instrument by kind.
pub fn get_instrument(kind: InstrumentKind) -> Box<dyn Instrument> {
    match kind {
        InstrumentKind::Behavioral => Box::new(instruments::behavioral::Behavioral),
        InstrumentKind::Sensory => Box::new(instruments::sensory::Sensory),
    }
}
