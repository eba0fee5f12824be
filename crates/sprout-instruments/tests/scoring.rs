use sprout_core::models::answer::AnswerSet;
use sprout_core::models::instrument::InstrumentKind;
use sprout_core::models::severity::SeverityLevel;
use sprout_instruments::Instrument;
use sprout_instruments::instruments::behavioral::{self, Behavioral};
use sprout_instruments::instruments::sensory::{self, Sensory};

fn score_behavioral(answers: &AnswerSet) -> sprout_core::models::score::ScoreResult {
    let active: Vec<_> = Behavioral.active_items(None);
    Behavioral.score(&active, answers)
}

fn score_sensory(age: Option<f64>, answers: &AnswerSet) -> sprout_core::models::score::ScoreResult {
    let active: Vec<_> = Sensory.active_items(age);
    Sensory.score(&active, answers)
}

#[test]
fn behavioral_factor_means_use_only_answered_items() {
    // Impulsive-hyperactive is items 4, 5, 11, 13; answer three of them.
    let answers: AnswerSet = [(4, 1), (5, 1), (11, 0)].into_iter().collect();
    let result = score_behavioral(&answers);

    assert_eq!(
        result.dimension_scores[behavioral::IMPULSIVE_HYPERACTIVE],
        0.67, // (1 + 1 + 0) / 3 rounded to two decimals
    );
}

#[test]
fn behavioral_factor_with_no_answers_scores_zero() {
    let answers: AnswerSet = [(4, 3)].into_iter().collect();
    let result = score_behavioral(&answers);

    assert_eq!(result.dimension_scores[behavioral::ANXIETY], 0.0);
    assert_eq!(
        result.dimension_levels[behavioral::ANXIETY],
        SeverityLevel::Normal
    );
}

#[test]
fn behavioral_total_is_the_hyperactivity_index() {
    let answers: AnswerSet = [(4, 1), (7, 2), (38, 0), (2, 3)].into_iter().collect();
    let result = score_behavioral(&answers);

    assert_eq!(
        result.total_score,
        result.dimension_scores[behavioral::HYPERACTIVITY_INDEX]
    );
    assert_eq!(result.total_score, 1.0);
    // Item 2 only feeds conduct problems, not the headline total.
    assert_eq!(result.dimension_scores[behavioral::CONDUCT_PROBLEMS], 3.0);
}

#[test]
fn behavioral_has_no_raw_score_layer() {
    let answers: AnswerSet = [(4, 2)].into_iter().collect();
    assert!(score_behavioral(&answers).dimension_raw_scores.is_none());
}

#[test]
fn maxed_hyperactivity_index_is_severe() {
    let answers: AnswerSet = [4, 7, 11, 13, 14, 25, 31, 33, 37, 38]
        .into_iter()
        .map(|id| (id, 3))
        .collect();
    let result = score_behavioral(&answers);

    assert_eq!(result.dimension_scores[behavioral::HYPERACTIVITY_INDEX], 3.0);
    assert_eq!(result.total_score, 3.0);
    assert_eq!(result.total_level, SeverityLevel::Severe);
}

#[test]
fn sensory_all_ones_is_a_clean_profile() {
    let answers: AnswerSet = (1..=64).map(|id| (id, 1)).collect();
    let result = score_sensory(Some(8.0), &answers);

    let raw = result.dimension_raw_scores.as_ref().unwrap();
    assert_eq!(raw[sensory::VESTIBULAR_BALANCE], 11);
    // Raw 11 is an exact table hit at T = 70, which classifies as normal.
    assert_eq!(result.dimension_scores[sensory::VESTIBULAR_BALANCE], 70.0);
    assert_eq!(
        result.dimension_levels[sensory::VESTIBULAR_BALANCE],
        SeverityLevel::Normal
    );

    // (70 + 73 + 70 + 65 + 61 + 64 + 57 + 57) / 8 = 64.625, rounded.
    assert_eq!(result.total_score, 65.0);
    assert_eq!(result.total_level, SeverityLevel::Normal);
}

#[test]
fn sensory_all_fives_is_severe() {
    let answers: AnswerSet = (1..=64).map(|id| (id, 5)).collect();
    let result = score_sensory(Some(8.0), &answers);

    let raw = result.dimension_raw_scores.as_ref().unwrap();
    assert_eq!(raw[sensory::TACTILE_DEFENSIVENESS], 70);
    assert_eq!(result.total_score, 15.0);
    assert_eq!(result.total_level, SeverityLevel::Severe);
}

#[test]
fn sensory_total_is_the_rounded_mean_t_score() {
    let answers: AnswerSet = (1..=64).map(|id| (id, i32::try_from(id % 5).unwrap() + 1)).collect();
    let result = score_sensory(Some(8.0), &answers);

    let mean = result.dimension_scores.values().sum::<f64>()
        / result.dimension_scores.len() as f64;
    assert_eq!(result.total_score, mean.round());
}

#[test]
fn sensory_unanswered_items_count_as_zero() {
    let answers: AnswerSet = AnswerSet::new();
    let result = score_sensory(Some(8.0), &answers);

    let raw = result.dimension_raw_scores.as_ref().unwrap();
    assert_eq!(raw.len(), 8);
    assert!(raw.values().all(|&sum| sum == 0));
    // Every dimension extrapolates to its high-end value.
    assert_eq!(result.dimension_scores[sensory::NEURAL_INHIBITION], 73.0);
    assert_eq!(result.dimension_scores[sensory::VESTIBULAR_BALANCE], 75.0);
    assert_eq!(result.total_score, 75.0);
}

#[test]
fn filtered_school_age_items_never_reach_a_raw_sum() {
    // Answers for 61–64 are present, but the active list for a
    // five-year-old excludes them entirely.
    let answers: AnswerSet = (1..=64).map(|id| (id, 3)).collect();
    let result = score_sensory(Some(5.9), &answers);

    let raw = result.dimension_raw_scores.as_ref().unwrap();
    assert_eq!(raw.len(), 6);
    assert!(!raw.contains_key(sensory::EMOTIONAL_SOCIAL));
    assert!(!raw.contains_key(sensory::STRESS_TOLERANCE));
    assert!(!result.dimension_scores.contains_key(sensory::EMOTIONAL_SOCIAL));
}

#[test]
fn at_age_six_school_age_items_are_scored() {
    let answers: AnswerSet = (1..=64).map(|id| (id, 3)).collect();
    let result = score_sensory(Some(6.0), &answers);

    let raw = result.dimension_raw_scores.as_ref().unwrap();
    assert_eq!(raw.len(), 8);
    assert_eq!(raw[sensory::EMOTIONAL_SOCIAL], 6);
}

#[test]
fn scoring_matches_across_trait_and_kind_lookup() {
    let answers: AnswerSet = [(4, 2), (7, 2)].into_iter().collect();
    let instrument = sprout_instruments::get_instrument(InstrumentKind::Behavioral);
    let active = instrument.active_items(None);
    let result = instrument.score(&active, &answers);

    assert_eq!(result.total_score, 2.0);
    assert_eq!(result.total_level, SeverityLevel::Moderate);
}
