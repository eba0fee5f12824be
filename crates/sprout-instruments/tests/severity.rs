use sprout_core::models::instrument::InstrumentKind;
use sprout_core::models::severity::SeverityLevel;
use sprout_instruments::severity::classify;

#[test]
fn behavioral_thresholds() {
    let classify = |score| classify(InstrumentKind::Behavioral, score, None);

    assert_eq!(classify(0.0), SeverityLevel::Normal);
    assert_eq!(classify(1.49), SeverityLevel::Normal);
    assert_eq!(classify(1.5), SeverityLevel::Mild);
    assert_eq!(classify(1.99), SeverityLevel::Mild);
    assert_eq!(classify(2.0), SeverityLevel::Moderate);
    assert_eq!(classify(2.49), SeverityLevel::Moderate);
    assert_eq!(classify(2.5), SeverityLevel::Severe);
    assert_eq!(classify(3.0), SeverityLevel::Severe);
}

#[test]
fn sensory_thresholds() {
    let classify = |score| classify(InstrumentKind::Sensory, score, None);

    assert_eq!(classify(75.0), SeverityLevel::Normal);
    assert_eq!(classify(50.0), SeverityLevel::Normal);
    assert_eq!(classify(49.9), SeverityLevel::Mild);
    assert_eq!(classify(40.0), SeverityLevel::Mild);
    assert_eq!(classify(39.9), SeverityLevel::Moderate);
    assert_eq!(classify(30.0), SeverityLevel::Moderate);
    assert_eq!(classify(29.9), SeverityLevel::Severe);
    assert_eq!(classify(8.0), SeverityLevel::Severe);
}

#[test]
fn dimension_argument_does_not_change_the_tier() {
    assert_eq!(
        classify(InstrumentKind::Behavioral, 2.2, Some("conduct_problems")),
        classify(InstrumentKind::Behavioral, 2.2, None),
    );
    assert_eq!(
        classify(InstrumentKind::Sensory, 44.0, Some("vestibular_balance")),
        classify(InstrumentKind::Sensory, 44.0, None),
    );
}

#[test]
fn behavioral_severity_is_monotonic_in_the_score() {
    let mut previous = SeverityLevel::Normal;
    for tenths in 0..=30 {
        let level = classify(InstrumentKind::Behavioral, f64::from(tenths) / 10.0, None);
        assert!(level >= previous, "severity regressed at score {tenths}/10");
        previous = level;
    }
}

#[test]
fn sensory_severity_is_monotonic_in_the_score() {
    let mut previous = SeverityLevel::Severe;
    for score in 0..=80 {
        let level = classify(InstrumentKind::Sensory, f64::from(score), None);
        assert!(level <= previous, "severity worsened at score {score}");
        previous = level;
    }
}
