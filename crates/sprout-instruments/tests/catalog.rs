use std::collections::HashSet;

use sprout_core::models::instrument::InstrumentKind;
use sprout_instruments::instruments::behavioral::{self, Behavioral};
use sprout_instruments::instruments::sensory::{self, Sensory};
use sprout_instruments::{Instrument, all_instruments, get_instrument};

#[test]
fn both_instruments_registered() {
    let kinds: Vec<_> = all_instruments().iter().map(|i| i.kind()).collect();
    assert_eq!(kinds, vec![InstrumentKind::Behavioral, InstrumentKind::Sensory]);

    assert_eq!(
        get_instrument(InstrumentKind::Sensory).kind(),
        InstrumentKind::Sensory
    );
}

#[test]
fn behavioral_catalog_has_48_unique_items() {
    let items = Behavioral.items();
    assert_eq!(items.len(), 48);

    let ids: HashSet<u32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), 48);
    assert_eq!(ids.iter().min(), Some(&1));
    assert_eq!(ids.iter().max(), Some(&48));
}

#[test]
fn sensory_catalog_has_64_unique_items_with_sections() {
    let items = Sensory.items();
    assert_eq!(items.len(), 64);

    let ids: HashSet<u32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), 64);
    assert!(items.iter().all(|item| item.section.is_some()));
}

#[test]
fn behavioral_items_carry_no_section() {
    assert!(Behavioral.items().iter().all(|item| item.section.is_none()));
}

#[test]
fn every_factor_item_exists_in_the_catalog() {
    let ids: HashSet<u32> = Behavioral.items().iter().map(|item| item.id).collect();
    for factor in behavioral::factors() {
        for item_id in &factor.item_ids {
            assert!(ids.contains(item_id), "{} references missing item {item_id}", factor.id);
        }
    }
}

#[test]
fn hyperactivity_index_overlaps_other_factors() {
    let factors = behavioral::factors();
    let index = factors
        .iter()
        .find(|f| f.id == behavioral::HYPERACTIVITY_INDEX)
        .unwrap();
    let impulsive = factors
        .iter()
        .find(|f| f.id == behavioral::IMPULSIVE_HYPERACTIVE)
        .unwrap();

    assert!(index.item_ids.contains(&4));
    assert!(impulsive.item_ids.contains(&4));
}

#[test]
fn option_sets_match_the_instruments_scales() {
    let behavioral_scores: Vec<i32> = Behavioral.options().iter().map(|o| o.score).collect();
    assert_eq!(behavioral_scores, vec![0, 1, 2, 3]);

    let sensory_scores: Vec<i32> = Sensory.options().iter().map(|o| o.score).collect();
    assert_eq!(sensory_scores, vec![1, 2, 3, 4, 5]);
}

#[test]
fn sensory_dimension_item_counts() {
    let items = Sensory.items();
    let count = |dim: &str| items.iter().filter(|item| item.dimension == dim).count();

    assert_eq!(count(sensory::VESTIBULAR_BALANCE), 11);
    assert_eq!(count(sensory::NEURAL_INHIBITION), 9);
    assert_eq!(count(sensory::TACTILE_DEFENSIVENESS), 14);
    assert_eq!(count(sensory::DYSPRAXIA), 11);
    assert_eq!(count(sensory::VISUAL_SPATIAL), 5);
    assert_eq!(count(sensory::PROPRIOCEPTION), 10);
    assert_eq!(count(sensory::EMOTIONAL_SOCIAL), 2);
    assert_eq!(count(sensory::STRESS_TOLERANCE), 2);
}

#[test]
fn under_six_skips_school_age_items() {
    let active = Sensory.active_items(Some(5.9));
    assert_eq!(active.len(), 60);
    assert!(active.iter().all(|item| item.id < 61));
}

#[test]
fn six_and_over_get_the_full_list() {
    assert_eq!(Sensory.active_items(Some(6.0)).len(), 64);
    assert_eq!(Sensory.active_items(Some(12.0)).len(), 64);
    assert_eq!(Sensory.active_items(None).len(), 64);
    // An unparseable declared age keeps the full list.
    assert_eq!(Sensory.active_items(Some(f64::NAN)).len(), 64);
}

#[test]
fn age_never_filters_the_behavioral_catalog() {
    assert_eq!(Behavioral.active_items(Some(4.0)).len(), 48);
}
