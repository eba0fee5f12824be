//! Raw-sum to T-score standardization for the sensory instrument.
//!
//! One sparse lookup table per dimension, covering the empirically observed
//! raw-sum range. Lower raw sums mean better performance, so the T scale
//! runs high-to-low as raw sums climb.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::instruments::sensory;

/// T-score returned for a dimension with no norm table. Not an expected
/// path; callers see a well-formed neutral score rather than a failure.
const NEUTRAL_T_SCORE: i32 = 50;

/// Ceiling applied when a raw sum falls below the tabulated range and the
/// boundary entry is not already above 70.
const HIGH_END_CEILING: i32 = 75;

/// Floor applied when a raw sum exceeds the tabulated range and the
/// boundary entry is not already below 20.
const LOW_END_FLOOR: i32 = 10;

static T_SCORE_TABLES: LazyLock<HashMap<&'static str, BTreeMap<i32, i32>>> =
    LazyLock::new(|| {
        let mut tables = HashMap::new();
        tables.insert(
            sensory::VESTIBULAR_BALANCE,
            table(&[
                (11, 70), (12, 64), (13, 60), (14, 57), (15, 54), (16, 52), (17, 49), (18, 47),
                (19, 45), (20, 43), (21, 41), (22, 39), (23, 37), (24, 36), (25, 34), (26, 32),
                (27, 31), (28, 29), (29, 28), (30, 27), (31, 26), (32, 25), (33, 25), (34, 23),
                (35, 20), (36, 16), (37, 16), (38, 15), (39, 14), (40, 12), (41, 12), (42, 12),
                (43, 11), (44, 10),
            ]),
        );
        tables.insert(
            sensory::NEURAL_INHIBITION,
            table(&[
                (9, 73), (10, 69), (11, 67), (12, 64), (13, 62), (14, 60), (15, 58), (16, 55),
                (17, 53), (18, 51), (19, 49), (20, 48), (21, 46), (22, 44), (23, 42), (24, 40),
                (25, 39), (26, 37), (27, 36), (28, 34), (29, 32), (30, 30), (31, 28), (32, 26),
                (33, 25), (34, 23), (35, 22), (36, 20), (37, 16), (38, 12), (39, 11), (40, 8),
            ]),
        );
        tables.insert(
            sensory::TACTILE_DEFENSIVENESS,
            table(&[
                (14, 70), (15, 65), (16, 63), (17, 61), (18, 59), (19, 57), (20, 55), (21, 53),
                (22, 51), (23, 50), (24, 48), (25, 47), (26, 45), (27, 44), (28, 42), (29, 41),
                (30, 40), (31, 38), (32, 37), (33, 36), (34, 34), (35, 33), (36, 32), (37, 31),
                (38, 29), (39, 28), (40, 26), (41, 26), (42, 25), (43, 24), (44, 22), (45, 21),
                (46, 20), (47, 16),
            ]),
        );
        tables.insert(
            sensory::DYSPRAXIA,
            table(&[
                (11, 65), (12, 59), (13, 57), (14, 55), (15, 53), (16, 51), (17, 47), (18, 47),
                (19, 45), (20, 44), (21, 42), (22, 40), (23, 39), (24, 38), (25, 36), (26, 35),
                (27, 34), (28, 33), (29, 32), (30, 31), (31, 29), (32, 28), (33, 28), (34, 26),
                (35, 25), (36, 24), (37, 23), (38, 22), (39, 21), (40, 20), (41, 16), (42, 16),
                (43, 16),
            ]),
        );
        tables.insert(
            sensory::VISUAL_SPATIAL,
            table(&[
                (5, 61), (6, 54), (7, 50), (8, 48), (9, 45), (10, 41), (11, 38), (12, 35),
                (13, 32), (14, 30), (15, 27), (16, 25), (17, 23), (18, 22), (19, 20), (20, 16),
            ]),
        );
        // Sparse interior: raw sums 30 and 35 are not tabulated.
        tables.insert(
            sensory::PROPRIOCEPTION,
            table(&[
                (10, 64), (11, 59), (12, 56), (13, 54), (14, 52), (15, 51), (16, 49), (17, 48),
                (18, 46), (19, 45), (20, 43), (21, 42), (22, 40), (23, 38), (24, 36), (25, 35),
                (26, 34), (27, 33), (28, 32), (29, 30), (31, 29), (32, 26), (33, 25), (34, 23),
                (36, 22), (40, 16),
            ]),
        );
        tables.insert(
            sensory::EMOTIONAL_SOCIAL,
            table(&[
                (2, 57), (3, 49), (4, 44), (5, 38), (6, 33), (7, 29), (8, 25), (9, 22), (10, 20),
            ]),
        );
        tables.insert(
            sensory::STRESS_TOLERANCE,
            table(&[
                (2, 57), (3, 48), (4, 43), (5, 38), (6, 33), (7, 28), (8, 25), (9, 20), (10, 16),
            ]),
        );
        tables
    });

fn table(pairs: &[(i32, i32)]) -> BTreeMap<i32, i32> {
    pairs.iter().copied().collect()
}

/// Convert a dimension raw sum to its standardized T-score.
///
/// Exact table hits return the tabulated value. Raw sums below the
/// tabulated range (better than tabulated performance) return the boundary
/// value if it exceeds 70, otherwise the fixed ceiling of 75; above the
/// range, the boundary value if below 20, otherwise the fixed floor of 10.
/// Gaps inside the range resolve to the nearest tabulated key; on a
/// distance tie, the smaller key wins. Unknown dimensions get a neutral 50.
pub fn standardize(dimension: &str, raw_sum: i32) -> i32 {
    let Some(table) = T_SCORE_TABLES.get(dimension) else {
        return NEUTRAL_T_SCORE;
    };
    if let Some(&t_score) = table.get(&raw_sum) {
        return t_score;
    }

    let (Some((&min_raw, &high_t)), Some((&max_raw, &low_t))) =
        (table.first_key_value(), table.last_key_value())
    else {
        return NEUTRAL_T_SCORE;
    };

    if raw_sum <= min_raw {
        return if high_t > 70 { high_t } else { HIGH_END_CEILING };
    }
    if raw_sum >= max_raw {
        return if low_t < 20 { low_t } else { LOW_END_FLOOR };
    }

    // Interior gap: ascending scan with strict improvement, so an exact
    // distance tie keeps the smaller key.
    let mut best_distance = i32::MAX;
    let mut best_t = NEUTRAL_T_SCORE;
    for (&raw, &t_score) in table {
        let distance = (raw - raw_sum).abs();
        if distance < best_distance {
            best_distance = distance;
            best_t = t_score;
        }
    }
    best_t
}
