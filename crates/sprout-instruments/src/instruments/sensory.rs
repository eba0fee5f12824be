use std::sync::LazyLock;

use sprout_core::models::answer::AnswerSet;
use sprout_core::models::instrument::{AnswerOption, InstrumentKind, Item};
use sprout_core::models::score::ScoreResult;

use crate::Instrument;
use crate::scoring;

/// Dimension ids, one per checklist section (sections VII and VIII are
/// separate dimensions despite their small item counts).
pub const VESTIBULAR_BALANCE: &str = "vestibular_balance";
pub const NEURAL_INHIBITION: &str = "neural_inhibition";
pub const TACTILE_DEFENSIVENESS: &str = "tactile_defensiveness";
pub const DYSPRAXIA: &str = "dyspraxia";
pub const VISUAL_SPATIAL: &str = "visual_spatial";
pub const PROPRIOCEPTION: &str = "proprioception";
pub const EMOTIONAL_SOCIAL: &str = "emotional_social";
pub const STRESS_TOLERANCE: &str = "stress_tolerance";

/// Items from this id upward cover school-age behavior and are skipped for
/// respondents under [`SCHOOL_AGE_YEARS`].
const SCHOOL_AGE_FIRST_ITEM: u32 = 61;
const SCHOOL_AGE_YEARS: f64 = 6.0;

/// 64-item sensory-processing inventory. Items rated 1–5; dimension raw
/// sums are converted to standardized T-scores via [`crate::norms`].
pub struct Sensory;

impl Instrument for Sensory {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Sensory
    }

    fn title(&self) -> &str {
        "Sensory Integration Assessment"
    }

    fn description(&self) -> &str {
        "A 64-item checklist assessing a child's sensory integration \
         development across vestibular, tactile, proprioceptive, and related \
         dimensions."
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(build_items);
        &ITEMS
    }

    fn options(&self) -> &[AnswerOption] {
        static OPTIONS: LazyLock<Vec<AnswerOption>> = LazyLock::new(|| {
            vec![
                option("Never (1)", 1),
                option("Rarely (2)", 2),
                option("Sometimes (3)", 3),
                option("Often (4)", 4),
                option("Always (5)", 5),
            ]
        });
        &OPTIONS
    }

    /// Children under six skip the school-age items (61–64). A declared age
    /// that is not a number keeps the full list.
    fn active_items(&self, age_years: Option<f64>) -> Vec<&Item> {
        match age_years {
            Some(age) if age < SCHOOL_AGE_YEARS => self
                .items()
                .iter()
                .filter(|item| item.id < SCHOOL_AGE_FIRST_ITEM)
                .collect(),
            _ => self.items().iter().collect(),
        }
    }

    fn score(&self, active_items: &[&Item], answers: &AnswerSet) -> ScoreResult {
        scoring::score_sensory(active_items, answers)
    }
}

fn build_items() -> Vec<Item> {
    let sections: [(&str, &str, &[(u32, &str)]); 8] = [
        (
            VESTIBULAR_BALANCE,
            "I. Vestibular Balance and Bilateral Integration",
            &[
                (1, "Loves spinning stools, merry-go-rounds, and whirling playground rides, without getting dizzy"),
                (2, "Looks normal and healthy with normal intelligence, but finds learning to read or do arithmetic unusually hard"),
                (3, "Bumps into tables, chairs, or people even when they are in plain sight; poor sense of direction and distance"),
                (4, "Hands and feet coordinate poorly when eating, writing, or drumming; often forgets the other side"),
                (5, "Appears left-handed, uses both hands interchangeably, or has not yet settled on a preferred hand"),
                (6, "Clumsy in gross movements, falls easily and does not use the hands to break a fall; feels heavy when pulled along"),
                (7, "Unclear articulation; has difficulty composing sentences or making up stories"),
                (8, "Eyes tire quickly when reading books, yet can watch television for long stretches"),
                (9, "Lying face down, cannot lift head, neck, chest, and limbs off the floor (airplane position)"),
                (10, "Likes listening to stories but not reading; remembers what is heard, forgets what is seen"),
                (11, "Bumps into things when walking or running; poor at throwing and catching with peers; trouble with lining up and games"),
            ],
        ),
        (
            NEURAL_INHIBITION,
            "II. Cerebral Inhibition Difficulties",
            &[
                (12, "Distractible and inattentive, fidgets constantly, or looks around during class"),
                (13, "Picky eating: refuses fruit, soft-skinned foods, meat, or eggs; eats only plain rice, milk, and the like"),
                (14, "Shy; hides from strangers, or nervously wrings clothing, frowns, and stutters without getting words out"),
                (15, "Easily worked up by films and television; jumps and shouts when excited; dares not watch frightening scenes"),
                (16, "Severely afraid of the dark; needs company in dim places, refuses to go out at night, avoids empty rooms"),
                (17, "Cannot sleep in an unfamiliar bed or with a different pillow or blanket; worries about sleeping arrangements when away"),
                (18, "Feels uncomfortable when someone cleans their nose or ears with a cotton swab"),
                (19, "Leans on or clings to family members, like a spoiled or overindulged child"),
                (20, "Must touch a blanket corner, clothing, or a toy to fall asleep, or becomes restless and sleeps poorly"),
            ],
        ),
        (
            TACTILE_DEFENSIVENESS,
            "III. Tactile Defensiveness and Under-Responsiveness",
            &[
                (21, "Bad tempered, especially irritable with family; flares up over trifles and argues unreasonably"),
                (22, "Soon after arriving somewhere new or crowded, asks to leave or runs off alone"),
                (23, "After a minor illness, repeatedly says they dislike kindergarten; develops fear of it for no reason or over small matters"),
                (24, "Often sucks fingers or bites nails; dislikes having their nails trimmed by others"),
                (25, "Dislikes having the face touched; treats face-washing, hair-washing, or haircuts as the worst ordeal"),
                (26, "Resents skin contact when an adult pulls at sleeves or socks or helps with dressing"),
                (27, "During games or play with toys, worries about others closing in from behind, and is distressed by it"),
                (28, "Touches everything constantly, yet avoids the surface of blankets and knitted toys"),
                (29, "Prefers loose long-sleeved clothing; seldom wears sweaters or jackets even when it is not cold"),
                (30, "Enjoys chatting and contact-free interaction, but will not link shoulders or make skin contact with friends"),
                (31, "Sensitive to certain fabrics; dislikes clothes made from them"),
                (32, "Sensitive about their own affairs, easily upset; cannot tolerate changes to plans or outcomes"),
                (33, "Complains endlessly of pain from trivial bruises, small bumps, and minor cuts"),
                (34, "Stubborn and uncooperative; insists on doing things their own way, with no flexibility"),
            ],
        ),
        (
            DYSPRAXIA,
            "IV. Developmental Dyspraxia",
            &[
                (35, "At three or four, still cannot wash hands or wipe themselves after using the toilet"),
                (36, "At three or four, still cannot use chopsticks, keeps eating with a spoon, cannot hold a pen"),
                (37, "At four or five, cannot play on large climb-up, climb-down, or crawl-through toys"),
                (38, "At five or six, cannot stand up to pump a swing, climb a rope net, or shinny up a pole"),
                (39, "Always very slow at, or incapable of, putting on socks and clothes, buttoning, and tying shoelaces"),
                (40, "After starting school, still cannot bathe alone; hopping on one foot and rope-skipping come out poorly and never improve"),
                (41, "After starting school, pencil writing, cut-and-paste work, and coloring are done poorly or very slowly"),
                (42, "Regularly makes a mess at the dinner table; tidying the desk or toys on request is a struggle"),
                (43, "Clumsy at handicrafts and housework; awkward grip when using tools"),
                (44, "Sluggish and unhurried in movement; strikingly inefficient at getting things done"),
                (45, "Constantly causes mishaps, tipping plates, spilling milk, falling off vehicles; needs special watching"),
            ],
        ),
        (
            VISUAL_SPATIAL,
            "V. Visual-Spatial and Form Perception",
            &[
                (46, "Was always worse than others at building blocks when young"),
                (47, "Often fails to reach the destination on outings, gets lost easily, dislikes unfamiliar places"),
                (48, "Poor at crayon coloring and pencil writing, slower than others, often strays outside outlines or grid squares"),
                (49, "Always worse than others at jigsaw puzzles; trouble telling similar models or patterns apart"),
                (50, "Cannot easily pick out or recognize a particular figure within a busy background"),
            ],
        ),
        (
            PROPRIOCEPTION,
            "VI. Proprioception (Gravitational Insecurity)",
            &[
                (51, "Withdrawn, dislikes going out to play, has few friends, taciturn; prefers being alone or helping at home"),
                (52, "Hesitates on stairs and when crossing the street; feels top-heavy at heights and dares not look around or move"),
                (53, "When lifted high, anxiously reaches for the ground with the feet; settles and cooperates only with a trusted helper"),
                (54, "Avoids jumping from high to low; shows great fear of heights and of any risk of falling"),
                (55, "Dislikes being upside down: avoids somersaults, rolling, and indoor rough-and-tumble games"),
                (56, "No interest in amusement rides; dislikes toys that move"),
                (57, "Slow with unusual movements such as getting in and out of cars, moving front seat to back, or walking on uneven ground"),
                (58, "Very slow on stairs, gripping the handrail tightly; avoids even simple climbs with good handholds"),
                (59, "Loses balance easily when spinning; is frightened when a vehicle turns too fast"),
                (60, "Dislikes walking on raised surfaces, complaining or feeling they are too high"),
            ],
        ),
        (
            EMOTIONAL_SOCIAL,
            "VII. Emotional and Self-Image Problems",
            &[
                (61, "Grades drop sharply, seems absent-minded, is easily distracted from study, often has emotional or behavioral problems"),
                (62, "Hot tempered with poor self-control; fighting, name-calling, and other bad behavior worsen"),
            ],
        ),
        (
            STRESS_TOLERANCE,
            "VIII. Recent Condition and Stress Tolerance",
            &[
                (63, "Often cannot bear demands from teachers, schoolwork, or surroundings; easily frustrated"),
                (64, "Feels bad about their own image, considers themselves inferior, develops emotional and behavioral problems"),
            ],
        ),
    ];

    let mut items = Vec::with_capacity(64);
    for (dimension, section, entries) in sections {
        for &(id, text) in entries {
            items.push(Item {
                id,
                text: text.to_string(),
                dimension: dimension.to_string(),
                section: Some(section.to_string()),
            });
        }
    }
    items
}

fn option(label: &str, score: i32) -> AnswerOption {
    AnswerOption {
        label: label.to_string(),
        score,
    }
}
