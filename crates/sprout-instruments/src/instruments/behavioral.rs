use std::sync::LazyLock;

use sprout_core::models::answer::AnswerSet;
use sprout_core::models::instrument::{AnswerOption, InstrumentKind, Item};
use sprout_core::models::score::ScoreResult;

use crate::Instrument;
use crate::scoring::{self, FactorDefinition};

/// Factor ids. `HYPERACTIVITY_INDEX` doubles as the instrument's headline
/// metric; its item set overlaps the other factors.
pub const CONDUCT_PROBLEMS: &str = "conduct_problems";
pub const LEARNING_PROBLEMS: &str = "learning_problems";
pub const PSYCHOSOMATIC: &str = "psychosomatic";
pub const IMPULSIVE_HYPERACTIVE: &str = "impulsive_hyperactive";
pub const ANXIETY: &str = "anxiety";
pub const HYPERACTIVITY_INDEX: &str = "hyperactivity_index";

/// Display-only tag for items that belong to no scored factor.
pub const OTHER_BEHAVIOR: &str = "other_behavior";

/// 48-item parent behavioral inventory (Conners Parent Symptom
/// Questionnaire). Items rated 0–3; factors scored as answered-item means.
pub struct Behavioral;

impl Instrument for Behavioral {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Behavioral
    }

    fn title(&self) -> &str {
        "Hyperactivity and Attention Assessment (Conners)"
    }

    fn description(&self) -> &str {
        "Based on the 48-item Conners Parent Symptom Questionnaire. Screens \
         conduct, learning, psychosomatic, impulsive-hyperactive, and anxiety \
         problems in children."
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            let entries: [(u32, &str, &str); 48] = [
                (1, "Picks at things (nails, fingers, hair, clothing)", OTHER_BEHAVIOR),
                (2, "Sassy to grown-ups, rude and reckless", CONDUCT_PROBLEMS),
                (3, "Has trouble getting along with friends and classmates", OTHER_BEHAVIOR),
                (4, "Excitable, impulsive", IMPULSIVE_HYPERACTIVE),
                (5, "Wants to run and dominate things", IMPULSIVE_HYPERACTIVE),
                (6, "Sucks or chews (thumb, clothing, blankets)", OTHER_BEHAVIOR),
                (7, "Cries easily or often", OTHER_BEHAVIOR),
                (8, "Easily provoked, carries a chip on the shoulder", CONDUCT_PROBLEMS),
                (9, "Daydreams", OTHER_BEHAVIOR),
                (10, "Difficulty in learning", LEARNING_PROBLEMS),
                (11, "Constantly feels restless and fidgety", IMPULSIVE_HYPERACTIVE),
                (12, "Fearful of new situations, strangers, new places, or going to school", ANXIETY),
                (13, "Restless, always up and on the go", IMPULSIVE_HYPERACTIVE),
                (14, "Destructive", CONDUCT_PROBLEMS),
                (15, "Tells lies or stories that are not true", OTHER_BEHAVIOR),
                (16, "Shy", ANXIETY),
                (17, "Gets into more trouble than others the same age", OTHER_BEHAVIOR),
                (18, "Speech differs from children the same age (baby talk, stuttering, hard to understand)", OTHER_BEHAVIOR),
                (19, "Denies mistakes or blames others", CONDUCT_PROBLEMS),
                (20, "Quarrelsome", CONDUCT_PROBLEMS),
                (21, "Pouts and sulks", CONDUCT_PROBLEMS),
                (22, "Sometimes takes money or belongings from parents or others", CONDUCT_PROBLEMS),
                (23, "Disobeys teachers and parents, or obeys but resentfully", CONDUCT_PROBLEMS),
                (24, "More afraid than others of being alone, illness, or death", ANXIETY),
                (25, "Fails to finish things", LEARNING_PROBLEMS),
                (26, "Feelings easily hurt", OTHER_BEHAVIOR),
                (27, "Bullies the weak and throws weight around", CONDUCT_PROBLEMS),
                (28, "Repeats an activity over and over", OTHER_BEHAVIOR),
                (29, "Cruel", OTHER_BEHAVIOR),
                (30, "Childish or immature (wants unneeded help, clings, needs constant reassurance)", OTHER_BEHAVIOR),
                (31, "Distractible, short attention span", LEARNING_PROBLEMS),
                (32, "Headaches", PSYCHOSOMATIC),
                (33, "Mood changes quickly and drastically", CONDUCT_PROBLEMS),
                (34, "Dislikes or does not follow rules and restrictions", CONDUCT_PROBLEMS),
                (35, "Fights constantly", OTHER_BEHAVIOR),
                (36, "Does not get along well with brothers or sisters", OTHER_BEHAVIOR),
                (37, "Easily frustrated when facing difficulties", LEARNING_PROBLEMS),
                (38, "Disturbs other children", OTHER_BEHAVIOR),
                (39, "Basically an unhappy child", CONDUCT_PROBLEMS),
                (40, "Problems with eating (poor appetite, up between bites)", OTHER_BEHAVIOR),
                (41, "Stomach aches", PSYCHOSOMATIC),
                (42, "Problems with sleep (cannot fall asleep, up too early, up in the night)", OTHER_BEHAVIOR),
                (43, "Frequently complains of aches and pains", PSYCHOSOMATIC),
                (44, "Vomiting or nausea", PSYCHOSOMATIC),
                (45, "Feels cheated in the family circle", OTHER_BEHAVIOR),
                (46, "Boasts and brags", OTHER_BEHAVIOR),
                (47, "Often imagines being threatened", ANXIETY),
                (48, "Bowel problems (frequently loose, irregular habits, constipation)", PSYCHOSOMATIC),
            ];

            entries
                .iter()
                .map(|&(id, text, dimension)| Item {
                    id,
                    text: text.to_string(),
                    dimension: dimension.to_string(),
                    section: None,
                })
                .collect()
        });
        &ITEMS
    }

    fn options(&self) -> &[AnswerOption] {
        static OPTIONS: LazyLock<Vec<AnswerOption>> = LazyLock::new(|| {
            vec![
                option("Not at all (0)", 0),
                option("Just a little (1)", 1),
                option("Pretty much (2)", 2),
                option("Very much (3)", 3),
            ]
        });
        &OPTIONS
    }

    fn score(&self, _active_items: &[&Item], answers: &AnswerSet) -> ScoreResult {
        scoring::score_behavioral(answers)
    }
}

/// The six scored factors. Item sets overlap: `hyperactivity_index` reuses
/// items from the conduct, learning, and impulsive-hyperactive factors.
pub fn factors() -> &'static [FactorDefinition] {
    static FACTORS: LazyLock<Vec<FactorDefinition>> = LazyLock::new(|| {
        vec![
            factor(CONDUCT_PROBLEMS, &[2, 8, 14, 19, 20, 21, 22, 23, 27, 33, 34, 39]),
            factor(LEARNING_PROBLEMS, &[10, 25, 31, 37]),
            factor(PSYCHOSOMATIC, &[32, 41, 43, 44, 48]),
            factor(IMPULSIVE_HYPERACTIVE, &[4, 5, 11, 13]),
            factor(ANXIETY, &[12, 16, 24, 47]),
            factor(HYPERACTIVITY_INDEX, &[4, 7, 11, 13, 14, 25, 31, 33, 37, 38]),
        ]
    });
    &FACTORS
}

fn factor(id: &str, item_ids: &[u32]) -> FactorDefinition {
    FactorDefinition {
        id: id.to_string(),
        item_ids: item_ids.to_vec(),
    }
}

fn option(label: &str, score: i32) -> AnswerOption {
    AnswerOption {
        label: label.to_string(),
        score,
    }
}
