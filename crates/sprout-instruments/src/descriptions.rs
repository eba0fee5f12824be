//! Report prose for each dimension, plus the overall summary text.

use sprout_core::models::instrument::InstrumentKind;

use crate::instruments::{behavioral, sensory};

/// Sentinel dimension selecting the instrument's overall summary text.
pub const OVERALL_SUMMARY: &str = "ALL";

/// Prose describing what an elevated score on `dimension` looks like.
///
/// [`OVERALL_SUMMARY`] — and any dimension id the instrument does not
/// recognize — returns the instrument's general summary text, so the
/// report always has something sensible to print.
pub fn symptom_description(kind: InstrumentKind, dimension: &str) -> &'static str {
    match kind {
        InstrumentKind::Behavioral => match dimension {
            behavioral::CONDUCT_PROBLEMS => {
                "Defies authority, throws tantrums, lies, and shows aggressive behavior \
                 such as fighting or destroying property; has difficulty following \
                 social rules or group discipline."
            }
            behavioral::LEARNING_PROBLEMS => {
                "Attention wanders in class, homework goes unfinished, and grades are \
                 unstable; struggles to stay with mentally demanding tasks, often with \
                 a sense of frustration."
            }
            behavioral::PSYCHOSOMATIC => {
                "Frequently complains of physical discomfort such as headaches or \
                 stomach aches, especially under pressure or when facing difficult \
                 tasks; may show anxiety-driven physical reactions."
            }
            behavioral::IMPULSIVE_HYPERACTIVE => {
                "Restless and fidgety, finds quiet waiting difficult, frequently \
                 interrupts others, and acts without regard for consequences; easily \
                 excited, with weak self-control."
            }
            behavioral::ANXIETY => {
                "Excessive worry, shyness, and sensitivity; fears new environments and \
                 strangers, is prone to insecurity, and may show compulsive behaviors."
            }
            behavioral::HYPERACTIVITY_INDEX => {
                "A composite of the core symptoms of childhood hyperactivity. A high \
                 score usually indicates that further professional clinical evaluation \
                 is warranted."
            }
            _ => {
                "Scores on this dimension suggest the child may show some behavioral \
                 deviation in this area; observation and guidance in concrete everyday \
                 situations are recommended."
            }
        },
        InstrumentKind::Sensory => match dimension {
            sensory::VESTIBULAR_BALANCE => {
                "Vestibular imbalance: restless and inattentive, loves spinning without \
                 getting dizzy (or, conversely, is unusually prone to dizziness); falls \
                 easily when walking, has a poor sense of direction, and skips lines or \
                 characters when reading."
            }
            sensory::NEURAL_INHIBITION => {
                "Cerebral inhibition difficulties: lacking in confidence, shy and \
                 timid, afraid of the dark, clingy, and slow to adapt to unfamiliar \
                 settings; quick to excitement and quick to low spirits."
            }
            sensory::TACTILE_DEFENSIVENESS => {
                "Tactile over-defensiveness: overly sensitive to touch, dislikes being \
                 touched, picky about food, and hates certain clothing textures; \
                 emotionally unstable and quick to lose their temper."
            }
            sensory::DYSPRAXIA => {
                "Developmental dyspraxia: poorly developed large and small muscle \
                 control, clumsy movements, slow to learn new motor skills such as \
                 tying shoelaces, using chopsticks, or rope-skipping; weak self-care \
                 skills."
            }
            sensory::VISUAL_SPATIAL => {
                "Visual-spatial perception problems: poor visual discrimination and \
                 difficulty with spatial games such as puzzles and building blocks; \
                 writing strays outside the grid and character recognition is hard."
            }
            sensory::PROPRIOCEPTION => {
                "Proprioceptive problems (gravitational insecurity): extreme fear of \
                 heights and movement, dares not ride playground equipment, tense on \
                 stairs; stiff movements, and the poor sense of bodily control can \
                 shade into withdrawal."
            }
            sensory::EMOTIONAL_SOCIAL => {
                "Emotional and social-interaction problems: at school age, markedly \
                 poor emotional control, irritable and explosive, fighting and \
                 name-calling, or absent-minded and unable to concentrate."
            }
            sensory::STRESS_TOLERANCE => {
                "Stress tolerance and frustration: self-esteem runs low, the child \
                 considers themselves worse than others, gives up or resists when \
                 difficulties arise, and needs extra encouragement."
            }
            _ => {
                "Multiple signs of sensory integration dysfunction: the brain is not \
                 processing sensory information effectively, leading to difficulties \
                 with emotion, concentration, and motor coordination."
            }
        },
    }
}
