use std::collections::HashMap;

/// Answers collected during a quiz session, keyed by item id.
///
/// Keys are present only for items the respondent actually answered;
/// the quiz collaborator builds this incrementally and hands it to the
/// scoring engine once, immutable from then on.
pub type AnswerSet = HashMap<u32, i32>;
