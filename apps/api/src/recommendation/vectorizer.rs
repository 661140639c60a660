use std::collections::HashSet;

use crate::recommendation::vocabulary::Vocabulary;

/// Binary presence vector over a [`Vocabulary`]: position `i` is `1.0` when the
/// entity has `vocabulary.tokens()[i]`, else `0.0`.
pub type SkillVector = Vec<f64>;

/// Encodes an entity's normalized tokens against the vocabulary.
///
/// Exact token equality only. Duplicates in `tokens` do not raise the weight.
pub fn vectorize(vocabulary: &Vocabulary, tokens: &[String]) -> SkillVector {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    vocabulary
        .tokens()
        .iter()
        .map(|token| if present.contains(token.as_str()) { 1.0 } else { 0.0 })
        .collect()
}
