//! Skill token normalization. Every comparison between a user skill and a job
//! requirement goes through [`normalize_skill`] exactly once.

use unicode_normalization::UnicodeNormalization;

/// NFKC-folds, trims and lower-cases a skill name.
///
/// Returns an empty string for blank input; callers drop empty tokens.
pub fn normalize_skill(raw: &str) -> String {
    raw.nfkc().collect::<String>().trim().to_lowercase()
}

/// Normalizes a list of skill names, dropping blanks. Order and duplicates are kept.
pub fn normalize_all<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .map(normalize_skill)
        .filter(|token| !token.is_empty())
        .collect()
}
