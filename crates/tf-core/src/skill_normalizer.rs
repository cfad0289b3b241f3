use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;

/// Set of canonical skill tokens. `BTreeSet` keeps iteration deterministic
/// so matched/missing lists render in a stable order.
///
/// Invariant: every member is a fixed point of [`normalize_skill`].
pub type SkillSet = BTreeSet<String>;

/// Canonicalizes one skill token: NFKC, lowercase, trim, and collapse
/// internal whitespace runs (including fullwidth spaces) to single spaces.
///
/// Matching is exact canonical equality only. No alias dictionary and no
/// fuzzy distance here; synonym-aware matching is a future extension.
pub fn normalize_skill(skill: &str) -> String {
    skill
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonicalizes a raw skill list into a deduplicated [`SkillSet`].
/// Blank entries are dropped.
pub fn normalize_skill_set(skills: &[String]) -> SkillSet {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Canonicalized, sorted, deduplicated Vec for storage collaborators.
pub fn normalize_skills_vec(skills: &[String]) -> Vec<String> {
    normalize_skill_set(skills).into_iter().collect()
}
