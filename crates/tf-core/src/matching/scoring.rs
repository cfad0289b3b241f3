use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::skill_normalizer::{normalize_skill_set, SkillSet};
use crate::{CandidateProfile, JobPosting};

/// Pure skill-coverage score between one candidate set and one job set.
///
/// Invariants: `matched ∪ missing` equals the job set, `matched ∩ missing`
/// is empty, and candidate skills the job never asked for appear in
/// neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillScore {
    /// Required-skill coverage, integer 0-100.
    pub percentage: u8,
    pub matched: SkillSet,
    pub missing: SkillSet,
}

/// Scores required-skill coverage: `round_half_up(100 * |∩| / |job|)`.
///
/// A job with no declared requirements scores 0 — absence of requirements
/// is not rewarded, and the division never sees a zero denominator.
/// Pure function: the result depends only on the two input sets.
pub fn score_skill_sets(candidate: &SkillSet, job: &SkillSet) -> SkillScore {
    if job.is_empty() {
        return SkillScore {
            percentage: 0,
            matched: SkillSet::new(),
            missing: SkillSet::new(),
        };
    }

    let matched: SkillSet = job.intersection(candidate).cloned().collect();
    let missing: SkillSet = job.difference(candidate).cloned().collect();

    // Round-half-up in integer arithmetic: (100m + j/2) / j, kept exact
    // by scaling both sides by 2. |matched| <= |job| bounds this at 100.
    let percentage = ((200 * matched.len() + job.len()) / (2 * job.len())).min(100) as u8;

    SkillScore {
        percentage,
        matched,
        missing,
    }
}

/// Candidate-to-job match, recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub candidate_id: String,
    pub match_percentage: u8,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
}

impl MatchResult {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_percentage(self.match_percentage)
    }
}

/// Scores one candidate against one job posting. Both raw skill lists are
/// canonicalized here, so callers may pass profiles straight from the feed.
pub fn score(candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
    let candidate_skills = normalize_skill_set(&candidate.skills);
    let job_skills = normalize_skill_set(&job.skills);
    let skill_score = score_skill_sets(&candidate_skills, &job_skills);

    MatchResult {
        job_id: job.id.clone(),
        candidate_id: candidate.id.clone(),
        match_percentage: skill_score.percentage,
        matched_skills: skill_score.matched,
        missing_skills: skill_score.missing,
    }
}

/// Severity band over the match percentage. The thresholds are part of the
/// presentation contract: inclusive lower bounds at 80 / 60 / 40.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchBand {
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchBand {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80..=u8::MAX => MatchBand::Strong,
            60..=79 => MatchBand::Good,
            40..=59 => MatchBand::Fair,
            _ => MatchBand::Weak,
        }
    }

    /// Badge color used by the recommendations page.
    pub fn color(self) -> &'static str {
        match self {
            MatchBand::Strong => "#10B981",
            MatchBand::Good => "#F59E0B",
            MatchBand::Fair => "#F97316",
            MatchBand::Weak => "#EF4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_job_requirements_score_zero() {
        let result = score_skill_sets(&set(&["python", "sql"]), &SkillSet::new());
        assert_eq!(result.percentage, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn superset_candidate_scores_exactly_100() {
        let result = score_skill_sets(&set(&["rust", "sql", "docker"]), &set(&["rust", "sql"]));
        assert_eq!(result.percentage, 100);
        assert!(result.missing.is_empty());
        assert_eq!(result.matched, set(&["rust", "sql"]));
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        let result = score_skill_sets(&set(&["python", "sql"]), &set(&["python", "sql", "react"]));

        assert_eq!(result.percentage, 67);
        assert_eq!(result.matched, set(&["python", "sql"]));
        assert_eq!(result.missing, set(&["react"]));
    }

    #[test]
    fn rounds_half_up() {
        // 1/8 = 12.5% → 13
        let job = set(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let result = score_skill_sets(&set(&["a"]), &job);
        assert_eq!(result.percentage, 13);
    }

    #[test]
    fn matched_and_missing_partition_the_job_set() {
        let candidate = set(&["python", "go", "terraform"]);
        let job = set(&["python", "react", "sql"]);
        let result = score_skill_sets(&candidate, &job);

        let mut union = result.matched.clone();
        union.extend(result.missing.iter().cloned());
        assert_eq!(union, job);
        assert!(result.matched.intersection(&result.missing).next().is_none());
        // Extra candidate skills belong to neither set.
        assert!(!union.contains("go"));
        assert!(!union.contains("terraform"));
    }

    #[test]
    fn swapping_arguments_is_not_symmetric() {
        let candidate = set(&["python", "sql"]);
        let job = set(&["python", "sql", "react"]);

        let forward = score_skill_sets(&candidate, &job);
        let swapped = score_skill_sets(&job, &candidate);

        assert_ne!(forward.percentage, swapped.percentage);
        assert_ne!(forward.missing, swapped.missing);
        assert_eq!(swapped.percentage, 100);
    }

    #[test]
    fn score_normalizes_raw_profile_lists() {
        let candidate = CandidateProfile {
            id: "cand-1".into(),
            skills: vec!["Python".into(), "  SQL ".into()],
            ..CandidateProfile::default()
        };
        let job = JobPosting {
            id: "job-1".into(),
            skills: vec!["python".into(), "sql".into(), "React".into()],
            ..JobPosting::default()
        };

        let result = score(&candidate, &job);
        assert_eq!(result.match_percentage, 67);
        assert_eq!(result.job_id, "job-1");
        assert_eq!(result.candidate_id, "cand-1");
        assert_eq!(result.missing_skills, set(&["react"]));
    }

    #[test]
    fn band_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(MatchBand::from_percentage(100), MatchBand::Strong);
        assert_eq!(MatchBand::from_percentage(80), MatchBand::Strong);
        assert_eq!(MatchBand::from_percentage(79), MatchBand::Good);
        assert_eq!(MatchBand::from_percentage(60), MatchBand::Good);
        assert_eq!(MatchBand::from_percentage(59), MatchBand::Fair);
        assert_eq!(MatchBand::from_percentage(40), MatchBand::Fair);
        assert_eq!(MatchBand::from_percentage(39), MatchBand::Weak);
        assert_eq!(MatchBand::from_percentage(0), MatchBand::Weak);
    }

    #[test]
    fn band_labels_and_colors_are_stable() {
        assert_eq!(MatchBand::Strong.to_string(), "strong");
        assert_eq!(MatchBand::Weak.as_ref(), "weak");
        assert_eq!(MatchBand::Strong.color(), "#10B981");
        assert_eq!(MatchBand::Fair.color(), "#F97316");
    }
}
