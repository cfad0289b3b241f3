use tracing::debug;

use super::scoring::{score, MatchResult};
use crate::{run_id, CandidateProfile, JobPosting};

/// Ranking knobs with env overrides, resolved once at construction.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Results below this percentage are dropped (0 keeps everything).
    pub min_percentage: u8,
    /// Cap on returned results; `None` returns the full ranking.
    pub max_results: Option<usize>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            min_percentage: env_min_percentage(),
            max_results: env_max_results(),
        }
    }
}

fn env_min_percentage() -> u8 {
    std::env::var("TF_MIN_MATCH_PERCENTAGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn env_max_results() -> Option<usize> {
    std::env::var("TF_MAX_RANKED_RESULTS")
        .ok()
        .and_then(|s| s.parse().ok())
}

pub struct MatchingEngine {
    config: RankConfig,
}

impl Default for MatchingEngine {
    /// Engine with env-derived `RankConfig`.
    fn default() -> Self {
        Self::new(RankConfig::default())
    }
}

impl MatchingEngine {
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    /// Scores every job for the candidate and returns a fresh ranking,
    /// descending by match percentage. The sort is stable, so ties keep
    /// their input order and identical inputs always produce identical
    /// output. The input slice is never mutated.
    ///
    /// A degenerate record (no skills on either side) scores 0 and stays
    /// in the ranking unless `min_percentage` filters it; one bad record
    /// never aborts the pass.
    pub fn rank_jobs(&self, candidate: &CandidateProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
        let mut ranked: Vec<MatchResult> = jobs
            .iter()
            .map(|job| score(candidate, job))
            .filter(|result| result.match_percentage >= self.config.min_percentage)
            .collect();

        ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        if let Some(max) = self.config.max_results {
            ranked.truncate(max);
        }

        debug!(
            run_id = run_id::get(),
            candidate_id = %candidate.id,
            scored = jobs.len(),
            returned = ranked.len(),
            "ranked jobs for candidate"
        );

        ranked
    }
}
