pub mod band_filter;
pub mod pipeline;
pub mod scoring;

pub use band_filter::{filter_by_experience_band, ExperienceBand};
pub use pipeline::{MatchingEngine, RankConfig};
pub use scoring::{score, score_skill_sets, MatchBand, MatchResult, SkillScore};
