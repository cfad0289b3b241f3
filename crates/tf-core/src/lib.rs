pub mod api;
pub mod applications;
pub mod experience;
pub mod logging;
pub mod matching;
pub mod run_id;
pub mod skill_normalizer;

use experience::ExperienceInput;
use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions. Everything except the
// raw skills list and the experience field is opaque to the core; the
// serving layer passes these records through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    /// Raw required-skill list as posted. Canonicalized on every scoring pass.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Raw skill list from resume extraction or manual profile entry.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Loosely-typed experience field; see `experience::ExperienceInput`
    /// for the shapes the upstream feed is allowed to send.
    #[serde(default)]
    pub experience: ExperienceInput,
}
