//! Wire-shaped DTOs for the presentation layer.
//!
//! Field names are camelCase to stay byte-compatible with what the job
//! portal frontend already consumes; the core's own models stay
//! snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::applications::Application;
use crate::experience::normalize_experience;
use crate::matching::scoring::{MatchBand, MatchResult};
use crate::{CandidateProfile, JobPosting};

/// One card on the recommendations page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    /// Integer 0-100, suitable for direct display. Never a float.
    pub match_percentage: u8,
    pub band: MatchBand,
    pub badge_color: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl JobRecommendation {
    pub fn from_match(job: &JobPosting, result: &MatchResult) -> Self {
        let band = result.band();
        Self {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary.clone(),
            match_percentage: result.match_percentage,
            band,
            badge_color: band.color().to_string(),
            matched_skills: result.matched_skills.iter().cloned().collect(),
            missing_skills: result.missing_skills.iter().cloned().collect(),
        }
    }
}

/// One row of the recruiter dashboard's applications table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub application_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    /// Display-only: unknown experience renders as 0 here. Band filtering
    /// never uses this value.
    pub experience_years: u32,
    pub resume_file: Option<String>,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub stage: String,
}

impl ApplicationRow {
    pub fn from_parts(application: &Application, candidate: &CandidateProfile) -> Self {
        Self {
            application_id: application.id.clone(),
            applicant_name: candidate.name.clone(),
            applicant_email: candidate.email.clone(),
            experience_years: normalize_experience(&candidate.experience).display_years(),
            resume_file: application.resume_file.clone(),
            cover_letter: application.cover_letter.clone(),
            applied_at: application.submitted_at,
            stage: application.stage.to_string(),
        }
    }
}
