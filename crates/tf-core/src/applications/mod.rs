pub mod pipeline;
pub mod stage;
pub mod store;

pub use pipeline::{advance_stage, ApplicationPipeline, TransitionError};
pub use stage::Stage;
pub use store::{ApplicationStore, InMemoryApplicationStore, StoreError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::run_id;

/// One entry of the stage audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTransition {
    pub from: Stage,
    pub to: Stage,
    pub at: DateTime<Utc>,
}

/// A candidate's application to one job posting.
///
/// Created once on submission and mutated only through stage transitions;
/// the core never deletes a record (archival belongs to the persistence
/// collaborator). `version` is the optimistic concurrency token checked by
/// `ApplicationStore::compare_and_swap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub submitted_at: DateTime<Utc>,
    pub resume_file: Option<String>,
    pub cover_letter: Option<String>,
    pub stage: Stage,
    pub stage_updated_at: DateTime<Utc>,
    pub version: u64,
    #[serde(default)]
    pub history: Vec<StageTransition>,
}

impl Application {
    /// Builds a new application at the canonical initial stage.
    pub fn submit(
        job_id: &str,
        candidate_id: &str,
        resume_file: Option<String>,
        cover_letter: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: run_id::generate(),
            job_id: job_id.to_string(),
            candidate_id: candidate_id.to_string(),
            submitted_at: now,
            resume_file,
            cover_letter,
            stage: Stage::Submitted,
            stage_updated_at: now,
            version: 0,
            history: Vec::new(),
        }
    }
}
