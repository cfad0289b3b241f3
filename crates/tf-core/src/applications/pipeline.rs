use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, instrument, warn};

use super::stage::Stage;
use super::store::{ApplicationStore, StoreError};
use super::{Application, StageTransition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("illegal stage transition: {from} -> {to}")]
    InvalidTransition { from: Stage, to: Stage },
    #[error("application is already terminal at {stage}")]
    TerminalStage { stage: Stage },
    #[error("application {id} changed concurrently; now at {current_stage}")]
    Stale { id: String, current_stage: Stage },
    #[error("application not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Applies one stage transition to a copy of the record.
///
/// All-or-nothing by construction: the input is never mutated, and a
/// failed call returns only the error. On success the copy carries the new
/// stage, a refreshed `stage_updated_at`, a bumped version, and an
/// appended audit entry.
pub fn advance_stage(
    application: &Application,
    target: Stage,
    at: DateTime<Utc>,
) -> Result<Application, TransitionError> {
    let from = application.stage;

    if from.is_terminal() {
        return Err(TransitionError::TerminalStage { stage: from });
    }
    if !from.can_advance_to(target) {
        return Err(TransitionError::InvalidTransition { from, to: target });
    }

    let mut updated = application.clone();
    updated.stage = target;
    updated.stage_updated_at = at;
    updated.version += 1;
    updated.history.push(StageTransition { from, to: target, at });
    Ok(updated)
}

/// Recruiter-driven application lifecycle over an abstract store.
///
/// Every `advance` goes load → validate → compare-and-swap, so two
/// concurrent transitions from the same stored version cannot both
/// succeed; the loser re-validates against the now-current stage and
/// reports what actually went wrong.
pub struct ApplicationPipeline<S: ApplicationStore> {
    store: S,
}

impl<S: ApplicationStore> ApplicationPipeline<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates and persists a new application at `Submitted`.
    #[instrument(skip(self, resume_file, cover_letter))]
    pub fn submit(
        &self,
        job_id: &str,
        candidate_id: &str,
        resume_file: Option<String>,
        cover_letter: Option<String>,
    ) -> Result<Application, TransitionError> {
        let application = Application::submit(job_id, candidate_id, resume_file, cover_letter);
        self.store.insert(&application)?;

        info!(
            application_id = %application.id,
            job_id,
            candidate_id,
            "application submitted"
        );
        Ok(application)
    }

    /// Moves one application to `target`, surfacing every failure to the
    /// caller unchanged; stage corruption is a correctness issue the
    /// serving layer must report to the recruiter.
    #[instrument(skip(self))]
    pub fn advance(&self, id: &str, target: Stage) -> Result<Application, TransitionError> {
        let current = self
            .store
            .get(id)?
            .ok_or_else(|| TransitionError::NotFound(id.to_string()))?;

        let updated = advance_stage(&current, target, Utc::now())?;

        match self.store.compare_and_swap(current.version, &updated) {
            Ok(()) => {
                info!(
                    application_id = %id,
                    from = %current.stage,
                    to = %target,
                    version = updated.version,
                    "application stage advanced"
                );
                Ok(updated)
            }
            Err(StoreError::VersionConflict { .. }) => {
                // Lost a race. Re-validate against whatever won so the
                // caller sees the real obstacle, not just "try again".
                let now_current = self
                    .store
                    .get(id)?
                    .ok_or_else(|| TransitionError::NotFound(id.to_string()))?;

                warn!(
                    application_id = %id,
                    attempted = %target,
                    current_stage = %now_current.stage,
                    "lost concurrent stage transition race"
                );

                match advance_stage(&now_current, target, Utc::now()) {
                    Err(validation) => Err(validation),
                    Ok(_) => Err(TransitionError::Stale {
                        id: id.to_string(),
                        current_stage: now_current.stage,
                    }),
                }
            }
            Err(other) => Err(other.into()),
        }
    }
}
