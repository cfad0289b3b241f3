use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use super::Application;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("application not found: {0}")]
    NotFound(String),
    #[error("duplicate application id: {0}")]
    Duplicate(String),
    #[error("version conflict on application {id}: expected {expected}, found {found}")]
    VersionConflict {
        id: String,
        expected: u64,
        found: u64,
    },
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persistence collaborator for application records.
///
/// The core only ever needs read-one, write-one, and a compare-and-swap
/// keyed on the record version; the backing implementation (relational,
/// document, in-memory) is the serving layer's choice. `compare_and_swap`
/// must be atomic per record so two concurrent stage transitions from the
/// same version cannot both land.
pub trait ApplicationStore {
    fn get(&self, id: &str) -> Result<Option<Application>, StoreError>;

    fn insert(&self, application: &Application) -> Result<(), StoreError>;

    /// Replaces the stored record only if its current version equals
    /// `expected_version`; otherwise fails with `VersionConflict` and
    /// leaves the record untouched.
    fn compare_and_swap(
        &self,
        expected_version: u64,
        updated: &Application,
    ) -> Result<(), StoreError>;
}

/// Mutex-backed store for tests and embedded callers.
#[derive(Default)]
pub struct InMemoryApplicationStore {
    records: Mutex<HashMap<String, Application>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Application>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ApplicationStore for InMemoryApplicationStore {
    fn get(&self, id: &str) -> Result<Option<Application>, StoreError> {
        Ok(self.lock().get(id).cloned())
    }

    fn insert(&self, application: &Application) -> Result<(), StoreError> {
        let mut records = self.lock();
        if records.contains_key(&application.id) {
            return Err(StoreError::Duplicate(application.id.clone()));
        }
        records.insert(application.id.clone(), application.clone());
        Ok(())
    }

    fn compare_and_swap(
        &self,
        expected_version: u64,
        updated: &Application,
    ) -> Result<(), StoreError> {
        let mut records = self.lock();
        let current = records
            .get(&updated.id)
            .ok_or_else(|| StoreError::NotFound(updated.id.clone()))?;

        if current.version != expected_version {
            return Err(StoreError::VersionConflict {
                id: updated.id.clone(),
                expected: expected_version,
                found: current.version,
            });
        }

        records.insert(updated.id.clone(), updated.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::Stage;

    fn stored_app(store: &InMemoryApplicationStore) -> Application {
        let app = Application::submit("job-1", "cand-1", None, None);
        store.insert(&app).unwrap();
        app
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let store = InMemoryApplicationStore::new();
        let app = stored_app(&store);

        let fetched = store.get(&app.id).unwrap().unwrap();
        assert_eq!(fetched, app);
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let store = InMemoryApplicationStore::new();
        let app = stored_app(&store);

        assert_eq!(
            store.insert(&app),
            Err(StoreError::Duplicate(app.id.clone()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn compare_and_swap_requires_matching_version() {
        let store = InMemoryApplicationStore::new();
        let app = stored_app(&store);

        let mut updated = app.clone();
        updated.stage = Stage::ResumeScreening;
        updated.version = 1;

        store.compare_and_swap(0, &updated).unwrap();
        assert_eq!(store.get(&app.id).unwrap().unwrap().version, 1);

        // A second swap from the stale version must fail and change nothing.
        let err = store.compare_and_swap(0, &updated).unwrap_err();
        assert_eq!(
            err,
            StoreError::VersionConflict {
                id: app.id.clone(),
                expected: 0,
                found: 1,
            }
        );
        assert_eq!(store.get(&app.id).unwrap().unwrap().stage, Stage::ResumeScreening);
    }

    #[test]
    fn compare_and_swap_on_missing_record_is_not_found() {
        let store = InMemoryApplicationStore::new();
        let app = Application::submit("job-1", "cand-1", None, None);

        assert_eq!(
            store.compare_and_swap(0, &app),
            Err(StoreError::NotFound(app.id.clone()))
        );
    }
}
