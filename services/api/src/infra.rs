use metrics_exporter_prometheus::PrometheusHandle;
use rmf_assess::assessment::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError,
};
use rmf_assess::catalog::{industry_profiles, ActionCatalog, IndustryProfile, QuestionCatalog};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared handles to the read-only catalogs, loaded once at startup.
#[derive(Clone)]
pub(crate) struct CatalogState {
    pub(crate) questions: Arc<QuestionCatalog>,
    pub(crate) actions: Arc<ActionCatalog>,
    pub(crate) industries: Arc<Vec<IndustryProfile>>,
}

impl CatalogState {
    pub(crate) fn load() -> Self {
        Self {
            questions: Arc::new(QuestionCatalog::standard()),
            actions: Arc::new(ActionCatalog::standard()),
            industries: Arc::new(industry_profiles()),
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}
