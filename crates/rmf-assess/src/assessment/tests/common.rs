use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{Answer, AssessmentId, AssessmentSubmission};
use crate::assessment::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use crate::assessment::router::assessment_router;
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::AssessmentService;
use crate::catalog::{
    ActionCatalog, ActionTemplate, CategoryActions, FrameworkFunction, QuestionCatalog,
    QuestionSpec, Severity,
};

/// Single-function catalog: questions Q1 and Q2 in category C under
/// function F, both weight 1.
pub(super) fn mini_catalog() -> QuestionCatalog {
    QuestionCatalog::new(
        vec![FrameworkFunction {
            id: "f",
            code: "F",
            name: "Function F",
            color: "#112233",
        }],
        vec![
            QuestionSpec {
                id: "q1",
                function: "f",
                category: "C",
                category_name: "Category C",
                text: "First practice statement.",
                weight: 1.0,
            },
            QuestionSpec {
                id: "q2",
                function: "f",
                category: "C",
                category_name: "Category C",
                text: "Second practice statement.",
                weight: 1.0,
            },
        ],
    )
}

/// Two templates for category C (critical below 2, high below 3) plus a
/// never-assessed category D with a single low action.
pub(super) fn mini_actions() -> ActionCatalog {
    ActionCatalog::new(vec![
        CategoryActions {
            function: "f",
            category: "C",
            category_name: "Category C",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Close the critical gap in C",
                    description: "Critical remediation for category C.",
                    timeline: "0-1 months",
                    resources: "Risk team",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Raise C to a defined practice",
                    description: "High-priority remediation for category C.",
                    timeline: "1-3 months",
                    resources: "Risk team",
                },
            ],
        },
        CategoryActions {
            function: "f",
            category: "D",
            category_name: "Category D",
            actions: vec![ActionTemplate {
                severity: Severity::Low,
                threshold: 2.0,
                title: "Start a practice in D",
                description: "Low-priority remediation for category D.",
                timeline: "3-6 months",
                resources: "Ops team",
            }],
        },
    ])
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(Arc::new(mini_catalog()), Arc::new(mini_actions()))
}

pub(super) fn answer(question_id: &str, score: u8) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        score,
    }
}

pub(super) fn submission(answers: Vec<Answer>) -> AssessmentSubmission {
    AssessmentSubmission {
        industry: "technology".to_string(),
        organization_name: Some("Acme Analytics".to_string()),
        answers,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
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

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(AssessmentService::new(
        repository.clone(),
        Arc::new(mini_catalog()),
        Arc::new(mini_actions()),
    ));
    (service, repository)
}

pub(super) fn router_with_service(service: Arc<AssessmentService<MemoryRepository>>) -> axum::Router {
    assessment_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
