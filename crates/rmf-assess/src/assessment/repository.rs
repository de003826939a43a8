use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::domain::{
    Answer, AssessmentId, CategoryScore, FunctionScore, PriorityAction, RadarPoint, ScoringOutcome,
};
use super::scoring::MaturityLevel;

/// Repository record for one scored submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub industry: String,
    pub organization_name: String,
    pub answers: Vec<Answer>,
    pub outcome: ScoringOutcome,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// API-facing view; the raw answer list stays server-side.
    pub fn response_view(&self) -> AssessmentView {
        AssessmentView {
            id: self.id.clone(),
            industry: self.industry.clone(),
            organization_name: self.organization_name.clone(),
            overall_score: self.outcome.overall_score,
            overall_maturity: self.outcome.overall_maturity,
            function_scores: self.outcome.function_scores.clone(),
            category_scores: self.outcome.category_scores.clone(),
            radar_data: self.outcome.radar_data.clone(),
            priority_actions: self.outcome.priority_actions.clone(),
            created_at: self.created_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub id: AssessmentId,
    pub industry: String,
    pub organization_name: String,
    pub overall_score: f64,
    pub overall_maturity: MaturityLevel,
    pub function_scores: IndexMap<String, FunctionScore>,
    pub category_scores: IndexMap<String, CategoryScore>,
    pub radar_data: Vec<RadarPoint>,
    pub priority_actions: Vec<PriorityAction>,
    pub created_at: DateTime<Utc>,
}
