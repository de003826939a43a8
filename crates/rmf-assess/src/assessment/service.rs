use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::domain::{AssessmentId, AssessmentSubmission};
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use super::scoring::ScoringEngine;
use crate::catalog::{ActionCatalog, QuestionCatalog};

/// Service composing boundary validation, the scoring engine, and a
/// repository.
pub struct AssessmentService<R> {
    engine: ScoringEngine,
    repository: Arc<R>,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(
        repository: Arc<R>,
        questions: Arc<QuestionCatalog>,
        actions: Arc<ActionCatalog>,
    ) -> Self {
        Self {
            engine: ScoringEngine::new(questions, actions),
            repository,
        }
    }

    /// Score and persist a submission, returning the stored record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        validate_answers(&submission)?;

        let outcome = self.engine.score(&submission.answers);
        let record = AssessmentRecord {
            id: AssessmentId(Uuid::new_v4().to_string()),
            industry: submission.industry,
            organization_name: submission
                .organization_name
                .unwrap_or_else(|| "Anonymous".to_string()),
            answers: submission.answers,
            outcome,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored assessment for API responses.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

fn validate_answers(submission: &AssessmentSubmission) -> Result<(), ValidationError> {
    for answer in &submission.answers {
        // 0 is the unanswered sentinel; anything past 5 is out of contract.
        if answer.score > 5 {
            return Err(ValidationError::ScoreOutOfRange {
                question_id: answer.question_id.clone(),
                score: answer.score,
            });
        }
    }
    Ok(())
}

/// Rejections surfaced before any aggregation runs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("score {score} for question '{question_id}' is outside 0-5")]
    ScoreOutOfRange { question_id: String, score: u8 },
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
