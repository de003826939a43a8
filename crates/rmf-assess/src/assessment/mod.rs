//! Assessment intake, scoring, and retrieval.
//!
//! A submission flows through boundary validation, the scoring pipeline
//! (aggregation, maturity classification, radar projection, action
//! prioritization), and finally the repository. All scoring components are
//! pure functions over the shared read-only catalogs, so any number of
//! submissions may be scored concurrently without coordination.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod scoring;
mod service;

pub use domain::{
    Answer, AssessmentId, AssessmentSubmission, CategoryScore, FunctionScore, PriorityAction,
    RadarPoint, ScoringOutcome,
};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use repository::{AssessmentRecord, AssessmentRepository, AssessmentView, RepositoryError};
pub use router::assessment_router;
pub use scoring::{reference_levels, MaturityLevel, MaturityLevelInfo, ScoringEngine};
pub use service::{AssessmentService, AssessmentServiceError, ValidationError};

#[cfg(test)]
mod tests;
