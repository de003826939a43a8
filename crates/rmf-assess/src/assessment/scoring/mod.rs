//! The scoring pipeline: weighted aggregation over the catalog hierarchy,
//! maturity classification, the radar chart projection, and threshold-driven
//! action prioritization. Every piece is a pure function of its inputs; the
//! engine only carries shared handles to the read-only catalogs.

mod aggregate;
mod maturity;
mod priorities;
mod radar;

pub use maturity::{reference_levels, MaturityLevel, MaturityLevelInfo};

use std::sync::Arc;

use super::domain::{Answer, ScoringOutcome};
use crate::catalog::{ActionCatalog, QuestionCatalog};

/// Stateless engine folding a flat answer list through the shared catalogs.
pub struct ScoringEngine {
    questions: Arc<QuestionCatalog>,
    actions: Arc<ActionCatalog>,
}

impl ScoringEngine {
    pub fn new(questions: Arc<QuestionCatalog>, actions: Arc<ActionCatalog>) -> Self {
        Self { questions, actions }
    }

    pub fn score(&self, answers: &[Answer]) -> ScoringOutcome {
        let breakdown = aggregate::aggregate(answers, &self.questions);
        let radar_data = radar::radar_series(&breakdown.function_scores);
        let priority_actions = priorities::prioritize(&breakdown.category_scores, &self.actions);

        ScoringOutcome {
            overall_score: breakdown.overall_pct,
            overall_maturity: MaturityLevel::classify(breakdown.overall_avg),
            function_scores: breakdown.function_scores,
            category_scores: breakdown.category_scores,
            radar_data,
            priority_actions,
        }
    }
}
