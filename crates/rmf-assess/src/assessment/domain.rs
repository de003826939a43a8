use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::scoring::MaturityLevel;
use crate::catalog::Severity;

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// One per-question answer; score 0 marks an unanswered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub score: u8,
}

/// Submission payload accepted by the assessment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub industry: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    pub answers: Vec<Answer>,
}

/// Weighted result for one framework function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionScore {
    pub name: String,
    pub code: String,
    pub score_pct: f64,
    pub avg_score: f64,
    pub maturity: MaturityLevel,
    pub color: String,
}

/// Weighted result for one category within a function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub function: String,
    pub score_pct: f64,
    pub avg_score: f64,
    pub maturity: MaturityLevel,
}

/// One chart point per function for the radar summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub function: String,
    pub score: f64,
    #[serde(rename = "fullMark")]
    pub full_mark: u8,
}

/// A remediation action triggered by a category scoring below its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub id: String,
    pub function: String,
    pub category: String,
    pub category_name: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub timeline: String,
    pub resources: String,
    pub current_score: f64,
    pub target_score: f64,
}

/// Full scoring output for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub overall_score: f64,
    pub overall_maturity: MaturityLevel,
    pub function_scores: IndexMap<String, FunctionScore>,
    pub category_scores: IndexMap<String, CategoryScore>,
    pub radar_data: Vec<RadarPoint>,
    pub priority_actions: Vec<PriorityAction>,
}
