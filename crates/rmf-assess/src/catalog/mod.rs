//! Process-wide, read-only catalogs: the framework question bank, the
//! remediation action templates, and industry guidance profiles. Loaded once
//! at startup and never mutated; iteration order is part of the contract
//! because downstream chart and action consumers rely on it.

mod actions;
mod industries;
mod questions;

pub use industries::{industry_profiles, IndustryProfile, IndustryRecommendation};

use serde::{Deserialize, Serialize};

/// Top-level grouping of the framework (govern, map, measure, manage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameworkFunction {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// A single maturity question owned by a category within a function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub function: &'static str,
    pub category: &'static str,
    pub category_name: &'static str,
    pub text: &'static str,
    pub weight: f64,
}

/// Ordered question bank for one framework revision.
#[derive(Debug)]
pub struct QuestionCatalog {
    functions: Vec<FrameworkFunction>,
    questions: Vec<QuestionSpec>,
}

impl QuestionCatalog {
    pub fn new(functions: Vec<FrameworkFunction>, questions: Vec<QuestionSpec>) -> Self {
        Self {
            functions,
            questions,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            questions::standard_functions(),
            questions::standard_questions(),
        )
    }

    pub fn functions(&self) -> &[FrameworkFunction] {
        &self.functions
    }

    pub fn questions(&self) -> &[QuestionSpec] {
        &self.questions
    }

    pub fn questions_for(&self, function_id: &str) -> Vec<&QuestionSpec> {
        self.questions
            .iter()
            .filter(|question| question.function == function_id)
            .collect()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

/// Severity tag carried by remediation action templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Remediation action template applicable below a score threshold.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionTemplate {
    pub severity: Severity,
    pub threshold: f64,
    pub title: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub resources: &'static str,
}

/// Action templates for one category, kept in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryActions {
    pub function: &'static str,
    pub category: &'static str,
    pub category_name: &'static str,
    pub actions: Vec<ActionTemplate>,
}

/// Ordered remediation catalog covering every assessed category.
#[derive(Debug)]
pub struct ActionCatalog {
    groups: Vec<CategoryActions>,
}

impl ActionCatalog {
    pub fn new(groups: Vec<CategoryActions>) -> Self {
        Self { groups }
    }

    pub fn standard() -> Self {
        Self::new(actions::standard_action_groups())
    }

    pub fn groups(&self) -> &[CategoryActions] {
        &self.groups
    }

    pub fn total_actions(&self) -> usize {
        self.groups.iter().map(|group| group.actions.len()).sum()
    }
}
