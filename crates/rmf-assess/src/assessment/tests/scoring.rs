use super::common::*;
use std::sync::Arc;

use crate::assessment::scoring::{MaturityLevel, ScoringEngine};
use crate::catalog::{ActionCatalog, FrameworkFunction, QuestionCatalog, QuestionSpec};

fn question(
    id: &'static str,
    function: &'static str,
    category: &'static str,
    weight: f64,
) -> QuestionSpec {
    QuestionSpec {
        id,
        function,
        category,
        category_name: "Category",
        text: "Practice statement.",
        weight,
    }
}

fn function(id: &'static str, name: &'static str) -> FrameworkFunction {
    FrameworkFunction {
        id,
        code: "FN",
        name,
        color: "#000000",
    }
}

fn engine_with(catalog: QuestionCatalog) -> ScoringEngine {
    ScoringEngine::new(Arc::new(catalog), Arc::new(mini_actions()))
}

#[test]
fn full_marks_reach_the_top_of_every_scale() {
    let outcome = engine().score(&[answer("q1", 5), answer("q2", 5)]);

    assert_eq!(outcome.overall_score, 100.0);
    assert_eq!(outcome.overall_maturity, MaturityLevel::Optimizing);

    let function_score = &outcome.function_scores["f"];
    assert_eq!(function_score.score_pct, 100.0);
    assert_eq!(function_score.avg_score, 5.0);
    assert_eq!(function_score.maturity, MaturityLevel::Optimizing);

    let category_score = &outcome.category_scores["C"];
    assert_eq!(category_score.avg_score, 5.0);
    assert_eq!(category_score.function, "f");

    // A perfect category never falls below any threshold.
    assert!(outcome
        .priority_actions
        .iter()
        .all(|action| action.category != "C"));
}

#[test]
fn unanswered_questions_drop_out_of_both_sides_of_the_ratio() {
    let outcome = engine().score(&[answer("q1", 1), answer("q2", 0)]);

    let category_score = &outcome.category_scores["C"];
    assert_eq!(category_score.avg_score, 1.0);
    assert_eq!(category_score.score_pct, 20.0);

    assert_eq!(outcome.overall_score, 20.0);
    assert_eq!(outcome.overall_maturity, MaturityLevel::Initial);

    // 1.0 sits below both C thresholds; unscored D triggers its low action.
    let categories: Vec<&str> = outcome
        .priority_actions
        .iter()
        .map(|action| action.category.as_str())
        .collect();
    assert_eq!(categories, vec!["C", "C", "D"]);
    assert_eq!(outcome.priority_actions[0].current_score, 1.0);
    assert_eq!(outcome.priority_actions[0].target_score, 2.0);
}

#[test]
fn empty_answer_set_scores_zero_without_errors() {
    let outcome = engine().score(&[]);

    assert_eq!(outcome.overall_score, 0.0);
    assert_eq!(outcome.overall_maturity, MaturityLevel::Initial);

    let function_score = &outcome.function_scores["f"];
    assert_eq!(function_score.score_pct, 0.0);
    assert_eq!(function_score.avg_score, 0.0);
    assert_eq!(function_score.maturity, MaturityLevel::Initial);

    // No answered questions means no category rows at all.
    assert!(outcome.category_scores.is_empty());
}

#[test]
fn duplicate_answers_keep_the_last_write_for_the_hierarchy() {
    let outcome = engine().score(&[answer("q1", 1), answer("q1", 5), answer("q2", 0)]);

    // The lookup keeps q1=5, while the overall pass sees the raw list.
    assert_eq!(outcome.category_scores["C"].avg_score, 5.0);
    assert_eq!(outcome.overall_score, 60.0);
}

#[test]
fn unknown_question_ids_are_ignored_by_the_hierarchy() {
    let outcome = engine().score(&[answer("q1", 5), answer("never-cataloged", 3)]);

    assert_eq!(outcome.function_scores["f"].score_pct, 100.0);
    // The overall pass runs over the raw answer list.
    assert_eq!(outcome.overall_score, 80.0);
}

#[test]
fn weights_shape_function_scores_but_never_the_overall() {
    let catalog = QuestionCatalog::new(
        vec![function("f", "Function F")],
        vec![
            question("q1", "f", "C", 3.0),
            question("q2", "f", "C", 1.0),
        ],
    );
    let outcome = engine_with(catalog).score(&[answer("q1", 5), answer("q2", 1)]);

    let function_score = &outcome.function_scores["f"];
    assert_eq!(function_score.score_pct, 80.0);
    assert_eq!(function_score.avg_score, 4.0);
    assert_eq!(function_score.maturity, MaturityLevel::Managed);

    // Unweighted overall: (5 + 1) out of 10.
    assert_eq!(outcome.overall_score, 60.0);
    assert_eq!(outcome.overall_maturity, MaturityLevel::Defined);
}

#[test]
fn zero_weight_excludes_a_question_from_aggregation() {
    let catalog = QuestionCatalog::new(
        vec![function("f", "Function F")],
        vec![
            question("q1", "f", "C", 0.0),
            question("q2", "f", "C", 1.0),
        ],
    );
    let outcome = engine_with(catalog).score(&[answer("q1", 5), answer("q2", 3)]);

    assert_eq!(outcome.function_scores["f"].avg_score, 3.0);
    assert_eq!(outcome.category_scores["C"].avg_score, 3.0);
}

#[test]
fn functions_without_questions_are_omitted() {
    let catalog = QuestionCatalog::new(
        vec![function("f", "Function F"), function("g", "Function G")],
        vec![
            question("q1", "f", "C", 1.0),
            question("q2", "f", "C", 1.0),
        ],
    );
    let outcome = engine_with(catalog).score(&[answer("q1", 4)]);

    assert!(outcome.function_scores.contains_key("f"));
    assert!(!outcome.function_scores.contains_key("g"));
    assert_eq!(outcome.radar_data.len(), 1);
}

#[test]
fn radar_points_follow_catalog_function_order() {
    let catalog = QuestionCatalog::new(
        vec![function("second", "Second"), function("first", "First")],
        vec![
            question("q1", "second", "S", 1.0),
            question("q2", "first", "F", 1.0),
        ],
    );
    let outcome = engine_with(catalog).score(&[answer("q1", 2), answer("q2", 4)]);

    let names: Vec<&str> = outcome
        .radar_data
        .iter()
        .map(|point| point.function.as_str())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
    assert!(outcome.radar_data.iter().all(|point| point.full_mark == 100));
}

#[test]
fn ratios_round_to_one_decimal() {
    let catalog = QuestionCatalog::new(
        vec![function("f", "Function F")],
        vec![
            question("q1", "f", "C", 1.0),
            question("q2", "f", "C", 1.0),
            question("q3", "f", "C", 1.0),
        ],
    );
    let outcome = engine_with(catalog).score(&[answer("q1", 5), answer("q2", 5), answer("q3", 4)]);

    let function_score = &outcome.function_scores["f"];
    assert_eq!(function_score.score_pct, 93.3);
    assert_eq!(function_score.avg_score, 4.7);
}

#[test]
fn every_score_stays_inside_its_bounds() {
    let answer_sets: Vec<Vec<crate::assessment::domain::Answer>> = vec![
        vec![],
        vec![answer("q1", 0), answer("q2", 0)],
        vec![answer("q1", 1)],
        vec![answer("q1", 3), answer("q2", 5)],
        vec![answer("q1", 5), answer("q2", 5)],
    ];

    for answers in answer_sets {
        let outcome = engine().score(&answers);
        assert!((0.0..=100.0).contains(&outcome.overall_score));
        for score in outcome.function_scores.values() {
            assert!((0.0..=100.0).contains(&score.score_pct));
            assert!((0.0..=5.0).contains(&score.avg_score));
        }
        for score in outcome.category_scores.values() {
            assert!((0.0..=100.0).contains(&score.score_pct));
            assert!((0.0..=5.0).contains(&score.avg_score));
        }
    }
}
