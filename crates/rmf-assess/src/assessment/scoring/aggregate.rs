use std::collections::HashMap;

use indexmap::IndexMap;

use super::super::domain::{Answer, CategoryScore, FunctionScore};
use super::MaturityLevel;
use crate::catalog::QuestionCatalog;

/// Hierarchical score breakdown prior to the radar and action projections.
pub(crate) struct ScoreBreakdown {
    pub overall_pct: f64,
    pub overall_avg: f64,
    pub function_scores: IndexMap<String, FunctionScore>,
    pub category_scores: IndexMap<String, CategoryScore>,
}

struct CategoryAccumulator {
    weighted_sum: f64,
    weighted_max: f64,
    name: &'static str,
}

pub(crate) fn aggregate(answers: &[Answer], catalog: &QuestionCatalog) -> ScoreBreakdown {
    // Last write wins on duplicate question ids.
    let mut answer_map: HashMap<&str, u8> = HashMap::new();
    for answer in answers {
        answer_map.insert(answer.question_id.as_str(), answer.score);
    }

    let mut function_scores = IndexMap::new();
    let mut category_scores = IndexMap::new();

    for function in catalog.functions() {
        let questions = catalog.questions_for(function.id);
        if questions.is_empty() {
            continue;
        }

        let mut function_sum = 0.0;
        let mut function_max = 0.0;
        let mut categories: IndexMap<&'static str, CategoryAccumulator> = IndexMap::new();

        for question in questions {
            let score = answer_map.get(question.id).copied().unwrap_or(0);
            // 0 marks an unanswered question: it contributes neither achieved
            // nor attainable points, at either granularity.
            if score == 0 {
                continue;
            }

            let achieved = f64::from(score) * question.weight;
            let attainable = 5.0 * question.weight;
            function_sum += achieved;
            function_max += attainable;

            let slot = categories
                .entry(question.category)
                .or_insert(CategoryAccumulator {
                    weighted_sum: 0.0,
                    weighted_max: 0.0,
                    name: question.category_name,
                });
            slot.weighted_sum += achieved;
            slot.weighted_max += attainable;
        }

        let (function_pct, function_avg) = ratio_scores(function_sum, function_max);
        function_scores.insert(
            function.id.to_string(),
            FunctionScore {
                name: function.name.to_string(),
                code: function.code.to_string(),
                score_pct: function_pct,
                avg_score: function_avg,
                maturity: MaturityLevel::classify(function_avg),
                color: function.color.to_string(),
            },
        );

        for (category_id, slot) in categories {
            let (category_pct, category_avg) = ratio_scores(slot.weighted_sum, slot.weighted_max);
            category_scores.insert(
                category_id.to_string(),
                CategoryScore {
                    name: slot.name.to_string(),
                    function: function.id.to_string(),
                    score_pct: category_pct,
                    avg_score: category_avg,
                    maturity: MaturityLevel::classify(category_avg),
                },
            );
        }
    }

    // Overall figures come from an unweighted pass over the raw answer list,
    // so question weights shape only the function and category granularity.
    let total_answered = answers.iter().filter(|answer| answer.score > 0).count();
    let total_score: u32 = answers.iter().map(|answer| u32::from(answer.score)).sum();
    let (overall_pct, overall_avg) =
        ratio_scores(f64::from(total_score), (total_answered * 5) as f64);

    ScoreBreakdown {
        overall_pct,
        overall_avg,
        function_scores,
        category_scores,
    }
}

fn ratio_scores(sum: f64, max: f64) -> (f64, f64) {
    if max > 0.0 {
        (round1(sum / max * 100.0), round1(sum / max * 5.0))
    } else {
        (0.0, 0.0)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
