use indexmap::IndexMap;

use super::super::domain::{FunctionScore, RadarPoint};

/// One chart point per function, in the order the functions were aggregated.
/// Consumers rely on positional identity, so the catalog order carries over.
pub(crate) fn radar_series(function_scores: &IndexMap<String, FunctionScore>) -> Vec<RadarPoint> {
    function_scores
        .values()
        .map(|score| RadarPoint {
            function: score.name.clone(),
            score: score.score_pct,
            full_mark: 100,
        })
        .collect()
}
