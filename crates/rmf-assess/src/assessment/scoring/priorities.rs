use indexmap::IndexMap;
use uuid::Uuid;

use super::super::domain::{CategoryScore, PriorityAction};
use crate::catalog::ActionCatalog;

/// Collects every action template whose threshold the category's current
/// average fails to meet, then orders the list by severity and ascending
/// current score.
pub(crate) fn prioritize(
    category_scores: &IndexMap<String, CategoryScore>,
    catalog: &ActionCatalog,
) -> Vec<PriorityAction> {
    let mut triggered = Vec::new();

    for group in catalog.groups() {
        // A category nobody answered averages 0 and trips every threshold:
        // unassessed areas surface as highest risk instead of disappearing.
        let current = category_scores
            .get(group.category)
            .map(|score| score.avg_score)
            .unwrap_or(0.0);

        for template in &group.actions {
            // Strict inequality: a score exactly at threshold does not trigger.
            if current < template.threshold {
                triggered.push(PriorityAction {
                    id: action_token(),
                    function: group.function.to_string(),
                    category: group.category.to_string(),
                    category_name: group.category_name.to_string(),
                    severity: template.severity,
                    title: template.title.to_string(),
                    description: template.description.to_string(),
                    timeline: template.timeline.to_string(),
                    resources: template.resources.to_string(),
                    current_score: current,
                    target_score: template.threshold,
                });
            }
        }
    }

    // Stable sort keeps catalog order for actions tied on both keys.
    triggered.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then(a.current_score.total_cmp(&b.current_score))
    });

    triggered
}

fn action_token() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}
