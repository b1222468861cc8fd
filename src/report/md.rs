use crate::types::result::{AdjustmentKind, ScoringResult};

pub fn to_markdown(result: &ScoringResult) -> String {
    let mut output = String::new();
    output.push_str("# Sprint Health Report\n\n");
    output.push_str(&format!(
        "Health score: {:.1} ({})\n\n",
        result.composite_score,
        result.tier.key()
    ));

    output.push_str("## Category Scores\n\n");
    for category in &result.category_scores {
        output.push_str(&format!(
            "- {}: {:.1} (weight {:.2})\n",
            category.name.key(),
            category.raw_score,
            category.weight
        ));
    }
    output.push('\n');

    output.push_str("## Key Metrics\n\n");
    for metric in &result.key_metrics {
        output.push_str(&format!(
            "- {}: {:.1} {}: {}\n",
            metric.name, metric.value, metric.unit, metric.description
        ));
    }
    output.push('\n');

    output.push_str("## Adjustments\n\n");
    if result.adjustments.is_empty() {
        output.push_str("- none\n");
    } else {
        for adjustment in &result.adjustments {
            let label = match adjustment.kind {
                AdjustmentKind::Penalty => "penalty",
                AdjustmentKind::Bonus => "bonus",
            };
            output.push_str(&format!(
                "- [{}] {} ({:+.1}): {}\n",
                label, adjustment.name, adjustment.points, adjustment.trigger_reason
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::result::{Adjustment, Category, CategoryScore, KeyMetric, Tier};

    #[test]
    fn markdown_report_contains_sections() {
        let result = ScoringResult {
            composite_score: 72.0,
            tier: Tier::AtRisk,
            category_scores: vec![CategoryScore {
                name: Category::Flow,
                raw_score: 40.0,
                weight: 0.2,
            }],
            key_metrics: vec![KeyMetric::new("rework", 3.0, "tasks", "reverted tasks")],
            adjustments: vec![Adjustment::penalty(
                "uneven_completion_penalty",
                -3.0,
                "flow score 40.0 below 50".to_string(),
            )],
        };

        let rendered = to_markdown(&result);
        assert!(rendered.contains("# Sprint Health Report"));
        assert!(rendered.contains("## Category Scores"));
        assert!(rendered.contains("## Key Metrics"));
        assert!(rendered.contains("[penalty] uneven_completion_penalty (-3.0)"));
        assert!(rendered.contains("(at_risk)"));
    }
}
