use crate::types::result::{AdjustmentKind, ScoringResult};
use serde_json::{json, Map, Value};

pub fn to_json(result: &ScoringResult) -> Result<String, serde_json::Error> {
    let mut category_scores = Map::new();
    for category in &result.category_scores {
        category_scores.insert(
            category.name.key().to_string(),
            json!({
                "score": category.raw_score,
                "weight": category.weight,
                "description": category.name.description(),
            }),
        );
    }

    let mut key_metrics = Map::new();
    for metric in &result.key_metrics {
        key_metrics.insert(
            metric.name.clone(),
            json!({
                "value": metric.value,
                "unit": metric.unit,
                "description": metric.description,
            }),
        );
    }

    let adjustment_entries = |kind: AdjustmentKind| -> Vec<Value> {
        result
            .adjustments
            .iter()
            .filter(|adjustment| adjustment.kind == kind)
            .map(|adjustment| {
                json!({
                    "name": adjustment.name,
                    "points": adjustment.points,
                    "trigger_reason": adjustment.trigger_reason,
                })
            })
            .collect()
    };

    let document = json!({
        "health_score": result.composite_score,
        "tier": result.tier.key(),
        "category_scores": category_scores,
        "key_metrics": key_metrics,
        "details": {
            "penalties": adjustment_entries(AdjustmentKind::Penalty),
            "bonuses": adjustment_entries(AdjustmentKind::Bonus),
        },
    });

    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::result::{
        Adjustment, Category, CategoryScore, KeyMetric, Tier,
    };

    fn sample() -> ScoringResult {
        ScoringResult {
            composite_score: 84.5,
            tier: Tier::Healthy,
            category_scores: Category::ALL
                .iter()
                .map(|category| CategoryScore {
                    name: *category,
                    raw_score: 80.0,
                    weight: 0.2,
                })
                .collect(),
            key_metrics: vec![KeyMetric::new(
                "completion_rate",
                50.0,
                "%",
                "Share of sprint scope done on the final day",
            )],
            adjustments: vec![
                Adjustment::penalty("high_todo_penalty", -3.0, "todo over limit".to_string()),
                Adjustment::bonus("low_blocked_bonus", 2.0, "no blocks".to_string()),
            ],
        }
    }

    #[test]
    fn json_has_presentation_shape() {
        let rendered = to_json(&sample()).expect("json should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("output should be valid json");
        assert_eq!(value["health_score"], 84.5);
        assert_eq!(value["tier"], "healthy");
        assert_eq!(value["category_scores"]["delivery"]["weight"], 0.2);
        assert_eq!(value["key_metrics"]["completion_rate"]["unit"], "%");
        assert_eq!(value["details"]["penalties"][0]["name"], "high_todo_penalty");
        assert_eq!(value["details"]["bonuses"][0]["points"], 2.0);
    }
}
