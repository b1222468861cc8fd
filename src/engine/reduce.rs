use crate::engine::aggregate::tier_for;
use crate::error::{PulseError, Result};
use crate::types::config::ScoringConfig;
use crate::types::result::{Adjustment, CategoryScore, KeyMetric, ScoringResult};

// Field-wise unweighted mean; adjustments are unioned with points summed.
// The tier is recomputed from the averaged composite, never averaged itself.
pub fn reduce(results: &[ScoringResult], config: &ScoringConfig) -> Result<ScoringResult> {
    if results.is_empty() {
        return Err(PulseError::EmptyInput(
            "no scoring results to reduce".to_string(),
        ));
    }
    if results.len() == 1 {
        return Ok(results[0].clone());
    }

    let count = results.len() as f64;
    let composite = results
        .iter()
        .map(|result| result.composite_score)
        .sum::<f64>()
        / count;

    // Weights are assumed identical across sprints; shapes come from the
    // first result.
    let category_scores: Vec<CategoryScore> = results[0]
        .category_scores
        .iter()
        .map(|first| {
            let mean_raw = results
                .iter()
                .filter_map(|result| result.category(first.name))
                .map(|score| score.raw_score)
                .sum::<f64>()
                / count;
            CategoryScore {
                name: first.name,
                raw_score: mean_raw,
                weight: first.weight,
            }
        })
        .collect();

    let key_metrics: Vec<KeyMetric> = results[0]
        .key_metrics
        .iter()
        .map(|first| {
            let mean_value = results
                .iter()
                .filter_map(|result| result.metric(&first.name))
                .map(|metric| metric.value)
                .sum::<f64>()
                / count;
            KeyMetric {
                name: first.name.clone(),
                value: mean_value,
                unit: first.unit.clone(),
                description: first.description.clone(),
            }
        })
        .collect();

    let mut adjustments: Vec<Adjustment> = Vec::new();
    for result in results {
        for adjustment in &result.adjustments {
            match adjustments
                .iter_mut()
                .find(|existing| existing.name == adjustment.name)
            {
                Some(existing) => existing.points += adjustment.points,
                None => adjustments.push(adjustment.clone()),
            }
        }
    }

    Ok(ScoringResult {
        composite_score: composite,
        tier: tier_for(composite, &config.tiers),
        category_scores,
        key_metrics,
        adjustments,
    })
}
