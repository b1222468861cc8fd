pub mod adjust;
pub mod aggregate;
pub mod delivery;
pub mod flow;
pub mod metrics;
pub mod normalize;
pub mod quality;
pub mod reduce;
pub mod stability;
pub mod stats;
pub mod team_load;

#[cfg(test)]
pub(crate) mod test_support;

use crate::types::config::ScoringConfig;
use crate::types::result::{Category, CategoryScore, ScoringResult};
use crate::types::snapshot::SprintWindow;

// Zero tasks is a valid, if degenerate, sprint state, not an error.
const NEUTRAL_CATEGORY_SCORE: f64 = 50.0;

// Pure: depends only on the window and the passed configuration.
pub fn score_sprint(window: &SprintWindow, config: &ScoringConfig) -> ScoringResult {
    let raw_scores = if window.total_task_count == 0 {
        [NEUTRAL_CATEGORY_SCORE; 5]
    } else {
        [
            delivery::delivery_score(window, &config.curves),
            stability::stability_score(window, &config.curves),
            flow::flow_score(window, &config.curves),
            quality::quality_score(window, &config.curves),
            team_load::team_load_score(window, &config.curves),
        ]
    };

    let category_scores: Vec<CategoryScore> = Category::ALL
        .iter()
        .zip(raw_scores)
        .map(|(category, raw_score)| CategoryScore {
            name: *category,
            raw_score,
            weight: config.weights.weight_of(*category),
        })
        .collect();

    let flow_raw = raw_scores[2];
    let adjustments = adjust::adjustments(window, flow_raw, &config.adjustments);
    let key_metrics = metrics::key_metrics(window);
    let composite = aggregate::composite_score(&category_scores, &adjustments);
    let tier = aggregate::tier_for(composite, &config.tiers);

    ScoringResult {
        composite_score: composite,
        tier,
        category_scores,
        key_metrics,
        adjustments,
    }
}
