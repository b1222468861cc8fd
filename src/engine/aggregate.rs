use crate::types::config::TierThresholds;
use crate::types::result::{Adjustment, CategoryScore, Tier};

pub fn composite_score(categories: &[CategoryScore], adjustments: &[Adjustment]) -> f64 {
    let weighted: f64 = categories
        .iter()
        .map(CategoryScore::weighted_contribution)
        .sum();
    let points: f64 = adjustments.iter().map(|adjustment| adjustment.points).sum();
    (weighted + points).clamp(0.0, 100.0)
}

pub fn tier_for(score: f64, thresholds: &TierThresholds) -> Tier {
    if score >= thresholds.healthy_min {
        Tier::Healthy
    } else if score >= thresholds.at_risk_min {
        Tier::AtRisk
    } else {
        Tier::Critical
    }
}
