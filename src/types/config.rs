use crate::error::PulseError;
use crate::types::result::Category;
use serde::Deserialize;

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// Passed explicitly into every scoring call; nothing is read from ambient
// state.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: CategoryWeights,
    #[serde(default)]
    pub tiers: TierThresholds,
    #[serde(default)]
    pub curves: ScoringCurves,
    #[serde(default)]
    pub adjustments: AdjustmentRules,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CategoryWeights {
    pub delivery: f64,
    pub stability: f64,
    pub flow: f64,
    pub quality: f64,
    pub team_load: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            delivery: 0.25,
            stability: 0.20,
            flow: 0.20,
            quality: 0.20,
            team_load: 0.15,
        }
    }
}

impl CategoryWeights {
    pub fn weight_of(&self, category: Category) -> f64 {
        match category {
            Category::Delivery => self.delivery,
            Category::Stability => self.stability,
            Category::Flow => self.flow,
            Category::Quality => self.quality,
            Category::TeamLoad => self.team_load,
        }
    }

    pub fn sum(&self) -> f64 {
        self.delivery + self.stability + self.flow + self.quality + self.team_load
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TierThresholds {
    pub healthy_min: f64,
    pub at_risk_min: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            healthy_min: 80.0,
            at_risk_min: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringCurves {
    pub k_delivery: f64,
    pub k_stability: f64,
    pub k_flow: f64,
    pub k_rework: f64,
    pub k_blocked: f64,
    pub k_team_load: f64,
}

impl Default for ScoringCurves {
    fn default() -> Self {
        Self {
            k_delivery: 2.0,
            k_stability: 1.0,
            k_flow: 50.0,
            k_rework: 5.0,
            k_blocked: 2.0,
            k_team_load: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdjustmentRules {
    pub last_day_rush_pct: f64,
    pub uneven_flow_below: f64,
    pub backlog_instability_pct: f64,
    pub scope_change_pct: f64,
    pub high_todo_pct: f64,
    pub high_wip_pct: f64,
    pub blocked_penalty_pct: f64,
    pub rework_free_allowance: u32,
    pub uniformity_bonus_at_least: f64,
    pub low_blocked_bonus_at_most: f64,
}

impl Default for AdjustmentRules {
    fn default() -> Self {
        Self {
            last_day_rush_pct: 20.0,
            uneven_flow_below: 50.0,
            backlog_instability_pct: 20.0,
            scope_change_pct: 50.0,
            high_todo_pct: 20.0,
            high_wip_pct: 30.0,
            blocked_penalty_pct: 10.0,
            rework_free_allowance: 2,
            uniformity_bonus_at_least: 90.0,
            low_blocked_bonus_at_most: 2.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), PulseError> {
        let weights = [
            ("weights.delivery", self.weights.delivery),
            ("weights.stability", self.weights.stability),
            ("weights.flow", self.weights.flow),
            ("weights.quality", self.weights.quality),
            ("weights.team_load", self.weights.team_load),
        ];
        for (key, weight) in weights {
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(PulseError::ConfigParse(format!(
                    "{key} must be in (0.0, 1.0], found {weight}"
                )));
            }
        }
        let weight_sum = self.weights.sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(PulseError::ConfigParse(format!(
                "category weights must sum to 1.0 (found {weight_sum:.6})"
            )));
        }

        for (key, threshold) in [
            ("tiers.healthy_min", self.tiers.healthy_min),
            ("tiers.at_risk_min", self.tiers.at_risk_min),
        ] {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(PulseError::ConfigParse(format!(
                    "{key} must be between 0 and 100, found {threshold}"
                )));
            }
        }
        if self.tiers.at_risk_min >= self.tiers.healthy_min {
            return Err(PulseError::ConfigParse(format!(
                "tiers.at_risk_min ({}) must be below tiers.healthy_min ({})",
                self.tiers.at_risk_min, self.tiers.healthy_min
            )));
        }

        for (key, slope) in [
            ("curves.k_delivery", self.curves.k_delivery),
            ("curves.k_stability", self.curves.k_stability),
            ("curves.k_flow", self.curves.k_flow),
            ("curves.k_rework", self.curves.k_rework),
            ("curves.k_blocked", self.curves.k_blocked),
            ("curves.k_team_load", self.curves.k_team_load),
        ] {
            if slope < 0.0 {
                return Err(PulseError::ConfigParse(format!(
                    "{key} must be non-negative, found {slope}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_canonical_scheme() {
        let weights = CategoryWeights::default();
        assert!((weights.delivery - 0.25).abs() < 1e-9);
        assert!((weights.team_load - 0.15).abs() < 1e-9);
        assert!((weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn default_config_validates() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config_keeps_remaining_defaults() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[weights]
delivery = 0.30
stability = 0.25
flow = 0.20
quality = 0.15
team_load = 0.10

[tiers]
healthy_min = 80.0
at_risk_min = 50.0
"#,
        )
        .expect("config should parse");
        assert!((cfg.weights.delivery - 0.30).abs() < 1e-9);
        assert!((cfg.tiers.at_risk_min - 50.0).abs() < 1e-9);
        assert!((cfg.curves.k_flow - 50.0).abs() < 1e-9);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_weight_sum_off_by_more_than_tolerance() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[weights]
delivery = 0.50
stability = 0.20
flow = 0.20
quality = 0.20
team_load = 0.15
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must sum to 1.0"));
    }

    #[test]
    fn validate_rejects_inverted_tier_thresholds() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[tiers]
healthy_min = 60.0
at_risk_min = 80.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must be below"));
    }

    #[test]
    fn validate_rejects_zero_weight() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[weights]
delivery = 0.0
stability = 0.40
flow = 0.20
quality = 0.25
team_load = 0.15
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_curve_slope() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[curves]
k_flow = -1.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("k_flow"));
    }
}
