use crate::types::config::ScoringCurves;
use crate::types::snapshot::SprintWindow;

pub fn stability_score(window: &SprintWindow, curves: &ScoringCurves) -> f64 {
    (100.0 - window.backlog_change_pct * curves.k_stability).clamp(0.0, 100.0)
}
