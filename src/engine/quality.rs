use crate::types::config::ScoringCurves;
use crate::types::snapshot::SprintWindow;

pub fn quality_score(window: &SprintWindow, curves: &ScoringCurves) -> f64 {
    let rework = f64::from(window.rework_count());
    let blocked = window.blocked_pct_avg();
    (100.0 - rework * curves.k_rework - blocked * curves.k_blocked).clamp(0.0, 100.0)
}
