use crate::engine::stats::coefficient_of_variation;
use crate::types::config::ScoringCurves;
use crate::types::snapshot::SprintWindow;

pub fn flow_score(window: &SprintWindow, curves: &ScoringCurves) -> f64 {
    (100.0 - completion_cv(window) * curves.k_flow).clamp(0.0, 100.0)
}

// Reversals count as zero progress here; quality prices them instead.
pub fn completion_cv(window: &SprintWindow) -> f64 {
    let increments: Vec<f64> = window
        .done_deltas()
        .iter()
        .map(|delta| delta.max(0.0))
        .collect();
    coefficient_of_variation(&increments)
}
