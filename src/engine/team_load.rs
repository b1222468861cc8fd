use crate::engine::stats::mean;
use crate::types::config::ScoringCurves;
use crate::types::snapshot::SprintWindow;

// Missing optional assignee data is a valid state, never a penalty.
const NEUTRAL: f64 = 100.0;

// Mean relative deviation from estimate per assignee, mapped onto 0..100.
pub fn team_load_score(window: &SprintWindow, curves: &ScoringCurves) -> f64 {
    let Some(hours) = window.assignee_hours.as_ref() else {
        return NEUTRAL;
    };
    if hours.is_empty() {
        return NEUTRAL;
    }

    let deviations: Vec<f64> = hours
        .values()
        .map(|entry| {
            (entry.spent_hours - entry.estimation_hours).abs()
                / entry.estimation_hours.max(1.0)
        })
        .collect();
    (100.0 - mean(&deviations) * curves.k_team_load).clamp(0.0, 100.0)
}
