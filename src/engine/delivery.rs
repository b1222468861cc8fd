use crate::types::config::ScoringCurves;
use crate::types::snapshot::SprintWindow;

// Share of scope allowed to remain in todo before delivery is penalized.
const TODO_ALLOWANCE_PCT: f64 = 15.0;
// Ceiling on the leftover-todo penalty.
const MAX_TODO_PENALTY: f64 = 40.0;

pub fn delivery_score(window: &SprintWindow, curves: &ScoringCurves) -> f64 {
    let last = window.final_snapshot();
    let overrun = (last.todo_pct - TODO_ALLOWANCE_PCT).max(0.0);
    let penalty = (overrun * curves.k_delivery).min(MAX_TODO_PENALTY);
    (last.done_pct - penalty).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::window_from_done;

    #[test]
    fn delivery_equals_final_done_when_todo_within_allowance() {
        let window = window_from_done(&[10.0, 40.0, 70.0], 10.0, 20.0);
        let score = delivery_score(&window, &ScoringCurves::default());
        assert!((score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn leftover_todo_above_allowance_is_docked() {
        let window = window_from_done(&[10.0, 40.0, 50.0], 25.0, 25.0);
        // 10 points over the allowance at k = 2.0 costs 20.
        let score = delivery_score(&window, &ScoringCurves::default());
        assert!((score - 30.0).abs() < 1e-9);
    }

    #[test]
    fn todo_penalty_is_capped() {
        let window = window_from_done(&[0.0, 0.0, 5.0], 90.0, 5.0);
        let score = delivery_score(&window, &ScoringCurves::default());
        // Penalty would be 150 uncapped; cap keeps it at 40 and clamp floors at 0.
        assert_eq!(score, 0.0);
    }
}
