use crate::engine::flow::completion_cv;
use crate::engine::stats::mean;
use crate::types::result::KeyMetric;
use crate::types::snapshot::SprintWindow;

// Returns 0 for sprints with no completion at all.
pub fn last_day_completion_share(window: &SprintWindow) -> f64 {
    let deltas = window.done_deltas();
    let total: f64 = deltas.iter().filter(|delta| **delta > 0.0).sum();
    if total <= 0.0 {
        return 0.0;
    }
    let last = deltas.last().copied().unwrap_or(0.0).max(0.0);
    last / total * 100.0
}

pub fn key_metrics(window: &SprintWindow) -> Vec<KeyMetric> {
    let last = window.final_snapshot();
    let scope_changes: u32 = window
        .snapshots
        .iter()
        .map(|snapshot| snapshot.added_count + snapshot.removed_count)
        .sum();
    let removed: u32 = window
        .snapshots
        .iter()
        .map(|snapshot| snapshot.removed_count)
        .sum();
    let tech_debt = if window.total_task_count == 0 {
        0.0
    } else {
        f64::from(removed) / f64::from(window.total_task_count) * 100.0
    };
    let blocked_daily: Vec<f64> = window
        .snapshots
        .iter()
        .map(|snapshot| f64::from(snapshot.blocked_count))
        .collect();
    let evenness = (100.0 - completion_cv(window) * 100.0).max(0.0);

    vec![
        KeyMetric::new(
            "completion_rate",
            last.done_pct,
            "%",
            "Share of sprint scope done on the final day",
        ),
        KeyMetric::new(
            "scope_changes",
            f64::from(scope_changes),
            "tasks",
            "Tasks added to or removed from scope during the sprint",
        ),
        KeyMetric::new(
            "blocked_tasks",
            mean(&blocked_daily),
            "tasks",
            "Mean number of blocked tasks per day",
        ),
        KeyMetric::new(
            "rework",
            f64::from(window.rework_count()),
            "tasks",
            "Tasks observed to re-enter an earlier status",
        ),
        KeyMetric::new(
            "tech_debt",
            tech_debt,
            "%",
            "Share of committed scope removed before completion",
        ),
        KeyMetric::new(
            "flow_evenness",
            evenness,
            "%",
            "How evenly completion was spread across sprint days",
        ),
        KeyMetric::new(
            "last_day_completion",
            last_day_completion_share(window),
            "%",
            "Share of total completion that happened on the final day",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::WindowBuilder;

    #[test]
    fn metric_names_are_complete_and_ordered() {
        let window = WindowBuilder::with_done(&[20.0, 50.0]).build();
        let names: Vec<_> = key_metrics(&window)
            .into_iter()
            .map(|metric| metric.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "completion_rate",
                "scope_changes",
                "blocked_tasks",
                "rework",
                "tech_debt",
                "flow_evenness",
                "last_day_completion",
            ]
        );
    }

    #[test]
    fn last_day_share_of_even_sprint_is_one_over_days() {
        let window = WindowBuilder::with_done(&[10.0, 20.0, 30.0, 40.0]).build();
        assert!((last_day_completion_share(&window) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn last_day_share_of_rushed_sprint_dominates() {
        let window = WindowBuilder::with_done(&[5.0, 5.0, 95.0]).build();
        let share = last_day_completion_share(&window);
        assert!(share > 90.0, "rushed share was {share}");
    }

    #[test]
    fn no_completion_yields_zero_share() {
        let window = WindowBuilder::with_done(&[0.0, 0.0]).build();
        assert_eq!(last_day_completion_share(&window), 0.0);
    }

    #[test]
    fn scope_change_and_tech_debt_sum_daily_counts() {
        let window = WindowBuilder::with_done(&[10.0, 20.0, 30.0])
            .added(&[0, 3, 1])
            .removed(&[0, 0, 2])
            .total_tasks(20)
            .build();
        let metrics = key_metrics(&window);
        let scope = metrics.iter().find(|m| m.name == "scope_changes").unwrap();
        assert_eq!(scope.value, 6.0);
        let debt = metrics.iter().find(|m| m.name == "tech_debt").unwrap();
        assert!((debt.value - 10.0).abs() < 1e-9);
    }
}
