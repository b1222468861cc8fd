use crate::engine::metrics::last_day_completion_share;
use crate::types::config::AdjustmentRules;
use crate::types::result::Adjustment;
use crate::types::snapshot::SprintWindow;

const LAST_DAY_RUSH_POINTS: f64 = -5.0;
const UNEVEN_COMPLETION_POINTS: f64 = -3.0;
const BACKLOG_INSTABILITY_POINTS: f64 = -5.0;
const SCOPE_CHANGE_POINTS: f64 = -5.0;
const HIGH_TODO_POINTS: f64 = -3.0;
const HIGH_WIP_POINTS: f64 = -3.0;
const BLOCKED_TASKS_POINTS: f64 = -5.0;
const REWORK_POINTS_PER_TASK: f64 = -2.0;
const REWORK_POINTS_CAP: f64 = -10.0;
const HIGH_UNIFORMITY_POINTS: f64 = 3.0;
const LOW_BLOCKED_POINTS: f64 = 2.0;

// Rules are independent: every applicable one fires.
pub fn adjustments(
    window: &SprintWindow,
    flow_score: f64,
    rules: &AdjustmentRules,
) -> Vec<Adjustment> {
    let mut out = Vec::new();
    let last = window.final_snapshot();
    let rush_share = last_day_completion_share(window);
    let blocked_avg = window.blocked_pct_avg();
    let rework = window.rework_count();

    if rush_share > rules.last_day_rush_pct {
        out.push(Adjustment::penalty(
            "last_day_rush_penalty",
            LAST_DAY_RUSH_POINTS,
            format!(
                "{rush_share:.1}% of completion landed on the final day (limit {:.0}%)",
                rules.last_day_rush_pct
            ),
        ));
    }
    if flow_score < rules.uneven_flow_below {
        out.push(Adjustment::penalty(
            "uneven_completion_penalty",
            UNEVEN_COMPLETION_POINTS,
            format!(
                "flow score {flow_score:.1} below {:.0}",
                rules.uneven_flow_below
            ),
        ));
    }
    if window.backlog_change_pct > rules.backlog_instability_pct {
        out.push(Adjustment::penalty(
            "backlog_instability_penalty",
            BACKLOG_INSTABILITY_POINTS,
            format!(
                "backlog changed {:.1}% after start (limit {:.0}%)",
                window.backlog_change_pct, rules.backlog_instability_pct
            ),
        ));
    }
    // Stacks on backlog_instability_penalty.
    if window.backlog_change_pct > rules.scope_change_pct {
        out.push(Adjustment::penalty(
            "scope_change_penalty",
            SCOPE_CHANGE_POINTS,
            format!(
                "backlog changed {:.1}% after start (limit {:.0}%)",
                window.backlog_change_pct, rules.scope_change_pct
            ),
        ));
    }
    if last.todo_pct > rules.high_todo_pct {
        out.push(Adjustment::penalty(
            "high_todo_penalty",
            HIGH_TODO_POINTS,
            format!(
                "{:.1}% of scope still in todo at sprint end (limit {:.0}%)",
                last.todo_pct, rules.high_todo_pct
            ),
        ));
    }
    if last.in_progress_pct > rules.high_wip_pct {
        out.push(Adjustment::penalty(
            "high_wip_penalty",
            HIGH_WIP_POINTS,
            format!(
                "{:.1}% of scope still in progress at sprint end (limit {:.0}%)",
                last.in_progress_pct, rules.high_wip_pct
            ),
        ));
    }
    if blocked_avg > rules.blocked_penalty_pct {
        out.push(Adjustment::penalty(
            "blocked_tasks_penalty",
            BLOCKED_TASKS_POINTS,
            format!(
                "{blocked_avg:.1}% of scope blocked on an average day (limit {:.0}%)",
                rules.blocked_penalty_pct
            ),
        ));
    }
    if rework > rules.rework_free_allowance {
        let excess = f64::from(rework - rules.rework_free_allowance);
        let points = (excess * REWORK_POINTS_PER_TASK).max(REWORK_POINTS_CAP);
        out.push(Adjustment::penalty(
            "rework_penalty",
            points,
            format!(
                "{rework} reworked tasks exceed the allowance of {}",
                rules.rework_free_allowance
            ),
        ));
    }
    if flow_score >= rules.uniformity_bonus_at_least {
        out.push(Adjustment::bonus(
            "high_uniformity_bonus",
            HIGH_UNIFORMITY_POINTS,
            format!(
                "flow score {flow_score:.1} at or above {:.0}",
                rules.uniformity_bonus_at_least
            ),
        ));
    }
    if blocked_avg <= rules.low_blocked_bonus_at_most {
        out.push(Adjustment::bonus(
            "low_blocked_bonus",
            LOW_BLOCKED_POINTS,
            format!(
                "{blocked_avg:.1}% of scope blocked on an average day (at most {:.0}%)",
                rules.low_blocked_bonus_at_most
            ),
        ));
    }

    out
}
