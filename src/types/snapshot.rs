use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub todo_pct: f64,
    pub in_progress_pct: f64,
    pub done_pct: f64,
    pub blocked_count: u32,
    pub added_count: u32,
    pub removed_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssigneeHours {
    pub estimation_hours: f64,
    pub spent_hours: f64,
}

// A percentage-sum rescale applied during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RescaleNote {
    pub date: NaiveDate,
    pub factor: f64,
}

// Dates are strictly increasing within [start_date, end_date], no gaps.
#[derive(Debug, Clone)]
pub struct SprintWindow {
    pub sprint_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub snapshots: Vec<DailySnapshot>,
    pub total_task_count: u32,
    pub backlog_change_pct: f64,
    pub assignee_hours: Option<BTreeMap<String, AssigneeHours>>,
    pub rescales: Vec<RescaleNote>,
}

impl SprintWindow {
    pub fn final_snapshot(&self) -> &DailySnapshot {
        // Normalizer guarantees at least one snapshot.
        self.snapshots
            .last()
            .expect("normalized window has at least one snapshot")
    }

    pub fn blocked_pct_avg(&self) -> f64 {
        if self.total_task_count == 0 || self.snapshots.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .snapshots
            .iter()
            .map(|snapshot| f64::from(snapshot.blocked_count))
            .sum();
        sum / self.snapshots.len() as f64 / f64::from(self.total_task_count) * 100.0
    }

    // First day is measured against zero; negative deltas are preserved.
    pub fn done_deltas(&self) -> Vec<f64> {
        let mut previous = 0.0;
        self.snapshots
            .iter()
            .map(|snapshot| {
                let delta = snapshot.done_pct - previous;
                previous = snapshot.done_pct;
                delta
            })
            .collect()
    }

    // Each drop in done_pct is converted back into whole tasks.
    pub fn rework_count(&self) -> u32 {
        if self.total_task_count == 0 {
            return 0;
        }
        self.done_deltas()
            .iter()
            .filter(|delta| **delta < 0.0)
            .map(|delta| (-delta * f64::from(self.total_task_count) / 100.0).ceil() as u32)
            .sum()
    }
}
