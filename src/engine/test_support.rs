use crate::types::snapshot::{AssigneeHours, DailySnapshot, SprintWindow};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub struct WindowBuilder {
    done: Vec<f64>,
    final_todo: f64,
    final_wip: f64,
    blocked: Vec<u32>,
    added: Vec<u32>,
    removed: Vec<u32>,
    total_task_count: u32,
    backlog_change_pct: f64,
    assignee_hours: Option<BTreeMap<String, AssigneeHours>>,
}

impl WindowBuilder {
    pub fn with_done(done: &[f64]) -> Self {
        Self {
            done: done.to_vec(),
            final_todo: 0.0,
            final_wip: 0.0,
            blocked: vec![0; done.len()],
            added: vec![0; done.len()],
            removed: vec![0; done.len()],
            total_task_count: 20,
            backlog_change_pct: 0.0,
            assignee_hours: None,
        }
    }

    pub fn final_split(mut self, todo: f64, in_progress: f64) -> Self {
        self.final_todo = todo;
        self.final_wip = in_progress;
        self
    }

    pub fn blocked(mut self, blocked: &[u32]) -> Self {
        self.blocked = blocked.to_vec();
        self
    }

    pub fn added(mut self, added: &[u32]) -> Self {
        self.added = added.to_vec();
        self
    }

    pub fn removed(mut self, removed: &[u32]) -> Self {
        self.removed = removed.to_vec();
        self
    }

    pub fn total_tasks(mut self, total: u32) -> Self {
        self.total_task_count = total;
        self
    }

    pub fn backlog_change(mut self, pct: f64) -> Self {
        self.backlog_change_pct = pct;
        self
    }

    pub fn assignee(mut self, name: &str, estimation_hours: f64, spent_hours: f64) -> Self {
        self.assignee_hours
            .get_or_insert_with(BTreeMap::new)
            .insert(
                name.to_string(),
                AssigneeHours {
                    estimation_hours,
                    spent_hours,
                },
            );
        self
    }

    pub fn build(self) -> SprintWindow {
        assert!(!self.done.is_empty(), "builder needs at least one day");
        let start: NaiveDate = "2024-03-01".parse().expect("date should parse");
        let days = self.done.len();
        let snapshots: Vec<DailySnapshot> = self
            .done
            .iter()
            .enumerate()
            .map(|(index, done_pct)| {
                let last = index == days - 1;
                let todo_pct = if last {
                    self.final_todo
                } else {
                    (100.0 - done_pct).max(0.0)
                };
                let in_progress_pct = if last { self.final_wip } else { 0.0 };
                DailySnapshot {
                    date: start + chrono::Days::new(index as u64),
                    todo_pct,
                    in_progress_pct,
                    done_pct: *done_pct,
                    blocked_count: self.blocked.get(index).copied().unwrap_or(0),
                    added_count: self.added.get(index).copied().unwrap_or(0),
                    removed_count: self.removed.get(index).copied().unwrap_or(0),
                }
            })
            .collect();

        SprintWindow {
            sprint_id: "test".to_string(),
            start_date: start,
            end_date: snapshots.last().expect("non-empty").date,
            snapshots,
            total_task_count: self.total_task_count,
            backlog_change_pct: self.backlog_change_pct,
            assignee_hours: self.assignee_hours,
            rescales: Vec::new(),
        }
    }
}

pub fn window_from_done(done: &[f64], final_todo: f64, final_wip: f64) -> SprintWindow {
    WindowBuilder::with_done(done)
        .final_split(final_todo, final_wip)
        .build()
}
