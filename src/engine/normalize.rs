use crate::error::{PulseError, Result};
use crate::ingest::RawSprint;
use crate::types::snapshot::{AssigneeHours, DailySnapshot, RescaleNote, SprintWindow};
use chrono::NaiveDate;
use std::collections::BTreeMap;

// Allowed drift of the percentage sum around 100 before a rescale.
const PCT_SUM_SLACK: f64 = 1.0;

struct MergedDay {
    todo_pct: f64,
    in_progress_pct: f64,
    done_pct: f64,
    blocked_count: u32,
    added_count: u32,
    removed_count: u32,
}

// Records are sorted, same-day records merged, missing days carried forward,
// and out-of-range percentages clamped or rescaled.
pub fn normalize(raw: &RawSprint) -> Result<SprintWindow> {
    if raw.end_date < raw.start_date {
        return Err(PulseError::Validation(format!(
            "sprint {}: end_date {} precedes start_date {}",
            raw.sprint_id, raw.end_date, raw.start_date
        )));
    }
    if raw.daily_records.is_empty() {
        return Err(PulseError::EmptyInput(format!(
            "sprint {}: no daily records",
            raw.sprint_id
        )));
    }

    let mut merged: BTreeMap<NaiveDate, MergedDay> = BTreeMap::new();
    for record in &raw.daily_records {
        if record.date < raw.start_date || record.date > raw.end_date {
            return Err(PulseError::Validation(format!(
                "sprint {}: record date {} outside window {}..{}",
                raw.sprint_id, record.date, raw.start_date, raw.end_date
            )));
        }
        let blocked = narrow_count(&raw.sprint_id, "blocked_count", record.blocked_count)?;
        let added = narrow_count(&raw.sprint_id, "added_count", record.added_count)?;
        let removed = narrow_count(&raw.sprint_id, "removed_count", record.removed_count)?;

        // Percentages are cumulative state, so the day's last record wins;
        // the count fields are per-day deltas and sum across duplicates.
        merged
            .entry(record.date)
            .and_modify(|day| {
                day.todo_pct = record.todo_pct;
                day.in_progress_pct = record.in_progress_pct;
                day.done_pct = record.done_pct;
                day.blocked_count += blocked;
                day.added_count += added;
                day.removed_count += removed;
            })
            .or_insert(MergedDay {
                todo_pct: record.todo_pct,
                in_progress_pct: record.in_progress_pct,
                done_pct: record.done_pct,
                blocked_count: blocked,
                added_count: added,
                removed_count: removed,
            });
    }

    let mut snapshots = Vec::new();
    let mut rescales = Vec::new();
    let mut carried = (0.0_f64, 0.0_f64, 0.0_f64);
    let mut date = raw.start_date;
    loop {
        match merged.get(&date) {
            Some(day) => {
                let (todo, in_progress, done, factor) =
                    rescale_percentages(day.todo_pct, day.in_progress_pct, day.done_pct);
                if let Some(factor) = factor {
                    rescales.push(RescaleNote { date, factor });
                }
                carried = (todo, in_progress, done);
                snapshots.push(DailySnapshot {
                    date,
                    todo_pct: todo,
                    in_progress_pct: in_progress,
                    done_pct: done,
                    blocked_count: day.blocked_count,
                    added_count: day.added_count,
                    removed_count: day.removed_count,
                });
            }
            None => {
                snapshots.push(DailySnapshot {
                    date,
                    todo_pct: carried.0,
                    in_progress_pct: carried.1,
                    done_pct: carried.2,
                    blocked_count: 0,
                    added_count: 0,
                    removed_count: 0,
                });
            }
        }
        if date == raw.end_date {
            break;
        }
        date = date.succ_opt().ok_or_else(|| {
            PulseError::Validation(format!("sprint {}: date overflow", raw.sprint_id))
        })?;
    }

    let added_after_start: u32 = snapshots
        .iter()
        .filter(|snapshot| snapshot.date > raw.start_date)
        .map(|snapshot| snapshot.added_count)
        .sum();
    let backlog_change_pct = if raw.total_task_count == 0 {
        0.0
    } else {
        f64::from(added_after_start) / f64::from(raw.total_task_count) * 100.0
    };

    let assignee_hours = raw.assignee_hours.as_ref().map(|hours| {
        hours
            .iter()
            .map(|(assignee, entry)| {
                (
                    assignee.clone(),
                    AssigneeHours {
                        estimation_hours: entry.estimation_hours,
                        spent_hours: entry.spent_hours,
                    },
                )
            })
            .collect()
    });

    Ok(SprintWindow {
        sprint_id: raw.sprint_id.clone(),
        start_date: raw.start_date,
        end_date: raw.end_date,
        snapshots,
        total_task_count: raw.total_task_count,
        backlog_change_pct,
        assignee_hours,
        rescales,
    })
}

fn narrow_count(sprint_id: &str, field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        PulseError::Validation(format!(
            "sprint {sprint_id}: {field} must be a non-negative count, found {value}"
        ))
    })
}

// A zero sum is left alone; there is nothing to rescale.
fn rescale_percentages(todo: f64, in_progress: f64, done: f64) -> (f64, f64, f64, Option<f64>) {
    let todo = todo.clamp(0.0, 100.0);
    let in_progress = in_progress.clamp(0.0, 100.0);
    let done = done.clamp(0.0, 100.0);
    let sum = todo + in_progress + done;
    if sum > f64::EPSILON && (sum - 100.0).abs() > PCT_SUM_SLACK {
        let factor = 100.0 / sum;
        (
            todo * factor,
            in_progress * factor,
            done * factor,
            Some(factor),
        )
    } else {
        (todo, in_progress, done, None)
    }
}
