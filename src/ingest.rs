use crate::error::{PulseError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

// Counts stay signed so negative values fail validation instead of wrapping.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub todo_pct: f64,
    #[serde(default)]
    pub in_progress_pct: f64,
    #[serde(default)]
    pub done_pct: f64,
    #[serde(default)]
    pub blocked_count: i64,
    #[serde(default)]
    pub added_count: i64,
    #[serde(default)]
    pub removed_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAssigneeHours {
    #[serde(default)]
    pub estimation_hours: f64,
    #[serde(default)]
    pub spent_hours: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSprint {
    pub sprint_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub total_task_count: u32,
    #[serde(default)]
    pub daily_records: Vec<RawDailyRecord>,
    #[serde(default)]
    pub assignee_hours: Option<BTreeMap<String, RawAssigneeHours>>,
}

// A file holds either a single sprint group or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SprintFile {
    One(Box<RawSprint>),
    Many(Vec<RawSprint>),
}

pub fn load_sprints(path: &Path) -> Result<Vec<RawSprint>> {
    if !path.exists() {
        return Err(PulseError::InputNotFound(path.display().to_string()));
    }

    let mut sprints = Vec::new();
    if path.is_dir() {
        let mut files: Vec<_> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_path_buf())
            .filter(|file| file.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        if files.is_empty() {
            return Err(PulseError::EmptyInput(format!(
                "no .json sprint files under {}",
                path.display()
            )));
        }
        for file in files {
            sprints.extend(load_file(&file)?);
        }
    } else {
        sprints.extend(load_file(path)?);
    }

    if sprints.is_empty() {
        return Err(PulseError::EmptyInput(format!(
            "no sprint groups in {}",
            path.display()
        )));
    }
    debug!(count = sprints.len(), path = %path.display(), "loaded sprint groups");
    Ok(sprints)
}

fn load_file(path: &Path) -> Result<Vec<RawSprint>> {
    let content = std::fs::read_to_string(path)?;
    let parsed: SprintFile = serde_json::from_str(&content).map_err(|e| {
        PulseError::InputParse(format!("{}: {}", path.display(), e))
    })?;
    let sprints = match parsed {
        SprintFile::One(sprint) => vec![*sprint],
        SprintFile::Many(sprints) => sprints,
    };
    debug!(file = %path.display(), count = sprints.len(), "parsed sprint file");
    Ok(sprints)
}
