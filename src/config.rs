use crate::error::{PulseError, Result};
use crate::types::config::ScoringConfig;
use std::path::Path;
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "sprintpulse.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sprintpulse/local.toml";

// An explicit path must exist; otherwise sprintpulse.toml in root is
// overlaid with .sprintpulse/local.toml, else canonical defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ScoringConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PulseError::InputNotFound(path.display().to_string()));
            }
            let value = read_toml_value(path)?;
            from_value(value)?
        }
        None => {
            let repo_path = root.join(DEFAULT_CONFIG_FILE);
            if !repo_path.exists() {
                debug!("no {DEFAULT_CONFIG_FILE} found, using default scoring scheme");
                ScoringConfig::default()
            } else {
                let mut merged = Value::Table(Map::new());
                merge_file_if_exists(&mut merged, &repo_path)?;
                merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
                from_value(merged)?
            }
        }
    };
    config.validate()?;
    Ok(config)
}

fn from_value(value: Value) -> Result<ScoringConfig> {
    value
        .try_into()
        .map_err(|e: toml::de::Error| PulseError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(file = %path.display(), "merged config layer");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PulseError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
