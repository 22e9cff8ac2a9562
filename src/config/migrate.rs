//! Keeps older config files in step with the current `Config` fields.

use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current config file carries. `credentials` is optional and
/// never reported.
pub const REQUIRED_KEYS: [&str; 4] = [
    "workbook",
    "utc_offset",
    "deadline_window_days",
    "separator_char",
];

/// Keys of [`REQUIRED_KEYS`] missing from the YAML document `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = yaml.as_mapping().cloned().unwrap_or_default();

    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add default values for missing keys to the file at `path`, leaving
/// existing values and unknown keys alone. Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut yaml: Value = serde_yaml::from_str(&content)?;
    if !yaml.is_mapping() {
        yaml = Value::Mapping(Mapping::new());
    }
    let defaults = serde_yaml::to_value(Config::default())?;

    if let Some(map) = yaml.as_mapping_mut() {
        for key in &missing {
            let k = Value::String(key.to_string());
            if let Some(v) = defaults.get(*key) {
                map.insert(k, v.clone());
            }
        }
    }

    fs::write(path, serde_yaml::to_string(&yaml)?)?;
    tracing::debug!(path = %path.display(), added = ?missing, "config keys added");
    Ok(missing)
}
