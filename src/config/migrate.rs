//! Configuration file upgrades: detect fields added by newer versions and
//! write them back with their defaults.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every top-level key a complete config file carries.
pub const CONFIG_FIELDS: [&str; 6] = [
    "database",
    "daily_target_hours",
    "week_policy",
    "span_policy",
    "edit_arithmetic",
    "separator_char",
];

/// Fields absent from the file at `path`. A missing file lacks all of them.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(CONFIG_FIELDS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    let map = yaml.as_mapping().ok_or_else(|| {
        AppError::Config(format!("{} is not a YAML mapping", path.display()))
    })?;

    Ok(CONFIG_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(*f))
        .collect())
}

/// Rewrite the file with defaults for every missing field.
/// Returns `Ok(true)` when the file changed.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        return Ok(false);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    Ok(true)
}
