use crate::errors::{AppError, AppResult};
use crate::models::policy::{HoursArithmetic, SpanPolicy, WeekPolicy};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Capacity used for the progress ratio of a running session.
    #[serde(default = "default_daily_target_hours")]
    pub daily_target_hours: f64,
    #[serde(default)]
    pub week_policy: WeekPolicy,
    #[serde(default)]
    pub span_policy: SpanPolicy,
    #[serde(default)]
    pub edit_arithmetic: HoursArithmetic,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_daily_target_hours() -> f64 {
    9.0
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            daily_target_hours: default_daily_target_hours(),
            week_policy: WeekPolicy::default(),
            span_policy: SpanPolicy::default(),
            edit_arithmetic: HoursArithmetic::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpunchclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpunchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpunchclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rpunchclock.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.daily_target_hours.is_finite() || self.daily_target_hours <= 0.0 {
            return Err(AppError::Config(format!(
                "daily_target_hours must be positive, got {}",
                self.daily_target_hours
            )));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config file (unless `is_test`) and return the database
    /// path that should be initialized.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }
}
