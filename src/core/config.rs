use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing fields (defaults in use): {}",
                missing.join(", ")
            ));
            info("Run `config --migrate` to write them to the file.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if migrate_config(path)? {
            success(format!("Configuration migrated: {}", path.display()));
        } else {
            info("Configuration already up to date.");
        }
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// and then to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", editor_to_use));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, s
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
