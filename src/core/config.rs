use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }
        Ok(())
    }

    /// Report config keys missing from the file. Returns true when complete.
    pub fn check(path: &Path) -> AppResult<bool> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let missing = missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
            Ok(true)
        } else {
            warning(format!("Missing configuration keys: {}", missing.join(", ")));
            Ok(false)
        }
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        let added = fill_missing_keys(path)?;
        if added.is_empty() {
            success("Configuration file already up to date.");
        } else {
            success(format!("Added configuration keys: {}", added.join(", ")));
        }
        Ok(())
    }
}
