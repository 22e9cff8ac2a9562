use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const APP_DIR: &str = "phdplanner";
pub const CONFIG_FILE_NAME: &str = "phdplanner.conf";
pub const DEFAULT_WORKBOOK_NAME: &str = "phdplanner.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workbook locator: a `.sqlite`/`.db` file, a CSV directory or `memory:`.
    #[serde(default = "default_workbook")]
    pub workbook: String,
    /// Fixed offset used for "today" and timestamps, e.g. `+07:00`.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    /// Service-account JSON file; absent means unauthenticated local use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    #[serde(default = "default_deadline_window")]
    pub deadline_window_days: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_workbook() -> String {
    Config::default_workbook_file().to_string_lossy().to_string()
}
fn default_utc_offset() -> String {
    "+07:00".to_string()
}
fn default_deadline_window() -> i64 {
    30
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            utc_offset: default_utc_offset(),
            credentials: None,
            deadline_window_days: default_deadline_window(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// `%APPDATA%\phdplanner` on Windows, `~/.phdplanner` elsewhere.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join(APP_DIR)
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(format!(".{APP_DIR}"))
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn default_workbook_file() -> PathBuf {
        Self::config_dir().join(DEFAULT_WORKBOOK_NAME)
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Resolve a user-supplied workbook name: `memory:` and URLs are kept,
    /// `~/` is expanded, relative paths land in the config directory.
    pub fn resolve_workbook(name: &str) -> String {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("memory:") || lower.starts_with("http://") || lower.starts_with("https://") {
            return name.to_string();
        }
        let p = expand_tilde(name);
        let p = if p.is_absolute() { p } else { Self::config_dir().join(p) };
        p.to_string_lossy().to_string()
    }

    /// Create the config directory and, unless `is_test`, write a fresh
    /// config file pointing at `custom_workbook` (or the default workbook).
    ///
    /// Returns the configuration that was written.
    pub fn init_all(custom_workbook: Option<&str>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let workbook = match custom_workbook {
            Some(name) => Self::resolve_workbook(name),
            None => default_workbook(),
        };

        let config = Config {
            workbook,
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
