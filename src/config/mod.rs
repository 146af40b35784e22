//! Tool configuration: chart origin, page size, gantt width. Stored as
//! YAML in the platform config directory; absent file means defaults.
//! Domain data (settings, roster) never lands here.

use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_user_path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "shiftdesk.conf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hour of day at the left edge of the gantt chart.
    #[serde(default = "default_window_start_hour")]
    pub window_start_hour: u32,
    /// Consultants per page in the day views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Terminal columns of the gantt axis.
    #[serde(default = "default_grid_width")]
    pub grid_width: usize,
}

fn default_window_start_hour() -> u32 {
    7
}
fn default_page_size() -> usize {
    10
}
fn default_grid_width() -> usize {
    96
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_start_hour: default_window_start_hour(),
            page_size: default_page_size(),
            grid_width: default_grid_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftdesk")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftdesk")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    fn resolve(path_override: Option<&str>) -> PathBuf {
        match path_override {
            Some(p) => resolve_user_path(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load(path_override: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve(path_override);

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.window_start_hour > 23 {
            return Err(AppError::InvalidWindowHour(self.window_start_hour));
        }
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".to_string()));
        }
        if self.grid_width < 24 {
            return Err(AppError::Config(
                "grid_width must be at least 24 columns".to_string(),
            ));
        }
        Ok(())
    }

    /// Write a default configuration file and return its path. Test
    /// runs resolve the path without touching the filesystem.
    pub fn init_all(path_override: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::resolve(path_override);

        if !is_test {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let yaml = serde_yaml::to_string(&Config::default())?;
            fs::write(&path, yaml)?;
        }

        Ok(path)
    }
}
