use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Immutable process configuration, loaded once in `run()` and passed by
/// reference into every command handler.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-day sheet files.
    pub data_dir: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::sheets_dir().to_string_lossy().to_string(),
            use_colors: default_use_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("daylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".daylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("daylog.conf")
    }

    /// Default location of the day sheets
    pub fn sheets_dir() -> PathBuf {
        Self::config_dir().join("sheets")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
