//! User settings read from `settings.json`.

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Front-end settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Show every validation error immediately instead of after a field was touched.
    pub show_errors_untouched: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            show_errors_untouched: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// The configured log level, falling back to `Debug` for unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Debug)
    }
}
