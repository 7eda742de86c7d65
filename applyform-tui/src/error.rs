//! Terminal front-end error types

use crate::settings::SettingsError;

/// Errors that stop the terminal form.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be loaded.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The logger could not be installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
