//! Settings file loading.

use derive_more::{Display, Error};
use extended_tictactoe::GameSettings;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Loads game settings from a TOML file.
///
/// Keys that are absent fall back to the defaults (3x3, three in a row,
/// two players, fast board).
///
/// ```toml
/// rows = 6
/// columns = 7
/// win_length = 4
/// markers = "XOZ"
/// board = "memory"
/// ```
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_settings(path: impl AsRef<Path>) -> Result<GameSettings, SettingsError> {
    debug!("Loading settings from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

    let settings: GameSettings = toml::from_str(&content)
        .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

    info!(
        rows = settings.rows,
        columns = settings.columns,
        win_length = settings.win_length,
        "Settings loaded successfully"
    );
    Ok(settings)
}

/// Settings file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
