//! Settings for the interactive list.
//!
//! The settings file (`golist.yml` by default) is optional and tunes how the
//! views are rendered. A missing file means defaults.

use std::path::Path;

use serde::Deserialize;

/// Default settings file, resolved relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "golist.yml";

/// Settings loaded from the YAML settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How many tasks the preview shows. Default: 3.
    pub preview_limit: usize,

    /// Print the tip block after the greeting, the preview and the empty notice.
    pub show_tips: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_limit: 3,
            show_tips: true,
        }
    }
}

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("preview_limit must be at least 1 (got {0})")]
    InvalidPreviewLimit(usize),
}

impl Settings {
    /// Load settings from a file path.
    ///
    /// Returns the default settings if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let settings = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Self::default(),
            Ok(content) => serde_yaml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(SettingsError::Io(e)),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.preview_limit == 0 {
            return Err(SettingsError::InvalidPreviewLimit(self.preview_limit));
        }
        Ok(())
    }
}
