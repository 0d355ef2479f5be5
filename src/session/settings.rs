use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Folder path new groups are saved under unless configured otherwise
pub const DEFAULT_PARENT_FOLDER: &str = "Bookmarks bar/_";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Slash-delimited path of the folder saved groups go under
    #[serde(default = "default_parent_folder")]
    pub parent_folder: String,
}

fn default_parent_folder() -> String {
    DEFAULT_PARENT_FOLDER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parent_folder: default_parent_folder(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; absent keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file, falling back to defaults when it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Apply a command-line override of the parent folder
    #[must_use]
    pub fn with_parent_folder(mut self, parent_folder: Option<String>) -> Self {
        if let Some(parent_folder) = parent_folder {
            self.parent_folder = parent_folder;
        }
        self
    }
}
