use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::window::{TokenSequence, Window};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse snapshot: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Snapshot version for compatibility checking
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// Stored window ordering of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub version: String,
    pub created_at: String,
    pub windows: Vec<TokenSequence>,
}

impl SnapshotFile {
    /// Snapshot of `windows`, stamped with the current time
    #[must_use]
    pub fn new(windows: Vec<TokenSequence>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            windows,
        }
    }

    /// Snapshot of the tab URLs of each window
    #[must_use]
    pub fn from_windows(windows: &[Window]) -> Self {
        Self::new(windows.iter().map(Window::tokens).collect())
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a snapshot if the file exists; a missing file means no stored state
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>, SnapshotError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self::from_json(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if snapshot.version != SNAPSHOT_VERSION {
            warn!(
                expected = SNAPSHOT_VERSION,
                found = %snapshot.version,
                "Snapshot version mismatch"
            );
        }

        Ok(snapshot)
    }

    /// Export snapshot to JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::window::Tab;

    #[test]
    fn test_from_windows() {
        let windows = vec![
            Window::new(vec![Tab::new("a", "A"), Tab::new("b", "B")]),
            Window::default(),
        ];
        let snapshot = SnapshotFile::from_windows(&windows);

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(
            snapshot.windows,
            vec![vec!["a".to_string(), "b".to_string()], vec![]]
        );
    }

    #[test]
    fn test_from_json_tolerates_version_mismatch() {
        let json = r#"{"version": "0.9.0", "created_at": "2024-01-01T00:00:00Z", "windows": [["a"]]}"#;
        let snapshot = SnapshotFile::from_json(json).unwrap();
        assert_eq!(snapshot.windows, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            SnapshotFile::from_json("[1, 2"),
            Err(SnapshotError::ParseError(_))
        ));
    }

    #[test]
    fn test_file_roundtrip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        assert!(SnapshotFile::load_if_exists(&path).unwrap().is_none());

        let snapshot = SnapshotFile::new(vec![vec!["x".to_string()]]);
        snapshot.save_to_file(&path).unwrap();
        assert_eq!(SnapshotFile::load_from_file(&path).unwrap(), snapshot);
    }
}
