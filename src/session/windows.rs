use std::path::Path;
use thiserror::Error;

use crate::core::window::Window;
use crate::utils::validation::{check_window_limits, ValidationError};

#[derive(Error, Debug)]
pub enum WindowsError {
    #[error("Failed to read windows: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse windows: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    Limit(#[from] ValidationError),
}

/// Load the current windows from a JSON file
///
/// # Errors
///
/// Returns `WindowsError::ReadError` if the file cannot be read, or other
/// errors if the content is invalid.
pub fn load_windows_file(path: &Path) -> Result<Vec<Window>, WindowsError> {
    let content = std::fs::read_to_string(path)?;
    parse_windows(&content)
}

/// Parse a JSON list of windows.
///
/// Each window is either `{"id": 1, "tabs": [...]}` or a bare list of tabs,
/// and each tab is either `{"url": "...", "title": "..."}` or a bare URL.
///
/// # Errors
///
/// Returns `WindowsError::ParseError` for malformed JSON, or
/// `WindowsError::Limit` if the window or tab limits are exceeded.
pub fn parse_windows(json: &str) -> Result<Vec<Window>, WindowsError> {
    let windows: Vec<Window> = serde_json::from_str(json)?;
    check_window_limits(&windows)?;
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MAX_WINDOWS;

    #[test]
    fn test_parse_windows() {
        let json = r#"[
            {"id": 1, "tabs": [{"url": "https://a", "title": "A"}, "https://b"]},
            ["https://c"]
        ]"#;

        let windows = parse_windows(json).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].tabs[0].title, "A");
        assert_eq!(windows[1].tabs[0].url, "https://c");
    }

    #[test]
    fn test_parse_windows_over_limit() {
        let json = serde_json::to_string(&vec![Vec::<String>::new(); MAX_WINDOWS + 1]).unwrap();
        assert!(matches!(
            parse_windows(&json),
            Err(WindowsError::Limit(ValidationError::TooManyWindows(_)))
        ));
    }

    #[test]
    fn test_parse_windows_malformed() {
        assert!(matches!(
            parse_windows(r#"{"tabs": []}"#),
            Err(WindowsError::ParseError(_))
        ));
    }
}
