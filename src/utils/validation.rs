//! Centralized validation and helper functions.

use chrono::NaiveDate;

use crate::core::window::Window;

/// Maximum number of windows accepted from a single file (DOS protection)
pub const MAX_WINDOWS: usize = 1_000;

/// Maximum number of tabs accepted in a single window
pub const MAX_TABS_PER_WINDOW: usize = 10_000;

/// Maximum length of a saved group name, in characters
pub const MAX_GROUP_NAME_LENGTH: usize = 200;

/// Date format prefixed to saved group folders: `2024_03_18`
pub const FOLDER_DATE_FORMAT: &str = "%Y_%m_%d";

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Group name is empty")]
    EmptyGroupName,
    #[error("Group name too long: exceeds {MAX_GROUP_NAME_LENGTH} characters")]
    GroupNameTooLong,
    #[error("Group name may not contain '/'")]
    GroupNameHasSlash,
    #[error("Too many windows: {0} exceeds maximum of {MAX_WINDOWS}")]
    TooManyWindows(usize),
    #[error("Window {window} has {tabs} tabs, exceeding maximum of {MAX_TABS_PER_WINDOW}")]
    TooManyTabs { window: usize, tabs: usize },
}

/// Validate a group name for a saved window and return it trimmed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyGroupName` for blank names,
/// `ValidationError::GroupNameTooLong` past the length limit, or
/// `ValidationError::GroupNameHasSlash` since a slash would split the folder path.
///
/// # Examples
///
/// ```
/// use tabfold::utils::validation::validate_group_name;
///
/// assert_eq!(validate_group_name("  AI Training ").unwrap(), "AI Training");
/// assert!(validate_group_name("   ").is_err());
/// ```
pub fn validate_group_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyGroupName);
    }
    if trimmed.chars().count() > MAX_GROUP_NAME_LENGTH {
        return Err(ValidationError::GroupNameTooLong);
    }
    if trimmed.contains('/') {
        return Err(ValidationError::GroupNameHasSlash);
    }
    Ok(trimmed)
}

/// Title of the folder a window is saved into: `<date>_<name>`
///
/// ```
/// use chrono::NaiveDate;
/// use tabfold::utils::validation::group_folder_title;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
/// assert_eq!(group_folder_title(date, "AI Training"), "2024_03_18_AI Training");
/// ```
#[must_use]
pub fn group_folder_title(date: NaiveDate, name: &str) -> String {
    format!("{}_{name}", date.format(FOLDER_DATE_FORMAT))
}

/// Check window and tab counts against the limits.
///
/// # Errors
///
/// Returns `ValidationError::TooManyWindows` or `ValidationError::TooManyTabs`
/// for the first limit exceeded.
pub fn check_window_limits(windows: &[Window]) -> Result<(), ValidationError> {
    if windows.len() > MAX_WINDOWS {
        return Err(ValidationError::TooManyWindows(windows.len()));
    }
    for (i, window) in windows.iter().enumerate() {
        if window.tabs.len() > MAX_TABS_PER_WINDOW {
            return Err(ValidationError::TooManyTabs {
                window: i,
                tabs: window.tabs.len(),
            });
        }
    }
    Ok(())
}
