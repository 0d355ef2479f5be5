//! Write a window's tabs into the bookmark tree.
//!
//! - [`save_window`]: new dated folder under the configured parent
//! - [`sync_folder`]: add the tabs a folder is missing
//! - [`override_folder`]: replace a folder's bookmarks with the window's tabs

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::bookmarks::resolver::resolve_path;
use crate::bookmarks::store::{BookmarkError, BookmarkStore};
use crate::core::types::{FolderId, FolderRef};
use crate::core::window::Window;
use crate::utils::validation::{group_folder_title, validate_group_name, ValidationError};

#[derive(Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Bookmarks(#[from] BookmarkError),
}

/// Folder a window was saved into and how many bookmarks were written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub folder: FolderRef,
    pub bookmarks: usize,
}

/// Save every tab of `window` into a new folder `<date>_<name>` under `parent_path`.
///
/// The parent path is resolved with [`resolve_path`], so missing parent
/// folders are created. One bookmark is written per tab, in tab order,
/// duplicates included.
///
/// # Errors
///
/// Returns `SaveError::Validation` for an invalid group name (nothing is
/// written), or `SaveError::Bookmarks` if the store fails. A store failure
/// part way through leaves the folders and bookmarks created so far in place.
pub fn save_window<S: BookmarkStore + ?Sized>(
    store: &mut S,
    parent_path: &str,
    window: &Window,
    name: &str,
    date: NaiveDate,
) -> Result<SaveOutcome, SaveError> {
    let name = validate_group_name(name)?;
    let parent = resolve_path(store, parent_path)?;
    let folder = store.create_folder(&parent, &group_folder_title(date, name))?;

    for tab in &window.tabs {
        store.create_bookmark(&folder.id, tab.bookmark_title(), &tab.url)?;
    }

    info!(
        folder = %folder.title,
        bookmarks = window.tabs.len(),
        "Saved window"
    );
    Ok(SaveOutcome {
        folder,
        bookmarks: window.tabs.len(),
    })
}

/// Bookmark each tab URL of `window` that `folder` does not already hold.
///
/// Each missing URL is added once, with the title of its first tab.
/// Returns the number of bookmarks created.
///
/// # Errors
///
/// Returns the first store error.
pub fn sync_folder<S: BookmarkStore + ?Sized>(
    store: &mut S,
    folder: &FolderId,
    window: &Window,
) -> Result<usize, BookmarkError> {
    let mut saved = store.bookmark_urls(folder)?;
    let mut added = 0;

    for tab in &window.tabs {
        if saved.insert(tab.url.clone()) {
            store.create_bookmark(folder, tab.bookmark_title(), &tab.url)?;
            added += 1;
        }
    }

    debug!(folder = %folder, added, "Synced folder");
    Ok(added)
}

/// Replace the bookmarks directly under `folder` with the tabs of `window`.
///
/// Subfolders are left alone. Returns the number of bookmarks created.
///
/// # Errors
///
/// Returns the first store error.
pub fn override_folder<S: BookmarkStore + ?Sized>(
    store: &mut S,
    folder: &FolderId,
    window: &Window,
) -> Result<usize, BookmarkError> {
    let stale: Vec<FolderId> = store
        .children(folder)?
        .into_iter()
        .filter(|entry| !entry.is_folder())
        .map(|entry| entry.id)
        .collect();

    for id in &stale {
        store.remove_bookmark(id)?;
    }
    for tab in &window.tabs {
        store.create_bookmark(folder, tab.bookmark_title(), &tab.url)?;
    }

    debug!(
        folder = %folder,
        removed = stale.len(),
        added = window.tabs.len(),
        "Overrode folder"
    );
    Ok(window.tabs.len())
}
