//! Resolve a slash-delimited folder path to a folder id, creating missing
//! folders along the way.
//!
//! ```text
//! "Bookmarks bar/_/Research"   -> container "Bookmarks bar", then "_", then "Research"
//! "bookmarks BAR/_"            -> same container (root match ignores case)
//! "Projects/Rust"              -> no container is named "Projects", so the path
//!                                 is walked under the default container
//! "" or "/"                    -> the default container itself
//! ```
//!
//! A first segment that names no container is taken as a subfolder of the
//! default container, so a misspelled container name silently becomes a new
//! folder. This is kept as-is.

use tracing::debug;

use crate::bookmarks::memory::DEFAULT_CONTAINER_ID;
use crate::bookmarks::store::{BookmarkError, BookmarkStore};
use crate::core::types::{FolderId, FolderRef};

/// Split a folder path into trimmed segments.
///
/// Empty segments are dropped, except that a trailing empty segment is kept
/// to mark "the folder itself" (`"Root/"` yields `["Root", ""]`).
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    let raw: Vec<&str> = path.split('/').map(str::trim).collect();
    let last = raw.len() - 1;

    raw.into_iter()
        .enumerate()
        .filter(|(i, segment)| !segment.is_empty() || *i == last)
        .map(|(_, segment)| segment)
        .collect()
}

/// The conventional primary container: the one with the default id, else the first
fn default_container(containers: &[FolderRef]) -> Result<&FolderRef, BookmarkError> {
    containers
        .iter()
        .find(|c| c.id.as_str() == DEFAULT_CONTAINER_ID)
        .or_else(|| containers.first())
        .ok_or(BookmarkError::NoContainers)
}

/// Resolve `path` to a folder id, creating any missing subfolders.
///
/// # Errors
///
/// Returns `BookmarkError::NoContainers` if the store has no top-level
/// containers, or whatever error the store reports while listing children or
/// creating folders. Nothing is retried.
pub fn resolve_path<S: BookmarkStore + ?Sized>(
    store: &mut S,
    path: &str,
) -> Result<FolderId, BookmarkError> {
    let segments = split_path(path);
    let containers = store.top_level_containers()?;

    if segments.is_empty() {
        return containers
            .first()
            .map(|c| c.id.clone())
            .ok_or(BookmarkError::NoContainers);
    }
    if segments == [""] {
        return default_container(&containers).map(|c| c.id.clone());
    }

    let root = containers
        .iter()
        .find(|c| c.title.to_lowercase() == segments[0].to_lowercase());

    let (mut current, rest) = match root {
        Some(container) => (container.id.clone(), &segments[1..]),
        None => {
            let fallback = default_container(&containers)?;
            debug!(
                segment = segments[0],
                container = %fallback.title,
                "No container matches first segment, walking under default container"
            );
            (fallback.id.clone(), &segments[..])
        }
    };

    for segment in rest.iter().filter(|s| !s.is_empty()) {
        current = descend_or_create(store, &current, segment)?;
    }

    Ok(current)
}

fn descend_or_create<S: BookmarkStore + ?Sized>(
    store: &mut S,
    parent: &FolderId,
    title: &str,
) -> Result<FolderId, BookmarkError> {
    let existing = store
        .children(parent)?
        .into_iter()
        .find(|entry| entry.is_folder() && entry.title == title);

    match existing {
        Some(entry) => Ok(entry.id),
        None => {
            let created = store.create_folder(parent, title)?;
            debug!(parent = %parent, id = %created.id, title, "Created missing folder");
            Ok(created.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::memory::MemoryBookmarkStore;

    fn bar() -> FolderId {
        FolderId::new(DEFAULT_CONTAINER_ID)
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path(""), vec![""]);
        assert_eq!(split_path("/"), vec![""]);
        assert_eq!(split_path("Root"), vec!["Root"]);
        assert_eq!(split_path("Root/"), vec!["Root", ""]);
        assert_eq!(split_path(" Root // a / b "), vec!["Root", "a", "b"]);
        assert_eq!(split_path("/a/"), vec!["a", ""]);
    }

    #[test]
    fn test_empty_and_slash_resolve_to_default_container() {
        let mut store = MemoryBookmarkStore::new();
        let before = store.len();

        assert_eq!(resolve_path(&mut store, "").unwrap(), bar());
        assert_eq!(resolve_path(&mut store, "/").unwrap(), bar());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_container_match_is_case_insensitive() {
        let mut store = MemoryBookmarkStore::new();
        let before = store.len();

        assert_eq!(
            resolve_path(&mut store, "other BOOKMARKS").unwrap(),
            FolderId::new("2")
        );
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_trailing_slash_is_same_folder() {
        let mut store = MemoryBookmarkStore::new();
        let before = store.len();

        assert_eq!(
            resolve_path(&mut store, "Other bookmarks/").unwrap(),
            resolve_path(&mut store, "Other bookmarks").unwrap()
        );
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_creates_nested_folders_once() {
        let mut store = MemoryBookmarkStore::new();

        let deep = resolve_path(&mut store, "Bookmarks bar/New/Deep").unwrap();
        let after_first = store.len();
        assert_eq!(after_first, 5);
        assert_eq!(store.title(&deep), Some("Deep"));

        let again = resolve_path(&mut store, "Bookmarks bar/New/Deep").unwrap();
        assert_eq!(again, deep);
        assert_eq!(store.len(), after_first);

        let children = store.children(&bar()).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].title, "New");
    }

    #[test]
    fn test_subfolder_match_is_case_sensitive() {
        let mut store = MemoryBookmarkStore::new();
        let lower = resolve_path(&mut store, "Bookmarks bar/research").unwrap();
        let upper = resolve_path(&mut store, "Bookmarks bar/Research").unwrap();

        assert_ne!(lower, upper);
        assert_eq!(store.children(&bar()).unwrap().len(), 2);
    }

    #[test]
    fn test_bookmark_with_same_title_is_not_a_folder() {
        let mut store = MemoryBookmarkStore::new();
        store.create_bookmark(&bar(), "_", "https://a").unwrap();

        let folder = resolve_path(&mut store, "Bookmarks bar/_").unwrap();
        let children = store.children(&bar()).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().any(|c| c.id == folder && c.is_folder()));
    }

    #[test]
    fn test_unknown_root_is_swallowed_as_subfolder() {
        let mut store = MemoryBookmarkStore::new();

        let id = resolve_path(&mut store, "Bookmarsk bar/_").unwrap();
        let children = store.children(&bar()).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].title, "Bookmarsk bar");

        let nested = store.children(&children[0].id).unwrap();
        assert_eq!(nested[0].id, id);
        assert_eq!(nested[0].title, "_");
    }

    #[test]
    fn test_default_container_falls_back_to_first() {
        let mut store = MemoryBookmarkStore::empty();
        store.add_root(FolderRef::new("root", "Toolbar"));
        store.add_root(FolderRef::new("menu", "Menu"));

        assert_eq!(resolve_path(&mut store, "/").unwrap(), FolderId::new("root"));

        let id = resolve_path(&mut store, "Unsorted").unwrap();
        let children = store.children(&FolderId::new("root")).unwrap();
        assert_eq!(children[0].id, id);
    }

    #[test]
    fn test_default_id_preferred_over_first() {
        let mut store = MemoryBookmarkStore::empty();
        store.add_root(FolderRef::new("0", "Menu"));
        store.add_root(FolderRef::new(DEFAULT_CONTAINER_ID, "Toolbar"));

        assert_eq!(resolve_path(&mut store, "").unwrap(), bar());
    }

    #[test]
    fn test_no_containers() {
        let mut store = MemoryBookmarkStore::empty();
        assert!(matches!(
            resolve_path(&mut store, "a/b"),
            Err(BookmarkError::NoContainers)
        ));
        assert!(matches!(
            resolve_path(&mut store, ""),
            Err(BookmarkError::NoContainers)
        ));
    }
}
