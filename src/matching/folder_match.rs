use serde::Serialize;
use tracing::debug;

use crate::bookmarks::store::{BookmarkError, BookmarkStore};
use crate::core::types::{BookmarkSet, FolderId, FolderRef};
use crate::core::window::TabSet;

/// Result of matching a window's tabs against candidate folders
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchResult {
    /// The folder sharing the most URLs with the window, if any was evaluated
    pub folder: Option<FolderRef>,

    /// Tabs of the window found in `folder`. `None` when no folder was
    /// evaluated (the "-1" state).
    pub match_count: Option<usize>,

    /// Every tab URL is present in `folder`
    pub fully_saved: bool,

    /// Bookmark URLs of `folder`
    pub saved_urls: BookmarkSet,
}

impl MatchResult {
    /// Match count with `-1` standing in for "no folder evaluated"
    #[must_use]
    pub fn match_count_or_sentinel(&self) -> i64 {
        self.match_count
            .map_or(-1, |count| i64::try_from(count).unwrap_or(i64::MAX))
    }
}

/// Find the folder that best represents `tabs`.
///
/// Folders are evaluated one at a time in the given order. A folder holding
/// every tab URL ends the scan immediately; otherwise the folder with the
/// most tabs present wins, and the earlier folder wins a tie.
///
/// Each tab counts once even when the same URL is open in several tabs, so
/// a window with `a, a, b` needs all three tabs present to be fully saved.
///
/// # Errors
///
/// Propagates the first error from fetching a folder's bookmarks; no partial
/// result is returned.
pub fn find_best_match<S: BookmarkStore + ?Sized>(
    store: &S,
    tabs: &TabSet,
    folders: &[FolderRef],
) -> Result<MatchResult, BookmarkError> {
    let total_tabs = tabs.total_tabs();
    let mut best = MatchResult::default();

    for folder in folders {
        let saved_urls = store.bookmark_urls(&folder.id)?;
        let match_count = tabs
            .urls
            .iter()
            .filter(|url| saved_urls.contains(url.as_str()))
            .count();

        if match_count == total_tabs {
            debug!(folder = %folder.title, total_tabs, "Window fully saved");
            return Ok(MatchResult {
                folder: Some(folder.clone()),
                match_count: Some(total_tabs),
                fully_saved: true,
                saved_urls,
            });
        }

        if best.match_count.map_or(true, |max| match_count > max) {
            best.folder = Some(folder.clone());
            best.match_count = Some(match_count);
            best.saved_urls = saved_urls;
        }
    }

    if let Some(folder) = &best.folder {
        debug!(
            folder = %folder.title,
            match_count = best.match_count_or_sentinel(),
            total_tabs,
            "Best partial match"
        );
    }
    Ok(best)
}

/// Direct subfolders of `parent`, in order, as candidates for [`find_best_match`]
///
/// # Errors
///
/// Returns the store's error if the children of `parent` cannot be listed.
pub fn candidate_folders<S: BookmarkStore + ?Sized>(
    store: &S,
    parent: &FolderId,
) -> Result<Vec<FolderRef>, BookmarkError> {
    Ok(store
        .children(parent)?
        .iter()
        .filter(|entry| entry.is_folder())
        .map(|entry| entry.to_folder_ref())
        .collect())
}

/// What a window's best match means for the save/sync/close decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WindowStatus {
    /// Every tab is bookmarked in `folder`; the window can be closed
    Saved { folder: FolderRef },
    /// `folder` holds some of the tabs; `missing` could be synced into it
    Partial {
        folder: FolderRef,
        matched: usize,
        missing: Vec<String>,
    },
    /// No folder shares any URL with the window
    Unsaved,
}

impl WindowStatus {
    /// Classify a window given its tabs and their [`MatchResult`]
    #[must_use]
    pub fn from_match(tabs: &TabSet, result: &MatchResult) -> Self {
        match (&result.folder, result.match_count) {
            (Some(folder), Some(_)) if result.fully_saved => Self::Saved {
                folder: folder.clone(),
            },
            (Some(folder), Some(matched)) if matched > 0 => Self::Partial {
                folder: folder.clone(),
                matched,
                missing: tabs
                    .distinct_urls()
                    .into_iter()
                    .filter(|url| !result.saved_urls.contains(*url))
                    .map(str::to_string)
                    .collect(),
            },
            _ => Self::Unsaved,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saved { .. } => "saved",
            Self::Partial { .. } => "partial",
            Self::Unsaved => "unsaved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::memory::{MemoryBookmarkStore, DEFAULT_CONTAINER_ID};
    use crate::core::types::BookmarkEntry;
    use std::cell::RefCell;

    /// Wraps a store and records which folders had their bookmarks fetched
    struct RecordingStore {
        inner: MemoryBookmarkStore,
        fetched: RefCell<Vec<FolderId>>,
        fail_on: Option<FolderId>,
    }

    impl RecordingStore {
        fn new(inner: MemoryBookmarkStore) -> Self {
            Self {
                inner,
                fetched: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    impl BookmarkStore for RecordingStore {
        fn top_level_containers(&self) -> Result<Vec<FolderRef>, BookmarkError> {
            self.inner.top_level_containers()
        }

        fn children(&self, folder: &FolderId) -> Result<Vec<BookmarkEntry>, BookmarkError> {
            self.inner.children(folder)
        }

        fn create_folder(
            &mut self,
            parent: &FolderId,
            title: &str,
        ) -> Result<FolderRef, BookmarkError> {
            self.inner.create_folder(parent, title)
        }

        fn create_bookmark(
            &mut self,
            parent: &FolderId,
            title: &str,
            url: &str,
        ) -> Result<FolderId, BookmarkError> {
            self.inner.create_bookmark(parent, title, url)
        }

        fn remove_bookmark(&mut self, id: &FolderId) -> Result<(), BookmarkError> {
            self.inner.remove_bookmark(id)
        }

        fn bookmark_urls(&self, folder: &FolderId) -> Result<BookmarkSet, BookmarkError> {
            self.fetched.borrow_mut().push(folder.clone());
            if self.fail_on.as_ref() == Some(folder) {
                return Err(BookmarkError::Unavailable("simulated outage".to_string()));
            }
            self.inner.bookmark_urls(folder)
        }
    }

    /// Build folders under the bookmarks bar, each holding the given URLs
    fn make_store(folders: &[(&str, &[&str])]) -> (RecordingStore, Vec<FolderRef>) {
        let mut store = MemoryBookmarkStore::new();
        let root = FolderId::new(DEFAULT_CONTAINER_ID);
        let mut refs = Vec::new();
        for (title, urls) in folders {
            let folder = store.create_folder(&root, title).unwrap();
            for url in *urls {
                store.create_bookmark(&folder.id, url, url).unwrap();
            }
            refs.push(folder);
        }
        (RecordingStore::new(store), refs)
    }

    #[test]
    fn test_no_folders() {
        let (store, _) = make_store(&[]);
        let tabs: TabSet = ["a", "b"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &[]).unwrap();
        assert!(result.folder.is_none());
        assert_eq!(result.match_count, None);
        assert_eq!(result.match_count_or_sentinel(), -1);
        assert!(!result.fully_saved);
        assert!(result.saved_urls.is_empty());
    }

    #[test]
    fn test_full_match_short_circuits() {
        let (store, folders) = make_store(&[
            ("partial", &["a"]),
            ("full", &["a", "b", "c"]),
            ("also full", &["a", "b"]),
        ]);
        let tabs: TabSet = ["a", "b"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert!(result.fully_saved);
        assert_eq!(result.folder.as_ref().unwrap().title, "full");
        assert_eq!(result.match_count, Some(2));
        assert_eq!(result.saved_urls.len(), 3);

        // The third folder was never fetched
        assert_eq!(store.fetched.borrow().len(), 2);
    }

    #[test]
    fn test_best_partial_match() {
        let (store, folders) = make_store(&[
            ("one", &["a"]),
            ("two", &["a", "b"]),
            ("none", &["z"]),
        ]);
        let tabs: TabSet = ["a", "b", "c"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert!(!result.fully_saved);
        assert_eq!(result.folder.as_ref().unwrap().title, "two");
        assert_eq!(result.match_count, Some(2));
        assert_eq!(store.fetched.borrow().len(), 3);
    }

    #[test]
    fn test_tie_keeps_first_folder() {
        let (store, folders) = make_store(&[("first", &["a"]), ("second", &["b"])]);
        let tabs: TabSet = ["a", "b", "c"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert_eq!(result.folder.as_ref().unwrap().title, "first");
        assert_eq!(result.match_count, Some(1));
    }

    #[test]
    fn test_zero_overlap_still_selects_first_folder() {
        let (store, folders) = make_store(&[("x", &["x"]), ("y", &["y"])]);
        let tabs: TabSet = ["a"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert_eq!(result.folder.as_ref().unwrap().title, "x");
        assert_eq!(result.match_count, Some(0));
        assert_eq!(WindowStatus::from_match(&tabs, &result), WindowStatus::Unsaved);
    }

    #[test]
    fn test_duplicate_tabs_count_each_occurrence() {
        let (store, folders) = make_store(&[("f", &["a", "b"])]);
        let tabs: TabSet = ["a", "a", "b"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert!(result.fully_saved);
        assert_eq!(result.match_count, Some(3));

        let tabs: TabSet = ["a", "a", "c"].into_iter().collect();
        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert!(!result.fully_saved);
        assert_eq!(result.match_count, Some(2));
    }

    #[test]
    fn test_fetch_failure_aborts_scan() {
        let (mut store, folders) = make_store(&[("a", &["a"]), ("b", &["b"]), ("c", &["c"])]);
        store.fail_on = Some(folders[1].id.clone());
        let tabs: TabSet = ["c"].into_iter().collect();

        let result = find_best_match(&store, &tabs, &folders);
        assert!(matches!(result, Err(BookmarkError::Unavailable(_))));
        assert_eq!(store.fetched.borrow().len(), 2);
    }

    #[test]
    fn test_candidate_folders_skip_bookmarks() {
        let (mut store, folders) = make_store(&[("a", &[]), ("b", &[])]);
        let root = FolderId::new(DEFAULT_CONTAINER_ID);
        store.create_bookmark(&root, "leaf", "https://leaf").unwrap();

        let candidates = candidate_folders(&store, &root).unwrap();
        assert_eq!(candidates, folders);
    }

    #[test]
    fn test_window_status() {
        let (store, folders) = make_store(&[("f", &["a", "b"])]);

        let tabs: TabSet = ["a", "b"].into_iter().collect();
        let result = find_best_match(&store, &tabs, &folders).unwrap();
        assert_eq!(
            WindowStatus::from_match(&tabs, &result),
            WindowStatus::Saved {
                folder: folders[0].clone()
            }
        );

        let tabs: TabSet = ["a", "c", "d", "c"].into_iter().collect();
        let result = find_best_match(&store, &tabs, &folders).unwrap();
        let status = WindowStatus::from_match(&tabs, &result);
        assert_eq!(
            status,
            WindowStatus::Partial {
                folder: folders[0].clone(),
                matched: 1,
                missing: vec!["c".to_string(), "d".to_string()],
            }
        );
        assert_eq!(status.label(), "partial");

        let empty = MatchResult::default();
        assert_eq!(WindowStatus::from_match(&tabs, &empty), WindowStatus::Unsaved);
    }
}
