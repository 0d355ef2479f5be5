//! Window ordering and bookmark folder matching.
//!
//! - [`distance`]: edit distance between two tab URL sequences
//! - [`reorder`](mod@reorder): greedy re-pairing of fresh windows against a stored snapshot
//! - [`folder_match`]: best bookmark folder for a window's tabs
//!
//! ## Window ordering
//!
//! Browsers do not preserve window identity across restarts. Each stored
//! window claims the fresh window whose tab list is closest by edit distance,
//! in stored order, so the familiar ordering comes back even when a few tabs
//! changed.
//!
//! ## Folder matching
//!
//! Candidate folders are scanned in order, counting the window's tabs
//! already bookmarked in each. A folder holding every tab ends the scan;
//! otherwise the folder with the most tabs wins and ties go to the earlier
//! folder.
//!
//! ## Example
//!
//! ```rust
//! use tabfold::core::{Tab, Window};
//! use tabfold::bookmarks::{BookmarkStore, MemoryBookmarkStore, DEFAULT_CONTAINER_ID};
//! use tabfold::core::FolderId;
//! use tabfold::matching::{candidate_folders, find_best_match, WindowStatus};
//!
//! let mut store = MemoryBookmarkStore::new();
//! let bar = FolderId::new(DEFAULT_CONTAINER_ID);
//! let folder = store.create_folder(&bar, "reading").unwrap();
//! store.create_bookmark(&folder.id, "A", "https://a.example").unwrap();
//!
//! let window = Window::new(vec![Tab::new("https://a.example", "A")]);
//! let tabs = window.tab_set();
//! let folders = candidate_folders(&store, &bar).unwrap();
//! let result = find_best_match(&store, &tabs, &folders).unwrap();
//!
//! assert!(result.fully_saved);
//! assert_eq!(WindowStatus::from_match(&tabs, &result).label(), "saved");
//! ```

pub mod distance;
pub mod folder_match;
pub mod reorder;

pub use distance::edit_distance;
pub use folder_match::{candidate_folders, find_best_match, MatchResult, WindowStatus};
pub use reorder::{reorder, reorder_indices};
