//! # tabfold
//!
//! A library for reconciling browser windows against a stored snapshot and
//! against saved bookmark folders.
//!
//! Browsers hand back windows in arbitrary order after a restart, and a
//! window saved as a bookmark folder last week may have gained or lost a few
//! tabs since. `tabfold` answers two questions about the current windows:
//!
//! - **Which stored window is this?** Windows are re-paired with a stored
//!   snapshot by edit distance over their tab URLs, restoring a stable order.
//! - **Which folder already holds these tabs?** A window's tabs are compared
//!   with candidate bookmark folders to decide whether it is saved, partly
//!   saved, or unsaved.
//!
//! ## Features
//!
//! - **Edit-distance ordering**: Greedy nearest-neighbor pairing of fresh windows
//! - **Folder matching**: Most-overlap folder with early exit on a full match
//! - **Path resolution**: `"Bookmarks bar/_/Research"` resolved and created on demand
//! - **Save, sync, override**: Write a window's tabs into the bookmark tree
//! - **Duplicate detection**: URLs open in more than one tab
//!
//! ## Example
//!
//! ```rust
//! use tabfold::matching::reorder;
//!
//! let w = |urls: &[&str]| urls.iter().map(|u| u.to_string()).collect::<Vec<_>>();
//! let stored = vec![w(&["A", "B", "C"]), w(&["D", "E"]), w(&["F", "G", "H"])];
//! let fresh = vec![w(&["F", "G", "X"]), w(&["A", "B"]), w(&["D", "E", "Z"]), w(&["New"])];
//!
//! let ordered = reorder(&fresh, &stored);
//! assert_eq!(ordered, vec![w(&["A", "B"]), w(&["D", "E", "Z"]), w(&["F", "G", "X"]), w(&["New"])]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Windows, tabs, and bookmark handles
//! - [`matching`]: Edit distance, window reordering, and folder matching
//! - [`bookmarks`]: Bookmark store trait, path resolution, and save actions
//! - [`session`]: Snapshot, settings, and window files
//! - [`cli`]: Command-line interface implementation

pub mod bookmarks;
pub mod cli;
pub mod core;
pub mod matching;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use bookmarks::{BookmarkError, BookmarkStore, MemoryBookmarkStore};
pub use crate::core::types::{BookmarkEntry, BookmarkSet, FolderId, FolderRef};
pub use crate::core::window::{Tab, TabSet, TokenSequence, Window};
pub use matching::folder_match::{MatchResult, WindowStatus};
