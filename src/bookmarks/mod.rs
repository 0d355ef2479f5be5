//! Bookmark tree access, folder path resolution, and window save actions.
//!
//! The tree is reached only through the [`BookmarkStore`] trait. A
//! JSON-backed [`MemoryBookmarkStore`] ships for the CLI and tests; an
//! embedding application implements the trait over its browser's API.
//!
//! ## Bookmark file format
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "roots": [
//!     { "id": "1", "title": "Bookmarks bar", "children": [
//!       { "id": "10", "title": "_", "children": [
//!         { "id": "11", "title": "Example", "url": "https://example.com" }
//!       ]}
//!     ]},
//!     { "id": "2", "title": "Other bookmarks" }
//!   ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tabfold::bookmarks::{resolve_path, BookmarkStore, MemoryBookmarkStore};
//!
//! let mut store = MemoryBookmarkStore::new();
//! let folder = resolve_path(&mut store, "Bookmarks bar/_/Research").unwrap();
//! store.create_bookmark(&folder, "Rust", "https://www.rust-lang.org").unwrap();
//!
//! assert!(store.bookmark_urls(&folder).unwrap().contains("https://www.rust-lang.org"));
//! ```

pub mod actions;
pub mod memory;
pub mod resolver;
pub mod store;

pub use actions::{override_folder, save_window, sync_folder, SaveError, SaveOutcome};
pub use memory::{MemoryBookmarkStore, DEFAULT_CONTAINER_ID};
pub use resolver::resolve_path;
pub use store::{BookmarkError, BookmarkStore};
