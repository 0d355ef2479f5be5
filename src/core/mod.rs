//! Core data types for window and bookmark reconciliation.
//!
//! - [`Window`], [`Tab`]: a browser window and its tabs as plain data
//! - [`TokenSequence`]: the ordered tab URLs of one window
//! - [`TabSet`]: a window's tab URLs used for folder matching
//! - [`FolderId`], [`FolderRef`], [`BookmarkEntry`]: handles into the bookmark tree
//!
//! ## Token equality
//!
//! URLs are compared as exact, case-sensitive strings. `https://a.example/`
//! and `https://a.example` are different tokens; no canonicalization is applied.

pub mod types;
pub mod window;

pub use types::{BookmarkEntry, BookmarkSet, FolderId, FolderRef};
pub use window::{duplicate_urls, search_tabs, Tab, TabSet, TokenSequence, Window};
