use thiserror::Error;

use crate::core::types::{BookmarkEntry, BookmarkSet, FolderId, FolderRef};

#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Bookmark node not found: {0}")]
    NotFound(FolderId),

    #[error("Bookmark node {0} is not a folder")]
    NotAFolder(FolderId),

    #[error("Bookmark node {0} is a folder, not a bookmark")]
    NotABookmark(FolderId),

    #[error("Top-level container {0} cannot be modified")]
    Immutable(FolderId),

    #[error("No top-level bookmark containers available")]
    NoContainers,

    #[error("No bookmark ids left to allocate")]
    IdsExhausted,

    #[error("Invalid bookmark tree: {0}")]
    InvalidTree(String),

    #[error("Bookmark storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read bookmarks: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse bookmarks: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Access to a browser's bookmark tree.
///
/// Every folder is addressed by an opaque [`FolderId`]; callers never hold
/// the tree itself. Implementations may be backed by a remote or slow store,
/// so the algorithms in this crate call these methods one at a time, in a
/// fixed order, and propagate the first error.
pub trait BookmarkStore {
    /// Root-level containers in their fixed order. The first is the default.
    fn top_level_containers(&self) -> Result<Vec<FolderRef>, BookmarkError>;

    /// Direct children of a folder, in order
    fn children(&self, folder: &FolderId) -> Result<Vec<BookmarkEntry>, BookmarkError>;

    /// Create an empty folder under `parent`
    fn create_folder(&mut self, parent: &FolderId, title: &str)
        -> Result<FolderRef, BookmarkError>;

    /// Create a bookmark leaf under `parent`, returning its id
    fn create_bookmark(
        &mut self,
        parent: &FolderId,
        title: &str,
        url: &str,
    ) -> Result<FolderId, BookmarkError>;

    /// Remove a single bookmark leaf
    fn remove_bookmark(&mut self, id: &FolderId) -> Result<(), BookmarkError>;

    /// URLs of bookmark leaves directly under `folder`
    fn bookmark_urls(&self, folder: &FolderId) -> Result<BookmarkSet, BookmarkError> {
        Ok(self
            .children(folder)?
            .into_iter()
            .filter_map(|entry| entry.url)
            .collect())
    }
}
