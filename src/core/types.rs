use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Opaque identifier for a node in the bookmark tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub String);

impl FolderId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for a bookmark folder: identifier plus display title.
///
/// Two refs are equal when their ids are equal; the title is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: FolderId,
    pub title: String,
}

impl FolderRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: FolderId::new(id),
            title: title.into(),
        }
    }
}

impl PartialEq for FolderRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FolderRef {}

/// A direct child of a folder as reported by the bookmark store.
///
/// Entries with a URL are bookmarks, entries without one are subfolders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub id: FolderId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BookmarkEntry {
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }

    #[must_use]
    pub fn to_folder_ref(&self) -> FolderRef {
        FolderRef {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

/// URLs stored as bookmark leaves directly under one folder (not recursive)
pub type BookmarkSet = HashSet<String>;
