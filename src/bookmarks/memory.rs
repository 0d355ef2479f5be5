use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::bookmarks::store::{BookmarkError, BookmarkStore};
use crate::core::types::{BookmarkEntry, FolderId, FolderRef};

/// Bookmark file version for compatibility checking
pub const BOOKMARKS_VERSION: &str = "1.0.0";

/// Id of the conventional primary container ("Bookmarks bar")
pub const DEFAULT_CONTAINER_ID: &str = "1";

/// Serializable node of the bookmark tree file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkNodeData {
    pub id: FolderId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BookmarkNodeData>,
}

/// Serializable bookmark tree format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkTreeData {
    #[serde(default = "default_version")]
    pub version: String,
    pub roots: Vec<BookmarkNodeData>,
}

fn default_version() -> String {
    BOOKMARKS_VERSION.to_string()
}

#[derive(Debug, Clone)]
struct Node {
    title: String,
    url: Option<String>,
    parent: Option<FolderId>,
    children: Vec<FolderId>,
}

/// In-memory bookmark tree addressed by id.
///
/// Nodes live in a flat map and refer to each other by [`FolderId`], so the
/// store behaves like the browser API it stands in for: callers only ever
/// see ids and entries.
#[derive(Debug, Clone)]
pub struct MemoryBookmarkStore {
    roots: Vec<FolderId>,
    nodes: HashMap<FolderId, Node>,
    next_id: u64,
}

impl MemoryBookmarkStore {
    /// Create a store with no containers at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            nodes: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a store with the usual browser containers:
    /// "Bookmarks bar" (1), "Other bookmarks" (2), "Mobile bookmarks" (3)
    #[must_use]
    pub fn new() -> Self {
        let mut store = Self::empty();
        store.add_root(FolderRef::new(DEFAULT_CONTAINER_ID, "Bookmarks bar"));
        store.add_root(FolderRef::new("2", "Other bookmarks"));
        store.add_root(FolderRef::new("3", "Mobile bookmarks"));
        store
    }

    /// Add a top-level container
    pub fn add_root(&mut self, root: FolderRef) {
        self.bump_next_id(&root.id);
        self.nodes.insert(
            root.id.clone(),
            Node {
                title: root.title,
                url: None,
                parent: None,
                children: Vec::new(),
            },
        );
        self.roots.push(root.id);
    }

    /// Load a bookmark tree from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, BookmarkError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a bookmark tree from a JSON string
    pub fn from_json(json: &str) -> Result<Self, BookmarkError> {
        let data: BookmarkTreeData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != BOOKMARKS_VERSION {
            warn!(
                expected = BOOKMARKS_VERSION,
                found = %data.version,
                "Bookmark file version mismatch"
            );
        }

        let mut store = Self::empty();
        for root in data.roots {
            if root.url.is_some() {
                return Err(BookmarkError::InvalidTree(format!(
                    "top-level node {} has a URL",
                    root.id
                )));
            }
            let id = root.id.clone();
            store.insert_node(root, None)?;
            store.roots.push(id);
        }

        debug!(nodes = store.nodes.len(), "Loaded bookmark tree");
        Ok(store)
    }

    fn insert_node(
        &mut self,
        data: BookmarkNodeData,
        parent: Option<FolderId>,
    ) -> Result<(), BookmarkError> {
        if self.nodes.contains_key(&data.id) {
            return Err(BookmarkError::InvalidTree(format!(
                "duplicate node id {}",
                data.id
            )));
        }
        if data.url.is_some() && !data.children.is_empty() {
            return Err(BookmarkError::InvalidTree(format!(
                "bookmark {} has children",
                data.id
            )));
        }

        self.bump_next_id(&data.id);
        let child_ids = data.children.iter().map(|c| c.id.clone()).collect();
        self.nodes.insert(
            data.id.clone(),
            Node {
                title: data.title,
                url: data.url,
                parent,
                children: child_ids,
            },
        );

        for child in data.children {
            self.insert_node(child, Some(data.id.clone()))?;
        }
        Ok(())
    }

    fn bump_next_id(&mut self, id: &FolderId) {
        if let Ok(n) = id.as_str().parse::<u64>() {
            self.next_id = self.next_id.max(n.saturating_add(1));
        }
    }

    fn allocate_id(&mut self) -> Result<FolderId, BookmarkError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(BookmarkError::IdsExhausted)?;
        Ok(FolderId::new(id.to_string()))
    }

    /// Export the tree to JSON
    pub fn to_json(&self) -> Result<String, BookmarkError> {
        let data = BookmarkTreeData {
            version: BOOKMARKS_VERSION.to_string(),
            roots: self
                .roots
                .iter()
                .filter_map(|id| self.export_node(id))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Write the tree to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), BookmarkError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn export_node(&self, id: &FolderId) -> Option<BookmarkNodeData> {
        let node = self.nodes.get(id)?;
        Some(BookmarkNodeData {
            id: id.clone(),
            title: node.title.clone(),
            url: node.url.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.export_node(child))
                .collect(),
        })
    }

    /// Number of nodes (containers, folders and bookmarks)
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Title of a node, if it exists
    #[must_use]
    pub fn title(&self, id: &FolderId) -> Option<&str> {
        self.nodes.get(id).map(|n| n.title.as_str())
    }

    fn folder(&self, id: &FolderId) -> Result<&Node, BookmarkError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| BookmarkError::NotFound(id.clone()))?;
        if node.url.is_some() {
            return Err(BookmarkError::NotAFolder(id.clone()));
        }
        Ok(node)
    }

    fn attach(
        &mut self,
        parent: &FolderId,
        title: &str,
        url: Option<&str>,
    ) -> Result<FolderId, BookmarkError> {
        self.folder(parent)?;

        let id = self.allocate_id()?;
        if self.nodes.contains_key(&id) {
            return Err(BookmarkError::InvalidTree(format!("id {id} already in use")));
        }
        self.nodes.insert(
            id.clone(),
            Node {
                title: title.to_string(),
                url: url.map(str::to_string),
                parent: Some(parent.clone()),
                children: Vec::new(),
            },
        );
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id.clone());
        }
        Ok(id)
    }
}

impl Default for MemoryBookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStore for MemoryBookmarkStore {
    fn top_level_containers(&self) -> Result<Vec<FolderRef>, BookmarkError> {
        Ok(self
            .roots
            .iter()
            .filter_map(|id| {
                self.nodes.get(id).map(|node| FolderRef {
                    id: id.clone(),
                    title: node.title.clone(),
                })
            })
            .collect())
    }

    fn children(&self, folder: &FolderId) -> Result<Vec<BookmarkEntry>, BookmarkError> {
        let node = self.folder(folder)?;
        Ok(node
            .children
            .iter()
            .filter_map(|id| {
                self.nodes.get(id).map(|child| BookmarkEntry {
                    id: id.clone(),
                    title: child.title.clone(),
                    url: child.url.clone(),
                })
            })
            .collect())
    }

    fn create_folder(
        &mut self,
        parent: &FolderId,
        title: &str,
    ) -> Result<FolderRef, BookmarkError> {
        let id = self.attach(parent, title, None)?;
        debug!(parent = %parent, id = %id, title, "Created folder");
        Ok(FolderRef {
            id,
            title: title.to_string(),
        })
    }

    fn create_bookmark(
        &mut self,
        parent: &FolderId,
        title: &str,
        url: &str,
    ) -> Result<FolderId, BookmarkError> {
        self.attach(parent, title, Some(url))
    }

    fn remove_bookmark(&mut self, id: &FolderId) -> Result<(), BookmarkError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| BookmarkError::NotFound(id.clone()))?;
        if node.url.is_none() {
            return Err(if node.parent.is_none() {
                BookmarkError::Immutable(id.clone())
            } else {
                BookmarkError::NotABookmark(id.clone())
            });
        }

        let parent = node.parent.clone();
        self.nodes.remove(id);
        if let Some(parent_node) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent_node.children.retain(|child| child != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "version": "1.0.0",
        "roots": [
            {"id": "1", "title": "Bookmarks bar", "children": [
                {"id": "10", "title": "_", "children": [
                    {"id": "11", "title": "Example", "url": "https://example.com"}
                ]}
            ]},
            {"id": "2", "title": "Other bookmarks"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let store = MemoryBookmarkStore::from_json(TREE).unwrap();
        assert_eq!(store.len(), 4);

        let roots = store.top_level_containers().unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].title, "Bookmarks bar");

        let children = store.children(&FolderId::new("10")).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_new_ids_do_not_collide_with_loaded_ids() {
        let mut store = MemoryBookmarkStore::from_json(TREE).unwrap();
        let folder = store.create_folder(&FolderId::new("1"), "New").unwrap();
        assert_eq!(folder.id, FolderId::new("12"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"roots": [{"id": "1", "title": "A"}, {"id": "1", "title": "B"}]}"#;
        let result = MemoryBookmarkStore::from_json(json);
        assert!(matches!(result, Err(BookmarkError::InvalidTree(_))));
    }

    #[test]
    fn test_bookmark_with_children_rejected() {
        let json = r#"{"roots": [{"id": "1", "title": "A", "children": [
            {"id": "2", "title": "B", "url": "https://b", "children": [{"id": "3", "title": "C"}]}
        ]}]}"#;
        let result = MemoryBookmarkStore::from_json(json);
        assert!(matches!(result, Err(BookmarkError::InvalidTree(_))));
    }

    #[test]
    fn test_json_roundtrip_preserves_structure() {
        let store = MemoryBookmarkStore::from_json(TREE).unwrap();
        let reloaded = MemoryBookmarkStore::from_json(&store.to_json().unwrap()).unwrap();

        assert_eq!(reloaded.len(), store.len());
        assert_eq!(
            reloaded.bookmark_urls(&FolderId::new("10")).unwrap(),
            store.bookmark_urls(&FolderId::new("10")).unwrap()
        );
    }

    #[test]
    fn test_create_and_remove_bookmark() {
        let mut store = MemoryBookmarkStore::new();
        let root = FolderId::new(DEFAULT_CONTAINER_ID);

        let id = store.create_bookmark(&root, "A", "https://a").unwrap();
        assert!(store.bookmark_urls(&root).unwrap().contains("https://a"));

        store.remove_bookmark(&id).unwrap();
        assert!(store.bookmark_urls(&root).unwrap().is_empty());
        assert!(store.children(&root).unwrap().is_empty());
    }

    #[test]
    fn test_remove_refuses_folders() {
        let mut store = MemoryBookmarkStore::new();
        let root = FolderId::new(DEFAULT_CONTAINER_ID);
        let folder = store.create_folder(&root, "F").unwrap();

        assert!(matches!(
            store.remove_bookmark(&folder.id),
            Err(BookmarkError::NotABookmark(_))
        ));
        assert!(matches!(
            store.remove_bookmark(&root),
            Err(BookmarkError::Immutable(_))
        ));
    }

    #[test]
    fn test_children_of_missing_folder() {
        let store = MemoryBookmarkStore::new();
        assert!(matches!(
            store.children(&FolderId::new("999")),
            Err(BookmarkError::NotFound(_))
        ));
    }

    #[test]
    fn test_max_id_loads_but_cannot_allocate() {
        let json = r#"{"roots": [{"id": "18446744073709551615", "title": "Bookmarks bar"}]}"#;
        let mut store = MemoryBookmarkStore::from_json(json).unwrap();
        let root = FolderId::new("18446744073709551615");

        assert!(matches!(
            store.create_folder(&root, "F"),
            Err(BookmarkError::IdsExhausted)
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_id_before_max_cannot_allocate() {
        let json = r#"{"roots": [{"id": "18446744073709551614", "title": "Bookmarks bar"}]}"#;
        let mut store = MemoryBookmarkStore::from_json(json).unwrap();
        let root = FolderId::new("18446744073709551614");

        assert!(matches!(
            store.create_bookmark(&root, "A", "https://a"),
            Err(BookmarkError::IdsExhausted)
        ));
        assert!(store.children(&root).unwrap().is_empty());
    }

    #[test]
    fn test_cannot_create_under_bookmark() {
        let mut store = MemoryBookmarkStore::new();
        let root = FolderId::new(DEFAULT_CONTAINER_ID);
        let leaf = store.create_bookmark(&root, "A", "https://a").unwrap();

        assert!(matches!(
            store.create_folder(&leaf, "F"),
            Err(BookmarkError::NotAFolder(_))
        ));
    }
}
