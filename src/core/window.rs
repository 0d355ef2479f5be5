use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Ordered tab URLs of one window. Duplicates are legal and order matters.
pub type TokenSequence = Vec<String>;

/// A single open tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TabRepr")]
pub struct Tab {
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

/// Tabs may be written either as a bare URL string or as an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum TabRepr {
    Url(String),
    Full {
        url: String,
        #[serde(default)]
        title: String,
    },
}

impl From<TabRepr> for Tab {
    fn from(repr: TabRepr) -> Self {
        match repr {
            TabRepr::Url(url) => Self {
                url,
                title: String::new(),
            },
            TabRepr::Full { url, title } => Self { url, title },
        }
    }
}

impl Tab {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Title used when bookmarking: falls back to the URL for untitled tabs
    #[must_use]
    pub fn bookmark_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// One browser window as plain data, decoupled from any live handle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WindowRepr")]
pub struct Window {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default)]
    pub tabs: Vec<Tab>,
}

/// Windows may be written as a bare list of tabs or as an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum WindowRepr {
    Tabs(Vec<Tab>),
    Full {
        #[serde(default)]
        id: Option<u64>,
        #[serde(default)]
        tabs: Vec<Tab>,
    },
}

impl From<WindowRepr> for Window {
    fn from(repr: WindowRepr) -> Self {
        match repr {
            WindowRepr::Tabs(tabs) => Self { id: None, tabs },
            WindowRepr::Full { id, tabs } => Self { id, tabs },
        }
    }
}

impl Window {
    #[must_use]
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self { id: None, tabs }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// The window's tab URLs in tab order
    #[must_use]
    pub fn tokens(&self) -> TokenSequence {
        self.tabs.iter().map(|t| t.url.clone()).collect()
    }

    #[must_use]
    pub fn tab_set(&self) -> TabSet {
        TabSet::new(self.tokens())
    }
}

/// The URLs of one window's tabs, duplicates kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    pub urls: Vec<String>,
}

impl TabSet {
    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    #[must_use]
    pub fn total_tabs(&self) -> usize {
        self.urls.len()
    }

    /// Distinct URLs in first-occurrence order
    #[must_use]
    pub fn distinct_urls(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.urls
            .iter()
            .map(String::as_str)
            .filter(|url| seen.insert(*url))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TabSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// URLs open more than once across all windows, with their occurrence counts
#[must_use]
pub fn duplicate_urls(windows: &[Window]) -> BTreeMap<String, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tab in windows.iter().flat_map(|w| &w.tabs) {
        *counts.entry(tab.url.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(url, count)| (url.to_string(), count))
        .collect()
}

/// Tabs whose title or URL contains `query`, ignoring case, with the
/// 0-based index of their window. An empty query matches nothing.
#[must_use]
pub fn search_tabs<'a>(windows: &'a [Window], query: &str) -> Vec<(usize, &'a Tab)> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();

    windows
        .iter()
        .enumerate()
        .flat_map(|(idx, window)| window.tabs.iter().map(move |tab| (idx, tab)))
        .filter(|(_, tab)| {
            tab.title.to_lowercase().contains(&query) || tab.url.to_lowercase().contains(&query)
        })
        .collect()
}
