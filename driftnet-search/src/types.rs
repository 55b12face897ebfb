//! Data types for platform search results.

use std::fmt;

/// Maximum number of items requested from, and kept for, each platform.
pub const MAX_RESULTS: usize = 10;

/// Content platform a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Hacker News stories and comments, via the Algolia search API
    HackerNews,
    /// Reddit submissions across all subreddits
    Reddit,
}

impl Platform {
    /// Every platform in query order.
    pub const ALL: [Platform; 2] = [Platform::HackerNews, Platform::Reddit];

    /// Human-readable platform name.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::HackerNews => "Hacker News",
            Platform::Reddit => "Reddit",
        }
    }

    /// Attribution shown when the platform reports no author.
    pub fn author_placeholder(self) -> &'static str {
        match self {
            Platform::HackerNews => "N/A",
            Platform::Reddit => "[deleted]",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single normalized search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Platform the hit came from
    pub platform: Platform,
    /// Title, or the comment body when the hit has no title
    pub text: String,
    /// Author name, `None` when absent or deleted
    pub author: Option<String>,
    /// Canonical URL for the hit
    pub url: String,
    /// Grouping label such as the subreddit name
    pub community: Option<String>,
}

impl ResultItem {
    /// Creates an item with no author and no community.
    pub fn new(platform: Platform, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform,
            text: text.into(),
            author: None,
            url: url.into(),
            community: None,
        }
    }

    /// Sets the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the community label.
    pub fn with_community(mut self, community: impl Into<String>) -> Self {
        self.community = Some(community.into());
        self
    }

    /// Author name, or the platform's placeholder when there is none.
    pub fn author_or_placeholder(&self) -> &str {
        self.author
            .as_deref()
            .unwrap_or_else(|| self.platform.author_placeholder())
    }
}

/// Ordered results for one platform, at most [`MAX_RESULTS`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    items: Vec<ResultItem>,
}

impl ResultSet {
    /// Creates a result set, dropping anything past [`MAX_RESULTS`].
    pub fn new(mut items: Vec<ResultItem>) -> Self {
        items.truncate(MAX_RESULTS);
        Self { items }
    }

    /// Creates an empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in platform response order.
    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    /// Iterates over items in platform response order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultItem;
    type IntoIter = std::slice::Iter<'a, ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
