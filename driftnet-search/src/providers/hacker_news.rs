//! Hacker News search through the Algolia API.

use async_trait::async_trait;
use driftnet_core::HackerNewsConfig;
use serde::Deserialize;

use super::{SearchProvider, first_present, read_search_response};
use crate::Result;
use crate::errors::SearchError;
use crate::types::{Platform, ResultItem};

const ITEM_PERMALINK_PREFIX: &str = "https://news.ycombinator.com/item?id=";
const STORIES_AND_COMMENTS: &str = "(story,comment)";
const MISSING_TEXT: &str = "No Title/Comment";

/// Hacker News provider backed by Algolia's search-by-date endpoint.
///
/// Searches stories and comments together, newest first. No authentication.
#[derive(Debug)]
pub struct HackerNewsProvider {
    client: reqwest::Client,
    api_url: String,
}

/// Response from the `search_by_date` endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<HackerNewsHit>,
}

/// Single story or comment hit. Every field may be absent or null.
#[derive(Debug, Deserialize)]
struct HackerNewsHit {
    #[serde(rename = "objectID")]
    object_id: Option<String>,
    title: Option<String>,
    comment_text: Option<String>,
    author: Option<String>,
    story_url: Option<String>,
    url: Option<String>,
}

impl HackerNewsHit {
    fn into_item(self) -> ResultItem {
        let text = first_present([self.title, self.comment_text])
            .unwrap_or_else(|| MISSING_TEXT.to_string());

        let permalink = format!(
            "{ITEM_PERMALINK_PREFIX}{}",
            self.object_id.unwrap_or_default()
        );
        let url = first_present([self.story_url, self.url]).unwrap_or(permalink);

        ResultItem {
            platform: Platform::HackerNews,
            text,
            author: first_present([self.author]),
            url,
            community: None,
        }
    }
}

impl HackerNewsProvider {
    /// Create provider for the configured Algolia endpoint.
    pub fn new(config: &HackerNewsConfig) -> Self {
        Self::with_base_url(config.api_url.clone())
    }

    /// Create provider for an explicit API base URL ending in `/`.
    pub fn with_base_url(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl SearchProvider for HackerNewsProvider {
    fn platform(&self) -> Platform {
        Platform::HackerNews
    }

    async fn search(&self, keywords: &str, limit: usize) -> Result<Vec<ResultItem>> {
        let url = format!("{}search_by_date", self.api_url);
        let hits_per_page = limit.to_string();
        let params = [
            ("query", keywords),
            ("tags", STORIES_AND_COMMENTS),
            ("hitsPerPage", hits_per_page.as_str()),
        ];

        tracing::debug!(%url, keywords, limit, "Searching Hacker News");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("Hacker News request failed: {e}"),
            })?;

        let search_response: SearchResponse =
            read_search_response(response, Platform::HackerNews, keywords).await?;

        tracing::debug!(hits = search_response.hits.len(), "Hacker News responded");

        Ok(search_response
            .hits
            .into_iter()
            .take(limit)
            .map(HackerNewsHit::into_item)
            .collect())
    }
}
