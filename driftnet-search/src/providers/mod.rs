//! Provider implementations for platform search.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::errors::SearchError;
use crate::types::{Platform, ResultItem};

pub mod hacker_news;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod reddit;

pub use hacker_news::HackerNewsProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::StaticProvider;
pub use reddit::RedditProvider;

/// Trait for keyword search against one content platform.
///
/// Implementations wrap a platform's HTTP API (or canned data in tests) and
/// return hits already normalized into [`ResultItem`]s, in response order.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Platform this provider searches.
    fn platform(&self) -> Platform;

    /// Search for `keywords`, returning at most `limit` items.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - Platform answered with a failure status
    /// - `SearchError::NetworkError` - Network connectivity issues
    /// - `SearchError::ParseError` - Response body could not be decoded
    /// - `SearchError::MissingCredential` / `SearchError::AuthenticationFailed` -
    ///   Client could not authenticate
    async fn search(&self, keywords: &str, limit: usize) -> Result<Vec<ResultItem>>;
}

/// Checks the status of a search response and decodes its JSON body.
pub(crate) async fn read_search_response<T: DeserializeOwned>(
    response: reqwest::Response,
    platform: Platform,
    query: &str,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::SearchFailed {
            query: query.to_string(),
            reason: format!("{platform} HTTP {status}"),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::NetworkError {
            reason: format!("{platform} response could not be read: {e}"),
        })?;

    serde_json::from_str(&body).map_err(|e| SearchError::ParseError {
        reason: format!("{platform} JSON parsing failed: {e}"),
    })
}

/// Returns the first candidate that is present and not blank.
pub(crate) fn first_present<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
