//! Scripted provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::SearchProvider;
use crate::Result;
use crate::errors::SearchError;
use crate::types::{Platform, ResultItem};

/// Provider that answers every search with the same canned outcome and
/// counts how often it was asked.
#[derive(Debug)]
pub struct StaticProvider {
    platform: Platform,
    outcome: std::result::Result<Vec<ResultItem>, String>,
    calls: AtomicUsize,
}

impl StaticProvider {
    /// Provider that always returns `items`.
    pub fn returning(platform: Platform, items: Vec<ResultItem>) -> Self {
        Self {
            platform,
            outcome: Ok(items),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that always fails with a `ProviderError` carrying `reason`.
    pub fn failing(platform: Platform, reason: impl Into<String>) -> Self {
        Self {
            platform,
            outcome: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of searches received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for StaticProvider {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn search(&self, _keywords: &str, limit: usize) -> Result<Vec<ResultItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(items) => Ok(items.iter().take(limit).cloned().collect()),
            Err(reason) => Err(SearchError::ProviderError {
                reason: reason.clone(),
            }),
        }
    }
}
