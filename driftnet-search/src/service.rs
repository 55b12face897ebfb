//! Query dispatch across platforms
//!
//! Runs one search per platform and turns every platform failure into an
//! empty result set plus a recorded [`SearchFailure`]. Nothing here returns
//! an error to the caller.

use std::fmt;

use driftnet_core::DriftnetConfig;

use crate::Result;
use crate::errors::SearchError;
use crate::providers::{HackerNewsProvider, RedditProvider, SearchProvider};
use crate::types::{MAX_RESULTS, Platform, ResultSet};

/// Dispatches keyword searches to one provider per platform.
#[derive(Debug)]
pub struct SearchDispatcher {
    hacker_news: Box<dyn SearchProvider>,
    reddit: Box<dyn SearchProvider>,
}

/// Why one platform's section came back empty.
#[derive(Debug)]
pub struct SearchFailure {
    /// Platform whose query failed
    pub platform: Platform,
    /// The underlying failure
    pub error: SearchError,
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error searching {}: {}", self.platform, self.error)
    }
}

/// Combined outcome of one search run, ready for rendering.
#[derive(Debug, Default)]
pub struct SearchReport {
    /// Hacker News results, empty when the query failed
    pub hacker_news: ResultSet,
    /// Reddit results, empty when the query failed
    pub reddit: ResultSet,
    /// Failures in the order they happened
    pub failures: Vec<SearchFailure>,
}

impl SearchReport {
    /// Results for `platform`.
    pub fn results(&self, platform: Platform) -> &ResultSet {
        match platform {
            Platform::HackerNews => &self.hacker_news,
            Platform::Reddit => &self.reddit,
        }
    }

    /// Failure recorded for `platform`, if its query failed.
    pub fn failure(&self, platform: Platform) -> Option<&SearchFailure> {
        self.failures.iter().find(|f| f.platform == platform)
    }

    fn set_results(&mut self, platform: Platform, results: ResultSet) {
        match platform {
            Platform::HackerNews => self.hacker_news = results,
            Platform::Reddit => self.reddit = results,
        }
    }
}

impl SearchDispatcher {
    /// Creates a dispatcher with the real platform providers.
    pub fn from_config(config: &DriftnetConfig) -> Self {
        Self::with_providers(
            Box::new(HackerNewsProvider::new(&config.hacker_news)),
            Box::new(RedditProvider::new(config.reddit.clone())),
        )
    }

    /// Creates a dispatcher with explicit providers.
    pub fn with_providers(
        hacker_news: Box<dyn SearchProvider>,
        reddit: Box<dyn SearchProvider>,
    ) -> Self {
        Self {
            hacker_news,
            reddit,
        }
    }

    fn provider(&self, platform: Platform) -> &dyn SearchProvider {
        match platform {
            Platform::HackerNews => self.hacker_news.as_ref(),
            Platform::Reddit => self.reddit.as_ref(),
        }
    }

    /// Searches one platform for up to [`MAX_RESULTS`] items.
    ///
    /// # Errors
    /// - Any `SearchError` the platform's provider reports
    pub async fn try_search(
        &self,
        platform: Platform,
        keywords: &str,
    ) -> Result<ResultSet> {
        let items = self
            .provider(platform)
            .search(keywords, MAX_RESULTS)
            .await?;
        Ok(ResultSet::new(items))
    }

    /// Searches Hacker News stories and comments, newest first.
    ///
    /// Returns an empty set when the search fails. The failure is only
    /// logged at `warn`; use [`run`](Self::run) to get it back in
    /// [`SearchReport::failures`] for display.
    pub async fn search_hacker_news(&self, keywords: &str) -> ResultSet {
        self.search_or_empty(Platform::HackerNews, keywords).await
    }

    /// Searches Reddit submissions across all subreddits.
    ///
    /// Returns an empty set when the search fails, including when
    /// credentials are missing or rejected. The failure is only logged at
    /// `warn`; use [`run`](Self::run) to get it back in
    /// [`SearchReport::failures`] for display.
    pub async fn search_reddit(&self, keywords: &str) -> ResultSet {
        self.search_or_empty(Platform::Reddit, keywords).await
    }

    async fn search_or_empty(&self, platform: Platform, keywords: &str) -> ResultSet {
        match self.try_search(platform, keywords).await {
            Ok(results) => results,
            Err(error) => {
                log_failure(platform, &error);
                ResultSet::empty()
            }
        }
    }

    /// Searches every platform in turn.
    pub async fn run(&self, keywords: &str) -> SearchReport {
        self.run_with_progress(keywords, |_| {}).await
    }

    /// Searches every platform in turn, calling `on_start` before each
    /// platform's query.
    pub async fn run_with_progress<F>(&self, keywords: &str, mut on_start: F) -> SearchReport
    where
        F: FnMut(Platform),
    {
        let mut report = SearchReport::default();

        for platform in Platform::ALL {
            on_start(platform);
            match self.try_search(platform, keywords).await {
                Ok(results) => report.set_results(platform, results),
                Err(error) => {
                    log_failure(platform, &error);
                    report.failures.push(SearchFailure { platform, error });
                }
            }
        }

        tracing::debug!(
            hacker_news = report.hacker_news.len(),
            reddit = report.reddit.len(),
            failures = report.failures.len(),
            "Search run complete"
        );

        report
    }
}

fn log_failure(platform: Platform, error: &SearchError) {
    tracing::warn!(
        %platform,
        %error,
        configuration = error.is_configuration_fault(),
        "Platform search failed, showing no results"
    );
}
