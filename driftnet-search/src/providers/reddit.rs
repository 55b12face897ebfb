//! Reddit search through the OAuth API.

use async_trait::async_trait;
use driftnet_core::{RedditConfig, RedditCredentials};
use serde::Deserialize;

use super::{SearchProvider, first_present, read_search_response};
use crate::Result;
use crate::errors::SearchError;
use crate::types::{Platform, ResultItem};

const PERMALINK_DOMAIN: &str = "https://www.reddit.com";
const DELETED_AUTHOR: &str = "[deleted]";

/// Reddit provider searching submissions across `r/all`.
///
/// A fresh application-only OAuth token is requested for every search using
/// the client-credentials grant. Missing credentials fail the search before
/// any request is sent.
#[derive(Debug)]
pub struct RedditProvider {
    config: RedditConfig,
}

/// Token endpoint response. Reddit reports some failures with a 200 status
/// and an `error` field.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Submission,
}

/// Fields consumed from a `t3` submission.
#[derive(Debug, Deserialize)]
struct Submission {
    #[serde(default)]
    title: String,
    author: Option<String>,
    subreddit: Option<String>,
    #[serde(default)]
    permalink: String,
}

impl Submission {
    fn into_item(self) -> ResultItem {
        let author = first_present([self.author]).filter(|name| name != DELETED_AUTHOR);

        ResultItem {
            platform: Platform::Reddit,
            text: self.title,
            author,
            url: format!("{PERMALINK_DOMAIN}{}", self.permalink),
            community: first_present([self.subreddit]),
        }
    }
}

impl RedditProvider {
    /// Create provider from loaded Reddit configuration.
    pub fn new(config: RedditConfig) -> Self {
        Self { config }
    }

    fn build_client(credentials: &RedditCredentials<'_>) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(credentials.user_agent)
            .build()
            .map_err(|e| SearchError::ProviderError {
                reason: format!("Reddit client could not be built: {e}"),
            })
    }

    /// Exchange client credentials for an application-only bearer token.
    async fn fetch_token(
        &self,
        client: &reqwest::Client,
        credentials: &RedditCredentials<'_>,
    ) -> Result<String> {
        let response = client
            .post(&self.config.auth_url)
            .basic_auth(credentials.client_id, Some(credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("Reddit token request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::AuthenticationFailed {
                reason: format!("Reddit token endpoint returned HTTP {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("Reddit token response could not be read: {e}"),
            })?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::ParseError {
                reason: format!("Reddit token JSON parsing failed: {e}"),
            })?;

        if let Some(error) = token.error {
            let reason = match error {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            };
            return Err(SearchError::AuthenticationFailed { reason });
        }

        first_present([token.access_token]).ok_or_else(|| SearchError::AuthenticationFailed {
            reason: "token response carried no access_token".to_string(),
        })
    }
}

#[async_trait]
impl SearchProvider for RedditProvider {
    fn platform(&self) -> Platform {
        Platform::Reddit
    }

    async fn search(&self, keywords: &str, limit: usize) -> Result<Vec<ResultItem>> {
        let credentials =
            self.config
                .credentials()
                .map_err(|variable| SearchError::MissingCredential {
                    variable: variable.to_string(),
                })?;

        let client = Self::build_client(&credentials)?;
        let token = self.fetch_token(&client, &credentials).await?;

        let url = format!("{}r/all/search", self.config.api_url);
        let limit_param = limit.to_string();
        let params = [
            ("q", keywords),
            ("limit", limit_param.as_str()),
            ("sort", "relevance"),
            ("t", "all"),
            ("restrict_sr", "on"),
            ("raw_json", "1"),
        ];

        tracing::debug!(%url, keywords, limit, "Searching Reddit");

        let response = client
            .get(&url)
            .bearer_auth(&token)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("Reddit request failed: {e}"),
            })?;

        let listing: Listing = read_search_response(response, Platform::Reddit, keywords).await?;

        tracing::debug!(
            submissions = listing.data.children.len(),
            "Reddit responded"
        );

        Ok(listing
            .data
            .children
            .into_iter()
            .take(limit)
            .map(|child| child.data.into_item())
            .collect())
    }
}
