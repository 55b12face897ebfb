//! Centralized configuration for Driftnet.
//!
//! Every value comes from the process environment (optionally seeded from a
//! `.env` file) and is read once at startup. Credentials are passed through
//! untouched; the Reddit client is the one that rejects missing values, at
//! query time.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use url::Url;

use crate::tracing_setup::CliLogLevel;
use crate::{DriftnetError, Result};

const REDDIT_CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
const REDDIT_CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
const REDDIT_USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";
const HN_API_URL_VAR: &str = "DRIFTNET_HN_API_URL";
const REDDIT_AUTH_URL_VAR: &str = "DRIFTNET_REDDIT_AUTH_URL";
const REDDIT_API_URL_VAR: &str = "DRIFTNET_REDDIT_API_URL";
const LOG_LEVEL_VAR: &str = "DRIFTNET_LOG_LEVEL";

const DEFAULT_HN_API_URL: &str = "https://hn.algolia.com/api/v1/";
const DEFAULT_REDDIT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
const DEFAULT_REDDIT_API_URL: &str = "https://oauth.reddit.com/";

/// Central configuration for all Driftnet components.
#[derive(Debug, Clone)]
pub struct DriftnetConfig {
    pub hacker_news: HackerNewsConfig,
    pub reddit: RedditConfig,
    /// Console log level used when `RUST_LOG` is not set
    pub log_level: CliLogLevel,
}

/// Hacker News (Algolia) search endpoint configuration.
#[derive(Debug, Clone)]
pub struct HackerNewsConfig {
    /// Base URL of the Algolia HN API, always ending in `/`
    pub api_url: String,
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_HN_API_URL.to_string(),
        }
    }
}

/// Reddit OAuth client configuration.
///
/// The three credential fields are `None` when the environment does not
/// provide them.
#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub user_agent: Option<String>,
    /// Token endpoint for the client-credentials grant
    pub auth_url: String,
    /// Base URL of the OAuth API, always ending in `/`
    pub api_url: String,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            user_agent: None,
            auth_url: DEFAULT_REDDIT_AUTH_URL.to_string(),
            api_url: DEFAULT_REDDIT_API_URL.to_string(),
        }
    }
}

/// Complete set of Reddit credentials, borrowed from a [`RedditConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RedditCredentials<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub user_agent: &'a str,
}

impl RedditConfig {
    /// Returns the credentials if all three are present, otherwise the name
    /// of the first missing environment variable.
    ///
    /// # Errors
    /// - `&'static str` - Name of the environment variable that was not set
    pub fn credentials(&self) -> std::result::Result<RedditCredentials<'_>, &'static str> {
        tracing::debug!(
            client_id = self.client_id.is_some(),
            client_secret = self.client_secret.is_some(),
            user_agent = self.user_agent.is_some(),
            "Reddit credentials present"
        );

        let client_id = self.client_id.as_deref().ok_or(REDDIT_CLIENT_ID_VAR)?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(REDDIT_CLIENT_SECRET_VAR)?;
        let user_agent = self.user_agent.as_deref().ok_or(REDDIT_USER_AGENT_VAR)?;

        Ok(RedditCredentials {
            client_id,
            client_secret,
            user_agent,
        })
    }
}

impl Default for DriftnetConfig {
    fn default() -> Self {
        Self {
            hacker_news: HackerNewsConfig::default(),
            reddit: RedditConfig::default(),
            log_level: CliLogLevel::Error,
        }
    }
}

impl DriftnetConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the environment take precedence over it.
    ///
    /// # Errors
    /// - `DriftnetError::Configuration` - An endpoint override is not a valid URL
    ///   or the log level is unknown
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an explicit env file, with the process
    /// environment taking precedence over the file's entries.
    ///
    /// # Errors
    /// - `DriftnetError::Configuration` - The file cannot be read or parsed, or a
    ///   value inside it is invalid
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| DriftnetError::Configuration {
                reason: format!("cannot read {}: {e}", path.display()),
            })?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .map_err(|e| DriftnetError::Configuration {
                reason: format!("cannot parse {}: {e}", path.display()),
            })?;

        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| entries.get(key).cloned())
        })
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// - `DriftnetError::Configuration` - An endpoint override is not a valid URL
    ///   or the log level is unknown
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.reddit.client_id = non_blank(lookup(REDDIT_CLIENT_ID_VAR));
        config.reddit.client_secret = non_blank(lookup(REDDIT_CLIENT_SECRET_VAR));
        config.reddit.user_agent = non_blank(lookup(REDDIT_USER_AGENT_VAR));

        if let Some(value) = non_blank(lookup(HN_API_URL_VAR)) {
            config.hacker_news.api_url = parse_base_url(HN_API_URL_VAR, &value)?;
        }
        if let Some(value) = non_blank(lookup(REDDIT_AUTH_URL_VAR)) {
            config.reddit.auth_url = parse_url(REDDIT_AUTH_URL_VAR, &value)?;
        }
        if let Some(value) = non_blank(lookup(REDDIT_API_URL_VAR)) {
            config.reddit.api_url = parse_base_url(REDDIT_API_URL_VAR, &value)?;
        }
        if let Some(value) = non_blank(lookup(LOG_LEVEL_VAR)) {
            config.log_level =
                CliLogLevel::from_str(&value).map_err(|reason| DriftnetError::Configuration {
                    reason: format!("{LOG_LEVEL_VAR}: {reason}"),
                })?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_url(variable: &str, value: &str) -> Result<String> {
    Url::parse(value.trim())
        .map(String::from)
        .map_err(|e| DriftnetError::Configuration {
            reason: format!("{variable} is not a valid URL ({value}): {e}"),
        })
}

/// Parses a base URL and makes sure it ends in `/` so relative joins keep
/// the last path segment.
fn parse_base_url(variable: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.ends_with('/') {
        parse_url(variable, trimmed)
    } else {
        parse_url(variable, &format!("{trimmed}/"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = DriftnetConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.hacker_news.api_url, DEFAULT_HN_API_URL);
        assert_eq!(config.reddit.auth_url, DEFAULT_REDDIT_AUTH_URL);
        assert_eq!(config.reddit.api_url, DEFAULT_REDDIT_API_URL);
        assert!(config.reddit.client_id.is_none());
        assert!(config.reddit.client_secret.is_none());
        assert!(config.reddit.user_agent.is_none());
        assert!(matches!(config.log_level, CliLogLevel::Error));
    }

    #[test]
    fn test_reads_reddit_credentials() {
        let config = DriftnetConfig::from_lookup(lookup_from(&[
            ("REDDIT_CLIENT_ID", "id"),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("REDDIT_USER_AGENT", "driftnet/0.1 by tester"),
        ]))
        .unwrap();

        let credentials = config.reddit.credentials().unwrap();
        assert_eq!(credentials.client_id, "id");
        assert_eq!(credentials.client_secret, "secret");
        assert_eq!(credentials.user_agent, "driftnet/0.1 by tester");
    }

    #[test]
    fn test_missing_credential_is_not_a_load_error() {
        let config =
            DriftnetConfig::from_lookup(lookup_from(&[("REDDIT_CLIENT_ID", "id")])).unwrap();

        assert_eq!(
            config.reddit.credentials().unwrap_err(),
            "REDDIT_CLIENT_SECRET"
        );
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let config = DriftnetConfig::from_lookup(lookup_from(&[
            ("REDDIT_CLIENT_ID", ""),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("REDDIT_USER_AGENT", "driftnet/0.1 by tester"),
        ]))
        .unwrap();

        assert!(config.reddit.client_id.is_none());
        assert_eq!(config.reddit.credentials().unwrap_err(), "REDDIT_CLIENT_ID");
    }

    #[test]
    fn test_base_url_override_gains_trailing_slash() {
        let config = DriftnetConfig::from_lookup(lookup_from(&[
            ("DRIFTNET_HN_API_URL", "http://127.0.0.1:9000/api/v1"),
            ("DRIFTNET_REDDIT_API_URL", "http://127.0.0.1:9001"),
        ]))
        .unwrap();

        assert_eq!(
            config.hacker_news.api_url,
            "http://127.0.0.1:9000/api/v1/"
        );
        assert_eq!(config.reddit.api_url, "http://127.0.0.1:9001/");
    }

    #[test]
    fn test_invalid_url_override_is_rejected() {
        let error =
            DriftnetConfig::from_lookup(lookup_from(&[("DRIFTNET_REDDIT_AUTH_URL", "not a url")]))
                .unwrap_err();

        assert!(matches!(error, DriftnetError::Configuration { .. }));
        assert!(error.to_string().contains("DRIFTNET_REDDIT_AUTH_URL"));
    }

    #[test]
    fn test_blank_override_keeps_default() {
        let config =
            DriftnetConfig::from_lookup(lookup_from(&[("DRIFTNET_HN_API_URL", "  ")])).unwrap();
        assert_eq!(config.hacker_news.api_url, DEFAULT_HN_API_URL);
    }

    #[test]
    fn test_log_level_override() {
        let config =
            DriftnetConfig::from_lookup(lookup_from(&[("DRIFTNET_LOG_LEVEL", "Debug")])).unwrap();
        assert!(matches!(config.log_level, CliLogLevel::Debug));

        let error = DriftnetConfig::from_lookup(lookup_from(&[("DRIFTNET_LOG_LEVEL", "loud")]))
            .unwrap_err();
        assert!(matches!(error, DriftnetError::Configuration { .. }));
    }

    #[test]
    fn test_from_env_file_reads_key_value_pairs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# reddit app").unwrap();
        writeln!(file, "DRIFTNET_REDDIT_AUTH_URL=http://localhost:7777/token").unwrap();
        writeln!(file, "DRIFTNET_LOG_LEVEL=warn").unwrap();

        let config = DriftnetConfig::from_env_file(file.path()).unwrap();

        assert_eq!(
            config.reddit.auth_url,
            "http://localhost:7777/token"
        );
        assert!(matches!(config.log_level, CliLogLevel::Warn));
    }

    #[test]
    fn test_from_env_file_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = DriftnetConfig::from_env_file(&dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(error, DriftnetError::Configuration { .. }));
    }
}
