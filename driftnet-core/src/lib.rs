//! Driftnet Core - Configuration and shared plumbing
//!
//! Loads the environment-sourced configuration used to build the platform
//! clients, sets up logging, and defines the errors that can stop the
//! process before any search runs.

pub mod config;
pub mod tracing_setup;

pub use config::{DriftnetConfig, HackerNewsConfig, RedditConfig, RedditCredentials};
pub use tracing_setup::{CliLogLevel, init_tracing};

/// Errors that can abort Driftnet before or outside of a platform query.
///
/// Platform faults never show up here; they are absorbed per platform by
/// the search dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DriftnetError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Logging setup failed: {reason}")]
    Logging { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DriftnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display_carries_reason() {
        let error = DriftnetError::Configuration {
            reason: "DRIFTNET_HN_API_URL is not a valid URL".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: DRIFTNET_HN_API_URL is not a valid URL"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: DriftnetError = io.into();
        assert!(matches!(error, DriftnetError::Io(_)));
        assert!(error.to_string().contains("missing"));
    }
}
