//! Error types for platform search.

use thiserror::Error;

/// Errors that can occur while querying a single platform.
///
/// None of these escape the dispatcher: each one degrades its platform's
/// section to an empty result set.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The platform answered the search request with a failure status.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// Network communication error occurred during search.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse the platform's response body.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// The platform rejected the client's credentials.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason reported by the token endpoint
        reason: String,
    },

    /// A credential the platform client needs was not configured.
    #[error("Missing credential: {variable} is not set")]
    MissingCredential {
        /// Environment variable that should have provided the credential
        variable: String,
    },

    /// The provider could not run the search for any other reason.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },
}

impl SearchError {
    /// Checks if this error comes from local configuration rather than the
    /// remote platform.
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            SearchError::MissingCredential { .. } | SearchError::AuthenticationFailed { .. }
        )
    }
}
