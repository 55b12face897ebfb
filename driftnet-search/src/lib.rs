//! Driftnet Search - Keyword search across Hacker News and Reddit

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Each platform sits behind a [`providers::SearchProvider`]. The
//! [`SearchDispatcher`] runs one query per platform and absorbs any failure
//! into an empty result set, so one platform going down never hides the
//! other's results.

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use errors::SearchError;
pub use providers::{HackerNewsProvider, RedditProvider, SearchProvider};
pub use service::{SearchDispatcher, SearchFailure, SearchReport};
pub use types::{MAX_RESULTS, Platform, ResultItem, ResultSet};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
