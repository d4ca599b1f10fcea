//! Error types for trailpress.
//!
//! This module defines the error types returned by fetch and extraction
//! operations. Strategy-internal failures never surface here; they collapse
//! into empty results and trigger the next fallback instead.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL failed pre-validation (bad scheme, missing host).
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// URL targets a host on the social-media denylist.
    #[error("fetching from {0} is not supported")]
    UnsupportedDomain(String),

    /// The HTTP collaborator failed to retrieve the page.
    #[error("failed to retrieve page: {0}")]
    Fetch(String),

    /// Every extraction strategy came back with an empty title or body.
    #[error("no extractable content found (empty title or body)")]
    NoContent,
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
