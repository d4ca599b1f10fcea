//! Configuration options consumed by the pipeline and validation gate.
//!
//! The surrounding application owns configuration loading; this crate only
//! consumes the resolved values. Use `Default::default()` for standard
//! settings.

use std::time::Duration;

/// Configuration values for extraction, validation and batch fetching.
///
/// # Example
///
/// ```rust
/// use trailpress::Options;
///
/// let options = Options {
///     min_content_length: 300,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum body length in characters (inclusive).
    ///
    /// Default: `500`
    pub min_content_length: usize,

    /// Maximum body length in characters (exclusive).
    ///
    /// Default: `10000`
    pub max_content_length: usize,

    /// Language tag recorded on produced articles.
    ///
    /// Default: `"en"`
    pub language: String,

    /// Pause between items in batch fetching.
    ///
    /// A politeness measure against source sites, not a throughput knob.
    ///
    /// Default: 1 second
    pub batch_delay: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_content_length: 500,
            max_content_length: 10_000,
            language: "en".to_string(),
            batch_delay: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let opts = Options::default();
        assert_eq!(opts.min_content_length, 500);
        assert_eq!(opts.max_content_length, 10_000);
        assert_eq!(opts.language, "en");
        assert_eq!(opts.batch_delay, Duration::from_secs(1));
    }
}
