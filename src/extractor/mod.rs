//! Content extraction strategies and pipeline.
//!
//! # Module Structure
//!
//! - `primary`: statistics-based full-text extraction (text-density
//!   boilerplate removal, no site-specific selectors)
//! - `structural`: selector-driven fallback over ordered CSS chains
//! - `comments`: site-aware and generic forum comment extraction
//! - `pipeline`: orchestrates the fallback ordering and merges results
//!
//! Strategies share the [`ContentStrategy`] trait: attempt extraction,
//! return an optional result, never raise past the boundary. The pipeline
//! iterates them in order until one produces a complete result.

pub mod comments;
pub mod pipeline;
pub mod structural;

#[cfg(feature = "readability")]
pub mod primary;

pub use comments::CommentExtractor;
pub use pipeline::{ExtractionPipeline, PageExtraction};
pub use structural::StructuralExtractor;

#[cfg(feature = "readability")]
pub use primary::DensityExtractor;

use url::Url;

/// Result of one extraction strategy attempt.
///
/// Immutable once produced. A result is *complete* when both title and
/// body are non-empty; anything less triggers the next strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Extracted title.
    pub title: String,

    /// Extracted body as plain text.
    pub body: String,

    /// Extracted author, when the page names one.
    pub author: Option<String>,

    /// Absolute image URLs, deduplicated, in page order.
    pub images: Vec<String>,
}

impl ExtractionResult {
    /// Whether this result satisfies the title+body requirement.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty()
    }
}

/// An algorithm that attempts to derive title/body/author/images from
/// markup. May fail without raising; failure is `None`.
pub trait ContentStrategy {
    /// Strategy name for log lines.
    fn name(&self) -> &'static str;

    /// Attempt extraction against raw markup.
    ///
    /// Returns `None` when the strategy cannot produce a complete result;
    /// internal errors are normalized into `None`, never propagated.
    fn extract(&self, html: &str, base: &Url) -> Option<ExtractionResult>;
}
