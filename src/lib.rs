//! # trailpress
//!
//! Web article extraction and validation for off-road content syndication.
//!
//! This library turns raw forum and blog pages into structured article
//! records: it extracts the main content (title, body, author, images),
//! pulls forum comments where the page carries them, and validates the
//! result against topical and quality rules before it moves downstream.
//!
//! ## Quick Start
//!
//! ```rust
//! use trailpress::extract;
//!
//! let paragraph = "<p>Long travel suspension soaks up braking bumps far \
//! better after a proper service with fresh oil and new seals.</p>"
//!     .repeat(4);
//! let html = format!(
//!     "<html><head><title>Fork Service Notes</title></head>\
//!      <body><article>{paragraph}</article></body></html>"
//! );
//!
//! let page = extract(&html, "https://example.com/fork-service")?;
//! assert_eq!(page.title, "Fork Service Notes");
//! # Ok::<(), trailpress::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Content Extraction**: Statistical extraction first, selector-driven
//!   fallback second; the first complete result wins
//! - **Comment Extraction**: Site-aware forum adapters with a generic
//!   selector-quorum fallback
//! - **Validation**: Topical relevance scoring, length windows, title
//!   quality and spam heuristics
//! - **Fetch Orchestration**: Batch fetching over any [`HtmlSource`]
//!   implementation, with per-URL failure isolation

mod error;
mod options;
mod patterns;

/// Article, comment and image data model.
pub mod article;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Content and comment extraction strategies and their pipeline.
pub mod extractor;

/// Fetch orchestration over an injected HTML source.
pub mod fetch;

/// Image harvesting and filtering.
pub mod images;

/// CSS selector tables shared by the structural strategies.
pub mod selectors;

/// URL pre-validation and resolution helpers.
pub mod url_utils;

/// Rule-based article validation.
pub mod validate;

// Public API - re-exports
pub use article::{Article, ArticleStatus, Comment, ImageInfo};
pub use error::{Error, Result};
pub use extractor::{ContentStrategy, ExtractionPipeline, ExtractionResult, PageExtraction};
pub use fetch::{ArticleFetcher, FetchOutcome, HtmlSource};
pub use options::Options;
pub use validate::{ArticleValidator, ValidationVerdict};

/// Extracts content and comments from an HTML document.
///
/// Runs the default pipeline: statistical extraction with selector-driven
/// fallback, plus comment extraction. The URL is pre-validated and used
/// to resolve relative image references and pick comment adapters.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] or [`Error::UnsupportedDomain`] when the
/// URL fails pre-validation, and [`Error::NoContent`] when no strategy
/// produces a complete title and body.
///
/// # Example
///
/// ```rust
/// use trailpress::extract;
///
/// let paragraph = "<p>The carburetor needed a full strip, an ultrasonic \
/// clean and a fresh pilot jet before the engine idled right.</p>"
///     .repeat(4);
/// let html = format!(
///     "<html><head><title>Carburetor Cleaning Guide</title></head>\
///      <body><article>{paragraph}</article></body></html>"
/// );
/// let page = extract(&html, "https://example.com/carb-clean")?;
/// assert!(!page.body.is_empty());
/// # Ok::<(), trailpress::Error>(())
/// ```
pub fn extract(html: &str, url: &str) -> Result<PageExtraction> {
    let url = url_utils::precheck_url(url)?;
    let page = ExtractionPipeline::new().run(html, &url);

    if page.is_complete() {
        Ok(page)
    } else {
        Err(Error::NoContent)
    }
}
