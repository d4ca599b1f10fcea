//! Extraction pipeline orchestration.
//!
//! A deterministic pipeline with one conditional branch: ordered content
//! strategies are tried until one yields a complete result (fallback is
//! all-or-nothing, never a field-by-field merge), then comment extraction
//! always runs against the raw markup.

use tracing::debug;
use url::Url;

use crate::article::Comment;

use super::comments::CommentExtractor;
use super::structural::StructuralExtractor;
use super::{ContentStrategy, ExtractionResult};

/// The merged output of one pipeline run.
///
/// The fetch as a whole fails only when `title` or `body` is still empty
/// after every strategy has been tried.
#[derive(Debug, Clone, Default)]
pub struct PageExtraction {
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub images: Vec<String>,
    pub comments: Vec<Comment>,
}

impl PageExtraction {
    /// Whether a usable title and body were found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty()
    }
}

/// Orchestrates content strategies and the comment extractor.
///
/// Constructed once by the owning fetcher and passed down; holds no
/// mutable state, so one instance serves any number of pages.
pub struct ExtractionPipeline {
    strategies: Vec<Box<dyn ContentStrategy + Send + Sync>>,
    comments: CommentExtractor,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionPipeline {
    /// Build the default strategy chain: statistical extraction first,
    /// selector-driven extraction as fallback.
    #[must_use]
    pub fn new() -> Self {
        let mut strategies: Vec<Box<dyn ContentStrategy + Send + Sync>> = Vec::new();

        #[cfg(feature = "readability")]
        strategies.push(Box::new(super::primary::DensityExtractor::new()));

        strategies.push(Box::new(StructuralExtractor::new()));

        Self {
            strategies,
            comments: CommentExtractor::new(),
        }
    }

    /// Build a pipeline from explicit strategies. Used by callers that
    /// need a custom chain; the ordering is the fallback ordering.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn ContentStrategy + Send + Sync>>) -> Self {
        Self {
            strategies,
            comments: CommentExtractor::new(),
        }
    }

    /// Run the pipeline over raw markup.
    #[must_use]
    pub fn run(&self, html: &str, url: &Url) -> PageExtraction {
        let content = self.extract_content(html, url).unwrap_or_default();
        let comments = self.comments.extract(html, url);

        PageExtraction {
            title: content.title,
            body: content.body,
            author: content.author,
            images: content.images,
            comments,
        }
    }

    /// Try each strategy in order; the first complete result wins and
    /// later strategies never run.
    fn extract_content(&self, html: &str, url: &Url) -> Option<ExtractionResult> {
        for strategy in &self.strategies {
            match strategy.extract(html, url) {
                Some(result) if result.is_complete() => {
                    debug!(strategy = strategy.name(), "content strategy succeeded");
                    return Some(result);
                }
                _ => {
                    debug!(strategy = strategy.name(), "content strategy failed, falling back");
                }
            }
        }
        None
    }
}
