//! Primary statistical extraction.
//!
//! Generic full-document extraction via `dom_smoothie`'s Readability
//! implementation: boilerplate is identified by text-density scoring, not
//! selector matching, so unknown site templates need no maintenance. The
//! trade-off is silent failure on atypical layouts, which is why this
//! strategy is never trusted alone.

use dom_smoothie::{Config, Readability};
use url::Url;

use crate::dom::{self, Selection};
use crate::images::{self, FilterProfile};
use crate::selectors::BLOCK_TEXT_SELECTOR;

use super::{ContentStrategy, ExtractionResult};

/// Statistics-based full-text extractor.
#[derive(Debug, Default)]
pub struct DensityExtractor;

impl DensityExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContentStrategy for DensityExtractor {
    fn name(&self) -> &'static str {
        "density"
    }

    fn extract(&self, html: &str, base: &Url) -> Option<ExtractionResult> {
        let cfg = Config {
            max_elements_to_parse: 9000,
            ..Config::default()
        };

        let mut reader = Readability::new(html, Some(base.as_str()), Some(cfg)).ok()?;
        let article = reader.parse().ok()?;

        let title = article.title.trim().to_string();
        let body = readable_body_text(&article.content.to_string());
        let author = article
            .byline
            .map(|byline| byline.trim().to_string())
            .filter(|byline| !byline.is_empty());

        if title.is_empty() || body.is_empty() {
            return None;
        }

        // Images come from the raw markup, not the readability output:
        // density scoring drops figures that sit outside the main text
        // cluster but still belong to the article.
        let raw_doc = dom::parse(html);
        let images = images::harvest(&raw_doc, base, FilterProfile::Permissive);

        Some(ExtractionResult {
            title,
            body,
            author,
            images,
        })
    }
}

/// Flatten the readability content document into paragraph-joined text.
///
/// Block-level elements joined on double line breaks; when the content
/// carries no block elements at all, the whole text joined on single
/// breaks.
fn readable_body_text(content_html: &str) -> String {
    let doc = dom::parse(content_html);

    let mut paragraphs = Vec::new();
    for node in doc.select(BLOCK_TEXT_SELECTOR).nodes() {
        let text = dom::text_content(&Selection::from(*node));
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    if paragraphs.is_empty() {
        return dom::iter_text(&doc.select("body"), "\n");
    }

    paragraphs.join("\n\n")
}
