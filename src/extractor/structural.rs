//! Fallback structural extraction.
//!
//! Selector-driven strategy: ordered lists of CSS selectors for title,
//! author and body, first non-empty match wins. Used only when the
//! statistical extractor fails; handles the template shapes density
//! scoring gets wrong (line-break-only blogs, thin CMS pages).

use url::Url;

use crate::dom::{self, Document, Selection};
use crate::images::{self, FilterProfile};
use crate::selectors::{
    AUTHOR_SELECTORS, BLOCK_TEXT_SELECTOR, CONTENT_SELECTORS, NON_CONTENT_SELECTOR,
    TITLE_SELECTORS,
};

use super::{ContentStrategy, ExtractionResult};

/// Minimum joined body length a selector candidate must reach before it
/// is accepted. Below this the next selector in the chain is tried.
/// Tunable; the value has no derivation beyond observed behavior.
pub const MIN_BODY_CHARS: usize = 200;

/// Selector-driven extractor over ordered fallback chains.
#[derive(Debug, Default)]
pub struct StructuralExtractor;

impl StructuralExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContentStrategy for StructuralExtractor {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn extract(&self, html: &str, base: &Url) -> Option<ExtractionResult> {
        let doc = dom::parse(html);

        let title = extract_title(&doc)?;
        let author = extract_author(&doc);
        let body = extract_body(&doc)?;
        let images = images::harvest(&doc, base, FilterProfile::Strict);

        Some(ExtractionResult {
            title,
            body,
            author,
            images,
        })
    }
}

/// First title selector with non-empty text wins.
fn extract_title(doc: &Document) -> Option<String> {
    for selector in TITLE_SELECTORS {
        let Some(matched) = dom::select_first(doc, selector) else {
            continue;
        };
        let title = dom::text_content(&matched);
        if !title.is_empty() {
            return Some(title);
        }
    }
    None
}

/// First author selector with a non-empty value wins. Meta tags are read
/// via their content attribute.
fn extract_author(doc: &Document) -> Option<String> {
    for selector in AUTHOR_SELECTORS {
        let Some(matched) = dom::select_first(doc, selector) else {
            continue;
        };

        let author = if dom::tag_name(&matched).as_deref() == Some("meta") {
            dom::get_attribute(&matched, "content")
                .map(|content| content.trim().to_string())
                .unwrap_or_default()
        } else {
            dom::text_content(&matched)
        };

        if !author.is_empty() {
            return Some(author);
        }
    }
    None
}

/// Walk the content-container chain for a body candidate.
///
/// Containers are searched for block-level text first (paragraph join on
/// double breaks), then for their whole text (single breaks) to cover
/// templates that separate lines with `<br>` instead of `<p>`. Every
/// candidate must clear `MIN_BODY_CHARS`; a final pass over all document
/// paragraphs runs when no container qualifies.
fn extract_body(doc: &Document) -> Option<String> {
    // Work on a copy so stripping chrome doesn't disturb the caller's
    // tree (title/author/image passes read the same document).
    let working = dom::clone_document(doc);
    working.select(NON_CONTENT_SELECTOR).remove();

    for selector in CONTENT_SELECTORS {
        let Some(container) = dom::select_first(&working, selector) else {
            continue;
        };

        if let Some(body) = paragraph_join(&container) {
            return Some(body);
        }

        // No qualifying paragraph list; take the container's entire text.
        let full_text = dom::iter_text(&container, "\n");
        if full_text.chars().count() > MIN_BODY_CHARS {
            return Some(full_text);
        }
    }

    // Last resort: every paragraph in the document.
    join_blocks(&working.select("p"))
}

/// Join block-level text elements found inside a container.
fn paragraph_join(container: &Selection) -> Option<String> {
    let blocks = container.select(BLOCK_TEXT_SELECTOR);
    if blocks.is_empty() {
        return None;
    }
    join_blocks(&blocks)
}

/// Join the texts of the given block elements on double line breaks,
/// accepting the candidate only past the minimum length.
fn join_blocks(blocks: &Selection) -> Option<String> {
    let mut parts = Vec::new();
    for node in blocks.nodes() {
        let text = dom::text_content(&Selection::from(*node));
        if !text.is_empty() {
            parts.push(text);
        }
    }

    let joined = parts.join("\n\n");
    if joined.chars().count() > MIN_BODY_CHARS {
        Some(joined)
    } else {
        None
    }
}
