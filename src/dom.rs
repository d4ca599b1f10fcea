//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used across the extraction
//! strategies. Keeps selector-driven code free of node-walking noise.

pub use dom_query::{Document, Selection};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Clone a document by re-parsing its serialized form.
///
/// Used to build working copies that strategies may mutate (element
/// removal) without touching the caller's tree.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// Select the first element matching a selector, if any.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matched = doc.select(selector);
    let node = matched.nodes().first().copied();
    node.map(Selection::from)
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get any attribute value as an owned string.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants, whitespace-collapsed.
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    collapse_whitespace(sel.text().trim())
}

/// Get text content of node and descendants with one separator between
/// text nodes.
///
/// `Selection::text()` concatenates text nodes with nothing in between,
/// which glues `line1<br>line2` into `line1line2`. This walker keeps the
/// segments apart, matching separator-joined text extraction.
#[must_use]
pub fn iter_text(sel: &Selection, separator: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for node in sel.nodes() {
        for descendant in node.descendants() {
            if !descendant.is_text() {
                continue;
            }
            // Script and style payloads are not page text.
            if let Some(parent) = descendant.parent() {
                if let Some(tag) = parent.node_name() {
                    if tag.eq_ignore_ascii_case("script")
                        || tag.eq_ignore_ascii_case("style")
                        || tag.eq_ignore_ascii_case("noscript")
                    {
                        continue;
                    }
                }
            }
            let text = descendant.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(collapse_whitespace(trimmed));
            }
        }
    }

    parts.join(separator)
}

/// Collapse internal whitespace runs into single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }

    out.trim().to_string()
}
