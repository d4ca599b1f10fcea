//! Forum comment extraction.
//!
//! Site-aware strategies pull discussion-thread replies out of forum
//! pages. Dispatch is a registry of host-pattern -> strategy entries with
//! a generic heuristic default, so adding a new forum adapter is a table
//! change. Individual comment failures are skipped via `Option`
//! composition; the extractor never fails the page fetch.

use chrono::{DateTime, Utc};
use tracing::debug;
use url::Url;

use crate::article::Comment;
use crate::dom::{self, Document, Selection};
use crate::selectors::{
    COMMENT_AUTHOR_SELECTORS, COMMENT_CONTENT_SELECTORS, COMMENT_LIKES_SELECTORS,
    GENERIC_COMMENT_SELECTORS,
};

/// Minimum cleaned content length for the IPS forum strategy. Short
/// replies on this template are reactions, not substantive content, so
/// the bar sits well above the generic strategy's.
pub const IPS_MIN_CONTENT_CHARS: usize = 100;

/// Minimum cleaned content length for the generic strategy.
pub const GENERIC_MIN_CONTENT_CHARS: usize = 20;

/// Minimum number of elements a generic selector must match before it is
/// trusted. Guards against false-positive single-element matches.
/// Tunable; the value has no derivation beyond observed behavior.
pub const GENERIC_SELECTOR_QUORUM: usize = 3;

/// A site-specific comment extraction strategy.
pub trait CommentStrategy: Send + Sync {
    /// Strategy name for log lines.
    fn name(&self) -> &'static str;

    /// Extract all comments from a parsed page.
    fn extract(&self, doc: &Document) -> Vec<Comment>;
}

/// Comment extractor with a host-keyed strategy registry.
pub struct CommentExtractor {
    /// Host-substring -> strategy table, checked in order.
    adapters: Vec<(&'static str, Box<dyn CommentStrategy>)>,
    generic: GenericForumStrategy,
}

impl Default for CommentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentExtractor {
    /// Build the extractor with the built-in site adapters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: vec![("thumpertalk.com", Box::new(IpsForumStrategy))],
            generic: GenericForumStrategy,
        }
    }

    /// Extract comments, dispatching on the URL host.
    #[must_use]
    pub fn extract(&self, html: &str, url: &Url) -> Vec<Comment> {
        let doc = dom::parse(html);
        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

        for (pattern, strategy) in &self.adapters {
            if host.contains(pattern) {
                let comments = strategy.extract(&doc);
                debug!(
                    strategy = strategy.name(),
                    count = comments.len(),
                    "site comment strategy finished"
                );
                return comments;
            }
        }

        let comments = self.generic.extract(&doc);
        debug!(count = comments.len(), "generic comment strategy finished");
        comments
    }
}

// === IPS forum template (thumpertalk.com) ===

/// Strategy for Invision Power Services forum markup.
pub struct IpsForumStrategy;

impl CommentStrategy for IpsForumStrategy {
    fn name(&self) -> &'static str {
        "ips-forum"
    }

    fn extract(&self, doc: &Document) -> Vec<Comment> {
        let containers = doc.select("article.ipsComment");
        let mut comments = Vec::new();

        for node in containers.nodes() {
            let element = Selection::from(*node);
            if let Some(comment) = parse_ips_comment(&element) {
                comments.push(comment);
            }
        }

        comments
    }
}

/// Parse one IPS comment container; `None` skips the comment.
fn parse_ips_comment(element: &Selection) -> Option<Comment> {
    let author = first_selector_text(
        element,
        &[
            "a.ipsType_break",
            ".ipsComment_author .ipsType_break",
            "[data-ipshover-data-target]",
        ],
    )
    .unwrap_or_else(|| Comment::ANONYMOUS.to_string());

    let content_sel = first_match(element, "div.ipsComment_content")
        .or_else(|| first_match(element, "[data-commentid]"))?;

    // Clean on a detached copy: quoted posts and signatures are not
    // genuine comment content.
    let content_doc = dom::parse(&content_sel.html());
    content_doc
        .select("blockquote, div.ipsQuote, div.ipsSignature")
        .remove();
    let content = dom::iter_text(&content_doc.select("body"), "\n");

    if content.chars().count() <= IPS_MIN_CONTENT_CHARS {
        return None;
    }

    let likes = first_match(element, "span.ipsRepNumber")
        .map(|sel| parse_like_count(&dom::text_content(&sel)))
        .unwrap_or(0);

    let published = first_match(element, "time")
        .and_then(|sel| dom::get_attribute(&sel, "datetime"))
        .and_then(|datetime| parse_timestamp(&datetime));

    Some(Comment {
        author,
        content,
        published,
        likes,
    })
}

// === Generic forum heuristic ===

/// Generic strategy over common comment-container selectors.
pub struct GenericForumStrategy;

impl CommentStrategy for GenericForumStrategy {
    fn name(&self) -> &'static str {
        "generic-forum"
    }

    fn extract(&self, doc: &Document) -> Vec<Comment> {
        for selector in GENERIC_COMMENT_SELECTORS {
            let containers = doc.select(selector);
            // Quorum: a single stray `.comment` div is not a thread.
            if containers.length() <= GENERIC_SELECTOR_QUORUM {
                continue;
            }

            let mut comments = Vec::new();
            for node in containers.nodes() {
                let element = Selection::from(*node);
                if let Some(comment) = parse_generic_comment(&element) {
                    comments.push(comment);
                }
            }

            // First selector that produces any comments wins.
            if !comments.is_empty() {
                return comments;
            }
        }

        Vec::new()
    }
}

/// Parse one generic comment container; `None` skips the comment.
fn parse_generic_comment(element: &Selection) -> Option<Comment> {
    let author = first_selector_text(element, COMMENT_AUTHOR_SELECTORS)
        .unwrap_or_else(|| Comment::ANONYMOUS.to_string());

    let content = extract_generic_content(element)?;
    if content.chars().count() <= GENERIC_MIN_CONTENT_CHARS {
        return None;
    }

    let likes = COMMENT_LIKES_SELECTORS
        .iter()
        .filter_map(|selector| first_match(element, selector))
        .map(|sel| parse_like_count(&dom::text_content(&sel)))
        .find(|&likes| likes > 0)
        .unwrap_or(0);

    Some(Comment {
        author,
        content,
        published: None,
        likes,
    })
}

/// Content via nested selector fallback, quotes and code blocks removed.
fn extract_generic_content(element: &Selection) -> Option<String> {
    let cleaned = dom::parse(&element.html());
    cleaned.select("blockquote, code, pre").remove();

    for selector in COMMENT_CONTENT_SELECTORS {
        let Some(matched) = dom::select_first(&cleaned, selector) else {
            continue;
        };
        let content = dom::iter_text(&matched, "\n");
        if content.chars().count() > GENERIC_MIN_CONTENT_CHARS {
            return Some(content);
        }
    }

    None
}

// === Shared field helpers ===

/// First selector whose first match has non-empty text.
fn first_selector_text(element: &Selection, selectors: &[&str]) -> Option<String> {
    for selector in selectors {
        if let Some(matched) = first_match(element, selector) {
            let text = dom::text_content(&matched);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Select within an element, `None` when nothing matches.
fn first_match<'a>(element: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let matched = element.select(selector);
    let node = matched.nodes().first().copied();
    node.map(Selection::from)
}

/// Parse a like/reputation count, defaulting to 0 on any failure.
fn parse_like_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Parse a machine-readable datetime attribute; failures leave the
/// timestamp unset rather than dropping the comment.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
