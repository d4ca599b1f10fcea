//! Article data model.
//!
//! The durable record handed to the rewriting and publishing collaborators.
//! Counters (word/image/comment) are derived at construction and recomputed
//! whenever the corresponding list mutates; they are never left stale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::patterns::{ASCII_WORD, CJK_CHAR};

/// Processing lifecycle of an article.
///
/// This crate owns `Pending -> Fetching -> Fetched | Failed`; the rewriting
/// and publishing collaborators own the later transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Pending,
    Fetching,
    Fetched,
    Rewriting,
    Rewritten,
    Publishing,
    Published,
    Failed,
}

/// An image reference extracted from an article page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Absolute image URL.
    pub url: String,

    /// Filename extracted from the URL path (without query params/fragments).
    pub filename: String,
}

impl ImageInfo {
    /// Build an image descriptor from an absolute URL.
    #[must_use]
    pub fn new(url: &str) -> Self {
        let filename = Url::parse(url)
            .ok()
            .and_then(|u| {
                u.path_segments()
                    .and_then(|mut segments| segments.next_back().map(str::to_string))
            })
            .unwrap_or_default();

        Self {
            url: url.to_string(),
            filename,
        }
    }
}

/// A single forum reply attached to an article.
///
/// Produced once by a comment strategy, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author, `"Anonymous"` when the page does not name one.
    pub author: String,

    /// Cleaned reply text (quotes and signatures removed).
    pub content: String,

    /// Publish timestamp when the page carries a machine-readable one.
    pub published: Option<DateTime<Utc>>,

    /// Like/reputation count, 0 when absent or unparsable.
    pub likes: u32,
}

impl Comment {
    /// Author name used when a comment element names nobody.
    pub const ANONYMOUS: &'static str = "Anonymous";

    #[must_use]
    pub fn new(author: String, content: String) -> Self {
        Self {
            author,
            content,
            published: None,
            likes: 0,
        }
    }
}

/// The durable article record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Source page URL.
    pub url: String,

    /// Article title.
    pub title: String,

    /// Author name when one was extracted.
    pub author: Option<String>,

    /// Article body as plain text.
    pub content: String,

    /// Hostname derived from `url`; never independently settable.
    pub source_domain: String,

    /// Language tag (defaults to the configured language).
    pub language: String,

    /// Images found in the page.
    pub images: Vec<ImageInfo>,

    /// Forum comments found in the page.
    pub comments: Vec<Comment>,

    /// Processing lifecycle state.
    pub status: ArticleStatus,

    /// Failure detail when `status` is `Failed`.
    pub error_message: Option<String>,

    /// Derived: ASCII word runs plus CJK characters in `content`.
    pub word_count: usize,

    /// Derived: `images.len()`.
    pub image_count: usize,

    /// Derived: `comments.len()`.
    pub comment_count: usize,

    /// When this record was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl Article {
    /// Build an article from extracted fields.
    ///
    /// `source_domain` is derived from the URL host and the counters are
    /// computed from the given content.
    #[must_use]
    pub fn new(url: &Url, title: String, author: Option<String>, content: String, language: String) -> Self {
        let word_count = count_words(&content);

        Self {
            url: url.to_string(),
            title,
            author: author.filter(|a| !a.is_empty()),
            content,
            source_domain: url.host_str().unwrap_or_default().to_string(),
            language,
            images: Vec::new(),
            comments: Vec::new(),
            status: ArticleStatus::Pending,
            error_message: None,
            word_count,
            image_count: 0,
            comment_count: 0,
            fetched_at: Utc::now(),
        }
    }

    /// Attach an image, keeping `image_count` in sync.
    pub fn add_image(&mut self, url: &str) {
        self.images.push(ImageInfo::new(url));
        self.image_count = self.images.len();
    }

    /// Attach a comment, keeping `comment_count` in sync.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.comment_count = self.comments.len();
    }

    /// Replace the image list, recomputing the counter.
    pub fn set_images(&mut self, urls: &[String]) {
        self.images = urls.iter().map(|u| ImageInfo::new(u)).collect();
        self.image_count = self.images.len();
    }

    /// Replace the comment list, recomputing the counter.
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
        self.comment_count = self.comments.len();
    }

    /// Serialize for handoff to the rewriting and publishing collaborators.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a record produced by [`Article::to_json`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Count ASCII word runs plus CJK ideographs.
///
/// Mixed-script pages are common in this domain's syndication targets, so
/// a pure whitespace split undercounts badly.
#[must_use]
pub fn count_words(content: &str) -> usize {
    ASCII_WORD.find_iter(content).count() + CJK_CHAR.find_iter(content).count()
}
