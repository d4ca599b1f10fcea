//! Selector tables for the structural extractor and comment strategies.
//!
//! Every chain is an ordered fallback list: earlier entries are more
//! specific and win over later, more generic ones. Adding support for a
//! new CMS or forum template is a table edit, not a code change.

/// Title selectors, most specific heading classes first, microdata last.
pub static TITLE_SELECTORS: &[&str] = &[
    "h1.title",
    "h1.article-title",
    "h1.post-title",
    "h1.entry-title",
    "title",
    "h1",
    r#"[itemprop="headline"]"#,
    ".post-title h1",
];

/// Author selectors. `meta[name="author"]` is read via its content
/// attribute, not its text.
pub static AUTHOR_SELECTORS: &[&str] = &[
    r#"[itemprop="author"]"#,
    ".author",
    ".post-author",
    ".article-author",
    r#"meta[name="author"]"#,
    ".byline",
    ".author-name",
];

/// Content-container selectors: semantic article, microdata body, common
/// CMS content classes, then layout fallbacks.
pub static CONTENT_SELECTORS: &[&str] = &[
    "article",
    r#"[itemprop="articleBody"]"#,
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content",
    "#content",
    ".post-body",
    // Blogger wraps post bodies in a div with this class
    "div.post-body",
    "main",
];

/// Non-content elements stripped from the working copy before body search.
pub static NON_CONTENT_SELECTOR: &str = "script, style, nav, footer, header, aside, iframe";

/// Block-level text elements collected inside a content container.
pub static BLOCK_TEXT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6";

/// Generic comment-container selectors tried by the generic strategy.
pub static GENERIC_COMMENT_SELECTORS: &[&str] = &[
    ".comment",
    ".post",
    ".reply",
    r#"[itemprop="comment"]"#,
    ".forum-post",
    ".discussion-post",
];

/// Author selectors inside a generic comment container.
pub static COMMENT_AUTHOR_SELECTORS: &[&str] = &[
    ".author",
    ".username",
    ".user-name",
    r#"[itemprop="author"]"#,
    ".comment-author",
];

/// Content selectors inside a generic comment container.
pub static COMMENT_CONTENT_SELECTORS: &[&str] = &[
    ".content",
    ".comment-body",
    ".message",
    ".text",
    r#"[itemprop="text"]"#,
    "p",
];

/// Like-count selectors inside a generic comment container.
pub static COMMENT_LIKES_SELECTORS: &[&str] = &[
    ".likes",
    ".upvotes",
    ".vote-count",
    "[data-likes]",
];
