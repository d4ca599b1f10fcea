//! Article validation.
//!
//! Every fetched article passes through the full rule set before it can
//! move forward. Checks never short-circuit: a failing article reports
//! all of its violations at once so a reviewer sees the whole picture
//! in a single pass.

use tracing::debug;

use crate::article::Article;
use crate::options::Options;
use crate::patterns::{
    has_repeated_char_run, BODY_SPAM_PHRASES, LINK_OCCURRENCE, MAX_LINK_COUNT, SPAM_PHRASE_QUORUM,
    TITLE_SPAM_PHRASES,
};

/// Title length window, in characters.
const TITLE_MIN_CHARS: usize = 10;
const TITLE_MAX_CHARS: usize = 200;

/// A title keyword hit counts three times a body hit.
const TITLE_KEYWORD_WEIGHT: usize = 3;
/// Minimum weighted keyword score for an article to count as on-topic.
const RELEVANCE_THRESHOLD: usize = 3;

/// Vocabulary for topical relevance scoring. Each keyword is counted at
/// most once per field regardless of how often it appears.
const OFFROAD_KEYWORDS: &[&str] = &[
    "motorcycle",
    "dirt bike",
    "off-road",
    "atv",
    "quad",
    "mx",
    "enduro",
    "motocross",
    "supercross",
    "trail",
    "adventure",
    "dual-sport",
    "helm",
    "gear",
    "protective",
    "suspension",
    "exhaust",
    "engine",
    "tire",
    "wheel",
    "brake",
    "frame",
    "handlebar",
    "footpeg",
    "maintenance",
    "repair",
    "upgrade",
    "performance",
    "modification",
    "setup",
    "tuning",
    "horsepower",
    "torque",
    "compression",
    "carburetor",
    "fuel injection",
    "clutch",
    "transmission",
    "chain",
    "sprocket",
    "kawasaki",
    "yamaha",
    "honda",
    "suzuki",
    "ktm",
    "husqvarna",
    "gasgas",
    "beta",
    "sherco",
    "tm",
    "husaberg",
    "aprilia",
];

/// Outcome of a validation run. `violations` is empty exactly when
/// `passed` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub passed: bool,
    pub violations: Vec<String>,
}

impl ValidationVerdict {
    fn from_violations(violations: Vec<String>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }
}

/// Rule-based article validator.
///
/// Holds the length window from the caller's options; everything else
/// is fixed vocabulary and thresholds.
#[derive(Debug, Clone)]
pub struct ArticleValidator {
    min_content_length: usize,
    max_content_length: usize,
}

impl ArticleValidator {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            min_content_length: options.min_content_length,
            max_content_length: options.max_content_length,
        }
    }

    /// Run every check and collect all violations.
    #[must_use]
    pub fn validate(&self, article: &Article) -> ValidationVerdict {
        let mut violations = Vec::new();

        check_required_fields(article, &mut violations);
        self.check_content_length(article, &mut violations);
        check_relevance(article, &mut violations);
        check_title_quality(article, &mut violations);
        check_spam(article, &mut violations);

        if !violations.is_empty() {
            debug!(url = %article.url, count = violations.len(), "article failed validation");
        }

        ValidationVerdict::from_violations(violations)
    }

    /// Length window is inclusive on the minimum, exclusive on the
    /// maximum.
    fn check_content_length(&self, article: &Article, violations: &mut Vec<String>) {
        let chars = article.content.chars().count();
        if chars < self.min_content_length {
            violations.push(format!(
                "content too short: {chars} chars, minimum {}",
                self.min_content_length
            ));
        } else if chars >= self.max_content_length {
            violations.push(format!(
                "content too long: {chars} chars, maximum {}",
                self.max_content_length
            ));
        }
    }
}

fn check_required_fields(article: &Article, violations: &mut Vec<String>) {
    if article.title.trim().is_empty() {
        violations.push("missing title".to_string());
    }
    if article.content.trim().is_empty() {
        violations.push("missing content".to_string());
    }
    if article.url.trim().is_empty() {
        violations.push("missing url".to_string());
    }
}

/// Weighted keyword scoring over the topical vocabulary. Distinct
/// keywords found in the title count triple.
fn check_relevance(article: &Article, violations: &mut Vec<String>) {
    let title = article.title.to_lowercase();
    let body = article.content.to_lowercase();

    let title_hits = OFFROAD_KEYWORDS
        .iter()
        .filter(|k| title.contains(*k))
        .count();
    let body_hits = OFFROAD_KEYWORDS
        .iter()
        .filter(|k| body.contains(*k))
        .count();

    let score = title_hits * TITLE_KEYWORD_WEIGHT + body_hits;
    if score < RELEVANCE_THRESHOLD {
        violations.push(format!(
            "not relevant: keyword score {score}, need {RELEVANCE_THRESHOLD}"
        ));
    }
}

fn check_title_quality(article: &Article, violations: &mut Vec<String>) {
    let chars = article.title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        violations.push(format!(
            "title length {chars} outside {TITLE_MIN_CHARS}..={TITLE_MAX_CHARS}"
        ));
    }

    let lowered = article.title.to_lowercase();
    for phrase in TITLE_SPAM_PHRASES {
        if lowered.contains(phrase) {
            violations.push(format!("title contains spam phrase: {phrase}"));
        }
    }
}

/// Three independent spam signals, each reported separately.
fn check_spam(article: &Article, violations: &mut Vec<String>) {
    if has_repeated_char_run(&article.content) {
        violations.push("content has a long repeated character run".to_string());
    }

    let link_count = LINK_OCCURRENCE.find_iter(&article.content).count();
    if link_count > MAX_LINK_COUNT {
        violations.push(format!(
            "too many links: {link_count}, maximum {MAX_LINK_COUNT}"
        ));
    }

    let lowered = article.content.to_lowercase();
    let phrase_hits = BODY_SPAM_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .count();
    if phrase_hits >= SPAM_PHRASE_QUORUM {
        violations.push(format!("content contains {phrase_hits} spam phrases"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn options() -> Options {
        Options::default()
    }

    fn article(title: &str, content: &str) -> Article {
        let url = Url::parse("https://forum.example.com/topic/1").unwrap();
        Article::new(
            &url,
            title.to_string(),
            None,
            content.to_string(),
            "en".to_string(),
        )
    }

    fn on_topic_body() -> String {
        "The suspension on this dirt bike needed a full rebuild. ".repeat(20)
    }

    #[test]
    fn test_valid_article_passes() {
        let a = article("Suspension Setup for a KTM Dirt Bike", &on_topic_body());
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(verdict.passed, "violations: {:?}", verdict.violations);
        assert!(verdict.violations.is_empty());
    }

    #[test]
    fn test_single_title_keyword_passes_relevance() {
        // One title keyword scores 3, exactly the threshold.
        let body = "Nothing here is on topic at all, just filler words over and over. ".repeat(10);
        let a = article("My motorcycle weekend story", &body);
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(!verdict
            .violations
            .iter()
            .any(|v| v.starts_with("not relevant")));
    }

    #[test]
    fn test_two_body_keywords_fail_relevance() {
        // Two body keywords score 2, under the threshold of 3.
        let body = format!(
            "{} We checked the exhaust and the clutch once.",
            "Plain filler sentence with no vocabulary hits whatsoever here. ".repeat(10)
        );
        let a = article("A Weekend Story Without Topic Words", &body);
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.starts_with("not relevant")));
    }

    #[test]
    fn test_short_title_fails() {
        let a = article("Short 9c", &on_topic_body());
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(!verdict.passed);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.starts_with("title length")));
    }

    #[test]
    fn test_content_below_minimum_fails_with_count() {
        let a = article("Dirt Bike Suspension Notes", "Short engine trail tire note.");
        let verdict = ArticleValidator::new(&options()).validate(&a);
        let violation = verdict
            .violations
            .iter()
            .find(|v| v.starts_with("content too short"))
            .unwrap();
        assert!(violation.contains("29 chars"));
    }

    #[test]
    fn test_content_at_maximum_fails() {
        // Window is exclusive at the top: exactly max chars is too long.
        let opts = options();
        let body = "suspension engine tire brake chain ".repeat(300);
        let body: String = body.chars().take(opts.max_content_length).collect();
        let a = article("Dirt Bike Suspension Notes", &body);
        let verdict = ArticleValidator::new(&opts).validate(&a);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.starts_with("content too long")));
    }

    #[test]
    fn test_title_spam_phrase_flagged() {
        let a = article("Click here for the best dirt bike deals", &on_topic_body());
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.contains("spam phrase: click here")));
    }

    #[test]
    fn test_repeated_char_run_flagged() {
        let body = format!("{}{}", on_topic_body(), "!".repeat(15));
        let a = article("Dirt Bike Suspension Notes", &body);
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.contains("repeated character run")));
    }

    #[test]
    fn test_excessive_links_flagged() {
        let links: String = (0..12)
            .map(|i| format!("see https://spam{i}.example.com now "))
            .collect();
        let body = format!("{}{links}", on_topic_body());
        let a = article("Dirt Bike Suspension Notes", &body);
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.starts_with("too many links")));
    }

    #[test]
    fn test_body_spam_phrase_quorum() {
        let body = format!(
            "{} Click here now. Buy now while stocks last. A limited time offer.",
            on_topic_body()
        );
        let a = article("Dirt Bike Suspension Notes", &body);
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(verdict
            .violations
            .iter()
            .any(|v| v.contains("spam phrases")));
    }

    #[test]
    fn test_violations_accumulate() {
        // Empty content trips required-field, length, relevance at once.
        let a = article("Bad", "");
        let verdict = ArticleValidator::new(&options()).validate(&a);
        assert!(!verdict.passed);
        assert!(verdict.violations.len() >= 3);
    }
}
