//! Compiled regex patterns used by the validation gate and article model.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches raw link occurrences for the spam check.
pub static LINK_OCCURRENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://").expect("LINK_OCCURRENCE regex"));

/// Matches ASCII word runs for word counting.
pub static ASCII_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("ASCII_WORD regex"));

/// Matches CJK ideographs, counted per character.
pub static CJK_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]").expect("CJK_CHAR regex"));

/// Promotional phrases that disqualify a title (case-insensitive substring match).
pub static TITLE_SPAM_PHRASES: &[&str] = &[
    "click here",
    "buy now",
    "free download",
    "click this",
    "subscribe",
    "advertisement",
    "sponsored",
    "promo",
];

/// Promotional phrase patterns counted by the body spam check.
pub static BODY_SPAM_PHRASES: &[&str] = &[
    "click here",
    "buy now",
    "free download",
    "limited time",
    "act now",
    "don't miss",
    "exclusive offer",
];

/// Longest allowed run of one repeated character before the body is spam.
pub const MAX_CHAR_RUN: usize = 10;

/// Raw link count above which the body is considered spam.
pub const MAX_LINK_COUNT: usize = 10;

/// Number of matched promotional phrases that marks the body as spam.
pub const SPAM_PHRASE_QUORUM: usize = 3;

/// Check whether any single character repeats more than `MAX_CHAR_RUN`
/// times consecutively ("aaaa...", "!!!!...").
///
/// The regex crate has no backreferences, so this is a manual scan.
#[must_use]
pub fn has_repeated_char_run(text: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for ch in text.chars() {
        if Some(ch) == prev {
            run += 1;
            if run > MAX_CHAR_RUN {
                return true;
            }
        } else {
            prev = Some(ch);
            run = 1;
        }
    }

    false
}
