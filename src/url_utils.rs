//! URL Utility Functions
//!
//! URL pre-validation and resolution helpers. Pre-validation runs before
//! any fetch is attempted; resolution serves the image harvester, which
//! must only ever emit absolute URLs.

use url::Url;

use crate::error::{Error, Result};

/// Social-media hosts that are rejected outright without fetching.
pub static EXCLUDED_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "youtube.com",
    "tiktok.com",
];

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form against a base.
///
/// # Returns
/// * The absolute URL string, or `None` if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> Option<String> {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return None;
    }

    // data:/javascript: pseudo-sources are never page images
    if url_str.starts_with("data:") || url_str.starts_with("javascript:") {
        return None;
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return Some(url_str.to_string());
    }

    base.join(url_str).ok().map(|resolved| resolved.to_string())
}

/// Extract the hostname (domain) from a URL string.
///
/// # Returns
/// * The hostname, or empty string if invalid
#[must_use]
pub fn get_domain(url_str: &str) -> String {
    let (is_abs, parsed) = is_absolute_url(url_str);

    if !is_abs {
        return String::new();
    }

    parsed
        .and_then(|url| url.host_str().map(std::string::ToString::to_string))
        .unwrap_or_default()
}

/// Pre-validate a URL before any fetch is attempted.
///
/// Requires an http(s) scheme and a non-empty host, and rejects hosts on
/// the social-media denylist.
pub fn precheck_url(url_str: &str) -> Result<Url> {
    let url_str = url_str.trim();

    if !url_str.starts_with("http://") && !url_str.starts_with("https://") {
        return Err(Error::InvalidUrl(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    let url =
        Url::parse(url_str).map_err(|e| Error::InvalidUrl(format!("unparsable URL: {e}")))?;

    let Some(host) = url.host_str().map(str::to_ascii_lowercase) else {
        return Err(Error::InvalidUrl("URL has no host".to_string()));
    };

    if EXCLUDED_DOMAINS.iter().any(|domain| host.contains(domain)) {
        return Err(Error::UnsupportedDomain(host));
    }

    Ok(url)
}
