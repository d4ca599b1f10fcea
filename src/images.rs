//! Image harvesting.
//!
//! Collects candidate image URLs from a parsed document, resolves them to
//! absolute form, and filters out icons, trackers and decorations. Pure
//! function of its input markup; malformed attributes are treated as
//! absent, never as errors.

use url::Url;

use crate::dom::{self, Document, Selection};
use crate::url_utils::create_absolute_url;

/// Source attributes tried on each image element, first non-empty wins.
static SRC_ATTRIBUTES: &[&str] = &["src", "data-src", "data-original", "data-lazy-src"];

/// URL substrings that mark an image as decoration or tracking.
static EXCLUDED_URL_PATTERNS: &[&str] = &[
    "avatar",
    "icon",
    "logo",
    "emoji",
    "spinner",
    "loading",
    "blank",
    "pixel.gif",
    "1x1",
    "tracking",
];

/// Extensions accepted by every profile.
static IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp"];

/// Width/height attribute values below this are presumed icons or trackers.
const MIN_DIMENSION: u32 = 100;

/// Filtering profile for a harvest pass.
///
/// The statistical extractor path historically accepted SVG sources; the
/// structural path never did. Both share the size and denylist filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterProfile {
    /// Primary-extractor path: SVG accepted.
    Permissive,
    /// Structural path: raster formats only.
    Strict,
}

/// Extract a deduplicated, insertion-ordered list of absolute image URLs.
#[must_use]
pub fn harvest(doc: &Document, base: &Url, profile: FilterProfile) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut urls = Vec::new();

    for node in doc.select("img").nodes() {
        let img = Selection::from(*node);

        let Some(src) = image_source(&img) else {
            continue;
        };

        if is_undersized(&img) {
            continue;
        }

        let Some(absolute) = create_absolute_url(&src, base) else {
            continue;
        };

        if !is_valid_image_url(&absolute, profile) {
            continue;
        }

        if seen.insert(absolute.clone()) {
            urls.push(absolute);
        }
    }

    urls
}

/// First non-empty source attribute, lazy-load variants after `src`.
fn image_source(img: &Selection) -> Option<String> {
    SRC_ATTRIBUTES
        .iter()
        .filter_map(|attr| dom::get_attribute(img, attr))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Size filter: a numeric width or height under 100 px marks an icon.
///
/// Non-numeric values ("auto", "100%") carry no size information and do
/// not trigger the filter.
fn is_undersized(img: &Selection) -> bool {
    for attr in ["width", "height"] {
        if let Some(value) = dom::get_attribute(img, attr) {
            if let Ok(dimension) = value.trim().parse::<u32>() {
                if dimension < MIN_DIMENSION {
                    return true;
                }
            }
        }
    }
    false
}

/// Semantic filter: denylist substrings, then a recognized extension on
/// the URL path.
fn is_valid_image_url(url: &str, profile: FilterProfile) -> bool {
    let url_lower = url.to_lowercase();

    if EXCLUDED_URL_PATTERNS
        .iter()
        .any(|pattern| url_lower.contains(pattern))
    {
        return false;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let path = parsed.path().to_lowercase();

    if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return true;
    }

    profile == FilterProfile::Permissive && path.ends_with(".svg")
}
