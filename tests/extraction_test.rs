//! End-to-end extraction tests against realistic page shapes.

use trailpress::{extract, Error};

fn blog_paragraphs(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "<p>Paragraph {i}: rebuilding the front suspension meant new bushings, \
                 fresh fork oil and an afternoon of careful torque-wrench work.</p>"
            )
        })
        .collect()
}

#[test]
fn test_extracts_structured_blog_page() {
    let html = format!(
        r#"<html>
        <head><title>Front Suspension Rebuild</title>
        <meta name="author" content="Kay Trails"></head>
        <body>
            <nav><a href="/">Home</a><a href="/gear">Gear</a></nav>
            <article>
                {}
                <img src="/photos/forks.jpg" width="800" height="600">
            </article>
            <footer>Copyright 2026</footer>
        </body></html>"#,
        blog_paragraphs(5)
    );

    let page = extract(&html, "https://blog.example.com/suspension-rebuild").unwrap();

    assert_eq!(page.title, "Front Suspension Rebuild");
    assert!(page.body.contains("Paragraph 0"));
    assert!(page.body.contains("Paragraph 4"));
    assert!(!page.body.contains("Copyright"));
    assert!(page
        .images
        .iter()
        .any(|u| u == "https://blog.example.com/photos/forks.jpg"));
}

#[test]
fn test_line_break_blog_without_paragraph_tags() {
    let line = "Swapped the rear sprocket and fitted a new chain before the season opener. ";
    let html = format!(
        r#"<html><head><title>Sprocket Swap Weekend</title></head>
        <body><div class="post-body">{0}{0}<br>{0}{0}<br>{0}{0}</div></body></html>"#,
        line
    );

    let page = extract(&html, "https://blog.example.com/sprocket-swap").unwrap();
    assert_eq!(page.title, "Sprocket Swap Weekend");
    assert!(page.body.contains("sprocket"));
}

#[test]
fn test_empty_page_is_no_content() {
    let html = "<html><head></head><body><div>hi</div></body></html>";
    let err = extract(html, "https://blog.example.com/empty").unwrap_err();
    assert!(matches!(err, Error::NoContent));
}

#[test]
fn test_invalid_url_rejected() {
    let err = extract("<html></html>", "notaurl").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_social_media_url_rejected() {
    let err = extract("<html></html>", "https://www.instagram.com/p/abc/").unwrap_err();
    assert!(matches!(err, Error::UnsupportedDomain(_)));
}

#[test]
fn test_relative_images_resolved_and_tracking_pixels_dropped() {
    let html = format!(
        r#"<html><head><title>Exhaust Comparison Test</title></head>
        <body><article>
            {}
            <img src="/media/pipe-a.jpg" width="640">
            <img src="https://cdn.example.com/pipe-b.png" width="640">
            <img src="/media/pixel.gif" width="1" height="1">
            <img src="/icons/logo.png">
        </article></body></html>"#,
        blog_paragraphs(4)
    );

    let page = extract(&html, "https://blog.example.com/exhaust-test").unwrap();

    assert!(page
        .images
        .iter()
        .any(|u| u == "https://blog.example.com/media/pipe-a.jpg"));
    assert!(page
        .images
        .iter()
        .any(|u| u == "https://cdn.example.com/pipe-b.png"));
    assert!(!page.images.iter().any(|u| u.contains("pixel.gif")));
    assert!(!page.images.iter().any(|u| u.contains("logo.png")));
}

#[test]
fn test_duplicate_images_reported_once() {
    let html = format!(
        r#"<html><head><title>Jetting Reference Chart</title></head>
        <body><article>
            {}
            <img src="/chart.png" width="640">
            <img src="/chart.png" width="640">
        </article></body></html>"#,
        blog_paragraphs(4)
    );

    let page = extract(&html, "https://blog.example.com/jetting").unwrap();
    let hits = page
        .images
        .iter()
        .filter(|u| u.ends_with("/chart.png"))
        .count();
    assert_eq!(hits, 1);
}
