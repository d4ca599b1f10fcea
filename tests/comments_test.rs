//! Comment extraction tests over forum page shapes.

use trailpress::extract;

fn article_block() -> String {
    (0..4)
        .map(|i| {
            format!(
                "<p>Post {i}: the original question about exhaust packing, with enough \
                 detail on engine hours and riding conditions to count as the body.</p>"
            )
        })
        .collect()
}

fn ips_comment(author: &str, body: &str, likes: u32, datetime: &str) -> String {
    format!(
        r#"<article class="ipsComment">
            <aside class="ipsComment_author">
                <a class="ipsType_break" href="/profile/{author}">{author}</a>
            </aside>
            <div class="ipsComment_content">
                <time datetime="{datetime}"></time>
                <div data-role="commentContent">{body}</div>
                <span class="ipsRepNumber">{likes}</span>
            </div>
        </article>"#
    )
}

#[test]
fn test_ips_forum_comments_extracted() {
    let long_reply = "I repacked mine at thirty hours and the difference in sound and \
                      power delivery was immediately obvious on the first trail loop.";
    let quoted_reply = format!(
        r#"<blockquote class="ipsQuote">earlier post text that must not leak</blockquote>
        <p>{long_reply}</p>"#
    );

    let html = format!(
        r#"<html><head><title>Exhaust Packing Interval Question</title></head>
        <body>
            <h1 class="post-title">Exhaust Packing Interval Question</h1>
            <div class="post-content">{}</div>
            {}
            {}
        </body></html>"#,
        article_block(),
        ips_comment("TrailRider", long_reply, 5, "2026-03-14T09:30:00Z"),
        ips_comment("QuietBob", &quoted_reply, 0, "2026-03-14T11:00:00Z"),
    );

    let page = extract(
        &html,
        "https://www.thumpertalk.com/forums/topic/12345-exhaust-packing/",
    )
    .unwrap();

    assert_eq!(page.comments.len(), 2);
    assert_eq!(page.comments[0].author, "TrailRider");
    assert_eq!(page.comments[0].likes, 5);
    assert!(page.comments[0].published.is_some());
    assert!(!page.comments[1].content.contains("must not leak"));
    assert!(page.comments[1].content.contains("repacked"));
}

#[test]
fn test_ips_short_replies_discarded() {
    let html = format!(
        r#"<html><body>
            <h1 class="post-title">Chain Tension Question</h1>
            <div class="post-content">{}</div>
            {}
        </body></html>"#,
        article_block(),
        ips_comment("Lurker", "+1", 0, "2026-03-14T09:30:00Z"),
    );

    let page = extract(
        &html,
        "https://www.thumpertalk.com/forums/topic/9-chain-tension/",
    )
    .unwrap();
    assert!(page.comments.is_empty());
}

#[test]
fn test_generic_forum_needs_selector_quorum() {
    // Three .comment elements is not enough; a lone selector hit is more
    // likely page chrome than a thread.
    let comment = r#"<div class="comment">
        <span class="author">Rider</span>
        <div class="comment-body">A reply long enough to clear the content floor.</div>
    </div>"#;

    let html_three = format!(
        "<html><body><h1 class=\"post-title\">Tire Choice Thread</h1>\
         <div class=\"post-content\">{}</div>{}</body></html>",
        article_block(),
        comment.repeat(3)
    );
    let page = extract(&html_three, "https://smallforum.example.com/t/1").unwrap();
    assert!(page.comments.is_empty());

    let html_four = format!(
        "<html><body><h1 class=\"post-title\">Tire Choice Thread</h1>\
         <div class=\"post-content\">{}</div>{}</body></html>",
        article_block(),
        comment.repeat(4)
    );
    let page = extract(&html_four, "https://smallforum.example.com/t/1").unwrap();
    assert_eq!(page.comments.len(), 4);
}

#[test]
fn test_generic_comment_author_defaults_to_anonymous() {
    let comment = r#"<div class="comment">
        <div class="comment-body">A reply long enough to clear the content floor.</div>
    </div>"#;
    let html = format!(
        "<html><body><h1 class=\"post-title\">Brake Pad Thread</h1>\
         <div class=\"post-content\">{}</div>{}</body></html>",
        article_block(),
        comment.repeat(4)
    );

    let page = extract(&html, "https://smallforum.example.com/t/2").unwrap();
    assert_eq!(page.comments.len(), 4);
    assert!(page.comments.iter().all(|c| c.author == "Anonymous"));
}

#[test]
fn test_page_without_comment_markup_yields_none() {
    let html = format!(
        "<html><head><title>Plain Article Page</title></head>\
         <body><article>{}</article></body></html>",
        article_block()
    );
    let page = extract(&html, "https://blog.example.com/plain").unwrap();
    assert!(page.comments.is_empty());
}
