//! Fetch orchestration.
//!
//! Drives one URL from pre-validation through extraction and validation
//! to a finished `Article` record. The HTML transport sits behind a
//! trait so batch runs, tests and callers with their own HTTP client
//! all feed the same pipeline.

use std::time::{Duration, Instant};

use tracing::{info, warn};
use url::Url;

use crate::article::{Article, ArticleStatus};
use crate::error::{Error, Result};
use crate::extractor::ExtractionPipeline;
use crate::options::Options;
use crate::url_utils;
use crate::validate::ArticleValidator;

/// Responses shorter than this are treated as fetch failures; error and
/// interstitial pages routinely come in under it.
const MIN_HTML_LENGTH: usize = 100;

/// Source of raw page markup.
///
/// Implementations own transport concerns (client, retries, headers).
/// `get` takes `&mut self` so sources may keep connection state.
pub trait HtmlSource {
    fn get(&mut self, url: &Url) -> Result<String>;
}

/// Result of fetching a single URL.
///
/// `article` is present whenever extraction produced a complete record,
/// including records that then failed validation; `success` is true only
/// when the article also validated.
#[derive(Debug)]
pub struct FetchOutcome {
    pub success: bool,
    pub article: Option<Article>,
    pub error: Option<String>,
    pub elapsed: Duration,
}

impl FetchOutcome {
    fn failure(error: String, elapsed: Duration) -> Self {
        Self {
            success: false,
            article: None,
            error: Some(error),
            elapsed,
        }
    }
}

/// Fetches, extracts and validates articles through an injected source.
pub struct ArticleFetcher<S: HtmlSource> {
    source: S,
    pipeline: ExtractionPipeline,
    validator: ArticleValidator,
    options: Options,
}

impl<S: HtmlSource> ArticleFetcher<S> {
    /// Build a fetcher with the default extraction pipeline.
    #[must_use]
    pub fn new(source: S, options: Options) -> Self {
        Self {
            source,
            pipeline: ExtractionPipeline::new(),
            validator: ArticleValidator::new(&options),
            options,
        }
    }

    /// Build a fetcher around a custom pipeline.
    #[must_use]
    pub fn with_pipeline(source: S, pipeline: ExtractionPipeline, options: Options) -> Self {
        Self {
            source,
            pipeline,
            validator: ArticleValidator::new(&options),
            options,
        }
    }

    /// Fetch a single URL end to end.
    ///
    /// Never returns `Err`: every failure mode is folded into the
    /// outcome so batch runs continue past individual bad URLs.
    pub fn fetch(&mut self, url_str: &str) -> FetchOutcome {
        let started = Instant::now();

        let url = match url_utils::precheck_url(url_str) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = url_str, error = %e, "rejected before fetch");
                return FetchOutcome::failure(e.to_string(), started.elapsed());
            }
        };

        let html = match self.load_html(&url) {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed");
                return FetchOutcome::failure(e.to_string(), started.elapsed());
            }
        };

        let extraction = self.pipeline.run(&html, &url);
        if !extraction.is_complete() {
            warn!(url = %url, "no usable content extracted");
            return FetchOutcome::failure(Error::NoContent.to_string(), started.elapsed());
        }

        let mut article = Article::new(
            &url,
            extraction.title,
            extraction.author,
            extraction.body,
            self.options.language.clone(),
        );
        article.status = ArticleStatus::Fetching;
        article.set_images(&extraction.images);
        article.set_comments(extraction.comments);

        let verdict = self.validator.validate(&article);
        let elapsed = started.elapsed();

        if verdict.passed {
            article.status = ArticleStatus::Fetched;
            info!(
                url = %url,
                words = article.word_count,
                images = article.image_count,
                comments = article.comment_count,
                "article fetched"
            );
            FetchOutcome {
                success: true,
                article: Some(article),
                error: None,
                elapsed,
            }
        } else {
            let detail = verdict.violations.join("; ");
            article.status = ArticleStatus::Failed;
            article.error_message = Some(detail.clone());
            FetchOutcome {
                success: false,
                article: Some(article),
                error: Some(detail),
                elapsed,
            }
        }
    }

    /// Fetch a list of URLs sequentially, pausing between items.
    pub fn fetch_batch(&mut self, urls: &[String]) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::with_capacity(urls.len());

        for (i, url) in urls.iter().enumerate() {
            if i > 0 {
                std::thread::sleep(self.options.batch_delay);
            }
            outcomes.push(self.fetch(url));
        }

        let succeeded = outcomes.iter().filter(|o| o.success).count();
        info!(
            total = outcomes.len(),
            succeeded,
            failed = outcomes.len() - succeeded,
            "batch finished"
        );
        outcomes
    }

    fn load_html(&mut self, url: &Url) -> Result<String> {
        let html = self.source.get(url)?;
        let length = html.chars().count();
        if length < MIN_HTML_LENGTH {
            return Err(Error::Fetch(format!("response too small: {length} chars")));
        }
        Ok(html)
    }
}
