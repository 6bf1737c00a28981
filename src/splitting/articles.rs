//! Article accumulation over raw document text.
//!
//! An explicit two-state machine: outside any article, non-heading lines
//! are dropped; inside, they accumulate into the open article's body until
//! the next heading closes it.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::heading::{match_heading, HeadingVariant};
use super::types::Article;

/// Splits raw text into articles, one logical block per line.
#[derive(Debug, Clone, Copy)]
pub struct ArticleSplitter {
    variant: HeadingVariant,
}

/// An article being accumulated.
struct OpenArticle {
    label: String,
    chunks: Vec<String>,
}

impl OpenArticle {
    fn close(self) -> Article {
        Article::new(self.label, self.chunks.join(" "))
    }
}

impl ArticleSplitter {
    /// Create a splitter with the given heading strictness.
    #[must_use]
    pub fn new(variant: HeadingVariant) -> Self {
        Self { variant }
    }

    /// Split raw text into articles in encounter order.
    ///
    /// Text before the first recognized heading is discarded; consecutive
    /// headings produce an article with empty body.
    pub fn split(&self, raw: &str) -> Vec<Article> {
        let mut articles: Vec<Article> = Vec::new();
        let mut open: Option<OpenArticle> = None;
        let mut dropped = 0usize;

        for line in raw.lines() {
            if let Some(heading) = match_heading(line, self.variant) {
                if let Some(article) = open.take() {
                    articles.push(article.close());
                }
                // The seed chunk is kept even when empty: clause markers
                // require preceding whitespace, which the join supplies
                // when clause text starts on the next line.
                open = Some(OpenArticle {
                    label: heading.label.to_string(),
                    chunks: vec![heading.rest.trim().to_string()],
                });
            } else if let Some(article) = open.as_mut() {
                article.chunks.push(line.trim().to_string());
            } else {
                dropped += 1;
            }
        }

        if let Some(article) = open.take() {
            articles.push(article.close());
        }

        if dropped > 0 {
            debug!(lines = dropped, "Dropped lines before first heading");
        }
        warn_on_duplicate_labels(&articles);

        articles
    }
}

/// Duplicate labels are allowed and emitted in encounter order, but they
/// produce duplicate record ids, so flag them.
fn warn_on_duplicate_labels(articles: &[Article]) {
    let mut seen: HashSet<&str> = HashSet::new();
    for article in articles {
        if !seen.insert(article.label.as_str()) {
            warn!(label = %article.label, "Duplicate article heading; records will share an id");
        }
    }
}
