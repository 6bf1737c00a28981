//! Types for the segmentation system.

use std::fmt;

use crate::config::FULL_CLAUSE_MARKER;

/// A single article ("Điều") with its accumulated body text.
///
/// Immutable once produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Heading label as matched, e.g. "Điều 5" or "Điều 5a".
    pub label: String,

    /// Body text: heading-line remainder and following lines joined with
    /// single spaces. Not yet whitespace-normalized.
    pub body: String,
}

impl Article {
    /// Create a new article.
    #[must_use]
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    /// Label with spaces replaced by underscores, for record ids.
    ///
    /// # Examples
    /// ```
    /// use vbpl_segmenter::splitting::Article;
    ///
    /// let article = Article::new("Điều 5a", "");
    /// assert_eq!(article.id_slug(), "Điều_5a");
    /// ```
    #[must_use]
    pub fn id_slug(&self) -> String {
        self.label.replace(' ', "_")
    }
}

/// Marker distinguishing clauses within one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseMarker {
    /// Numeric marker, e.g. "1" from a "1." heading.
    Numeric(String),

    /// Lettered marker in its original form, e.g. "a)".
    Lettered(String),

    /// Whole-article fallback when no sub-structure was found.
    Full,
}

impl ClauseMarker {
    /// Get the marker string as it appears in record ids.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric(n) => n,
            Self::Lettered(l) => l,
            Self::Full => FULL_CLAUSE_MARKER,
        }
    }
}

impl fmt::Display for ClauseMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clause ("Khoản") within an article: a contiguous span of its parent
/// article's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Numeric, lettered, or "full" marker.
    pub marker: ClauseMarker,

    /// Clause text. Not yet whitespace-normalized.
    pub text: String,
}

impl Clause {
    /// Create a new clause.
    #[must_use]
    pub fn new(marker: ClauseMarker, text: impl Into<String>) -> Self {
        Self {
            marker,
            text: text.into(),
        }
    }
}
