//! Segmentation of raw document text into articles and clauses.
//!
//! Vietnamese legal drafting uses a fixed structure: articles headed
//! "Điều N" (optionally letter-suffixed, "Điều 5a"), subdivided into
//! clauses marked "1.", "2." or "a)", "b)". Splitting is line-oriented:
//! headings open articles, everything else accumulates into the open one.

mod articles;
mod clauses;
mod heading;
mod types;

pub use articles::ArticleSplitter;
pub use clauses::split_clauses;
pub use heading::{match_heading, HeadingMatch, HeadingVariant};
pub use types::{Article, Clause, ClauseMarker};
