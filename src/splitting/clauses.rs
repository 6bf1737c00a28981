//! Clause sub-splitting within a single article body.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{Clause, ClauseMarker};

/// Numbered clause marker between whitespace: " 1. ", " 2. ", ...
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERIC_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\d+)\.\s").expect("valid regex"));

/// Lettered clause marker between whitespace: " a) ", " b) ", ..., " đ) ".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([a-zđ])\)\s").expect("valid regex"));

/// Split an article body into clauses.
///
/// Numbered markers are tried first (the dominant drafting convention),
/// then lettered markers; an article with neither becomes one "full"
/// clause, so every article yields at least one record. Text before the
/// first marker is the article's own preamble (usually restated heading
/// text) and is not a clause.
#[must_use]
pub fn split_clauses(body: &str) -> Vec<Clause> {
    if let Some(clauses) = split_on(body, &NUMERIC_MARKER, |m| {
        ClauseMarker::Numeric(m.to_string())
    }) {
        return clauses;
    }

    if let Some(clauses) = split_on(body, &LETTERED_MARKER, |m| {
        ClauseMarker::Lettered(format!("{m})"))
    }) {
        return clauses;
    }

    vec![Clause::new(ClauseMarker::Full, body)]
}

/// Split on a marker pattern, pairing each captured marker with the text
/// up to the next marker. Returns `None` when the pattern never matches.
fn split_on(
    body: &str,
    pattern: &Regex,
    to_marker: impl Fn(&str) -> ClauseMarker,
) -> Option<Vec<Clause>> {
    let markers: Vec<(usize, usize, &str)> = pattern
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let captured = caps.get(1)?;
            Some((whole.start(), whole.end(), captured.as_str()))
        })
        .collect();

    if markers.is_empty() {
        return None;
    }

    let mut clauses = Vec::with_capacity(markers.len());
    for (i, &(_, end, captured)) in markers.iter().enumerate() {
        let span_end = markers
            .get(i + 1)
            .map_or(body.len(), |&(next_start, _, _)| next_start);
        clauses.push(Clause::new(
            to_marker(captured),
            body[end..span_end].trim(),
        ));
    }
    Some(clauses)
}
