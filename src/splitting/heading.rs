//! Article heading recognition.

use regex::Regex;
use std::sync::LazyLock;

/// Heading pattern anchored at line start: optional leading whitespace,
/// "Điều" (case-insensitive), whitespace, digits, optional lowercase
/// Vietnamese letter suffix, optional trailing period.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(Điều\s+\d+[a-zđ]*)\.?").expect("valid regex"));

/// Strictness of heading recognition.
///
/// The two original conversion scripts disagreed: the clause-level one
/// accepted a bare heading line, the article-level one required text after
/// the heading on the same line. Both behaviors are kept selectable so
/// downstream consumers relying on either keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingVariant {
    /// A heading line may stand alone.
    #[default]
    Lenient,

    /// At least one non-whitespace character must follow the heading
    /// (after the optional period) for the line to count as a heading.
    Strict,
}

/// A recognized heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch<'a> {
    /// Heading label, e.g. "Điều 5a".
    pub label: &'a str,

    /// Remainder of the line after the heading, untrimmed.
    pub rest: &'a str,
}

/// Try to recognize `line` as an article heading.
///
/// A match is determined solely by the line's start; a citation like
/// "Điều 5 Luật Đất đai" standing on its own line is indistinguishable
/// from a true heading.
///
/// # Examples
/// ```
/// use vbpl_segmenter::splitting::{match_heading, HeadingVariant};
///
/// let m = match_heading("Điều 1. Phạm vi điều chỉnh", HeadingVariant::Lenient);
/// assert_eq!(m.map(|m| m.label), Some("Điều 1"));
///
/// // Bare heading lines are only recognized in lenient mode.
/// assert!(match_heading("Điều 3", HeadingVariant::Lenient).is_some());
/// assert!(match_heading("Điều 3", HeadingVariant::Strict).is_none());
/// ```
pub fn match_heading(line: &str, variant: HeadingVariant) -> Option<HeadingMatch<'_>> {
    let caps = HEADING_PATTERN.captures(line)?;
    let whole = caps.get(0)?;
    let label = caps.get(1)?.as_str();
    let rest = &line[whole.end()..];

    if variant == HeadingVariant::Strict && rest.trim().is_empty() {
        return None;
    }

    Some(HeadingMatch { label, rest })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_simple_heading() {
        let m = match_heading("Điều 1. Phạm vi điều chỉnh", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "Điều 1");
        assert_eq!(m.rest, " Phạm vi điều chỉnh");
    }

    #[test]
    fn test_match_heading_letter_suffix() {
        let m = match_heading("Điều 5a. Bổ sung", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "Điều 5a");

        let m = match_heading("Điều 12đ. Quy định", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "Điều 12đ");
    }

    #[test]
    fn test_match_heading_leading_whitespace() {
        let m = match_heading("  Điều 2. Đối tượng", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "Điều 2");
    }

    #[test]
    fn test_match_heading_case_insensitive() {
        let m = match_heading("ĐIỀU 7. Nội dung", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "ĐIỀU 7");
    }

    #[test]
    fn test_match_heading_no_period() {
        let m = match_heading("Điều 3 Giải thích từ ngữ", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "Điều 3");
        assert_eq!(m.rest, " Giải thích từ ngữ");
    }

    #[test]
    fn test_no_match_mid_line() {
        assert!(match_heading("theo Điều 5 của Luật này", HeadingVariant::Lenient).is_none());
    }

    #[test]
    fn test_no_match_non_heading() {
        assert!(match_heading("Chương I", HeadingVariant::Lenient).is_none());
        assert!(match_heading("Điều khoản thi hành", HeadingVariant::Lenient).is_none());
        assert!(match_heading("", HeadingVariant::Lenient).is_none());
    }

    #[test]
    fn test_bare_heading_lenient_vs_strict() {
        let m = match_heading("Điều 3", HeadingVariant::Lenient).unwrap();
        assert_eq!(m.label, "Điều 3");
        assert_eq!(m.rest, "");

        assert!(match_heading("Điều 3", HeadingVariant::Strict).is_none());
        assert!(match_heading("Điều 3.", HeadingVariant::Strict).is_none());
        assert!(match_heading("Điều 3.   ", HeadingVariant::Strict).is_none());
    }

    #[test]
    fn test_strict_accepts_trailing_text() {
        let m = match_heading("Điều 3. Giải thích từ ngữ", HeadingVariant::Strict).unwrap();
        assert_eq!(m.label, "Điều 3");
    }
}
