//! Whitespace normalization for record text.

use regex::Regex;
use std::sync::LazyLock;

/// Any maximal run of whitespace characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Any run of whitespace and dash characters (hyphen, en-dash, em-dash)
/// that contains at least one whitespace character.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DASH_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-–—]*\s[\s\-–—]*").expect("valid regex"));

/// Collapse every whitespace run to a single space and trim.
///
/// Pure and idempotent; every record's `text` field goes through this (or
/// [`normalize_with_dashes`]) exactly once before serialization.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Like [`normalize_whitespace`], additionally folding stray list-bullet
/// dashes into the surrounding space.
///
/// A dash only disappears when its run touches whitespace, so intra-word
/// hyphens survive.
#[must_use]
pub fn normalize_with_dashes(text: &str) -> String {
    DASH_WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_normalize_whitespace_trims() {
        assert_eq!(normalize_whitespace("  Nội dung A.  "), "Nội dung A.");
    }

    #[test]
    fn test_normalize_whitespace_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   \n\t "), "");
    }

    #[test]
    fn test_normalize_with_dashes_folds_bullets() {
        assert_eq!(normalize_with_dashes("a - b – c — d"), "a b c d");
        assert_eq!(normalize_with_dashes("- đứng đầu dòng"), "đứng đầu dòng");
        assert_eq!(normalize_with_dashes("cuối dòng -"), "cuối dòng");
    }

    #[test]
    fn test_normalize_with_dashes_keeps_intra_word_hyphens() {
        assert_eq!(normalize_with_dashes("khoản 1-2 và  3"), "khoản 1-2 và 3");
    }

    #[test]
    fn test_normalize_with_dashes_mixed_run() {
        assert_eq!(normalize_with_dashes("a \t-–  — b"), "a b");
    }

    proptest! {
        #[test]
        fn normalize_whitespace_idempotent(s in "\\PC{0,200}") {
            let once = normalize_whitespace(&s);
            prop_assert_eq!(normalize_whitespace(&once), once);
        }

        #[test]
        fn normalize_with_dashes_idempotent(s in "\\PC{0,200}") {
            let once = normalize_with_dashes(&s);
            prop_assert_eq!(normalize_with_dashes(&once), once);
        }

        #[test]
        fn normalize_whitespace_no_consecutive_spaces(s in "\\PC{0,200}") {
            let normalized = normalize_whitespace(&s);
            prop_assert!(!normalized.contains("  "));
            prop_assert_eq!(normalized.trim(), &normalized);
        }
    }
}
