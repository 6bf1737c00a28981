//! Record construction and JSONL writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::splitting::{Article, Clause};
use crate::text::{normalize_whitespace, normalize_with_dashes};

/// One record per clause, the finest output granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseRecord {
    /// E.g. "Điều_1_k2", "Điều_3_ka)", "Điều_7_kfull".
    pub id: String,
    /// Parent article label, e.g. "Điều 1".
    pub article: String,
    /// Clause marker: "1", "a)", or "full".
    pub clause: String,
    /// Whitespace-normalized clause text.
    pub text: String,
}

impl ClauseRecord {
    /// Build a record from an article and one of its clauses.
    #[must_use]
    pub fn new(article: &Article, clause: &Clause) -> Self {
        Self {
            id: format!("{}_k{}", article.id_slug(), clause.marker),
            article: article.label.clone(),
            clause: clause.marker.to_string(),
            text: normalize_whitespace(&clause.text),
        }
    }
}

/// One record per article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// The raw article heading label, e.g. "Điều 1".
    pub id: String,
    /// Normalized article body; stray list-bullet dashes are folded away.
    pub text: String,
}

impl ArticleRecord {
    /// Build a record from an article.
    #[must_use]
    pub fn new(article: &Article) -> Self {
        Self {
            id: article.label.clone(),
            text: normalize_with_dashes(&article.body),
        }
    }
}

/// Writer appending one JSON object per line.
///
/// The output file is opened once in truncate-write mode and held for the
/// duration of the run. There is no atomic replace: an interrupted run
/// leaves partial output behind.
pub struct JsonlWriter {
    inner: BufWriter<File>,
    written: usize,
}

impl JsonlWriter {
    /// Create or truncate the output file.
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self {
            inner: BufWriter::new(File::create(path)?),
            written: 0,
        })
    }

    /// Append one record as a single UTF-8 line. Non-ASCII characters are
    /// written unescaped.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output and close the file.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitting::ClauseMarker;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_clause_record_id_and_fields() {
        let article = Article::new("Điều 1", "unused");
        let clause = Clause::new(ClauseMarker::Numeric("2".to_string()), "  Nội dung  B. ");
        let record = ClauseRecord::new(&article, &clause);

        assert_eq!(record.id, "Điều_1_k2");
        assert_eq!(record.article, "Điều 1");
        assert_eq!(record.clause, "2");
        assert_eq!(record.text, "Nội dung B.");
    }

    #[test]
    fn test_clause_record_lettered_and_full_ids() {
        let article = Article::new("Điều 3", "");

        let lettered = Clause::new(ClauseMarker::Lettered("a)".to_string()), "x");
        assert_eq!(ClauseRecord::new(&article, &lettered).id, "Điều_3_ka)");

        let full = Clause::new(ClauseMarker::Full, "x");
        assert_eq!(ClauseRecord::new(&article, &full).id, "Điều_3_kfull");
    }

    #[test]
    fn test_article_record_folds_dashes() {
        let article = Article::new("Điều 2", "mục một - mục  hai");
        let record = ArticleRecord::new(&article);
        assert_eq!(record.id, "Điều 2");
        assert_eq!(record.text, "mục một mục hai");
    }

    #[test]
    fn test_record_serializes_unescaped_utf8() {
        let article = Article::new("Điều 1", "");
        let clause = Clause::new(ClauseMarker::Numeric("1".to_string()), "Nội dung điều chỉnh");
        let json = serde_json::to_string(&ClauseRecord::new(&article, &clause)).unwrap();

        assert!(json.contains("Điều"));
        assert!(json.contains("Nội dung điều chỉnh"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_writer_one_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut writer = JsonlWriter::create(&path).unwrap();
        let article = Article::new("Điều 1", "");
        writer
            .write(&ClauseRecord::new(
                &article,
                &Clause::new(ClauseMarker::Numeric("1".to_string()), "A"),
            ))
            .unwrap();
        writer
            .write(&ClauseRecord::new(
                &article,
                &Clause::new(ClauseMarker::Numeric("2".to_string()), "B"),
            ))
            .unwrap();
        assert_eq!(writer.written(), 2);
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("id").is_some());
        }
    }

    #[test]
    fn test_writer_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        fs::write(&path, "stale content\n").unwrap();

        let writer = JsonlWriter::create(&path).unwrap();
        writer.finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
