//! End-to-end conversion from DOCX input to JSONL output.

use std::path::Path;

use tracing::info;

use crate::config::validate_docx_path;
use crate::docx::read_docx;
use crate::error::Result;
use crate::jsonl::{ArticleRecord, ClauseRecord, JsonlWriter};
use crate::splitting::{split_clauses, Article, ArticleSplitter, HeadingVariant};

/// Output granularity: one record per article, or one per clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One `{id, text}` record per article (Điều).
    Article,

    /// One `{id, article, clause, text}` record per clause (Khoản).
    Clause,
}

impl Granularity {
    /// Heading strictness the original conversion scripts used for this
    /// granularity. The clause-level script accepted bare heading lines;
    /// the article-level script required trailing text on the heading line.
    #[must_use]
    pub fn default_heading_variant(self) -> HeadingVariant {
        match self {
            Self::Clause => HeadingVariant::Lenient,
            Self::Article => HeadingVariant::Strict,
        }
    }
}

/// Summary of a completed conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Articles recognized in the document.
    pub articles: usize,

    /// Records written to the output file.
    pub records: usize,
}

/// Convert a DOCX file to JSONL at the requested granularity.
///
/// Zero recognized articles is not an error: the run succeeds with an
/// empty output file and a zero-count summary.
pub fn convert(
    input: &Path,
    output: &Path,
    granularity: Granularity,
    heading_variant: HeadingVariant,
) -> Result<RunSummary> {
    validate_docx_path(input)?;

    let raw = read_docx(input)?;
    let articles = ArticleSplitter::new(heading_variant).split(&raw);
    info!(articles = articles.len(), "Split raw text into articles");

    let records = write_records(&articles, granularity, output)?;
    Ok(RunSummary {
        articles: articles.len(),
        records,
    })
}

/// Write records for the given articles; returns the record count.
pub fn write_records(
    articles: &[Article],
    granularity: Granularity,
    output: &Path,
) -> Result<usize> {
    let mut writer = JsonlWriter::create(output)?;

    for article in articles {
        match granularity {
            Granularity::Article => writer.write(&ArticleRecord::new(article))?,
            Granularity::Clause => {
                for clause in split_clauses(&article.body) {
                    writer.write(&ClauseRecord::new(article, &clause))?;
                }
            }
        }
    }

    let records = writer.written();
    writer.finish()?;
    Ok(records)
}
