//! Command-line interface for the segmenter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::converter::{write_records, Granularity};
use crate::docx::read_docx;
use crate::error::Result;
use crate::splitting::{ArticleSplitter, HeadingVariant};

/// Segment Vietnamese legal DOCX documents into JSONL records.
#[derive(Parser)]
#[command(name = "vbpl-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit one record per clause (Khoản).
    Clauses {
        /// Input DOCX file
        input: PathBuf,

        /// Output JSONL file
        output: PathBuf,

        /// Heading recognition strictness (default: lenient)
        #[arg(long, value_enum)]
        headings: Option<HeadingsArg>,
    },

    /// Emit one record per article (Điều).
    Articles {
        /// Input DOCX file
        input: PathBuf,

        /// Output JSONL file
        output: PathBuf,

        /// Heading recognition strictness (default: strict)
        #[arg(long, value_enum)]
        headings: Option<HeadingsArg>,
    },
}

/// Heading strictness flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeadingsArg {
    /// A heading line may stand alone.
    Lenient,

    /// Text must follow the heading on the same line.
    Strict,
}

impl From<HeadingsArg> for HeadingVariant {
    fn from(arg: HeadingsArg) -> Self {
        match arg {
            HeadingsArg::Lenient => Self::Lenient,
            HeadingsArg::Strict => Self::Strict,
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clauses {
            input,
            output,
            headings,
        } => convert_command(&input, &output, Granularity::Clause, headings),
        Commands::Articles {
            input,
            output,
            headings,
        } => convert_command(&input, &output, Granularity::Article, headings),
    }
}

/// Execute a conversion at the given granularity.
fn convert_command(
    input: &Path,
    output: &Path,
    granularity: Granularity,
    headings: Option<HeadingsArg>,
) -> Result<()> {
    let variant = headings
        .map(HeadingVariant::from)
        .unwrap_or_else(|| granularity.default_heading_variant());

    crate::config::validate_docx_path(input)?;

    println!(
        "{} {}",
        style("Converting").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    pb.set_message("Reading DOCX...");
    let raw = match read_docx(input) {
        Ok(raw) => raw,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Splitting articles...");
    let articles = ArticleSplitter::new(variant).split(&raw);

    pb.set_message("Writing JSONL...");
    let records = match write_records(&articles, granularity, output) {
        Ok(records) => records,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Articles: {}", style(articles.len()).green());
    println!();
    println!(
        "{} {} records → {}",
        style("Done!").green().bold(),
        style(records).green(),
        output.display()
    );

    Ok(())
}
