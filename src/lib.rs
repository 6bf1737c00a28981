//! VBPL Segmenter - Convert Vietnamese legal DOCX documents to JSONL.
//!
//! Vietnamese legal normative documents (văn bản pháp luật) follow a fixed
//! drafting structure: numbered articles ("Điều 1.", "Điều 5a.") subdivided
//! into clauses marked "1.", "2." or "a)", "b)". This crate extracts the
//! body text of a DOCX file and emits one JSON Lines record per article or
//! per clause, for consumption by indexing and retrieval pipelines.
//!
//! # Example
//!
//! ```
//! use vbpl_segmenter::splitting::{match_heading, HeadingVariant};
//!
//! let m = match_heading("Điều 1. Phạm vi điều chỉnh", HeadingVariant::Lenient);
//! assert_eq!(m.map(|m| m.label), Some("Điều 1"));
//! ```
//!
//! # Architecture
//!
//! The segmenter is organized into several modules:
//!
//! - [`config`]: Configuration constants and input validation
//! - [`error`]: Error types and Result alias
//! - [`docx`]: DOCX body text extraction
//! - [`splitting`]: Article and clause segmentation
//! - [`text`]: Whitespace normalization
//! - [`jsonl`]: Record construction and JSONL writing
//! - [`converter`]: End-to-end conversion service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod docx;
pub mod error;
pub mod jsonl;
pub mod splitting;
pub mod text;

// Re-export main functions
pub use converter::{convert, Granularity, RunSummary};

// Re-export commonly used items
pub use error::{Result, SegmenterError};
pub use splitting::{Article, Clause, ClauseMarker, HeadingVariant};
