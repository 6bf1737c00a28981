//! DOCX body text extraction.
//!
//! A .docx file is a ZIP archive whose body content lives in
//! `word/document.xml`. Only paragraph text is needed here, so the part is
//! parsed with roxmltree and walked directly instead of going through a
//! full OOXML library.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use roxmltree::{Document, Node};
use unicode_normalization::UnicodeNormalization;
use zip::ZipArchive;

use crate::config::DOCUMENT_PART;
use crate::error::{Result, SegmenterError};

/// Read a DOCX file and return its body text, one block per line.
///
/// Blocks are paragraphs and table-cell paragraphs in document order,
/// recursing into nested tables row-major then cell-major. Blocks whose
/// trimmed text is empty are skipped.
pub fn read_docx(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| SegmenterError::MissingPart(DOCUMENT_PART.to_string()))?
        .read_to_string(&mut xml)?;
    extract_blocks(&xml)
}

/// Extract newline-joined block texts from a `document.xml` string.
pub fn extract_blocks(xml: &str) -> Result<String> {
    let doc = Document::parse(xml)?;
    let body = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "body")
        .ok_or_else(|| SegmenterError::MissingPart("w:body".to_string()))?;

    let mut blocks: Vec<String> = Vec::new();
    collect_blocks(body, &mut blocks);
    Ok(blocks.join("\n"))
}

/// Walk the block-level children of a container (body or table cell).
fn collect_blocks(parent: Node<'_, '_>, blocks: &mut Vec<String>) {
    for child in parent.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "p" => {
                let text = paragraph_text(child);
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    // Diacritics in Word files occasionally arrive decomposed;
                    // fold to NFC so the heading regex sees one form.
                    blocks.push(trimmed.nfc().collect());
                }
            }
            "tbl" => {
                for row in child
                    .children()
                    .filter(|n| n.is_element() && n.tag_name().name() == "tr")
                {
                    for cell in row
                        .children()
                        .filter(|n| n.is_element() && n.tag_name().name() == "tc")
                    {
                        collect_blocks(cell, blocks);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Concatenate the text runs of a paragraph.
///
/// Tabs and line breaks count as single spaces so run boundaries do not
/// glue words together.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    for node in paragraph.descendants().filter(Node::is_element) {
        match node.tag_name().name() {
            "t" => {
                if let Some(t) = node.text() {
                    text.push_str(t);
                }
            }
            "tab" | "br" => text.push(' '),
            _ => {}
        }
    }
    text
}
