//! Configuration constants and input validation.

use std::path::Path;

use crate::error::{Result, SegmenterError};

/// ZIP part inside a DOCX archive that holds the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Clause marker used when an article has no recognizable sub-structure.
pub const FULL_CLAUSE_MARKER: &str = "full";

/// Validate that a path points to a DOCX file.
///
/// The check is on the extension only (case-insensitive); whether the file
/// actually is a readable DOCX archive is decided when it is opened.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use vbpl_segmenter::config::validate_docx_path;
///
/// assert!(validate_docx_path(Path::new("luat_dat_dai.docx")).is_ok());
/// assert!(validate_docx_path(Path::new("luat_dat_dai.pdf")).is_err());
/// ```
pub fn validate_docx_path(path: &Path) -> Result<()> {
    let is_docx = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
    if is_docx {
        Ok(())
    } else {
        Err(SegmenterError::NotDocx(path.display().to_string()))
    }
}
