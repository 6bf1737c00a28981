//! Error types for the segmenter.

use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// Input path does not look like a DOCX file.
    #[error("Not a DOCX file: '{0}'. Expected a path ending in .docx")]
    NotDocx(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be opened as a ZIP archive.
    #[error("Failed to open DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The archive is missing a required part.
    #[error("DOCX archive is missing required part: {0}")]
    MissingPart(String),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_docx_display() {
        let err = SegmenterError::NotDocx("input.pdf".to_string());
        assert!(err.to_string().contains("input.pdf"));
        assert!(err.to_string().contains(".docx"));
    }

    #[test]
    fn test_missing_part_display() {
        let err = SegmenterError::MissingPart("word/document.xml".to_string());
        assert_eq!(
            err.to_string(),
            "DOCX archive is missing required part: word/document.xml"
        );
    }
}
