//! The candidate file entity.
//!
//! A [`CandidateFile`] is the one transient piece of state on the upload
//! page: the file the user most recently picked or dropped, pending
//! validation and submission. It exists only in memory, is replaced
//! wholesale on every new selection, and is discarded on clear.

use serde::{Deserialize, Serialize};

/// Media type of a PDF document.
pub const MEDIA_TYPE_PDF: &str = "application/pdf";

/// Media type of a Word (OOXML) document.
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

// =============================================================================
// Document Kind
// =============================================================================

/// The two document formats the analyzer accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// PDF document
    Pdf,
    /// Word (OOXML) document
    Docx,
}

impl DocumentKind {
    /// Classify a media type. Exact match only; anything else is not
    /// an accepted document format.
    pub fn from_media_type(media_type: &str) -> Option<DocumentKind> {
        match media_type {
            MEDIA_TYPE_PDF => Some(DocumentKind::Pdf),
            MEDIA_TYPE_DOCX => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Short label for display next to the file name.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF document",
            DocumentKind::Docx => "Word document",
        }
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

// =============================================================================
// Candidate File
// =============================================================================

/// A file selected by the user, pending validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Media type as reported by the browser
    pub media_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }

    /// Document kind, if the media type is one of the accepted values.
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_media_type(&self.media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_accepted_media_types() {
        assert_eq!(
            DocumentKind::from_media_type("application/pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_media_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn rejects_other_media_types() {
        assert_eq!(DocumentKind::from_media_type("text/plain"), None);
        assert_eq!(DocumentKind::from_media_type("application/msword"), None);
        assert_eq!(DocumentKind::from_media_type(""), None);
        // Exact match only
        assert_eq!(DocumentKind::from_media_type("APPLICATION/PDF"), None);
        assert_eq!(DocumentKind::from_media_type("application/pdf "), None);
    }

    #[test]
    fn candidate_exposes_its_kind() {
        let file = CandidateFile::new("lease.pdf", 2048, MEDIA_TYPE_PDF);
        assert_eq!(file.kind(), Some(DocumentKind::Pdf));
        assert_eq!(file.kind().map(|k| k.extension()), Some("pdf"));

        let file = CandidateFile::new("notes.txt", 10, "text/plain");
        assert_eq!(file.kind(), None);
    }

    #[test]
    fn candidate_serializes_round_trip() {
        let file = CandidateFile::new("contract.docx", 1_572_864, MEDIA_TYPE_DOCX);
        let json = serde_json::to_string(&file).unwrap();
        let back: CandidateFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }
}
