//! Error types for the upload gate.
//!
//! Both errors are non-fatal and user-facing: they prevent a candidate
//! from becoming (or an empty selection from being submitted as) the
//! active selection, and their `Display` text is what the notice layer
//! shows to the user.

use thiserror::Error;

/// Why a candidate file was refused by the gate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The media type is not PDF or DOCX.
    #[error("Please select a valid PDF or DOCX file.")]
    InvalidType {
        /// Media type reported by the browser
        media_type: String,
    },

    /// The file exceeds the upload size limit.
    #[error("File size must be less than 16MB.")]
    TooLarge {
        /// Size in bytes
        size: u64,
    },
}

/// A submit attempt was blocked because no file is selected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Please select a file to upload.")]
pub struct SubmitBlocked;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_are_user_facing() {
        let invalid = RejectionReason::InvalidType {
            media_type: "text/plain".to_string(),
        };
        assert_eq!(invalid.to_string(), "Please select a valid PDF or DOCX file.");

        let too_large = RejectionReason::TooLarge { size: 20_000_000 };
        assert_eq!(too_large.to_string(), "File size must be less than 16MB.");
    }

    #[test]
    fn submit_blocked_message() {
        assert_eq!(SubmitBlocked.to_string(), "Please select a file to upload.");
    }
}
