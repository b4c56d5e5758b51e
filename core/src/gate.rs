//! The upload gate state object.
//!
//! Owns the single "active selection" slot and every transition on it:
//! admit a candidate, clear it, gate the form post. All page events on
//! the browser side run to completion one at a time, so a plain owned
//! field is all the state management this needs.

use crate::candidate::{CandidateFile, DocumentKind};
use crate::error::{RejectionReason, SubmitBlocked};

/// Hard upload size limit: 16 MiB.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Admits or rejects candidate files ahead of submission.
///
/// Starts empty; holds at most one [`CandidateFile`], always the most
/// recent one to pass validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadGate {
    selection: Option<CandidateFile>,
}

impl UploadGate {
    /// A gate with no active selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate and, on success, make it the active
    /// selection (replacing any prior one).
    ///
    /// Checks run in order and short-circuit: media type first, then
    /// size. On rejection the prior active selection is untouched.
    pub fn select(&mut self, file: CandidateFile) -> Result<&CandidateFile, RejectionReason> {
        if DocumentKind::from_media_type(&file.media_type).is_none() {
            return Err(RejectionReason::InvalidType {
                media_type: file.media_type,
            });
        }
        if file.size > MAX_FILE_SIZE {
            return Err(RejectionReason::TooLarge { size: file.size });
        }
        Ok(&*self.selection.insert(file))
    }

    /// Discard the active selection. No-op when already empty.
    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// The active selection, if any.
    pub fn selection(&self) -> Option<&CandidateFile> {
        self.selection.as_ref()
    }

    /// Whether the form may currently be submitted.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some()
    }

    /// Gate a submit attempt: the form post may proceed only while a
    /// validated selection is active.
    pub fn submit(&self) -> Result<&CandidateFile, SubmitBlocked> {
        self.selection.as_ref().ok_or(SubmitBlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF};

    fn pdf(name: &str, size: u64) -> CandidateFile {
        CandidateFile::new(name, size, MEDIA_TYPE_PDF)
    }

    fn docx(name: &str, size: u64) -> CandidateFile {
        CandidateFile::new(name, size, MEDIA_TYPE_DOCX)
    }

    #[test]
    fn starts_empty() {
        let gate = UploadGate::new();
        assert!(gate.selection().is_none());
        assert!(!gate.can_submit());
    }

    #[test]
    fn accepts_valid_documents() {
        let mut gate = UploadGate::new();

        let accepted = gate.select(pdf("lease.pdf", 2048)).unwrap();
        assert_eq!(accepted.name, "lease.pdf");
        assert!(gate.can_submit());

        let accepted = gate.select(docx("contract.docx", 4096)).unwrap();
        assert_eq!(accepted.name, "contract.docx");
        assert_eq!(gate.selection().unwrap().media_type, MEDIA_TYPE_DOCX);
    }

    #[test]
    fn accepts_file_at_the_exact_size_limit() {
        let mut gate = UploadGate::new();
        assert!(gate.select(pdf("big.pdf", MAX_FILE_SIZE)).is_ok());
    }

    #[test]
    fn accepts_empty_file_of_valid_type() {
        let mut gate = UploadGate::new();
        assert!(gate.select(pdf("empty.pdf", 0)).is_ok());
    }

    #[test]
    fn rejects_unknown_media_type() {
        let mut gate = UploadGate::new();
        let err = gate
            .select(CandidateFile::new("notes.txt", 10, "text/plain"))
            .unwrap_err();
        assert_eq!(
            err,
            RejectionReason::InvalidType {
                media_type: "text/plain".to_string()
            }
        );
        assert!(!gate.can_submit());
    }

    #[test]
    fn rejects_oversize_file() {
        let mut gate = UploadGate::new();
        let err = gate.select(pdf("huge.pdf", MAX_FILE_SIZE + 1)).unwrap_err();
        assert_eq!(
            err,
            RejectionReason::TooLarge {
                size: MAX_FILE_SIZE + 1
            }
        );
    }

    #[test]
    fn type_check_runs_before_size_check() {
        let mut gate = UploadGate::new();
        let err = gate
            .select(CandidateFile::new("huge.bin", MAX_FILE_SIZE + 1, "application/zip"))
            .unwrap_err();
        assert!(matches!(err, RejectionReason::InvalidType { .. }));
    }

    #[test]
    fn rejection_leaves_prior_selection_unchanged() {
        let mut gate = UploadGate::new();
        gate.select(pdf("lease.pdf", 2048)).unwrap();

        gate.select(CandidateFile::new("notes.txt", 10, "text/plain"))
            .unwrap_err();
        assert_eq!(gate.selection().unwrap().name, "lease.pdf");

        gate.select(docx("huge.docx", MAX_FILE_SIZE + 1)).unwrap_err();
        assert_eq!(gate.selection().unwrap().name, "lease.pdf");
        assert!(gate.can_submit());
    }

    #[test]
    fn new_selection_replaces_the_prior_one() {
        let mut gate = UploadGate::new();
        gate.select(pdf("first.pdf", 100)).unwrap();
        gate.select(pdf("second.pdf", 200)).unwrap();

        let active = gate.selection().unwrap();
        assert_eq!(active.name, "second.pdf");
        assert_eq!(active.size, 200);
    }

    #[test]
    fn clear_resets_and_is_idempotent() {
        let mut gate = UploadGate::new();
        gate.select(pdf("lease.pdf", 2048)).unwrap();

        gate.clear();
        assert!(gate.selection().is_none());
        assert!(!gate.can_submit());

        // Clearing with nothing selected is a no-op
        gate.clear();
        assert!(gate.selection().is_none());
    }

    #[test]
    fn submit_is_blocked_without_a_selection() {
        let gate = UploadGate::new();
        assert_eq!(gate.submit().unwrap_err(), SubmitBlocked);

        let mut gate = UploadGate::new();
        gate.select(pdf("lease.pdf", 2048)).unwrap();
        gate.clear();
        assert_eq!(gate.submit().unwrap_err(), SubmitBlocked);
    }

    #[test]
    fn submit_returns_the_active_selection() {
        let mut gate = UploadGate::new();
        gate.select(pdf("lease.pdf", 2048)).unwrap();

        let file = gate.submit().unwrap();
        assert_eq!(file.name, "lease.pdf");
    }
}
