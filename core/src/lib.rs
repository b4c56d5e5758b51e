//! ClauseEase - Upload Gate
//!
//! Browser-independent logic for the ClauseEase upload page: the gate
//! that admits or rejects a candidate document before it may be posted
//! to the analysis backend.
//!
//! The frontend crate is only a thin presentation adapter over this one.
//! Everything here runs (and is tested) natively, with no `web-sys` and
//! no DOM in sight.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  UploadGate                                                │
//! │  ├── select(CandidateFile) ── type check ── size check     │
//! │  ├── clear()                                               │
//! │  └── submit() ── blocks the form post without a selection  │
//! ├────────────────────────────────────────────────────────────┤
//! │  Notice ── user-facing messages derived from gate errors   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`candidate`] - The candidate file entity and document kinds
//! - [`gate`] - The upload gate state object
//! - [`error`] - Rejection and submit-blocking errors
//! - [`format`] - Human-readable size and text formatting
//! - [`notice`] - Transient notice model

pub mod candidate;
pub mod error;
pub mod format;
pub mod gate;
pub mod notice;

pub use candidate::{CandidateFile, DocumentKind, MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF};
pub use error::{RejectionReason, SubmitBlocked};
pub use format::{format_file_size, truncate_text};
pub use gate::{UploadGate, MAX_FILE_SIZE};
pub use notice::{Notice, NoticeLevel};
