//! UI Components for the ClauseEase upload page.
//!
//! # Layout Components
//! - [`Header`] - Brand bar with theme toggle
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Document selection with drag & drop, gated submit
//! - [`NoticeStack`] - Transient notices with auto-dismiss

mod footer;
mod header;
mod hero;
mod notices;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use notices::*;
pub use upload::*;
