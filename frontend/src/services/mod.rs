//! Browser-facing services.
//!
//! The seams between gate logic and the page itself:
//!
//! # Services
//!
//! - [`submit`] - the conventional form post boundary
//! - [`theme`] - theme preference persistence (localStorage)
//!
//! Nothing here issues network requests; the upload itself is a plain
//! multipart form post handled by the browser, and analysis is the
//! backend's job entirely.

pub mod submit;
pub mod theme;

pub use submit::*;
pub use theme::*;
