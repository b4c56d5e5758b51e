//! Application configuration.
//!
//! Centralized configuration for the ClauseEase upload page. All values
//! are hard constants; the page has no runtime configuration surface.

/// Application name, shown in the document title.
pub const APP_NAME: &str = "ClauseEase";

/// Form post target for document analysis.
///
/// The analysis backend owns this route; the frontend only gates what
/// gets posted to it.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// How long a transient notice stays on screen (milliseconds).
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Maximum notices kept on screen at once. Oldest is dropped first.
pub const MAX_NOTICES: usize = 4;

/// localStorage key for the persisted theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Longest file name shown in the selection card before truncation.
pub const FILE_NAME_DISPLAY_LEN: usize = 48;
