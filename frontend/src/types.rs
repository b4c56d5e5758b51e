//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notice Types** - on-screen transient notices
//! - **Theme Types** - light/dark preference

use chrono::Local;
use clauseease_core::Notice;

// =============================================================================
// Notice Types
// =============================================================================

/// A notice currently shown in the stack.
///
/// Wraps the gate-level [`Notice`] with what rendering needs: a stable
/// id for keyed lists and dismissal, and the time it was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotice {
    /// Stable id, unique for the page lifetime
    pub id: usize,
    /// Severity and message
    pub notice: Notice,
    /// Time the notice was raised (HH:MM:SS)
    pub timestamp: String,
}

impl ActiveNotice {
    pub fn new(id: usize, notice: Notice) -> Self {
        Self {
            id,
            notice,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Theme Types
// =============================================================================

/// UI color scheme preference, persisted in localStorage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Default scheme
    #[default]
    Light,
    /// Dark scheme, applied as a class on `<body>`
    Dark,
}

impl Theme {
    /// Parse a stored preference. Unknown values mean "no preference".
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Value written to localStorage.
    pub fn storage_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
