//! Transient notice model.
//!
//! Notices are the dismissible, auto-expiring messages the page shows
//! for gate rejections, blocked submits, and status updates. This is
//! the value type only; timing and rendering live in the frontend.

use serde::{Deserialize, Serialize};

use crate::error::{RejectionReason, SubmitBlocked};

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Rejections and blocked submits
    Error,
    /// Recoverable oddities
    Warning,
    /// Completed actions
    Success,
    /// Neutral status
    Info,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "notice-error",
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Info => "notice-info",
        }
    }

    /// Icon name for display (Font Awesome).
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "exclamation-circle",
            NoticeLevel::Warning => "exclamation-triangle",
            NoticeLevel::Success => "check-circle",
            NoticeLevel::Info => "info-circle",
        }
    }
}

/// A user-facing message with a severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity level
    pub level: NoticeLevel,
    /// Message text
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl From<&RejectionReason> for Notice {
    fn from(reason: &RejectionReason) -> Self {
        Notice::error(reason.to_string())
    }
}

impl From<&SubmitBlocked> for Notice {
    fn from(blocked: &SubmitBlocked) -> Self {
        Notice::error(blocked.to_string())
    }
}
