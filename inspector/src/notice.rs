//! Transient user notifications.
//!
//! Every user action ends in exactly one notice. Hosts show it for
//! [`NOTICE_DURATION_MS`](crate::consts::NOTICE_DURATION_MS) and replace it
//! when a newer one arrives.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::StorageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message shown briefly after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// CSS class list for the toast element.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("toast {} show", self.level.as_str())
    }
}

impl From<&StorageError> for Notice {
    fn from(err: &StorageError) -> Self {
        Self::error(err.to_string())
    }
}
