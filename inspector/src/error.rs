//! Error taxonomy shared by every inspector action.
//!
//! ERROR HANDLING
//! ==============
//! Every variant carries a message that is already fit to show to the user.
//! Actions convert errors into a single notice at their boundary; nothing is
//! retried and nothing propagates past the triggering action.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a storage inspector operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The target page cannot be scripted (privileged page, no active tab,
    /// missing host API).
    #[error("{0}")]
    Access(String),
    /// User-supplied text is not valid JSON.
    #[error("{0}")]
    Parse(String),
    /// Well-formed input with the wrong shape: not an object, empty key,
    /// delete outside edit mode.
    #[error("{0}")]
    Validation(String),
}

impl StorageError {
    pub fn access(message: impl Into<String>) -> Self {
        Self::Access(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error means the page itself could not be reached.
    #[must_use]
    pub fn is_access(&self) -> bool {
        matches!(self, Self::Access(_))
    }
}
