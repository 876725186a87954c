//! Error types shared by strategy factories and credential checkers.

use thiserror::Error;

/// Errors raised while building a strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminAuthError {
    /// Provider options are missing or malformed.
    #[error("invalid options for provider '{uid}': {reason}")]
    InvalidOptions { uid: String, reason: String },

    /// A collaborator the strategy needs is not available.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Opaque failure reported by the host's credential check.
///
/// The local strategy hands this value back untouched, so callers can compare
/// it with what the checker produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CredentialError {
    message: String,
}

impl CredentialError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
