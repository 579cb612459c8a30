//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant here is an expected, recoverable-at-the-boundary condition.
/// `NotFound` deliberately covers both "absent" and "present but owned by
/// someone else" so that resource existence never leaks across ownership
/// boundaries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing/invalid/expired token, or credentials that don't match.
    #[error("authentication required")]
    Unauthenticated,

    /// The operation exists but the acting user may not invoke it
    /// (admin-only user listing).
    #[error("access denied")]
    Forbidden,

    /// Entity absent, or not owned by the acting user.
    #[error("not found")]
    NotFound,

    /// A uniqueness constraint was violated (User email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A value failed validation (e.g. malformed input payload).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Unexpected failure; fatal to the current operation only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
