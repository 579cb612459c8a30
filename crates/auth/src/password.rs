//! Credential verification: salted, irreversible password digests.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash,
}

/// Hash a plaintext password into a salted bcrypt digest.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST).map_err(|_| PasswordError::Hash)
}

/// Check a plaintext password against a stored digest.
///
/// A mismatch — including a malformed digest — is `false`, never an error.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}
