//! `quotehub-auth` — authentication boundary (credentials + access tokens).
//!
//! This crate is intentionally decoupled from HTTP and storage: it hashes and
//! verifies passwords and it issues/validates signed access tokens. Loading
//! the user behind a validated token is the identity resolver's job
//! (`quotehub-budgeting::users`).

pub mod claims;
pub mod password;
pub mod token;

pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use password::{PasswordError, hash_password, verify_password};
pub use token::{Hs256Tokens, TokenError, TokenValidator};
