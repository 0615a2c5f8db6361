//! Admin password hashing and verification.
//!
//! Passwords are hashed with Argon2id into PHC strings; verification goes
//! through `argon2`'s constant-time comparison. Plaintext is zeroized on drop.

use std::fmt;

use argon2::password_hash::{PasswordHash as PhcHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::types::PasswordHash;

/// Minimum length accepted by the explicit set-password operation.
pub const MIN_ADMIN_PASSWORD_LENGTH: u64 = 6;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("password hashing failed: {0}")]
    HashingFailed(String),
}

/// Plaintext password submitted with a request.
///
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id and a fresh random salt.
    pub fn hash(&self) -> Result<PasswordHash, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        PasswordHash::new(hash.to_string())
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
    }

    /// Check this password against a stored hash. A hash that does not parse
    /// never matches.
    pub fn verify(&self, stored: &PasswordHash) -> bool {
        let parsed = match PhcHash::new(stored.as_str()) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::error!("Stored admin password hash is malformed: {e}");
                return false;
            }
        };

        Argon2::default()
            .verify_password(self.as_bytes(), &parsed)
            .is_ok()
    }
}

impl From<String> for ClearTextPassword {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}
