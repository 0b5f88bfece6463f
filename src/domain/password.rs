//! Credential hashing - one-way hash plus verification.
//!
//! The stored representation is an Argon2 PHC string with a random salt,
//! so hashing the same plaintext twice yields different hashes that both
//! verify.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Outcome of checking a candidate against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    pub verified: bool,
}

/// Hashes and verifies password-like secrets.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext secret for storage.
    fn hash(&self, plain_text: &str) -> AppResult<String>;

    /// Check a candidate plaintext against a stored hash.
    ///
    /// A malformed stored hash is reported as not verified.
    fn check(&self, stored_hash: &str, candidate: &str) -> PasswordCheck;
}

/// Argon2 implementation with default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn check(&self, stored_hash: &str, candidate: &str) -> PasswordCheck {
        let verified = match PasswordHash::new(stored_hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        };

        PasswordCheck { verified }
    }
}
