//! Argon2 password hashing for employee credentials.

use argon2::{
    password_hash::{rand_core::OsRng, Error as HashError, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(HashError),
    /// The stored value is not a PHC string; the account needs a reset.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(HashError),
    #[error("password verification failed: {0}")]
    Verify(HashError),
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Checks `password` against a stored hash. A mismatch is `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored_hash).map_err(PasswordError::MalformedHash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(err) => Err(PasswordError::Verify(err)),
    }
}
