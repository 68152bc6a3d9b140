//! Password hashing and verification using Argon2id.
//!
//! Hashes are stored as PHC strings carrying their own salt and parameters.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored hash.
///
/// A mismatch is `Ok(false)`; only an unparseable stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_only_the_original_password() {
        let hash = hash_password("rahasia-sekali").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("rahasia-sekali", &hash).unwrap());
        assert!(!verify_password("salah", &hash).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let first = hash_password("sama").unwrap();
        let second = hash_password("sama").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_malformed_stored_hash() {
        assert!(verify_password("password", "not-a-hash").is_err());
    }
}
