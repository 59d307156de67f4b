/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::error::{AppError, Result};

/// Hash a password using Argon2id with a fresh random salt.
/// Returns the PHC string suitable for storage in the database; two calls on
/// the same input produce different strings.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal("Failed to hash password".to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored hash.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash format".to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Err(AppError::Internal("Password verification failed".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "SecurePass123!";
        let hash = hash_password(password).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_wrong_password() {
        let password = "SecurePass123!";
        let hash = hash_password(password).unwrap();
        assert!(!verify_password("WrongPass123!", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        // Fresh salt per call
        let hash1 = hash_password("repeated").unwrap();
        let hash2 = hash_password("repeated").unwrap();
        assert_ne!(hash1, hash2);
        assert!(verify_password("repeated", &hash1).unwrap());
        assert!(verify_password("repeated", &hash2).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(result.is_err());
    }
}
