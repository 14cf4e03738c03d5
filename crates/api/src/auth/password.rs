//! Password hashing with Argon2id.
//!
//! Stored hashes are PHC strings, so parameters and salt travel with the
//! hash and can be tightened later without invalidating existing rows.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use acadex_core::error::CoreError;

/// Shortest password accepted at signup and account creation.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
}

/// Compare a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; `Err` means the stored hash itself is
/// unusable (corrupt or not a PHC string).
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reject passwords below the minimum length before they reach the hasher.
pub fn check_password_strength(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn hash_verifies_its_own_password() {
        let hash = hash_password("rainy-tuesday-42").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("rainy-tuesday-42", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_a_clean_mismatch() {
        let hash = hash_password("rainy-tuesday-42").unwrap();
        assert!(!verify_password("sunny-monday-41", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_matches!(
            check_password_strength("seven77"),
            Err(CoreError::Validation(_))
        );
        assert!(check_password_strength("eight888").is_ok());
    }
}
