//! Argon2id password hashing, verification, and strength validation.
//!
//! Hashes use the Argon2id variant with a cryptographically random salt
//! from [`OsRng`], stored in PHC string format so algorithm parameters and
//! salt travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Minimum accepted password length for member accounts.
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate minimum password strength for new/updated accounts.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = "korrekt-hest-batteri-haefte";
        let hash = hash_password(password).expect("hash");
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password(password, &hash).expect("verify"));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("rigtigt-kodeord").expect("hash");
        assert!(!verify_password("forkert-kodeord", &hash).expect("verify"));
    }

    #[test]
    fn short_password_rejected() {
        let err = validate_password_strength("kort").unwrap_err();
        assert!(err.contains("at least"));
    }

    #[test]
    fn boundary_length_accepted() {
        let at_minimum = "x".repeat(MIN_PASSWORD_LENGTH);
        assert!(validate_password_strength(&at_minimum).is_ok());
    }
}
