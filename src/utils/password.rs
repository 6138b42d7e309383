//! Password hashing for stored credentials.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

/// Salts and hashes a password with Argon2, returning a PHC format string.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Checks a password against a PHC format hash. An unparsable hash never matches.
pub fn verify(password: &str, hash_phc_format: &str) -> bool {
    let Ok(hash) = PasswordHash::new(hash_phc_format) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_only_the_hashed_password() {
        let hashed = hash("correct horse").expect("hashing should succeed");

        assert!(verify("correct horse", &hashed));
        assert!(!verify("battery staple", &hashed));
        assert!(!verify("correct horse", "not a phc string"));
    }

    #[test]
    fn salts_every_hash() {
        let first = hash("password1").expect("hashing should succeed");
        let second = hash("password1").expect("hashing should succeed");

        assert_ne!(first, second);
    }
}
