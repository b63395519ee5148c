//! Password hashing with Argon2id in PHC string format.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use super::errors::AuthError;

/// Hash `plain` with a fresh random salt and the default work factor.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AuthError::Internal(format!("hashing: {e}")))?
        .to_string();
    Ok(hash)
}

/// Check `plain` against a stored hash. A malformed hash never matches.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_is_salted() {
        let a = hash_password("Passw0rd!").unwrap();
        let b = hash_password("Passw0rd!").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
        assert!(!a.contains("Passw0rd!"));
        assert!(verify_password(&a, "Passw0rd!"));
        assert!(verify_password(&b, "Passw0rd!"));
    }

    #[test]
    fn wrong_password_or_garbage_hash_fails() {
        let h = hash_password("Passw0rd!").unwrap();
        assert!(!verify_password(&h, "passw0rd!"));
        assert!(!verify_password("not-a-phc-string", "Passw0rd!"));
        assert!(!verify_password("", ""));
    }
}
