//! One-way password hashing collaborator
//!
//! Wraps Argon2 hash and verify. There is no decryption path; only the hash
//! is ever stored or compared.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};

use crate::error::BookingResult;

/// Hash a plaintext password with a fresh random salt
pub fn hash(plaintext: &str) -> BookingResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against a stored hash
pub fn verify(plaintext: &str, stored_hash: &str) -> BookingResult<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

    let argon2 = Argon2::default();
    Ok(argon2
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok())
}
