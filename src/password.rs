//! Password hashing helpers built on bcrypt.

use sha2::{Digest, Sha256};

use crate::error::Result;

/// bcrypt ignores input past 72 bytes, so longer passwords are reduced
/// to hex(SHA-256(password)) before hashing.
const BCRYPT_MAX_LEN: usize = 72;

pub use bcrypt::DEFAULT_COST;

fn prehash_if_needed(password: &str) -> String {
    if password.len() > BCRYPT_MAX_LEN {
        hex::encode(Sha256::digest(password.as_bytes()))
    } else {
        password.to_string()
    }
}

/// Hashes a password with the given bcrypt cost factor
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    let effective = prehash_if_needed(password);
    let hash = bcrypt::hash(effective, cost)?;
    tracing::debug!(cost, "password hashed");
    Ok(hash)
}

/// Compares a password against a bcrypt hash. Malformed hashes compare
/// as a mismatch rather than an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let effective = prehash_if_needed(password);
    bcrypt::verify(effective, hash).unwrap_or(false)
}

/// Structural check for a bcrypt hash (always 60 chars, `$2` prefix)
pub fn is_hashed(s: &str) -> bool {
    s.len() == 60 && s.starts_with("$2")
}
