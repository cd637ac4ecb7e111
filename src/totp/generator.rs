//! TOTP code generation and verification.
//!
//! The pipeline is: time -> counter -> HMAC over the 8-byte big-endian
//! counter under the base32-decoded secret -> RFC 4226 §5.3 dynamic
//! truncation -> zero-padded decimal code.

use std::time::{SystemTime, UNIX_EPOCH};

use base32::Alphabet;
use zeroize::Zeroize;

use super::{DIGITS_MAX, DIGITS_MIN};
use crate::error::{CryptoError, Result};
use crate::hash::HashAlgorithm;
use crate::random;

const BASE32_NOPAD: Alphabet = Alphabet::Rfc4648 { padding: false };

/// Generates a new shared secret of `length` random bytes, encoded as
/// unpadded uppercase base32
pub fn new_secret(length: usize) -> Result<String> {
    let bytes = random::generate_bytes(length)?;
    tracing::debug!(length, "generated totp secret");
    Ok(base32::encode(BASE32_NOPAD, &bytes))
}

/// Derives the time counter: floor(unix_seconds / period)
pub fn counter_at(unix_seconds: u64, period: u64) -> Result<u64> {
    if period == 0 {
        return Err(CryptoError::InvalidPeriod);
    }
    Ok(unix_seconds / period)
}

/// Computes HMAC(decoded_secret, counter_be8) with the selected hash.
///
/// The secret is uppercase-normalized before decoding, so lowercase
/// input is accepted. Empty or malformed secrets are rejected.
pub fn compute_hmac(secret: &str, counter: u64, algorithm: HashAlgorithm) -> Result<Vec<u8>> {
    let normalized = secret.to_uppercase();
    let mut key =
        base32::decode(BASE32_NOPAD, &normalized).ok_or(CryptoError::InvalidSecretEncoding)?;
    if key.is_empty() {
        return Err(CryptoError::InvalidSecretEncoding);
    }

    let digest = algorithm.hmac(&key, &counter.to_be_bytes());
    key.zeroize();
    Ok(digest)
}

/// Dynamic truncation per RFC 4226 §5.3: the low nibble of the final
/// digest byte selects a 4-byte window, read big-endian, sign bit
/// cleared, reduced modulo 10^digits and zero-padded
pub fn truncate(digest: &[u8], digits: u32) -> Result<String> {
    if !(DIGITS_MIN..=DIGITS_MAX).contains(&digits) {
        return Err(CryptoError::InvalidDigitCount(digits));
    }

    let offset = match digest.last() {
        Some(last) => (last & 0x0f) as usize,
        None => return Err(CryptoError::DigestTooShort(0)),
    };
    // Holds for any digest of 20+ bytes; guards substituted short hashes
    if digest.len() < offset + 4 {
        return Err(CryptoError::DigestTooShort(digest.len()));
    }

    let window = [
        digest[offset],
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ];
    let value = u32::from_be_bytes(window) & 0x7fff_ffff;
    let code = value % 10u32.pow(digits);

    Ok(format!("{:0width$}", code, width = digits as usize))
}

/// Generates the TOTP code for an explicit unix timestamp
pub fn generate_at(
    secret: &str,
    unix_seconds: u64,
    period: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<String> {
    let counter = counter_at(unix_seconds, period)?;
    let digest = compute_hmac(secret, counter, algorithm)?;
    truncate(&digest, digits)
}

/// Generates the TOTP code for the current system time
pub fn generate_now(
    secret: &str,
    period: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<String> {
    generate_at(secret, current_unix_time(), period, digits, algorithm)
}

/// Checks a candidate code against the code for the given timestamp.
///
/// Upstream failures (bad secret, digits or period) propagate as errors
/// instead of collapsing into `false`, so "no match" and "could not be
/// evaluated" stay distinguishable. The comparison itself is
/// constant-time over the code bytes.
pub fn verify_at(
    candidate: &str,
    secret: &str,
    unix_seconds: u64,
    period: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<bool> {
    let expected = generate_at(secret, unix_seconds, period, digits, algorithm)?;
    Ok(constant_time_eq(candidate.as_bytes(), expected.as_bytes()))
}

/// Checks a candidate code against the current system time
pub fn verify_now(
    candidate: &str,
    secret: &str,
    period: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<bool> {
    verify_at(
        candidate,
        secret,
        current_unix_time(),
        period,
        digits,
        algorithm,
    )
}

fn current_unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Length leaks nothing here - the digit count is public configuration
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
