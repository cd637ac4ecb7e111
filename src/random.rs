//! Secure random generation - bytes, hex strings and charset strings.
//!
//! All draws come from the OS entropy source via `getrandom`; failures
//! surface as [`CryptoError::RandomSource`] and are never retried here.

use crate::error::{CryptoError, Result};

/// Generates a random byte vector of the specified length
pub fn generate_bytes(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    getrandom::getrandom(&mut bytes).map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(bytes)
}

/// Generates a random string of `length` bytes rendered as hex
/// (output is `2 * length` characters)
pub fn generate_hex_string(length: usize) -> Result<String> {
    let bytes = generate_bytes(length)?;
    Ok(hex::encode(bytes))
}

/// Immutable character set for random string generation.
///
/// Passed by reference into the generators so callers can inject their
/// own alphabets in tests or restrict the output (e.g. digits only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// a-z, A-Z, 0-9 - the alphabet used for recovery codes
    pub fn alphanumeric() -> Self {
        Self::new("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

/// Generates a random string of `length` characters drawn from `charset`
pub fn generate_string(length: usize, charset: &Charset) -> Result<String> {
    if charset.is_empty() {
        return Err(CryptoError::EmptyCharset);
    }

    let mut result = String::with_capacity(length);
    for _ in 0..length {
        let index = unbiased_index(charset.len() as u32)?;
        result.push(charset.chars[index as usize]);
    }
    Ok(result)
}

/// Generates `count` independent random strings of `length` characters each.
/// The first draw failure aborts the whole batch.
pub fn generate_strings(count: usize, length: usize, charset: &Charset) -> Result<Vec<String>> {
    let mut strings = Vec::with_capacity(count);
    for _ in 0..count {
        strings.push(generate_string(length, charset)?);
    }
    Ok(strings)
}

/// Uniform index in `[0, bound)` via rejection sampling, so short
/// alphabets introduce no modulo bias.
fn unbiased_index(bound: u32) -> Result<u32> {
    let limit = u32::MAX - (u32::MAX % bound);
    loop {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf).map_err(|e| CryptoError::RandomSource(e.to_string()))?;
        let value = u32::from_be_bytes(buf);
        if value < limit {
            return Ok(value % bound);
        }
    }
}
