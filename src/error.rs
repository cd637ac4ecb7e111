//! Error types for the crate.

use thiserror::Error;

/// Result type for all fallible operations in this crate
pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("digit count must be between 6 and 8, got {0}")]
    InvalidDigitCount(u32),

    #[error("secret is not valid unpadded base32")]
    InvalidSecretEncoding,

    #[error("period must be greater than zero")]
    InvalidPeriod,

    #[error("random source failed: {0}")]
    RandomSource(String),

    #[error("digest too short for dynamic truncation ({0} bytes)")]
    DigestTooShort(usize),

    #[error("invalid descriptor base: {0}")]
    DescriptorParse(#[from] url::ParseError),

    #[error("charset must not be empty")]
    EmptyCharset,

    #[error("AES key must be 16 or 32 bytes, got {0}")]
    InvalidAesKeyLength(usize),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed - wrong key or corrupted ciphertext")]
    DecryptionFailed,

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("token validation failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl CryptoError {
    /// True for errors that indicate a misconfigured call site rather
    /// than bad input data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDigitCount(_)
                | Self::InvalidPeriod
                | Self::EmptyCharset
                | Self::InvalidAesKeyLength(_)
                | Self::DescriptorParse(_)
        )
    }
}
