//! # CRYPTOKIT
//!
//! Utility wrappers for common cryptographic operations:
//!
//! - TOTP generation and verification (RFC 6238), provisioning URIs and
//!   recovery code batches
//! - AES-GCM string encryption
//! - bcrypt password hashing
//! - PBKDF2 key derivation
//! - JWT (EdDSA) validation
//! - Secure random bytes, strings and UUIDs
//!
//! Every operation is a pure, stateless function over its inputs - no
//! shared mutable state, safe for concurrent use from any number of
//! threads. The only shared resource is the OS entropy source.

pub mod aead;
pub mod error;
pub mod hash;
pub mod ids;
pub mod kdf;
pub mod password;
pub mod random;
pub mod token;
pub mod totp;

// Re-exports
pub use error::{CryptoError, Result};
pub use hash::HashAlgorithm;
pub use random::Charset;
pub use token::{Claims, TokenValidator};
pub use totp::ProvisioningUri;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
