//! JWT validation (EdDSA / Ed25519).
//!
//! Validation only - this crate never issues tokens. The validator is
//! built once from a PEM-encoded public key and reused across requests.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Registered claims understood by the default validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,
    /// Expiration time (unix seconds)
    pub exp: u64,
    /// Issued-at time (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Token identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Parses and validates JWT tokens against a fixed public key
pub struct TokenValidator {
    key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Builds a validator from a PEM-encoded Ed25519 public key
    pub fn new_ed25519(public_key_pem: &[u8]) -> Result<Self> {
        let key = DecodingKey::from_ed_pem(public_key_pem)?;
        Ok(Self {
            key,
            validation: Validation::new(Algorithm::EdDSA),
        })
    }

    /// Requires the `iss` claim to match
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Decodes and validates a raw token into typed claims.
    /// Signature, expiry and not-before failures all surface as errors.
    pub fn decode<T: DeserializeOwned>(&self, raw_token: &str) -> Result<T> {
        let data = decode::<T>(raw_token, &self.key, &self.validation)?;
        Ok(data.claims)
    }

    /// Decodes into the default [`Claims`] shape
    pub fn decode_claims(&self, raw_token: &str) -> Result<Claims> {
        self.decode(raw_token)
    }
}
