//! AES-GCM string encryption helpers.
//!
//! Envelope layout: `hex(nonce || ciphertext)` with a random 12-byte
//! nonce, so the output is a single self-contained string.

use aes_gcm::{
    aead::{generic_array::GenericArray, Aead, KeyInit},
    Aes128Gcm, Aes256Gcm, Nonce,
};

use crate::error::{CryptoError, Result};

const NONCE_LEN: usize = 12;

/// Encrypts `plaintext` under a 16-byte (AES-128) or 32-byte (AES-256)
/// key and returns the hex-encoded envelope
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<String> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    getrandom::getrandom(&mut nonce_bytes)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = match key.len() {
        16 => {
            let cipher = Aes128Gcm::new(GenericArray::from_slice(key));
            cipher
                .encrypt(nonce, plaintext)
                .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?
        }
        32 => {
            let cipher = Aes256Gcm::new(GenericArray::from_slice(key));
            cipher
                .encrypt(nonce, plaintext)
                .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?
        }
        other => return Err(CryptoError::InvalidAesKeyLength(other)),
    };

    let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    Ok(hex::encode(envelope))
}

/// Decrypts a hex-encoded envelope back into raw bytes
pub fn decrypt_bytes(encrypted_hex: &str, key: &[u8]) -> Result<Vec<u8>> {
    let envelope = hex::decode(encrypted_hex)?;
    if envelope.len() < NONCE_LEN {
        return Err(CryptoError::DecryptionFailed);
    }
    let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    match key.len() {
        16 => {
            let cipher = Aes128Gcm::new(GenericArray::from_slice(key));
            cipher
                .decrypt(nonce, ciphertext)
                .map_err(|_| CryptoError::DecryptionFailed)
        }
        32 => {
            let cipher = Aes256Gcm::new(GenericArray::from_slice(key));
            cipher
                .decrypt(nonce, ciphertext)
                .map_err(|_| CryptoError::DecryptionFailed)
        }
        other => Err(CryptoError::InvalidAesKeyLength(other)),
    }
}

/// Decrypts a hex-encoded envelope into a UTF-8 string
pub fn decrypt(encrypted_hex: &str, key: &[u8]) -> Result<String> {
    let plaintext = decrypt_bytes(encrypted_hex, key)?;
    Ok(String::from_utf8(plaintext)?)
}
