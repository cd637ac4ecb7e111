//! PBKDF2 key derivation.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::hash::HashAlgorithm;

/// Derives `length` key bytes from a password with PBKDF2 under the
/// selected hash family
pub fn derive_key(
    password: &str,
    salt: &[u8],
    rounds: u32,
    length: usize,
    algorithm: HashAlgorithm,
) -> Vec<u8> {
    let mut key = vec![0u8; length];
    match algorithm {
        HashAlgorithm::Sha1 => pbkdf2_hmac::<Sha1>(password.as_bytes(), salt, rounds, &mut key),
        HashAlgorithm::Sha256 => pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut key),
        HashAlgorithm::Sha512 => pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, rounds, &mut key),
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc6070_sha1_vector_one_round() {
        let key = derive_key("password", b"salt", 1, 20, HashAlgorithm::Sha1);
        assert_eq!(hex::encode(key), "0c60c80f961f0e71f3a9b524af6012062fe037a6");
    }

    #[test]
    fn test_rfc6070_sha1_vector_4096_rounds() {
        let key = derive_key("password", b"salt", 4096, 20, HashAlgorithm::Sha1);
        assert_eq!(hex::encode(key), "4b007901b765489abead49d926f721d065a429c1");
    }

    #[test]
    fn test_sha256_vector() {
        let key = derive_key("password", b"salt", 1, 32, HashAlgorithm::Sha256);
        assert_eq!(
            hex::encode(key),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = derive_key("pw", b"salt", 10, 32, HashAlgorithm::Sha512);
        let b = derive_key("pw", b"salt", 10, 32, HashAlgorithm::Sha512);
        assert_eq!(a, b);
    }

    #[test]
    fn test_salt_changes_output() {
        let a = derive_key("pw", b"salt1", 10, 32, HashAlgorithm::Sha256);
        let b = derive_key("pw", b"salt2", 10, 32, HashAlgorithm::Sha256);
        assert_ne!(a, b);
    }
}
