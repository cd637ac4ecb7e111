//! Recovery code batches - fallback codes handed to the user at
//! enrollment time. Each code is an independent draw; the batch carries
//! no uniqueness guarantee (collisions are negligible at these sizes).

use crate::error::Result;
use crate::random::{self, Charset};

/// Generates `count` alphanumeric recovery codes of `length` characters.
/// A failed draw aborts the whole batch - partial batches are never
/// returned.
pub fn generate_batch(count: usize, length: usize) -> Result<Vec<String>> {
    generate_batch_with(count, length, &Charset::alphanumeric())
}

/// Same as [`generate_batch`] with a caller-supplied charset
pub fn generate_batch_with(
    count: usize,
    length: usize,
    charset: &Charset,
) -> Result<Vec<String>> {
    random::generate_strings(count, length, charset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_count_and_length() {
        let batch = generate_batch(10, 8).unwrap();
        assert_eq!(batch.len(), 10);
        let charset = Charset::alphanumeric();
        for code in &batch {
            assert_eq!(code.len(), 8);
            assert!(code.chars().all(|c| charset.contains(c)));
        }
    }

    #[test]
    fn test_batches_differ() {
        // 10 codes of 8 alphanumeric chars - a full-batch collision is
        // beyond negligible
        let a = generate_batch(10, 8).unwrap();
        let b = generate_batch(10, 8).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_custom_charset() {
        let digits_only = Charset::new("0123456789");
        let batch = generate_batch_with(4, 10, &digits_only).unwrap();
        for code in &batch {
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(generate_batch(0, 8).unwrap().is_empty());
    }
}
