//! Identifier generation.

use uuid::Uuid;

/// Generates an RFC 4122 version 4 (random) UUID as a hyphenated string
pub fn new_uuid_v4() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_v4_shape() {
        let id = new_uuid_v4();
        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_uuids_are_unique() {
        assert_ne!(new_uuid_v4(), new_uuid_v4());
    }
}
