use sha2::{Digest, Sha512};

/// One-way SHA-512 hex digest of a credential. Only the digest ever reaches
/// the persistence layer.
pub fn digest(plain: &str) -> String {
    hex::encode(Sha512::digest(plain.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(
            digest("secret"),
            "bd2b1aaf7ef4f09be9f52ce2d8d599674d81aa9d6a4421696dc4d93dd0619d68\
             2ce56b4d64a9ef097761ced99e0f67265b5f76085e5b0ee7ca4696b2ad6fe2b2"
        );
    }

    #[test]
    fn digest_is_deterministic_and_input_sensitive() {
        assert_eq!(digest("hunter2"), digest("hunter2"));
        assert_ne!(digest("hunter2"), digest("hunter3"));
    }

    #[test]
    fn digest_never_contains_the_plaintext() {
        let d = digest("hunter2");
        assert_eq!(d.len(), 128);
        assert!(!d.contains("hunter2"));
    }
}
