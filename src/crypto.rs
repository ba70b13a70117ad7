use sha2::{Digest, Sha256};

/// Unsalted SHA-256 of `value`, as 64 lowercase hex characters.
///
/// Identical inputs always produce identical digests so hashed identities can
/// still be grouped downstream.
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_is_fixed_length_lowercase_hex() {
        for input in ["", "a", "alice@example.com", "42"] {
            let digest = sha256_hex(input);
            assert_eq!(digest.len(), 64);
            assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }
}
