//! Salted password digests for stored user credentials.

use rand::RngCore;
use sha2::{Digest, Sha512};

/// Number of random bytes generated per user.
pub const SALT_LEN: usize = 16;

/// Fresh random salt of [`SALT_LEN`] bytes from the thread-local RNG.
pub fn generate_salt() -> Vec<u8> {
    let mut salt = vec![0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

/// SHA-512 over `salt || password`, lowercase hex.
pub fn hash_password(password: &str, salt: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Checks `password` against a digest produced by [`hash_password`].
///
/// The digests are compared in constant time.
pub fn verify_password(password: &str, salt: &[u8], expected_hash: &str) -> bool {
    let actual = hash_password(password, salt);
    constant_time_eq::constant_time_eq(actual.as_bytes(), expected_hash.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_hex_sha512() {
        let hash = hash_password("password123", b"salt");
        assert_eq!(hash.len(), 128);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_same_password_different_salt_differs() {
        let first = hash_password("password123", &[1; SALT_LEN]);
        let second = hash_password("password123", &[2; SALT_LEN]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_password() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LEN);

        let hash = hash_password("secret", &salt);
        assert!(verify_password("secret", &salt, &hash));
        assert!(!verify_password("Secret", &salt, &hash));
    }

    #[test]
    fn test_verify_rejects_truncated_or_foreign_digest() {
        let salt = generate_salt();
        let hash = hash_password("secret", &salt);

        assert!(!verify_password("secret", &salt, &hash[..64]));
        assert!(!verify_password("secret", &salt, ""));
        assert!(!verify_password("secret", &[0; SALT_LEN], &hash));
    }
}
