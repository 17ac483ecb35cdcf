//! SHA-256 digest helpers
//!
//! The signing path operates on digests, not messages; these helpers
//! produce the fixed-size digest that crosses the service boundary.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data
///
/// # Example
/// ```
/// use certkey_crypto::hash::sha256;
///
/// let digest = sha256(b"Hello, World!");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute SHA-256 hash and return as hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Verify that data matches an expected SHA-256 digest
pub fn sha256_verify(data: &[u8], expected: &[u8]) -> bool {
    sha256(data).as_slice() == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256("abc")
        let digest = sha256_hex(b"abc");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_verify() {
        let data = b"certkey sample";
        let digest = sha256(data);
        assert!(sha256_verify(data, &digest));
        assert!(!sha256_verify(b"other data", &digest));
    }
}
