use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a private key owned by a keychain store
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct KeyHandle(pub u64);

/// Key pair algorithm
///
/// The demo pins RSA; the enum keeps the wire shape open for stores
/// that carry more than one family.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    Rsa,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Rsa => write!(f, "RSA"),
        }
    }
}

/// Named encryption scheme (algorithm + padding)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncryptionScheme {
    /// RSA with PKCS#1 v1.5 padding
    RsaPkcs1v15,
}

/// Named signature scheme (algorithm + digest + padding)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureScheme {
    /// RSA PKCS#1 v1.5 over a SHA-256 digest
    RsaPkcs1v15Sha256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Rsa.to_string(), "RSA");
    }

    #[test]
    fn test_key_handle_identity() {
        assert_eq!(KeyHandle(7), KeyHandle(7));
        assert_ne!(KeyHandle(7), KeyHandle(8));
    }
}
