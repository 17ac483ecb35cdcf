//! certkey Cryptography Library
//!
//! Cryptographic primitives backing the certkey keychain demo:
//! RSA key pairs with PKCS#1 v1.5 encryption and SHA-256 signatures,
//! plus the SHA-2 digest helpers the signing path needs.

pub mod asymmetric;
pub mod error;
pub mod hash;

// Re-export commonly used types for convenience
pub use asymmetric::rsa::{
    encrypt, encrypt_with_spki_der, public_key_from_spki_der, public_key_from_spki_pem,
    verify_digest_with_spki_der, Rsa,
};
pub use error::{Error, Result};
pub use hash::{sha256, sha256_hex, sha256_verify};
