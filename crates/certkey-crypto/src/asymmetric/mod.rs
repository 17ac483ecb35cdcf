//! Asymmetric cryptography
//!
//! The demo pins a single algorithm family: RSA with PKCS#1 v1.5
//! padding for encryption and PKCS#1 v1.5 + SHA-256 for signatures.

pub mod rsa;

pub use rsa::Rsa;
