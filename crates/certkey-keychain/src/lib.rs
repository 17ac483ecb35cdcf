//! certkey Keychain Abstraction
//!
//! The credential-store boundary of the demo: identities (certificate
//! plus optional private key), opaque key handles, and the
//! [`KeychainService`] trait the screens are written against. The
//! in-memory implementation doubles as the test substitute.

pub mod error;
pub mod identity;
pub mod keypair;
pub mod memory;
pub mod service;
pub mod types;

// Re-export core functionality
pub use error::{Error, Result};
pub use identity::{Identity, PersistentRef};
pub use keypair::KeyPair;
pub use memory::MemoryKeychain;
pub use service::KeychainService;
pub use types::{Algorithm, EncryptionScheme, KeyHandle, SignatureScheme};
