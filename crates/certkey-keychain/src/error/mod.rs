use thiserror::Error;

use crate::types::KeyHandle;

/// Keychain服务的错误类型
///
/// One variant per failing service operation, so callers can report
/// the exact step that failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Identity listing failed
    #[error("Store query error: {0}")]
    StoreQuery(String),

    /// Key pair creation at screen load failed
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Decryption error: {0}")]
    Decryption(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Verification error: {0}")]
    Verification(String),

    /// Persistent reference no longer resolves to an identity
    #[error("Identity not found")]
    IdentityNotFound,

    /// Key handle does not belong to this store
    #[error("Unknown key handle: {0:?}")]
    UnknownHandle(KeyHandle),

    #[error("Crypto error: {0}")]
    Crypto(#[from] certkey_crypto::Error),

    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
