//! Demo-level error types

use thiserror::Error;

/// Errors surfaced by the demo screens
///
/// Keychain-level failures pass through; the two postcondition
/// variants cover operations whose calls all succeeded but whose
/// result did not hold.
#[derive(Error, Debug)]
pub enum DemoError {
    /// 密钥链错误
    #[error("Keychain error: {0}")]
    Keychain(#[from] certkey_keychain::Error),

    /// Decrypted payload differs from the original sample
    #[error("Round-trip mismatch: decrypted payload differs from original")]
    RoundTripMismatch,

    /// Verification ran but returned false
    #[error("Signature failed verification")]
    SignatureRejected,

    /// Background worker panicked or was torn down
    #[error("Worker task failed: {0}")]
    TaskJoin(String),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

/// Demo操作结果类型
pub type Result<T> = std::result::Result<T, DemoError>;
