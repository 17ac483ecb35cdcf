use crate::{
    error::Result,
    identity::{Identity, PersistentRef},
    keypair::KeyPair,
    types::{Algorithm, EncryptionScheme, SignatureScheme},
};

/// The platform credential/security service the screens are written
/// against
///
/// Implementations own all key material; callers only hold handles
/// and SPKI bytes. Listing order is whatever the store returns —
/// callers must tolerate it changing between runs and must not
/// re-sort.
pub trait KeychainService: Send + Sync + 'static {
    /// Enumerate the identities visible to this application
    fn list_identities(&self) -> Result<Vec<Identity>>;

    /// Resolve the display name of the identity's certificate
    fn certificate_display_name(&self, identity: &Identity) -> Result<String>;

    /// Re-fetch an identity from a reference obtained in an earlier
    /// listing pass
    fn find_identity(&self, reference: &PersistentRef) -> Result<Identity>;

    /// Generate a key pair under `tag`, or return the existing one
    ///
    /// Idempotent per tag: a second call with the same tag yields the
    /// same pair (same handle, same public key).
    fn generate_or_fetch_key_pair(
        &self,
        tag: &str,
        algorithm: Algorithm,
        bits: usize,
    ) -> Result<KeyPair>;

    fn encrypt(
        &self,
        pair: &KeyPair,
        plaintext: &[u8],
        scheme: EncryptionScheme,
    ) -> Result<Vec<u8>>;

    fn decrypt(
        &self,
        pair: &KeyPair,
        ciphertext: &[u8],
        scheme: EncryptionScheme,
    ) -> Result<Vec<u8>>;

    /// Sign a precomputed digest with the pair's private key
    fn sign(&self, pair: &KeyPair, digest: &[u8], scheme: SignatureScheme) -> Result<Vec<u8>>;

    /// Verify a signature over a digest with the pair's public key
    ///
    /// `Ok(false)` means a well-formed but wrong signature; `Err`
    /// means the verification itself could not run.
    fn verify(
        &self,
        pair: &KeyPair,
        digest: &[u8],
        signature: &[u8],
        scheme: SignatureScheme,
    ) -> Result<bool>;
}
