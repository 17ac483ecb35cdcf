use std::{
    collections::HashMap,
    sync::RwLock,
};

use certkey_crypto::Rsa;

use crate::{
    error::{Error, Result},
    identity::{Identity, PersistentRef},
    keypair::KeyPair,
    service::KeychainService,
    types::{Algorithm, EncryptionScheme, KeyHandle, SignatureScheme},
};

struct StoredKey {
    key: Rsa,
    bits: usize,
    tag: String,
    spki_der: Vec<u8>,
}

#[derive(Default)]
struct State {
    keys: HashMap<KeyHandle, StoredKey>,
    tags: HashMap<String, KeyHandle>,
    next_handle: u64,
}

/// In-memory keychain implementation
///
/// Backs the demo binary and substitutes for the platform store in
/// tests. Identities are seeded at construction and listed in seeded
/// order; key pairs are generated on demand and held for the store's
/// lifetime.
pub struct MemoryKeychain {
    identities: Vec<Identity>,
    state: RwLock<State>,
}

impl MemoryKeychain {
    pub fn new() -> Self {
        Self {
            identities: Vec::new(),
            state: RwLock::new(State::default()),
        }
    }

    /// Create a store seeded with `(label, has_private_key)` entries
    ///
    /// Persistent references are minted here and stay valid for the
    /// store's lifetime.
    pub fn with_identities<I, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, bool)>,
        L: Into<String>,
    {
        let identities = entries
            .into_iter()
            .enumerate()
            .map(|(index, (label, has_private_key))| {
                let reference = PersistentRef::new(format!("memkc:{index}").into_bytes());
                Identity::new(label, reference, has_private_key)
            })
            .collect();
        Self {
            identities,
            state: RwLock::new(State::default()),
        }
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| Error::Other("Failed to acquire read lock".to_string()))
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| Error::Other("Failed to acquire write lock".to_string()))
    }

    fn keypair_from_stored(handle: KeyHandle, stored: &StoredKey) -> KeyPair {
        KeyPair {
            algorithm: Algorithm::Rsa,
            bits: stored.bits,
            tag: stored.tag.clone(),
            private: handle,
            public_spki_der: stored.spki_der.clone(),
        }
    }
}

impl Default for MemoryKeychain {
    fn default() -> Self {
        Self::new()
    }
}

impl KeychainService for MemoryKeychain {
    fn list_identities(&self) -> Result<Vec<Identity>> {
        Ok(self.identities.clone())
    }

    fn certificate_display_name(&self, identity: &Identity) -> Result<String> {
        Ok(identity.label.clone())
    }

    fn find_identity(&self, reference: &PersistentRef) -> Result<Identity> {
        self.identities
            .iter()
            .find(|identity| &identity.persistent_ref == reference)
            .cloned()
            .ok_or(Error::IdentityNotFound)
    }

    fn generate_or_fetch_key_pair(
        &self,
        tag: &str,
        algorithm: Algorithm,
        bits: usize,
    ) -> Result<KeyPair> {
        let Algorithm::Rsa = algorithm;
        let mut state = self.write_state()?;

        if let Some(&handle) = state.tags.get(tag) {
            let stored = state
                .keys
                .get(&handle)
                .ok_or(Error::UnknownHandle(handle))?;
            return Ok(Self::keypair_from_stored(handle, stored));
        }

        let key = Rsa::generate(bits)
            .map_err(|e| Error::KeyGeneration(format!("RSA-{bits} generation failed: {e}")))?;
        let spki_der = key
            .to_spki_der()
            .map_err(|e| Error::KeyGeneration(format!("SPKI export failed: {e}")))?;

        state.next_handle += 1;
        let handle = KeyHandle(state.next_handle);
        let stored = StoredKey {
            key,
            bits,
            tag: tag.to_string(),
            spki_der,
        };
        let pair = Self::keypair_from_stored(handle, &stored);
        state.keys.insert(handle, stored);
        state.tags.insert(tag.to_string(), handle);
        Ok(pair)
    }

    fn encrypt(
        &self,
        pair: &KeyPair,
        plaintext: &[u8],
        scheme: EncryptionScheme,
    ) -> Result<Vec<u8>> {
        let EncryptionScheme::RsaPkcs1v15 = scheme;
        certkey_crypto::encrypt_with_spki_der(&pair.public_spki_der, plaintext)
            .map_err(|e| Error::Encryption(e.to_string()))
    }

    fn decrypt(
        &self,
        pair: &KeyPair,
        ciphertext: &[u8],
        scheme: EncryptionScheme,
    ) -> Result<Vec<u8>> {
        let EncryptionScheme::RsaPkcs1v15 = scheme;
        let state = self.read_state()?;
        let stored = state
            .keys
            .get(&pair.private)
            .ok_or(Error::UnknownHandle(pair.private))?;
        stored
            .key
            .decrypt(ciphertext)
            .map_err(|e| Error::Decryption(e.to_string()))
    }

    fn sign(&self, pair: &KeyPair, digest: &[u8], scheme: SignatureScheme) -> Result<Vec<u8>> {
        let SignatureScheme::RsaPkcs1v15Sha256 = scheme;
        let state = self.read_state()?;
        let stored = state
            .keys
            .get(&pair.private)
            .ok_or(Error::UnknownHandle(pair.private))?;
        stored
            .key
            .sign_digest(digest)
            .map_err(|e| Error::Signing(e.to_string()))
    }

    fn verify(
        &self,
        pair: &KeyPair,
        digest: &[u8],
        signature: &[u8],
        scheme: SignatureScheme,
    ) -> Result<bool> {
        let SignatureScheme::RsaPkcs1v15Sha256 = scheme;
        certkey_crypto::verify_digest_with_spki_der(&pair.public_spki_der, digest, signature)
            .map_err(|e| Error::Verification(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use certkey_crypto::sha256;

    use super::*;

    #[test]
    fn test_list_identities_preserves_seed_order() {
        let store = MemoryKeychain::with_identities([("Alice", true), ("Bob", false)]);

        let identities = store.list_identities().unwrap();
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0].label, "Alice");
        assert!(identities[0].has_private_key);
        assert_eq!(identities[1].label, "Bob");
        assert!(!identities[1].has_private_key);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = MemoryKeychain::new();
        assert!(store.list_identities().unwrap().is_empty());
    }

    #[test]
    fn test_find_identity_roundtrips_persistent_ref() {
        let store = MemoryKeychain::with_identities([("Alice", true)]);
        let listed = store.list_identities().unwrap();

        let refetched = store.find_identity(&listed[0].persistent_ref).unwrap();
        assert_eq!(refetched.label, "Alice");

        let stale = PersistentRef::new(b"memkc:99".to_vec());
        assert!(matches!(
            store.find_identity(&stale),
            Err(Error::IdentityNotFound)
        ));
    }

    #[test]
    fn test_generate_or_fetch_is_idempotent_per_tag() {
        let store = MemoryKeychain::new();

        let first = store.generate_or_fetch_key_pair("demo", Algorithm::Rsa, 2048).unwrap();
        let second = store.generate_or_fetch_key_pair("demo", Algorithm::Rsa, 2048).unwrap();
        assert_eq!(first.private, second.private);
        assert_eq!(first.public_spki_der, second.public_spki_der);

        let other = store.generate_or_fetch_key_pair("other", Algorithm::Rsa, 2048).unwrap();
        assert_ne!(first.private, other.private);
        assert_ne!(first.public_spki_der, other.public_spki_der);
    }

    #[test]
    fn test_encrypt_decrypt_through_service() {
        let store = MemoryKeychain::new();
        let pair = store.generate_or_fetch_key_pair("demo", Algorithm::Rsa, 2048).unwrap();
        let message = b"service round trip";

        let ciphertext = store
            .encrypt(&pair, message, EncryptionScheme::RsaPkcs1v15)
            .unwrap();
        let plaintext = store
            .decrypt(&pair, &ciphertext, EncryptionScheme::RsaPkcs1v15)
            .unwrap();
        assert_eq!(plaintext, message);
    }

    #[test]
    fn test_sign_verify_through_service() {
        let store = MemoryKeychain::new();
        let pair = store.generate_or_fetch_key_pair("demo", Algorithm::Rsa, 2048).unwrap();
        let digest = sha256(b"service signature");

        let signature = store
            .sign(&pair, &digest, SignatureScheme::RsaPkcs1v15Sha256)
            .unwrap();
        assert!(store
            .verify(
                &pair,
                &digest,
                &signature,
                SignatureScheme::RsaPkcs1v15Sha256
            )
            .unwrap());

        let wrong = sha256(b"another message");
        assert!(!store
            .verify(&pair, &wrong, &signature, SignatureScheme::RsaPkcs1v15Sha256)
            .unwrap());
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let store = MemoryKeychain::new();
        let pair = store.generate_or_fetch_key_pair("demo", Algorithm::Rsa, 2048).unwrap();

        let foreign = KeyPair {
            private: KeyHandle(999),
            ..pair
        };
        let err = store
            .decrypt(&foreign, &[0u8; 256], EncryptionScheme::RsaPkcs1v15)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownHandle(KeyHandle(999))));
    }
}
