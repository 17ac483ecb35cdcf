use std::sync::Arc;

use certkey_keychain::{KeychainService, PersistentRef};

use crate::transcript::Transcript;

/// Credential Lister screen
///
/// On load it enumerates the identities the injected store exposes
/// and renders one line per identity into the transcript, preserving
/// store order. Persistent references are retained for the screen's
/// lifetime and dropped with it, like the original demo's keychain
/// reference array.
pub struct CertScreen<S: KeychainService> {
    service: Arc<S>,
    transcript: Transcript,
    references: Vec<PersistentRef>,
}

impl<S: KeychainService> CertScreen<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            transcript: Transcript::new(),
            references: Vec::new(),
        }
    }

    /// Populate the transcript from the store
    ///
    /// A failed query and an empty store each render a single line;
    /// neither is fatal to the screen, and there is no retry.
    pub fn load(&mut self) {
        let identities = match self.service.list_identities() {
            Ok(identities) => identities,
            Err(e) => {
                tracing::warn!("identity listing failed: {e}");
                self.transcript
                    .push_line(format!("Failed to query identities: {e}"));
                return;
            }
        };

        if identities.is_empty() {
            self.transcript
                .push_line("No identities found in the keychain.");
            return;
        }

        tracing::info!("listing {} identities", identities.len());
        for identity in identities {
            let name = self
                .service
                .certificate_display_name(&identity)
                .unwrap_or_else(|_| "<unnamed certificate>".to_string());
            let key_presence = if identity.has_private_key { "yes" } else { "no" };
            self.transcript
                .push_line(format!("{name} (private key: {key_presence})"));
            self.references.push(identity.persistent_ref);
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// References retained from the last listing pass
    pub fn references(&self) -> &[PersistentRef] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use certkey_keychain::{
        Algorithm, EncryptionScheme, Error, Identity, KeyPair, MemoryKeychain, Result,
        SignatureScheme,
    };

    use super::*;

    #[test]
    fn test_lists_identities_in_store_order() {
        let store = Arc::new(MemoryKeychain::with_identities([
            ("Alice", true),
            ("Bob", false),
        ]));
        let mut screen = CertScreen::new(store);
        screen.load();

        let lines = screen.transcript().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Alice (private key: yes)");
        assert_eq!(lines[1], "Bob (private key: no)");
        assert_eq!(screen.references().len(), 2);
    }

    #[test]
    fn test_empty_store_renders_single_line() {
        let mut screen = CertScreen::new(Arc::new(MemoryKeychain::new()));
        screen.load();

        assert_eq!(screen.transcript().lines().len(), 1);
        assert_eq!(
            screen.transcript().lines()[0],
            "No identities found in the keychain."
        );
        assert!(screen.references().is_empty());
    }

    #[test]
    fn test_retained_references_refetch_identities() {
        let store = Arc::new(MemoryKeychain::with_identities([("Alice", true)]));
        let mut screen = CertScreen::new(Arc::clone(&store));
        screen.load();

        let refetched = store.find_identity(&screen.references()[0]).unwrap();
        assert_eq!(refetched.label, "Alice");
    }

    /// Store whose listing always fails
    struct DeniedStore;

    impl KeychainService for DeniedStore {
        fn list_identities(&self) -> Result<Vec<Identity>> {
            Err(Error::StoreQuery("access denied".to_string()))
        }

        fn certificate_display_name(&self, identity: &Identity) -> Result<String> {
            Ok(identity.label.clone())
        }

        fn find_identity(&self, _reference: &PersistentRef) -> Result<Identity> {
            Err(Error::IdentityNotFound)
        }

        fn generate_or_fetch_key_pair(
            &self,
            _tag: &str,
            _algorithm: Algorithm,
            _bits: usize,
        ) -> Result<KeyPair> {
            Err(Error::KeyGeneration("unavailable".to_string()))
        }

        fn encrypt(&self, _: &KeyPair, _: &[u8], _: EncryptionScheme) -> Result<Vec<u8>> {
            unreachable!("not exercised")
        }

        fn decrypt(&self, _: &KeyPair, _: &[u8], _: EncryptionScheme) -> Result<Vec<u8>> {
            unreachable!("not exercised")
        }

        fn sign(&self, _: &KeyPair, _: &[u8], _: SignatureScheme) -> Result<Vec<u8>> {
            unreachable!("not exercised")
        }

        fn verify(&self, _: &KeyPair, _: &[u8], _: &[u8], _: SignatureScheme) -> Result<bool> {
            unreachable!("not exercised")
        }
    }

    #[test]
    fn test_query_failure_renders_single_error_line() {
        let mut screen = CertScreen::new(Arc::new(DeniedStore));
        screen.load();

        let lines = screen.transcript().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Failed to query identities:"));
        assert!(lines[0].contains("access denied"));
    }
}
