use serde::{Deserialize, Serialize};

/// Opaque token that can re-fetch an identity from its store later
///
/// The byte content is store-private; holders only compare and pass
/// it back.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PersistentRef(Vec<u8>);

impl PersistentRef {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex rendering for logs
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// A certificate plus (optionally) its private key, as surfaced by a
/// credential store
///
/// Transient: a listing pass hands these out and the holder drops
/// them with the screen. Only the [`PersistentRef`] outlives a pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Identity {
    /// Display name derived from the certificate (subject CN)
    pub label: String,
    /// Store-owned token to re-fetch this identity
    pub persistent_ref: PersistentRef,
    /// Whether the store also holds the matching private key
    pub has_private_key: bool,
}

impl Identity {
    pub fn new(label: impl Into<String>, persistent_ref: PersistentRef, has_private_key: bool) -> Self {
        Self {
            label: label.into(),
            persistent_ref,
            has_private_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistent_ref_is_opaque_but_comparable() {
        let a = PersistentRef::new(vec![1, 2, 3]);
        let b = PersistentRef::new(vec![1, 2, 3]);
        let c = PersistentRef::new(vec![9]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_hex(), "010203");
    }

    #[test]
    fn test_identity_new() {
        let id = Identity::new("Alice", PersistentRef::new(vec![0]), true);
        assert_eq!(id.label, "Alice");
        assert!(id.has_private_key);
    }
}
