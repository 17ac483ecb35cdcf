use serde::{Deserialize, Serialize};

use crate::types::{Algorithm, KeyHandle};

/// An asymmetric key pair as handed out by a keychain store
///
/// The private key never leaves the store; `private` is the handle to
/// it. The public half travels as SPKI DER so encryption and
/// verification need no store round-trip.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyPair {
    pub algorithm: Algorithm,
    /// Modulus size in bits
    pub bits: usize,
    /// Tag the pair was generated or fetched under
    pub tag: String,
    /// Handle to the store-owned private key
    pub private: KeyHandle,
    /// Public key, SPKI DER encoded
    pub public_spki_der: Vec<u8>,
}

impl KeyPair {
    /// Hex key ID: first 16 bytes of the SPKI SHA-256 fingerprint
    pub fn key_id_hex(&self) -> String {
        let fingerprint = certkey_crypto::sha256(&self.public_spki_der);
        hex::encode(&fingerprint[.. 16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_id_is_stable() {
        let pair = KeyPair {
            algorithm: Algorithm::Rsa,
            bits: 2048,
            tag: "test".to_string(),
            private: KeyHandle(1),
            public_spki_der: vec![0x30, 0x03, 0x02, 0x01, 0x01],
        };
        assert_eq!(pair.key_id_hex(), pair.key_id_hex());
        assert_eq!(pair.key_id_hex().len(), 32);
    }
}
