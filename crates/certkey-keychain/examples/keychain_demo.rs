//! certkey Keychain Demo
//!
//! Walks the credential store boundary directly: identity listing,
//! idempotent key pair generation, and the four key operations.

use certkey_crypto::sha256;
use certkey_keychain::{
    Algorithm, EncryptionScheme, KeychainService, MemoryKeychain, SignatureScheme,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== certkey Keychain Demo ===\n");

    let store = MemoryKeychain::with_identities([("Alice Example", true), ("Bob Example", false)]);

    println!("1. Identities:");
    for identity in store.list_identities()? {
        println!(
            "   {} (private key: {})",
            store.certificate_display_name(&identity)?,
            if identity.has_private_key { "yes" } else { "no" }
        );
    }

    println!("\n2. Key pair (idempotent per tag):");
    let pair = store.generate_or_fetch_key_pair("demo.keypair", Algorithm::Rsa, 2048)?;
    let again = store.generate_or_fetch_key_pair("demo.keypair", Algorithm::Rsa, 2048)?;
    println!("   id: {}", pair.key_id_hex());
    println!("   fetch returns same pair: {}", pair.private == again.private);

    let message = b"Hello, certkey!";

    println!("\n3. Encrypt / decrypt:");
    let ciphertext = store.encrypt(&pair, message, EncryptionScheme::RsaPkcs1v15)?;
    let plaintext = store.decrypt(&pair, &ciphertext, EncryptionScheme::RsaPkcs1v15)?;
    println!("   round trip ok: {}", plaintext == message);

    println!("\n4. Sign / verify:");
    let digest = sha256(message);
    let signature = store.sign(&pair, &digest, SignatureScheme::RsaPkcs1v15Sha256)?;
    let verified = store.verify(&pair, &digest, &signature, SignatureScheme::RsaPkcs1v15Sha256)?;
    println!("   verified: {verified}");

    Ok(())
}
