//! certkey demo driver
//!
//! Seeds an in-memory keychain, walks the Credential Lister screen,
//! then runs both key operations on the Key Operation Demo screen and
//! prints the transcripts the text views would show.

use std::sync::Arc;

use certkey_demo::{CertScreen, DemoOp, KeyOpScreen, Settings};
use certkey_keychain::MemoryKeychain;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::load_or_default("config/demo.toml");
    let keychain = Arc::new(MemoryKeychain::with_identities([
        ("Alice Example", true),
        ("Bob Example", false),
    ]));

    println!("=== certkey: Credential Lister ===");
    let mut cert_screen = CertScreen::new(Arc::clone(&keychain));
    cert_screen.load();
    println!("{}", cert_screen.transcript().text());

    println!("\n=== certkey: Key Operation Demo ===");
    let mut key_screen = match KeyOpScreen::load(keychain, &settings) {
        Ok(screen) => screen,
        Err(e) => {
            eprintln!("key demo screen failed to load: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "key pair ready: {}-{} id={}",
        key_screen.keypair().algorithm,
        key_screen.keypair().bits,
        key_screen.keypair().key_id_hex()
    );

    key_screen.run(DemoOp::EncryptDecrypt).await;
    key_screen.run(DemoOp::SignVerify).await;
    println!("{}", key_screen.transcript().text());
}
