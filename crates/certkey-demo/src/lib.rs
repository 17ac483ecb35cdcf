//! certkey Demo Screens
//!
//! The two screens of the keychain demo, expressed as view-model
//! objects over an injected [`certkey_keychain::KeychainService`]:
//!
//! - [`CertScreen`] lists the identities a credential store exposes.
//! - [`KeyOpScreen`] owns one RSA key pair and runs the two
//!   button-triggered operations (encrypt/decrypt round trip,
//!   sign/verify) off the interaction task, with an Idle/Busy state
//!   machine guarding re-entrancy.
//!
//! Both render into an append-only [`Transcript`], the stand-in for
//! the scrollable read-only text view.

pub mod cert_screen;
pub mod error;
pub mod key_screen;
pub mod settings;
pub mod transcript;

pub use cert_screen::CertScreen;
pub use error::{DemoError, Result};
pub use key_screen::{DemoOp, KeyOpScreen, OperationResult, ScreenState, Trigger};
pub use settings::Settings;
pub use transcript::Transcript;
