use std::{fmt, sync::Arc};

use certkey_crypto::sha256;
use certkey_keychain::{Algorithm, EncryptionScheme, KeyPair, KeychainService, SignatureScheme};
use tokio::task::JoinHandle;

use crate::{
    error::{DemoError, Result},
    settings::Settings,
    transcript::Transcript,
};

/// The two button-triggered operations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DemoOp {
    EncryptDecrypt,
    SignVerify,
}

impl fmt::Display for DemoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoOp::EncryptDecrypt => write!(f, "encrypt/decrypt"),
            DemoOp::SignVerify => write!(f, "sign/verify"),
        }
    }
}

/// Screen state machine
///
/// `Done(success)`/`Done(error)` are momentary: [`KeyOpScreen::resolve`]
/// renders the outcome and returns to `Idle` in the same step, so only
/// the two durable states appear here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenState {
    Idle,
    Busy,
}

/// Outcome of a trigger attempt
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Started,
    /// The screen was busy; nothing started, nothing will render
    Ignored,
}

/// Transient result of one completed operation
///
/// Rendered into the transcript and handed back to the caller; never
/// persisted.
#[derive(Debug)]
pub struct OperationResult {
    pub op: DemoOp,
    /// Decrypted payload (operation A) or signature (operation B)
    pub outcome: Result<Vec<u8>>,
}

/// Key Operation Demo screen
///
/// Owns exactly one key pair, created at load time; both operations
/// always use it. Crypto work runs on the blocking pool so the busy
/// indicator can animate; state and transcript are only touched from
/// the owning task.
#[derive(Debug)]
pub struct KeyOpScreen<S: KeychainService> {
    service: Arc<S>,
    keypair: KeyPair,
    sample_message: Vec<u8>,
    transcript: Transcript,
    state: ScreenState,
    indicator_visible: bool,
    in_flight: Option<(DemoOp, JoinHandle<Result<Vec<u8>>>)>,
}

impl<S: KeychainService> KeyOpScreen<S> {
    /// Build the screen, generating or fetching its key pair
    ///
    /// A key-generation failure means the screen cannot load; the
    /// caller decides how to surface that.
    pub fn load(service: Arc<S>, settings: &Settings) -> Result<Self> {
        let keypair = service.generate_or_fetch_key_pair(
            &settings.key_tag,
            Algorithm::Rsa,
            settings.key_bits,
        )?;
        tracing::info!(
            "key pair ready: {}-{} id={}",
            keypair.algorithm,
            keypair.bits,
            keypair.key_id_hex()
        );
        Ok(Self {
            service,
            keypair,
            sample_message: settings.sample_message_bytes(),
            transcript: Transcript::new(),
            state: ScreenState::Idle,
            indicator_visible: false,
            in_flight: None,
        })
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn busy_indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    /// Whether the two trigger buttons accept a tap
    pub fn triggers_enabled(&self) -> bool {
        self.state == ScreenState::Idle
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    /// Handle a button tap
    ///
    /// While `Busy` this is a no-op: no second operation starts and no
    /// line is rendered. Otherwise the operation moves to the blocking
    /// pool and the screen enters `Busy`.
    pub fn trigger(&mut self, op: DemoOp) -> Trigger {
        if self.state == ScreenState::Busy {
            tracing::debug!("{op} tap ignored, operation in flight");
            return Trigger::Ignored;
        }

        self.state = ScreenState::Busy;
        self.indicator_visible = true;

        let service = Arc::clone(&self.service);
        let pair = self.keypair.clone();
        let message = self.sample_message.clone();
        let handle = tokio::task::spawn_blocking(move || match op {
            DemoOp::EncryptDecrypt => run_encrypt_decrypt(&*service, &pair, &message),
            DemoOp::SignVerify => run_sign_verify(&*service, &pair, &message),
        });
        self.in_flight = Some((op, handle));
        Trigger::Started
    }

    /// Await the in-flight operation, render its result, return to
    /// `Idle`
    ///
    /// There is no cancellation: the operation always runs to
    /// completion before the screen accepts another tap. Returns
    /// `None` when nothing was in flight.
    pub async fn resolve(&mut self) -> Option<OperationResult> {
        let (op, handle) = self.in_flight.take()?;
        let outcome = match handle.await {
            Ok(result) => result,
            Err(e) => Err(DemoError::TaskJoin(e.to_string())),
        };

        self.render(op, &outcome);
        self.indicator_visible = false;
        self.state = ScreenState::Idle;
        Some(OperationResult { op, outcome })
    }

    /// Trigger and resolve in one step
    pub async fn run(&mut self, op: DemoOp) -> Option<OperationResult> {
        if self.trigger(op) == Trigger::Ignored {
            return None;
        }
        self.resolve().await
    }

    fn render(&mut self, op: DemoOp, outcome: &Result<Vec<u8>>) {
        let line = match (op, outcome) {
            (DemoOp::EncryptDecrypt, Ok(plaintext)) => {
                format!(
                    "encrypt/decrypt succeeded, decrypted: \"{}\"",
                    String::from_utf8_lossy(plaintext)
                )
            }
            (DemoOp::SignVerify, Ok(signature)) => {
                format!(
                    "sign/verify succeeded, signature verified ({} bytes, {}...)",
                    signature.len(),
                    hex::encode(&signature[.. signature.len().min(8)])
                )
            }
            (op, Err(e)) => {
                tracing::warn!("{op} failed: {e}");
                format!("{op} failed: {e}")
            }
        };
        self.transcript.push_line(line);
    }
}

/// Operation A: encrypt the sample with the public key, decrypt with
/// the private key, compare byte-for-byte
fn run_encrypt_decrypt<S: KeychainService>(
    service: &S,
    pair: &KeyPair,
    message: &[u8],
) -> Result<Vec<u8>> {
    let ciphertext = service.encrypt(pair, message, EncryptionScheme::RsaPkcs1v15)?;
    let plaintext = service.decrypt(pair, &ciphertext, EncryptionScheme::RsaPkcs1v15)?;
    if plaintext != message {
        return Err(DemoError::RoundTripMismatch);
    }
    Ok(plaintext)
}

/// Operation B: sign the sample's digest with the private key, verify
/// with the public key
fn run_sign_verify<S: KeychainService>(
    service: &S,
    pair: &KeyPair,
    message: &[u8],
) -> Result<Vec<u8>> {
    let digest = sha256(message);
    let signature = service.sign(pair, &digest, SignatureScheme::RsaPkcs1v15Sha256)?;
    let verified = service.verify(pair, &digest, &signature, SignatureScheme::RsaPkcs1v15Sha256)?;
    if !verified {
        return Err(DemoError::SignatureRejected);
    }
    Ok(signature)
}
