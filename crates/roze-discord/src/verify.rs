//! Ed25519 verification of interaction callbacks
//!
//! Discord signs `timestamp || body` with the application's key and
//! sends the signature and timestamp as headers. Requests that fail
//! verification must be rejected before any payload parsing.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;

/// Signature verification errors
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("malformed signature header")]
    MalformedSignature,

    #[error("signature verification failed")]
    VerificationFailed,
}

/// Verifies interaction signatures against the application public key.
///
/// The key is parsed once at startup; a bad key is a configuration
/// error, not a per-request condition.
#[derive(Debug, Clone)]
pub struct InteractionVerifier {
    key: VerifyingKey,
}

impl InteractionVerifier {
    /// Build a verifier from the hex-encoded public key shown in the
    /// Discord application settings.
    pub fn from_hex(public_key: &str) -> Result<Self, SignatureError> {
        let bytes: [u8; 32] = hex::decode(public_key)
            .map_err(|_| SignatureError::InvalidPublicKey)?
            .try_into()
            .map_err(|_| SignatureError::InvalidPublicKey)?;

        let key =
            VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidPublicKey)?;
        Ok(Self { key })
    }

    /// Verify one request: `signature` is the hex `X-Signature-Ed25519`
    /// header, `timestamp` the `X-Signature-Timestamp` header, `body`
    /// the raw request bytes.
    pub fn verify(
        &self,
        signature: &str,
        timestamp: &str,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let bytes: [u8; 64] = hex::decode(signature)
            .map_err(|_| SignatureError::MalformedSignature)?
            .try_into()
            .map_err(|_| SignatureError::MalformedSignature)?;
        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|_| SignatureError::VerificationFailed)
    }
}
