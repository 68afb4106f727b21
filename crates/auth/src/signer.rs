//! HMAC-SHA256 payload signing.
//!
//! The payload is base64-encoded first and the MAC is computed over the
//! ASCII bytes of that encoding. The verifier on the remote side repeats
//! the same steps over the payload it receives.

use crate::error::AuthError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signing capability used by the request dispatcher.
///
/// Implementations must be deterministic: the same key and payload always
/// produce the same signature.
pub trait PayloadSigner: Send + Sync {
    /// Sign `payload` with `secret_key`, returning the signature string.
    fn sign(&self, secret_key: &str, payload: &str) -> Result<String, AuthError>;
}

/// Default signer: `hex(HMAC-SHA256(key, base64(payload)))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSigner;

impl HmacSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }
}

impl PayloadSigner for HmacSigner {
    fn sign(&self, secret_key: &str, payload: &str) -> Result<String, AuthError> {
        sign_payload(secret_key, payload)
    }
}

/// Sign a payload and return the lowercase hex-encoded signature.
///
/// The result is always 64 characters long.
pub fn sign_payload(secret_key: &str, payload: &str) -> Result<String, AuthError> {
    let encoded = STANDARD.encode(payload.as_bytes());

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| AuthError::Signing(e.to_string()))?;

    mac.update(encoded.as_bytes());
    let result = mac.finalize();
    Ok(hex::encode(result.into_bytes()))
}
