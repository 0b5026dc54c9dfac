//! Secret material types and boundary parsing.
//!
//! Keys and nonces have hard length invariants: a wrong-sized buffer is a
//! caller error and is rejected immediately, never padded or truncated.
//!
//! Raw inputs arrive in one of a few transport encodings. The encoding is a
//! tagged variant chosen once by the caller at the boundary, not guessed from
//! the data per field.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::CodecError;

/// Required key length in bytes (256 bits in both circuit families).
pub const KEY_BYTES: usize = 32;

/// Required nonce length in bytes (96 bits in both circuit families).
pub const NONCE_BYTES: usize = 12;

/// A 32-byte cipher key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; KEY_BYTES]);

impl Key {
    /// Wrap exactly 32 bytes of key material.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let key: [u8; KEY_BYTES] = bytes
            .try_into()
            .map_err(|_| CodecError::InvalidKeyLength { actual: bytes.len() })?;
        Ok(Key(key))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

// Keys stay out of debug output.
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(..)")
    }
}

/// A 12-byte public nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_BYTES]);

impl Nonce {
    /// Wrap exactly 12 bytes of nonce material.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let nonce: [u8; NONCE_BYTES] = bytes
            .try_into()
            .map_err(|_| CodecError::InvalidNonceLength { actual: bytes.len() })?;
        Ok(Nonce(nonce))
    }

    /// Raw nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_BYTES] {
        &self.0
    }
}

/// A secret (or payload) input in one of the accepted transport encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretInput {
    /// Even-length, case-insensitive hex string.
    Hex(String),
    /// Raw bytes, already decoded.
    Bytes(Vec<u8>),
    /// Standard-alphabet base64 string.
    Base64(String),
}

impl SecretInput {
    /// Decode to raw bytes. Length checks happen afterwards, at the point
    /// where the bytes become a [`Key`] or [`Nonce`].
    pub fn resolve(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            SecretInput::Hex(s) => {
                hex::decode(s).map_err(|e| CodecError::InvalidSecretEncoding {
                    encoding: "hex",
                    reason: e.to_string(),
                })
            },
            SecretInput::Bytes(b) => Ok(b.clone()),
            SecretInput::Base64(s) => {
                BASE64.decode(s).map_err(|e| CodecError::InvalidSecretEncoding {
                    encoding: "base64",
                    reason: e.to_string(),
                })
            },
        }
    }

    /// Decode and check the 32-byte key invariant.
    pub fn resolve_key(&self) -> Result<Key, CodecError> {
        Key::from_bytes(&self.resolve()?)
    }

    /// Decode and check the 12-byte nonce invariant.
    pub fn resolve_nonce(&self) -> Result<Nonce, CodecError> {
        Nonce::from_bytes(&self.resolve()?)
    }
}
