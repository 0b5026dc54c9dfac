//! Error taxonomy for the input codec.
//!
//! Fatal conditions abort the encode/decode call; no partial document is ever
//! produced. Padding advisories are not errors and live in [`crate::padding`].

use crate::profile::Family;

/// Errors raised by the codec and the document reader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Key material was not exactly 32 bytes.
    #[error("key must be exactly 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key material.
        actual: usize,
    },

    /// Nonce was not exactly 12 bytes.
    #[error("nonce must be exactly 12 bytes, got {actual}")]
    InvalidNonceLength {
        /// Length of the rejected nonce.
        actual: usize,
    },

    /// An array in a document (or a slice handed to a bit primitive) does not
    /// have the length the family/profile declares for that field.
    #[error("field `{field}`: expected length {expected}, got {actual}")]
    ShapeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Length the layout declares.
        expected: usize,
        /// Length actually present.
        actual: usize,
    },

    /// A document element that must be a 0/1 bit held some other value.
    #[error("field `{field}`: element {index} is {value}, expected bit 0 or 1")]
    InvalidBit {
        /// Name of the offending field.
        field: &'static str,
        /// Index of the offending element within the word, byte, or field
        /// being decoded.
        index: usize,
        /// The value found.
        value: u64,
    },

    /// The requested size profile is not registered for the family.
    #[error("unknown profile `{name}` for the {family} family")]
    UnknownProfile {
        /// Family the lookup was performed against.
        family: Family,
        /// The profile name that was requested.
        name: String,
    },

    /// A hex or base64 secret string failed to decode.
    #[error("invalid {encoding} secret input: {reason}")]
    InvalidSecretEncoding {
        /// Which encoding was being parsed ("hex" or "base64").
        encoding: &'static str,
        /// Decoder failure detail.
        reason: String,
    },

    /// The document is not structurally a JSON object of bit arrays.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}
