//! CIN - Circuit input codec for symmetric-cipher decryption circuits.
//!
//! Two zero-knowledge circuit families consume a key, a nonce, a block
//! counter, and a ciphertext payload, but with incompatible bit layouts:
//! the stream-cipher family wants 32-bit little-endian words decomposed
//! LSB-first and nested into 64-byte blocks, the block-cipher (counter-mode)
//! family wants one flat MSB-first-per-byte bitstream. This crate converts
//! raw bytes into either layout and back, with exact shape validation; it
//! never evaluates a cipher.

pub mod bits;
pub mod block;
pub mod document;
pub mod error;
pub mod padding;
pub mod profile;
pub mod secret;
pub mod stream;

pub use block::BlockCodec;
pub use document::CircuitInputDocument;
pub use error::CodecError;
pub use padding::PaddingOutcome;
pub use profile::{BlockProfile, Family, StreamProfile};
pub use secret::{Key, Nonce, SecretInput};
pub use stream::StreamCodec;

/// A single bit as stored in a document: an integer that is 0 or 1.
pub type Bit = u8;

/// Everything an encode call needs besides the profile.
///
/// Payload bytes are borrowed; the codec keeps no copy beyond the call.
#[derive(Debug, Clone, Copy)]
pub struct EncodeRequest<'a> {
    /// 32-byte cipher key.
    pub key: &'a Key,
    /// 12-byte nonce.
    pub nonce: &'a Nonce,
    /// Base block counter, encoded as given (no per-block increment).
    pub counter: u32,
    /// Plaintext or ciphertext payload, padded/truncated to the profile.
    pub payload: &'a [u8],
}

/// A successful encode: the document plus its advisories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The shaped document, ready to serialize.
    pub document: CircuitInputDocument,
    /// What padding did to the payload. Never silently swallowed; callers
    /// decide whether `Truncated` is acceptable.
    pub padding: PaddingOutcome,
    /// Payload length before padding. The document does not embed this, so
    /// callers needing exact recovery must carry it out-of-band.
    pub unpadded_len: usize,
}

/// The byte-level values recovered from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInputs {
    /// Recovered 32-byte key.
    pub key: Key,
    /// Recovered 12-byte nonce.
    pub nonce: Nonce,
    /// Recovered base counter.
    pub counter: u32,
    /// Recovered payload, still padded to the profile capacity.
    pub payload: Vec<u8>,
}

/// The codec capability both families implement.
///
/// Selection is always by explicit [`Family`] tag; nothing here guesses the
/// family from data shape.
pub trait CipherInputCodec {
    /// The family this codec implements.
    fn family(&self) -> Family;

    /// Encode a request against a profile looked up in this family's
    /// registry.
    fn encode(&self, request: &EncodeRequest<'_>, profile: &str) -> Result<Encoded, CodecError>;

    /// Decode a document back to bytes, validating its shape against the
    /// profile first.
    fn decode(
        &self,
        document: &CircuitInputDocument,
        profile: &str,
    ) -> Result<DecodedInputs, CodecError>;
}

impl Family {
    /// The strategy object for this family.
    pub fn codec(self) -> &'static dyn CipherInputCodec {
        match self {
            Family::Stream => &StreamCodec,
            Family::Block => &BlockCodec,
        }
    }
}
