//! Block-cipher (counter-mode) family layout.
//!
//! Everything is one flat bitstream: each byte expands to 8 bits MSB-first
//! and the bits are concatenated with no block nesting. The document shape is
//! `key[256]`, `nonce[96]`, `counter[32]`, `ciphertext[capacity_bytes * 8]`.
//!
//! The counter is the one asymmetry: its 4 bytes are laid out little-endian
//! first, and only then does each byte expand MSB-first. The target circuits
//! require exactly this mix; reordering either step produces a structurally
//! valid but wrong document.

pub mod decoder;
pub mod encoder;

mod integration;

use serde::Serialize;

use crate::bits::BYTE_BITS;
use crate::error::CodecError;
use crate::profile::{BlockProfile, Family};
use crate::secret::{KEY_BYTES, NONCE_BYTES};
use crate::{Bit, CipherInputCodec, DecodedInputs, EncodeRequest, Encoded};

pub use decoder::BlockDecoder;
pub use encoder::BlockEncoder;

/// Key bits in the layout.
pub const KEY_BITS: usize = KEY_BYTES * BYTE_BITS;

/// Nonce bits in the layout.
pub const NONCE_BITS: usize = NONCE_BYTES * BYTE_BITS;

/// Counter bits in the layout.
pub const COUNTER_BITS: usize = 32;

/// The flat bit-array layout consumed by block-cipher circuits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInputs {
    /// `[256]` MSB-first key bits.
    pub key: Vec<Bit>,
    /// `[96]` MSB-first nonce bits.
    pub nonce: Vec<Bit>,
    /// `[32]` bits: counter bytes little-endian, each byte MSB-first.
    pub counter: Vec<Bit>,
    /// `[capacity_bytes * 8]` MSB-first payload bits.
    pub ciphertext: Vec<Bit>,
}

impl BlockInputs {
    /// Check every array length against the profile's declared shape.
    pub fn validate(&self, profile: &BlockProfile) -> Result<(), CodecError> {
        check_len("key", self.key.len(), KEY_BITS)?;
        check_len("nonce", self.nonce.len(), NONCE_BITS)?;
        check_len("counter", self.counter.len(), COUNTER_BITS)?;
        check_len(
            "ciphertext",
            self.ciphertext.len(),
            profile.capacity_bytes * BYTE_BITS,
        )?;
        Ok(())
    }
}

fn check_len(field: &'static str, actual: usize, expected: usize) -> Result<(), CodecError> {
    if actual != expected {
        return Err(CodecError::ShapeMismatch { field, expected, actual });
    }
    Ok(())
}

/// Strategy object for the block-cipher family.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCodec;

impl CipherInputCodec for BlockCodec {
    fn family(&self) -> Family {
        Family::Block
    }

    fn encode(&self, request: &EncodeRequest<'_>, profile: &str) -> Result<Encoded, CodecError> {
        let encoder = BlockEncoder::for_profile(profile)?;
        let (inputs, padding) = encoder.encode(
            request.key,
            request.nonce,
            request.counter,
            request.payload,
        );
        Ok(Encoded {
            document: crate::document::CircuitInputDocument::Block(inputs),
            padding,
            unpadded_len: request.payload.len(),
        })
    }

    fn decode(
        &self,
        document: &crate::document::CircuitInputDocument,
        profile: &str,
    ) -> Result<DecodedInputs, CodecError> {
        let decoder = BlockDecoder::for_profile(profile)?;
        match document {
            crate::document::CircuitInputDocument::Block(inputs) => decoder.decode(inputs),
            crate::document::CircuitInputDocument::Stream(_) => Err(CodecError::MalformedDocument(
                "expected a block-family document, got a stream-family one".to_string(),
            )),
        }
    }
}
