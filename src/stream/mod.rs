//! Stream-cipher family layout.
//!
//! Words are 32-bit little-endian, decomposed LSB-first; the payload is
//! grouped into 64-byte blocks of 16 words. The document shape is
//! `key[8][32]`, `nonce[3][32]`, `counter[32]`,
//! `ciphertext[blocks][16][32]`, every element a single 0/1 bit.
//!
//! The counter is one base value for the whole document. The target circuits
//! do not fold the block index into it, so this layer performs no per-block
//! increment either; callers that want conventional counter-mode numbering
//! must increment and encode per block themselves.

pub mod decoder;
pub mod encoder;

mod integration;

use serde::Serialize;

use crate::error::CodecError;
use crate::profile::{Family, StreamProfile};
use crate::{Bit, CipherInputCodec, DecodedInputs, EncodeRequest, Encoded};

pub use decoder::StreamDecoder;
pub use encoder::StreamEncoder;

/// Bytes per ciphertext block.
pub const BLOCK_BYTES: usize = 64;

/// 32-bit words per ciphertext block.
pub const WORDS_PER_BLOCK: usize = 16;

/// Key words in the layout (8 × 32 = 256 bits).
pub const KEY_WORDS: usize = 8;

/// Nonce words in the layout (3 × 32 = 96 bits).
pub const NONCE_WORDS: usize = 3;

/// The bit-array layout consumed by stream-cipher circuits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamInputs {
    /// `[8][32]` LSB-first word bits.
    pub key: Vec<Vec<Bit>>,
    /// `[3][32]` LSB-first word bits.
    pub nonce: Vec<Vec<Bit>>,
    /// `[32]` LSB-first bits of the base block counter.
    pub counter: Vec<Bit>,
    /// `[blocks][16][32]` LSB-first word bits of the padded payload.
    pub ciphertext: Vec<Vec<Vec<Bit>>>,
}

impl StreamInputs {
    /// Check every array dimension against the profile's declared shape.
    pub fn validate(&self, profile: &StreamProfile) -> Result<(), CodecError> {
        check_rows("key", &self.key, KEY_WORDS)?;
        check_rows("nonce", &self.nonce, NONCE_WORDS)?;
        check_len("counter", self.counter.len(), crate::bits::WORD_BITS)?;

        check_len("ciphertext", self.ciphertext.len(), profile.blocks)?;
        for block in &self.ciphertext {
            check_rows("ciphertext", block, WORDS_PER_BLOCK)?;
        }
        Ok(())
    }
}

fn check_len(field: &'static str, actual: usize, expected: usize) -> Result<(), CodecError> {
    if actual != expected {
        return Err(CodecError::ShapeMismatch { field, expected, actual });
    }
    Ok(())
}

fn check_rows(field: &'static str, rows: &[Vec<Bit>], expected: usize) -> Result<(), CodecError> {
    check_len(field, rows.len(), expected)?;
    for row in rows {
        check_len(field, row.len(), crate::bits::WORD_BITS)?;
    }
    Ok(())
}

/// Strategy object for the stream-cipher family.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamCodec;

impl CipherInputCodec for StreamCodec {
    fn family(&self) -> Family {
        Family::Stream
    }

    fn encode(&self, request: &EncodeRequest<'_>, profile: &str) -> Result<Encoded, CodecError> {
        let encoder = StreamEncoder::for_profile(profile)?;
        let (inputs, padding) = encoder.encode(
            request.key,
            request.nonce,
            request.counter,
            request.payload,
        );
        Ok(Encoded {
            document: crate::document::CircuitInputDocument::Stream(inputs),
            padding,
            unpadded_len: request.payload.len(),
        })
    }

    fn decode(
        &self,
        document: &crate::document::CircuitInputDocument,
        profile: &str,
    ) -> Result<DecodedInputs, CodecError> {
        let decoder = StreamDecoder::for_profile(profile)?;
        match document {
            crate::document::CircuitInputDocument::Stream(inputs) => decoder.decode(inputs),
            crate::document::CircuitInputDocument::Block(_) => Err(CodecError::MalformedDocument(
                "expected a stream-family document, got a block-family one".to_string(),
            )),
        }
    }
}
