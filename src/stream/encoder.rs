//! Encoder for the stream-cipher family layout.

use super::{BLOCK_BYTES, StreamInputs, WORDS_PER_BLOCK};
use crate::Bit;
use crate::bits::{WORD_BYTES, word_to_bits_lsb_first};
use crate::error::CodecError;
use crate::padding::{PaddingOutcome, pad_to_capacity};
use crate::profile::StreamProfile;
use crate::secret::{Key, Nonce};

/// Builds [`StreamInputs`] for one registered profile.
#[derive(Debug, Clone, Copy)]
pub struct StreamEncoder {
    profile: &'static StreamProfile,
}

impl StreamEncoder {
    /// Encoder for an already-resolved profile.
    pub fn new(profile: &'static StreamProfile) -> Self {
        Self { profile }
    }

    /// Encoder for a profile looked up by name.
    pub fn for_profile(name: &str) -> Result<Self, CodecError> {
        Ok(Self::new(StreamProfile::lookup(name)?))
    }

    /// The profile this encoder targets.
    pub fn profile(&self) -> &'static StreamProfile {
        self.profile
    }

    /// Encode secrets, counter, and payload into the nested bit layout.
    ///
    /// Key and nonce lengths are already guaranteed by their types, so the
    /// only advisory condition left is the padding outcome. The counter is
    /// written once, as given; no per-block increment happens here.
    pub fn encode(
        &self,
        key: &Key,
        nonce: &Nonce,
        counter: u32,
        payload: &[u8],
    ) -> (StreamInputs, PaddingOutcome) {
        let key = le_words_to_bits(key.as_bytes());
        let nonce = le_words_to_bits(nonce.as_bytes());
        let counter = word_to_bits_lsb_first(counter).to_vec();

        let (padded, outcome) = pad_to_capacity(payload, self.profile.capacity_bytes());
        let ciphertext = padded
            .chunks_exact(BLOCK_BYTES)
            .map(le_words_to_bits)
            .collect::<Vec<_>>();
        debug_assert_eq!(ciphertext.len(), self.profile.blocks);
        debug_assert!(ciphertext.iter().all(|b| b.len() == WORDS_PER_BLOCK));

        (StreamInputs { key, nonce, counter, ciphertext }, outcome)
    }
}

/// Split bytes into 4-byte little-endian words, each decomposed LSB-first.
/// Caller guarantees `bytes.len()` is a multiple of 4.
fn le_words_to_bits(bytes: &[u8]) -> Vec<Vec<Bit>> {
    bytes
        .chunks_exact(WORD_BYTES)
        .map(|quad| {
            let word = u32::from_le_bytes(quad.try_into().unwrap());
            word_to_bits_lsb_first(word).to_vec()
        })
        .collect()
}
