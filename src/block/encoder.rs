//! Encoder for the block-cipher family layout.

use super::BlockInputs;
use crate::Bit;
use crate::bits::{BYTE_BITS, byte_to_bits_msb_first, word_to_le_bytes};
use crate::error::CodecError;
use crate::padding::{PaddingOutcome, pad_to_capacity};
use crate::profile::BlockProfile;
use crate::secret::{Key, Nonce};

/// Builds [`BlockInputs`] for one registered profile.
#[derive(Debug, Clone, Copy)]
pub struct BlockEncoder {
    profile: &'static BlockProfile,
}

impl BlockEncoder {
    /// Encoder for an already-resolved profile.
    pub fn new(profile: &'static BlockProfile) -> Self {
        Self { profile }
    }

    /// Encoder for a profile looked up by name.
    pub fn for_profile(name: &str) -> Result<Self, CodecError> {
        Ok(Self::new(BlockProfile::lookup(name)?))
    }

    /// The profile this encoder targets.
    pub fn profile(&self) -> &'static BlockProfile {
        self.profile
    }

    /// Encode secrets, counter, and payload into the flat bit layout.
    ///
    /// The counter bytes are ordered little-endian BEFORE the MSB-first bit
    /// expansion; every other field expands its bytes in natural order.
    pub fn encode(
        &self,
        key: &Key,
        nonce: &Nonce,
        counter: u32,
        payload: &[u8],
    ) -> (BlockInputs, PaddingOutcome) {
        let key = bytes_to_bits(key.as_bytes());
        let nonce = bytes_to_bits(nonce.as_bytes());
        let counter = bytes_to_bits(&word_to_le_bytes(counter));

        let (padded, outcome) = pad_to_capacity(payload, self.profile.capacity_bytes);
        let ciphertext = bytes_to_bits(&padded);

        (BlockInputs { key, nonce, counter, ciphertext }, outcome)
    }
}

/// Expand each byte MSB-first and concatenate.
fn bytes_to_bits(bytes: &[u8]) -> Vec<Bit> {
    let mut bits = Vec::with_capacity(bytes.len() * BYTE_BITS);
    for &byte in bytes {
        bits.extend_from_slice(&byte_to_bits_msb_first(byte));
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_secrets() -> (Key, Nonce) {
        (
            Key::from_bytes(&[0u8; 32]).unwrap(),
            Nonce::from_bytes(&[0u8; 12]).unwrap(),
        )
    }

    #[test]
    fn payload_bits_are_msb_first() {
        let (key, nonce) = zero_secrets();
        let encoder = BlockEncoder::for_profile("64B").unwrap();
        let (inputs, _) = encoder.encode(&key, &nonce, 0, b"Hello World!");

        assert_eq!(inputs.ciphertext.len(), 512);
        // 'H' = 72 = 0b01001000
        assert_eq!(&inputs.ciphertext[..8], &[0, 1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn counter_bytes_are_le_before_bit_expansion() {
        let (key, nonce) = zero_secrets();
        let encoder = BlockEncoder::for_profile("64B").unwrap();
        let (inputs, _) = encoder.encode(&key, &nonce, 1, &[]);

        // counter = 1 -> LE bytes [1, 0, 0, 0] -> first byte expands to
        // 0000_0001 MSB-first, so bit 7 is set and bits 8..32 are clear.
        assert_eq!(inputs.counter.len(), 32);
        assert_eq!(&inputs.counter[..8], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert!(inputs.counter[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn shape_matches_profile() {
        let (key, nonce) = zero_secrets();
        for profile in BlockProfile::all() {
            let (inputs, outcome) = BlockEncoder::new(profile).encode(&key, &nonce, 0, b"x");
            inputs.validate(profile).unwrap();
            assert!(!outcome.is_lossy());
            assert_eq!(inputs.ciphertext.len(), profile.capacity_bytes * 8);
            assert_eq!(inputs.key.len(), 256);
            assert_eq!(inputs.nonce.len(), 96);
        }
    }
}
