//! Decoder for the block-cipher family layout.

use super::BlockInputs;
use crate::Bit;
use crate::bits::{BYTE_BITS, bits_to_byte_msb_first, word_from_le_bytes};
use crate::error::CodecError;
use crate::profile::BlockProfile;
use crate::secret::{Key, Nonce};
use crate::DecodedInputs;

/// Reconstructs bytes from [`BlockInputs`] for one registered profile.
#[derive(Debug, Clone, Copy)]
pub struct BlockDecoder {
    profile: &'static BlockProfile,
}

impl BlockDecoder {
    /// Decoder for an already-resolved profile.
    pub fn new(profile: &'static BlockProfile) -> Self {
        Self { profile }
    }

    /// Decoder for a profile looked up by name.
    pub fn for_profile(name: &str) -> Result<Self, CodecError> {
        Ok(Self::new(BlockProfile::lookup(name)?))
    }

    /// Reverse the encoder exactly.
    ///
    /// Shape is validated first; the counter bytes come back little-endian,
    /// mirroring the encoder's intentional ordering asymmetry.
    pub fn decode(&self, inputs: &BlockInputs) -> Result<DecodedInputs, CodecError> {
        inputs.validate(self.profile)?;

        let key_bytes = bits_to_bytes(&inputs.key, "key")?;
        let nonce_bytes = bits_to_bytes(&inputs.nonce, "nonce")?;
        let counter_bytes = bits_to_bytes(&inputs.counter, "counter")?;
        let counter = word_from_le_bytes(&counter_bytes, "counter")?;
        let payload = bits_to_bytes(&inputs.ciphertext, "ciphertext")?;

        Ok(DecodedInputs {
            key: Key::from_bytes(&key_bytes)?,
            nonce: Nonce::from_bytes(&nonce_bytes)?,
            counter,
            payload,
        })
    }
}

/// Collapse a flat MSB-first bitstream back into bytes.
/// Length is already a multiple of 8 after shape validation.
fn bits_to_bytes(bits: &[Bit], field: &'static str) -> Result<Vec<u8>, CodecError> {
    let mut bytes = Vec::with_capacity(bits.len() / BYTE_BITS);
    for chunk in bits.chunks_exact(BYTE_BITS) {
        bytes.push(bits_to_byte_msb_first(chunk, field)?);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockEncoder;

    fn zero_secrets() -> (Key, Nonce) {
        (
            Key::from_bytes(&[0u8; 32]).unwrap(),
            Nonce::from_bytes(&[0u8; 12]).unwrap(),
        )
    }

    #[test]
    fn wrong_ciphertext_length_is_rejected() {
        let (key, nonce) = zero_secrets();
        let (inputs, _) = BlockEncoder::for_profile("64B")
            .unwrap()
            .encode(&key, &nonce, 0, b"payload");

        let err = BlockDecoder::for_profile("1KB")
            .unwrap()
            .decode(&inputs)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::ShapeMismatch {
                field: "ciphertext",
                expected: 8192,
                actual: 512,
            }
        );
    }

    #[test]
    fn corrupt_bit_is_named() {
        let (key, nonce) = zero_secrets();
        let (mut inputs, _) = BlockEncoder::for_profile("64B")
            .unwrap()
            .encode(&key, &nonce, 0, b"payload");
        inputs.key[13] = 2;

        let err = BlockDecoder::for_profile("64B")
            .unwrap()
            .decode(&inputs)
            .unwrap_err();
        // Index is within the byte being assembled.
        assert_eq!(
            err,
            CodecError::InvalidBit {
                field: "key",
                index: 5,
                value: 2,
            }
        );
    }
}
