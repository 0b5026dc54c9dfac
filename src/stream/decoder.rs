//! Decoder for the stream-cipher family layout.

use super::StreamInputs;
use crate::Bit;
use crate::bits::{bits_to_word_lsb_first, word_to_le_bytes};
use crate::error::CodecError;
use crate::profile::StreamProfile;
use crate::secret::{Key, Nonce};
use crate::DecodedInputs;

/// Reconstructs bytes from [`StreamInputs`] for one registered profile.
#[derive(Debug, Clone, Copy)]
pub struct StreamDecoder {
    profile: &'static StreamProfile,
}

impl StreamDecoder {
    /// Decoder for an already-resolved profile.
    pub fn new(profile: &'static StreamProfile) -> Self {
        Self { profile }
    }

    /// Decoder for a profile looked up by name.
    pub fn for_profile(name: &str) -> Result<Self, CodecError> {
        Ok(Self::new(StreamProfile::lookup(name)?))
    }

    /// Reverse the encoder exactly.
    ///
    /// Shape is validated up front so a malformed document fails with a
    /// field-level diagnostic before any bytes are assembled. The returned
    /// payload is the padded payload; the original unpadded length is not
    /// recoverable here.
    pub fn decode(&self, inputs: &StreamInputs) -> Result<DecodedInputs, CodecError> {
        inputs.validate(self.profile)?;

        let key_bytes = rows_to_le_bytes(&inputs.key, "key")?;
        let nonce_bytes = rows_to_le_bytes(&inputs.nonce, "nonce")?;
        let counter = bits_to_word_lsb_first(&inputs.counter, "counter")?;

        let mut payload = Vec::with_capacity(self.profile.capacity_bytes());
        for block in &inputs.ciphertext {
            payload.extend(rows_to_le_bytes(block, "ciphertext")?);
        }

        Ok(DecodedInputs {
            key: Key::from_bytes(&key_bytes)?,
            nonce: Nonce::from_bytes(&nonce_bytes)?,
            counter,
            payload,
        })
    }
}

/// Rebuild each 32-bit row LSB-first and emit its little-endian bytes.
fn rows_to_le_bytes(rows: &[Vec<Bit>], field: &'static str) -> Result<Vec<u8>, CodecError> {
    let mut bytes = Vec::with_capacity(rows.len() * crate::bits::WORD_BYTES);
    for row in rows {
        let word = bits_to_word_lsb_first(row, field)?;
        bytes.extend_from_slice(&word_to_le_bytes(word));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::StreamEncoder;

    fn zero_secrets() -> (Key, Nonce) {
        (
            Key::from_bytes(&[0u8; 32]).unwrap(),
            Nonce::from_bytes(&[0u8; 12]).unwrap(),
        )
    }

    #[test]
    fn wrong_block_count_is_rejected() {
        let (key, nonce) = zero_secrets();
        let (inputs, _) = StreamEncoder::for_profile("64B")
            .unwrap()
            .encode(&key, &nonce, 0, b"payload");

        // Decode against a profile expecting 16 blocks.
        let err = StreamDecoder::for_profile("1KB")
            .unwrap()
            .decode(&inputs)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::ShapeMismatch {
                field: "ciphertext",
                expected: 16,
                actual: 1,
            }
        );
    }

    #[test]
    fn corrupt_bit_is_named() {
        let (key, nonce) = zero_secrets();
        let (mut inputs, _) = StreamEncoder::for_profile("64B")
            .unwrap()
            .encode(&key, &nonce, 0, b"payload");
        inputs.nonce[2][5] = 9;

        let err = StreamDecoder::for_profile("64B")
            .unwrap()
            .decode(&inputs)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidBit {
                field: "nonce",
                index: 5,
                value: 9,
            }
        );
    }

    #[test]
    fn truncated_word_is_a_shape_mismatch() {
        let (key, nonce) = zero_secrets();
        let (mut inputs, _) = StreamEncoder::for_profile("64B")
            .unwrap()
            .encode(&key, &nonce, 0, b"payload");
        inputs.key[3].pop();

        let err = StreamDecoder::for_profile("64B")
            .unwrap()
            .decode(&inputs)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::ShapeMismatch {
                field: "key",
                expected: 32,
                actual: 31,
            }
        );
    }
}
