//! Bit-level packing primitives.
//!
//! Two fixed conventions coexist and must never be mixed up:
//!
//! - the stream-cipher family decomposes 32-bit little-endian words into bits
//!   LSB-first (`bit[i] = (word >> i) & 1`);
//! - the block-cipher family decomposes individual bytes into bits MSB-first
//!   (`bit[0]` is the high bit).
//!
//! Every conversion has an exact inverse; the decode direction rejects slices
//! of the wrong length and elements that are not 0/1.

use crate::Bit;
use crate::error::CodecError;

/// Bits in one 32-bit word.
pub const WORD_BITS: usize = 32;

/// Bytes in one 32-bit word.
pub const WORD_BYTES: usize = 4;

/// Bits in one byte.
pub const BYTE_BITS: usize = 8;

/// Decompose a word into 32 bits, least significant first.
#[inline]
pub fn word_to_bits_lsb_first(value: u32) -> [Bit; WORD_BITS] {
    let mut bits = [0u8; WORD_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = ((value >> i) & 1) as Bit;
    }
    bits
}

/// Reassemble a word from 32 LSB-first bits.
///
/// `field` names the document field being decoded and is carried into the
/// error so callers get a precise diagnostic instead of a downstream failure.
#[inline]
pub fn bits_to_word_lsb_first(bits: &[Bit], field: &'static str) -> Result<u32, CodecError> {
    if bits.len() != WORD_BITS {
        return Err(CodecError::ShapeMismatch {
            field,
            expected: WORD_BITS,
            actual: bits.len(),
        });
    }
    let mut value = 0u32;
    for (i, &bit) in bits.iter().enumerate() {
        value |= u32::from(bit_value(bit, field, i)?) << i;
    }
    Ok(value)
}

/// Assemble a word from 4 little-endian bytes.
#[inline]
pub fn word_from_le_bytes(bytes: &[u8], field: &'static str) -> Result<u32, CodecError> {
    let quad: [u8; WORD_BYTES] = bytes.try_into().map_err(|_| CodecError::ShapeMismatch {
        field,
        expected: WORD_BYTES,
        actual: bytes.len(),
    })?;
    Ok(u32::from_le_bytes(quad))
}

/// Split a word into 4 little-endian bytes.
#[inline]
pub fn word_to_le_bytes(value: u32) -> [u8; WORD_BYTES] {
    value.to_le_bytes()
}

/// Decompose a byte into 8 bits, most significant first.
#[inline]
pub fn byte_to_bits_msb_first(byte: u8) -> [Bit; BYTE_BITS] {
    let mut bits = [0u8; BYTE_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (BYTE_BITS - 1 - i)) & 1;
    }
    bits
}

/// Reassemble a byte from 8 MSB-first bits.
#[inline]
pub fn bits_to_byte_msb_first(bits: &[Bit], field: &'static str) -> Result<u8, CodecError> {
    if bits.len() != BYTE_BITS {
        return Err(CodecError::ShapeMismatch {
            field,
            expected: BYTE_BITS,
            actual: bits.len(),
        });
    }
    let mut value = 0u8;
    for (i, &bit) in bits.iter().enumerate() {
        value |= bit_value(bit, field, i)? << (BYTE_BITS - 1 - i);
    }
    Ok(value)
}

#[inline]
fn bit_value(bit: Bit, field: &'static str, index: usize) -> Result<u8, CodecError> {
    if bit > 1 {
        return Err(CodecError::InvalidBit {
            field,
            index,
            value: u64::from(bit),
        });
    }
    Ok(bit)
}
