//! The serialized circuit input document.
//!
//! This is the file-level structure the external circuit evaluator consumes:
//! a JSON object with `key`, `nonce`, `counter`, and `ciphertext` fields whose
//! elements are integers 0/1. The nesting depth and every array length are
//! fixed by (family, profile).
//!
//! Reading always takes an explicit family tag and profile name. The format
//! is never inferred from the data's shape; each field is checked against the
//! declared dimensions before the family decoder sees any of it, so a
//! document from the wrong family fails with a field-level [`ShapeMismatch`]
//! instead of misparsing silently.
//!
//! [`ShapeMismatch`]: CodecError::ShapeMismatch

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::Bit;
use crate::bits::WORD_BITS;
use crate::block::{BlockInputs, COUNTER_BITS, KEY_BITS, NONCE_BITS};
use crate::error::CodecError;
use crate::profile::{BlockProfile, Family, StreamProfile};
use crate::stream::{KEY_WORDS, NONCE_WORDS, StreamInputs, WORDS_PER_BLOCK};

/// Field names every document carries, and the only ones allowed.
const FIELDS: [&str; 4] = ["key", "nonce", "counter", "ciphertext"];

/// A fully shaped input document for one of the two circuit families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CircuitInputDocument {
    /// Word/block-nested stream-cipher layout.
    Stream(StreamInputs),
    /// Flat block-cipher layout.
    Block(BlockInputs),
}

impl CircuitInputDocument {
    /// Which family this document is shaped for.
    pub fn family(&self) -> Family {
        match self {
            CircuitInputDocument::Stream(_) => Family::Stream,
            CircuitInputDocument::Block(_) => Family::Block,
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to a writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(writer, self)
    }

    /// Shape-validate a parsed JSON value against (family, profile) and build
    /// the typed document.
    pub fn read(value: &Value, family: Family, profile: &str) -> Result<Self, CodecError> {
        let map = object(value)?;
        for key in map.keys() {
            if !FIELDS.contains(&key.as_str()) {
                return Err(CodecError::MalformedDocument(format!(
                    "unexpected field `{key}`"
                )));
            }
        }

        match family {
            Family::Stream => {
                let profile = StreamProfile::lookup(profile)?;
                Ok(CircuitInputDocument::Stream(read_stream(map, profile)?))
            },
            Family::Block => {
                let profile = BlockProfile::lookup(profile)?;
                Ok(CircuitInputDocument::Block(read_block(map, profile)?))
            },
        }
    }

    /// Parse JSON text and shape-validate it.
    pub fn from_json(text: &str, family: Family, profile: &str) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CodecError::MalformedDocument(e.to_string()))?;
        Self::read(&value, family, profile)
    }

    /// Read JSON from a reader and shape-validate it.
    pub fn from_reader<R: Read>(
        reader: R,
        family: Family,
        profile: &str,
    ) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| CodecError::MalformedDocument(e.to_string()))?;
        Self::read(&value, family, profile)
    }
}

fn read_stream(map: &Map<String, Value>, profile: &StreamProfile) -> Result<StreamInputs, CodecError> {
    Ok(StreamInputs {
        key: bit_matrix(field(map, "key")?, "key", KEY_WORDS, WORD_BITS)?,
        nonce: bit_matrix(field(map, "nonce")?, "nonce", NONCE_WORDS, WORD_BITS)?,
        counter: bit_array(field(map, "counter")?, "counter", WORD_BITS)?,
        ciphertext: bit_tensor(
            field(map, "ciphertext")?,
            "ciphertext",
            profile.blocks,
            WORDS_PER_BLOCK,
            WORD_BITS,
        )?,
    })
}

fn read_block(map: &Map<String, Value>, profile: &BlockProfile) -> Result<BlockInputs, CodecError> {
    Ok(BlockInputs {
        key: bit_array(field(map, "key")?, "key", KEY_BITS)?,
        nonce: bit_array(field(map, "nonce")?, "nonce", NONCE_BITS)?,
        counter: bit_array(field(map, "counter")?, "counter", COUNTER_BITS)?,
        ciphertext: bit_array(
            field(map, "ciphertext")?,
            "ciphertext",
            profile.capacity_bytes * crate::bits::BYTE_BITS,
        )?,
    })
}

fn object(value: &Value) -> Result<&Map<String, Value>, CodecError> {
    value.as_object().ok_or_else(|| {
        CodecError::MalformedDocument("top level must be a JSON object".to_string())
    })
}

fn field<'v>(map: &'v Map<String, Value>, name: &'static str) -> Result<&'v Value, CodecError> {
    map.get(name)
        .ok_or_else(|| CodecError::MalformedDocument(format!("missing field `{name}`")))
}

fn array<'v>(value: &'v Value, field: &'static str) -> Result<&'v Vec<Value>, CodecError> {
    value.as_array().ok_or_else(|| {
        CodecError::MalformedDocument(format!("field `{field}` must be an array"))
    })
}

/// One 0/1 element. `index` is the element's flat position within the field.
fn bit(value: &Value, field: &'static str, index: usize) -> Result<Bit, CodecError> {
    let n = value.as_u64().ok_or_else(|| {
        CodecError::MalformedDocument(format!(
            "field `{field}` element {index} is not an unsigned integer"
        ))
    })?;
    if n > 1 {
        return Err(CodecError::InvalidBit { field, index, value: n });
    }
    Ok(n as Bit)
}

fn bit_array(value: &Value, field: &'static str, expected: usize) -> Result<Vec<Bit>, CodecError> {
    let arr = array(value, field)?;
    if arr.len() != expected {
        return Err(CodecError::ShapeMismatch { field, expected, actual: arr.len() });
    }
    arr.iter()
        .enumerate()
        .map(|(i, v)| bit(v, field, i))
        .collect()
}

fn bit_matrix(
    value: &Value,
    field: &'static str,
    rows: usize,
    cols: usize,
) -> Result<Vec<Vec<Bit>>, CodecError> {
    let arr = array(value, field)?;
    if arr.len() != rows {
        return Err(CodecError::ShapeMismatch { field, expected: rows, actual: arr.len() });
    }
    let mut out = Vec::with_capacity(rows);
    for (r, row) in arr.iter().enumerate() {
        let row = array(row, field)?;
        if row.len() != cols {
            return Err(CodecError::ShapeMismatch { field, expected: cols, actual: row.len() });
        }
        let mut bits = Vec::with_capacity(cols);
        for (c, v) in row.iter().enumerate() {
            bits.push(bit(v, field, r * cols + c)?);
        }
        out.push(bits);
    }
    Ok(out)
}

fn bit_tensor(
    value: &Value,
    field: &'static str,
    blocks: usize,
    rows: usize,
    cols: usize,
) -> Result<Vec<Vec<Vec<Bit>>>, CodecError> {
    let arr = array(value, field)?;
    if arr.len() != blocks {
        return Err(CodecError::ShapeMismatch { field, expected: blocks, actual: arr.len() });
    }
    arr.iter()
        .map(|block| bit_matrix(block, field, rows, cols))
        .collect()
}
