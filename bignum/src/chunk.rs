//! Fixed-capacity limb blocks, the unit of allocation for a chunk chain.

use serde::{Deserialize, Serialize};

/// Limbs per chunk. Chains grow by this many slots at a time.
pub const CHUNK_CAPACITY: usize = 16;

/// A fixed-capacity block of 32-bit limbs, little-endian within the block.
///
/// Only the first `used` slots carry value; the rest are scratch. A chunk
/// with `used == 0` in the interior of a chain is a denormalized form that
/// cursors skip over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChunk")]
pub struct Chunk {
    pub(crate) limbs: [u32; CHUNK_CAPACITY],
    pub(crate) used: usize,
}

/// Unvalidated wire form of [`Chunk`]. `used` is checked against the
/// capacity before a `Chunk` is produced, so a crafted payload cannot
/// create a used prefix that overruns the limb array.
#[derive(Deserialize)]
struct RawChunk {
    limbs: [u32; CHUNK_CAPACITY],
    used: usize,
}

impl TryFrom<RawChunk> for Chunk {
    type Error = String;

    fn try_from(raw: RawChunk) -> Result<Self, Self::Error> {
        if raw.used > CHUNK_CAPACITY {
            return Err(format!(
                "used count {} exceeds chunk capacity {}",
                raw.used, CHUNK_CAPACITY
            ));
        }
        Ok(Self {
            limbs: raw.limbs,
            used: raw.used,
        })
    }
}

impl Chunk {
    /// An empty chunk: no used slots.
    pub fn new() -> Self {
        Self {
            limbs: [0; CHUNK_CAPACITY],
            used: 0,
        }
    }

    /// A chunk holding a single zero limb.
    pub fn zero_limb() -> Self {
        Self {
            limbs: [0; CHUNK_CAPACITY],
            used: 1,
        }
    }

    /// Number of used slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.used == CHUNK_CAPACITY
    }

    /// The used limbs, least-significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.limbs[..self.used]
    }

    /// Replace this chunk's contents with `src`, which must fit.
    pub(crate) fn fill_from(&mut self, src: &[u32]) {
        debug_assert!(src.len() <= CHUNK_CAPACITY);
        self.used = src.len();
        self.limbs[..src.len()].copy_from_slice(src);
    }

    #[inline]
    pub(crate) fn get(&self, slot: usize) -> u32 {
        debug_assert!(slot < self.used);
        self.limbs[slot]
    }

    #[inline]
    pub(crate) fn set(&mut self, slot: usize, limb: u32) {
        debug_assert!(slot < self.used);
        self.limbs[slot] = limb;
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
