//! Chunk-chained unsigned big integers.
//!
//! Storage is a chain of fixed-capacity limb blocks, least-significant
//! chunk first and little-endian limbs within each chunk: the numeric value
//! is the sum over all stored limbs of `limb << (32 * global_index)`.
//! The chain is held as a `Vec<Chunk>` so chain order is vector order,
//! append is push, and truncation releases the tail in one call.
//!
//! Addition mutates the left operand in place, growing its chain as the
//! carry demands. Serialization is a raw fixed-width hex dump of the stored
//! limbs in chain order, not a minimal-width numeral.

use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::chunk::{Chunk, CHUNK_CAPACITY};
use crate::cursor::{Cursor, CursorMut};

/// Hex digits emitted per limb by the dump format.
pub const HEX_DIGITS_PER_LIMB: usize = 2 * std::mem::size_of::<u32>();

/// Unsigned big integer over a chain of fixed-capacity limb chunks.
///
/// A fresh value holds one chunk with a single zero limb. [`load`] replaces
/// the value with an explicit limb sequence; [`add_assign`] adds another
/// `BigInt` in place. Chains own their chunks exclusively.
///
/// [`load`]: BigInt::load
/// [`add_assign`]: BigInt::add_assign
#[derive(Clone, Serialize, Deserialize)]
pub struct BigInt {
    pub(crate) chunks: Vec<Chunk>,
}

impl BigInt {
    /// Numeric zero: one chunk with one used limb holding 0.
    pub fn new() -> Self {
        Self {
            chunks: vec![Chunk::zero_limb()],
        }
    }

    /// Number of chunks in the chain.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// True when every stored limb is zero, including the empty chain.
    pub fn is_zero(&self) -> bool {
        self.limbs().all(|limb| limb == 0)
    }

    /// The stored limbs in chain order, least-significant first. Unused
    /// tail slots of a partially filled chunk are not yielded.
    pub fn limbs(&self) -> impl Iterator<Item = u32> + '_ {
        self.chunks.iter().flat_map(|c| c.as_slice().iter().copied())
    }

    /// Replace this value with the exact limb sequence `limbs`,
    /// least-significant first.
    ///
    /// The chain is truncated or extended to `ceil(len / CHUNK_CAPACITY)`
    /// chunks, then each chunk's used prefix is overwritten with its slice
    /// of the input. An empty slice truncates the chain to zero chunks;
    /// the result still reads as zero, and addition re-normalizes it.
    pub fn load(&mut self, limbs: &[u32]) {
        let needed = limbs.len().div_ceil(CHUNK_CAPACITY);
        self.chunks.truncate(needed);
        while self.chunks.len() < needed {
            self.chunks.push(Chunk::new());
        }

        let mut rest = limbs;
        for chunk in &mut self.chunks {
            let take = rest.len().min(CHUNK_CAPACITY);
            chunk.fill_from(&rest[..take]);
            rest = &rest[take..];
        }
    }

    /// `self += rhs`, limb by limb with carry propagation. The chain grows
    /// in place as needed; `rhs` is left untouched.
    pub fn add_assign(&mut self, rhs: &BigInt) {
        let mut rc = Cursor::new(rhs);
        let mut lc = CursorMut::new(self);

        // Degenerate chain with no used limbs anywhere: give the
        // destination a writable zero limb before the main loop.
        if lc.is_exhausted() {
            lc.extend();
        }

        let mut carry = 0u32;
        while !rc.is_exhausted() {
            let wide = u64::from(lc.get()) + u64::from(rc.get()) + u64::from(carry);
            lc.set(wide as u32);
            carry = (wide >> 32) as u32;
            lc.step_extending();
            rc.step();
        }

        // Trailing carry: ripple until a limb absorbs it. A limb that
        // wraps to zero keeps the carry alive for the next position.
        while carry != 0 {
            let sum = lc.get().wrapping_add(carry);
            lc.set(sum);
            if sum != 0 {
                carry = 0;
            } else {
                lc.step_extending();
            }
        }
    }

    /// Fixed-width lowercase hex dump of the stored limbs in chain order:
    /// the least-significant limb group comes first, each limb is rendered
    /// as 8 hex digits, most-significant nibble first, with no separators.
    ///
    /// This is a raw dump of the chunked storage, not a canonical numeral;
    /// no leading-zero suppression is performed across the whole number.
    pub fn to_hex_string(&self) -> String {
        let mut out = String::with_capacity(self.chunks.len() * CHUNK_CAPACITY * HEX_DIGITS_PER_LIMB);
        for limb in self.limbs() {
            out.push_str(&format!("{:08x}", limb));
        }
        out
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        BigInt::add_assign(self, rhs);
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt(0x{})", self.to_hex_string())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt(0x{})", self.to_hex_string())
    }
}
