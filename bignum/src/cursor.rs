//! Transient traversal handles over a [`BigInt`]'s chunk chain.
//!
//! A cursor hides chunk boundaries from the arithmetic code: stepping walks
//! the used limbs of each chunk in chain order, skipping denormalized
//! zero-used chunks. [`Cursor`] reads a shared chain; [`CursorMut`] can also
//! write limbs and grow the chain when an algorithm walks off the end. The
//! borrow checker enforces that at most one mutating cursor exists per
//! chain at a time.

use crate::bigint::BigInt;
use crate::chunk::Chunk;

/// Chain position: chunk index plus slot within that chunk's used prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pos {
    chunk: usize,
    slot: usize,
}

/// First position at or after chunk `from` that holds a used limb.
fn first_used(chunks: &[Chunk], from: usize) -> Option<Pos> {
    chunks
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, c)| !c.is_empty())
        .map(|(chunk, _)| Pos { chunk, slot: 0 })
}

/// Advance `pos` by one limb within `chunks`, or exhaust.
fn step(chunks: &[Chunk], pos: Option<Pos>) -> Option<Pos> {
    let p = pos?;
    if p.slot + 1 < chunks[p.chunk].len() {
        Some(Pos {
            chunk: p.chunk,
            slot: p.slot + 1,
        })
    } else {
        first_used(chunks, p.chunk + 1)
    }
}

/// Read-only cursor over a chain. Past the most-significant stored limb it
/// reports an implicit run of zeros.
pub(crate) struct Cursor<'a> {
    big: &'a BigInt,
    pos: Option<Pos>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(big: &'a BigInt) -> Self {
        let pos = first_used(&big.chunks, 0);
        Self { big, pos }
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.pos.is_none()
    }

    /// Limb at the current position, or 0 when exhausted.
    pub(crate) fn get(&self) -> u32 {
        match self.pos {
            Some(p) => self.big.chunks[p.chunk].get(p.slot),
            None => 0,
        }
    }

    /// Advance one limb. Stepping an exhausted cursor is a no-op.
    pub(crate) fn step(&mut self) {
        self.pos = step(&self.big.chunks, self.pos);
    }
}

/// Mutating cursor over a chain: positional writes plus transparent
/// extension of the owning `BigInt`.
pub(crate) struct CursorMut<'a> {
    big: &'a mut BigInt,
    pos: Option<Pos>,
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(big: &'a mut BigInt) -> Self {
        let pos = first_used(&big.chunks, 0);
        Self { big, pos }
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.pos.is_none()
    }

    pub(crate) fn get(&self) -> u32 {
        match self.pos {
            Some(p) => self.big.chunks[p.chunk].get(p.slot),
            None => 0,
        }
    }

    /// Overwrite the limb at the current position. Callers must extend
    /// before writing past the end of the chain.
    pub(crate) fn set(&mut self, limb: u32) {
        match self.pos {
            Some(p) => self.big.chunks[p.chunk].set(p.slot, limb),
            None => debug_assert!(false, "set on exhausted cursor"),
        }
    }

    pub(crate) fn step(&mut self) {
        self.pos = step(&self.big.chunks, self.pos);
    }

    /// Advance one limb, growing the chain instead of exhausting. Always
    /// lands on a writable slot.
    pub(crate) fn step_extending(&mut self) {
        self.step();
        if self.pos.is_none() {
            self.extend();
        }
    }

    /// Append a fresh chunk holding one zero limb and reposition onto it.
    ///
    /// Extension never tops up spare capacity in a partially filled tail
    /// chunk; every growth past the end appends a new single-limb chunk.
    pub(crate) fn extend(&mut self) {
        self.big.chunks.push(Chunk::zero_limb());
        self.pos = Some(Pos {
            chunk: self.big.chunks.len() - 1,
            slot: 0,
        });
    }
}
