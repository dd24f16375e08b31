pub mod bigint;
pub mod chunk;
mod cursor;

pub use bigint::{BigInt, HEX_DIGITS_PER_LIMB};
pub use chunk::{Chunk, CHUNK_CAPACITY};
