//! Byte-level model of integers in memory.

mod bytes;
mod endianness;

pub use bytes::*;
pub use endianness::Endianness;
