//! Splitting integers into bytes and joining them back together.

use crate::memory::Endianness;

/// Number of bits in one memory unit.
const UNIT_BITS: u32 = 8;

/// Split a value into `width` bytes, least significant byte first.
///
/// Byte `i` is bits `[8i, 8i + 8)` of the value's two's-complement pattern,
/// so anything above `width` bytes is silently dropped. Widths beyond the
/// eight bytes of an `i64` pad with zeroes.
pub fn extract_bytes(value: i64, width: usize) -> Vec<u8> {
    let bits = value as u64;

    (0..width)
        .map(|i| {
            let shift = (i as u32).saturating_mul(UNIT_BITS);
            (bits.checked_shr(shift).unwrap_or(0) & 0xFF) as u8
        })
        .collect()
}

/// Truncate a value to its low `width` bytes.
///
/// A zero width masks everything away. Widths of eight bytes or more leave
/// the value untouched, including its sign.
pub fn mask_to_width(value: i64, width: usize) -> i64 {
    if width >= 8 {
        value
    } else {
        let mask = (1u64 << (width as u32 * UNIT_BITS)) - 1;
        ((value as u64) & mask) as i64
    }
}

/// Join bytes stored in the given order back into a value.
///
/// This is the inverse of `extract_bytes` (followed by `Endianness::arrange`)
/// up to truncation: reassembling the bytes of `v` yields `v` masked to the
/// number of bytes given. Returns `None` if there are more than eight bytes.
pub fn from_segments(data: &[u8], endianness: Endianness) -> Option<u64> {
    if data.len() > 8 {
        return None;
    }

    let units = data.len();
    let mut sum = 0u64;

    for (pos, unit) in data.iter().enumerate() {
        let i = match endianness {
            Endianness::LittleEndian => pos,
            Endianness::BigEndian => units - 1 - pos,
        };

        sum |= (*unit as u64) << (i as u32 * UNIT_BITS);
    }

    Some(sum)
}
