//! Types to represent endianness.

/// Indicates the byte order when laying a word out in memory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    /// Words are stored in memory least significant byte first.
    ///
    /// This is "backwards" compared to how English writes numbers.
    LittleEndian,

    /// Words are stored in memory most significant byte first.
    ///
    /// This is the same order as how English writes numbers.
    BigEndian,
}

impl Endianness {
    /// Iterate both byte orders, in the order they are displayed.
    pub fn iter() -> impl IntoIterator<Item = Self> {
        vec![Self::LittleEndian, Self::BigEndian]
    }

    pub fn friendly_name(self) -> &'static str {
        match self {
            Self::LittleEndian => "Little Endian",
            Self::BigEndian => "Big Endian",
        }
    }

    /// Arrange least-significant-first bytes into this byte order.
    pub fn arrange(self, le_bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::LittleEndian => le_bytes.to_vec(),
            Self::BigEndian => le_bytes.iter().rev().copied().collect(),
        }
    }
}
