//! Rendering of a value's memory layout.
//!
//! The text layout is a header with the type and the value in decimal and
//! hexadecimal, followed by one bordered table of bytes per byte order:
//!
//! ```text
//! Type: int16 (2 bytes)
//! Decimal: 309
//! Hexadecimal: 0x135
//! Little Endian:
//! +------+------+
//! | 0x35 | 0x01 |
//! +------+------+
//! Big Endian:
//! +------+------+
//! | 0x01 | 0x35 |
//! +------+------+
//! ```

use crate::memory::{self, Endianness};
use crate::types::TypeSpec;
use serde::Serialize;
use std::io::{self, Write};

/// A value laid out in memory as a particular integer type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    spec: TypeSpec,
    value: i64,
    bytes: Vec<u8>,
}

impl Layout {
    /// Truncate `input` to the type's width and split it into bytes.
    pub fn new(spec: TypeSpec, input: i64) -> Self {
        let width = spec.width();

        Layout {
            value: memory::mask_to_width(input, width),
            bytes: memory::extract_bytes(input, width),
            spec,
        }
    }

    /// The value after truncation to the type's width.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The value's bit pattern, as read back out of its bytes.
    pub fn bits(&self) -> u64 {
        memory::from_segments(&self.bytes, Endianness::LittleEndian)
            .unwrap_or(self.value as u64)
    }

    /// The value's bytes, least significant first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The value's bytes in the given order.
    pub fn ordered(&self, endianness: Endianness) -> Vec<u8> {
        endianness.arrange(&self.bytes)
    }

    /// Write the type header and the value in decimal and hexadecimal.
    pub fn write_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Type: {} ({} bytes)",
            self.spec.name(),
            self.spec.width()
        )?;
        writeln!(out, "Decimal: {}", self.value)?;
        writeln!(out, "Hexadecimal: 0x{:X}", self.bits())
    }

    /// Write one titled byte table per byte order.
    pub fn write_tables<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for endianness in Endianness::iter() {
            writeln!(out, "{}:", endianness.friendly_name())?;
            write_table(out, &self.ordered(endianness))?;
        }

        Ok(())
    }

    /// Write the full text layout.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_info(out)?;
        self.write_tables(out)
    }

    pub fn report(&self) -> Report<'_> {
        Report {
            type_name: self.spec.name(),
            width: self.spec.width(),
            signed: self.spec.signed(),
            decimal: self.value,
            hexadecimal: format!("0x{:X}", self.bits()),
            little_endian: hex_cells(&self.ordered(Endianness::LittleEndian)),
            big_endian: hex_cells(&self.ordered(Endianness::BigEndian)),
        }
    }
}

/// Machine-readable form of a `Layout`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Report<'a> {
    #[serde(rename = "type")]
    pub type_name: &'a str,
    pub width: usize,
    pub signed: bool,
    pub decimal: i64,
    pub hexadecimal: String,
    pub little_endian: Vec<String>,
    pub big_endian: Vec<String>,
}

fn hex_cells(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| format!("0x{:02X}", b)).collect()
}

/// Write a table border wide enough for `cells` cells.
///
/// With no cells this is a lone `+`.
pub fn write_boundary<W: Write>(out: &mut W, cells: usize) -> io::Result<()> {
    write!(out, "+")?;
    for _ in 0..cells {
        write!(out, "------+")?;
    }
    writeln!(out)
}

/// Write a row of byte cells in the order given.
pub fn write_row<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    write!(out, "|")?;
    for byte in bytes {
        write!(out, " 0x{:02X} |", byte)?;
    }
    writeln!(out)
}

/// Write a bordered table of byte cells.
///
/// An empty table collapses to a single lone `+` border.
pub fn write_table<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    write_boundary(out, bytes.len())?;
    if bytes.is_empty() {
        return Ok(());
    }

    write_row(out, bytes)?;
    write_boundary(out, bytes.len())
}
