//! Registry of the fixed-width integer types the visualizer understands.
//!
//! Type names are matched exactly: `int32` is a type, `Int32` and `int` are
//! not. Code that wants the forgiving behavior goes through `width_of` or
//! `TypeSpec::lookup`, which map unknown names to a zero-width type. Code that
//! wants to reject them goes through `TypeSpec::resolve`.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::str;

/// Enumeration of all integer types that ship with the visualizer.
#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

lazy_static! {
    static ref TYPES_BY_NAME: HashMap<&'static str, TypeName> =
        TypeName::iter().into_iter().map(|t| (t.name(), t)).collect();
}

impl TypeName {
    /// Iterate all valid type names, signed types first.
    pub fn iter() -> impl IntoIterator<Item = Self> {
        vec![
            Self::Int8,
            Self::Int16,
            Self::Int32,
            Self::Int64,
            Self::Uint8,
            Self::Uint16,
            Self::Uint32,
            Self::Uint64,
        ]
    }

    /// The name users type on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
        }
    }

    /// Number of bytes a value of this type occupies.
    pub fn width(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 => 4,
            Self::Int64 | Self::Uint64 => 8,
        }
    }

    pub fn signed(self) -> bool {
        match self {
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => true,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 => false,
        }
    }
}

impl str::FromStr for TypeName {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TYPES_BY_NAME.get(s).copied().ok_or(())
    }
}

derive_deserialize_from_str!(TypeName, "valid integer type name");

/// Byte width of the named type, or 0 if the name is not registered.
pub fn width_of(name: &str) -> usize {
    name.parse::<TypeName>().map_or(0, TypeName::width)
}

/// Comma-separated list of every registered type name.
pub fn available_names() -> String {
    TypeName::iter()
        .into_iter()
        .map(TypeName::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type as the rest of the pipeline sees it.
///
/// The name is kept verbatim, even when it did not match anything in the
/// registry, so that the header line echoes back what the user typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSpec {
    name: String,
    width: usize,
    signed: bool,
}

impl TypeSpec {
    /// Look up a type, degrading unknown names to a zero-width spec.
    pub fn lookup(name: &str) -> Self {
        TypeSpec {
            name: name.to_string(),
            width: width_of(name),
            signed: name.parse::<TypeName>().map_or(false, TypeName::signed),
        }
    }

    /// Look up a type, failing if the name is not registered.
    pub fn resolve(name: &str) -> Result<Self> {
        name.parse::<TypeName>()
            .map(Self::from)
            .map_err(|()| Error::UnknownType(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Whether the name matched a registered type.
    pub fn is_known(&self) -> bool {
        self.width != 0
    }
}

impl From<TypeName> for TypeSpec {
    fn from(ty: TypeName) -> Self {
        TypeSpec {
            name: ty.name().to_string(),
            width: ty.width(),
            signed: ty.signed(),
        }
    }
}

#[cfg(test)]
mod tests;
