//! Byte/word order tags for parameter values
//!
//! Single-register types use the 2-symbol orders (AB/BA); multi-register
//! types use the 4-symbol word orders (ABCD/DCBA/BADC/CDAB). The symbols
//! follow the usual convention: A is the most significant byte, D (or the
//! last symbol) the least significant.

use crate::data_type::DataType;
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte order tag for a parameter
///
/// For a 32-bit value `0x12345678`:
/// - `Abcd`: [0x12, 0x34, 0x56, 0x78] (big-endian)
/// - `Dcba`: [0x78, 0x56, 0x34, 0x12] (little-endian)
/// - `Cdab`: [0x56, 0x78, 0x12, 0x34] (word-swapped big-endian, Modbus common)
/// - `Badc`: [0x34, 0x12, 0x78, 0x56] (word-swapped little-endian)
///
/// For a 16-bit value `0x1234`:
/// - `Ab`: [0x12, 0x34]
/// - `Ba`: [0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ByteOrder {
    Ab,
    Ba,
    Abcd,
    Dcba,
    Badc,
    Cdab,
}

impl ByteOrder {
    /// Parse from the stored string form (case-insensitive, hyphens ignored)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "AB" => Some(Self::Ab),
            "BA" => Some(Self::Ba),
            "ABCD" => Some(Self::Abcd),
            "DCBA" => Some(Self::Dcba),
            "BADC" => Some(Self::Badc),
            "CDAB" => Some(Self::Cdab),
            _ => None,
        }
    }

    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ab => "AB",
            Self::Ba => "BA",
            Self::Abcd => "ABCD",
            Self::Dcba => "DCBA",
            Self::Badc => "BADC",
            Self::Cdab => "CDAB",
        }
    }

    /// True for the 4-symbol word orders
    pub fn is_multi_word(&self) -> bool {
        matches!(self, Self::Abcd | Self::Dcba | Self::Badc | Self::Cdab)
    }

    /// Whether this order belongs to the data type's register-count class
    ///
    /// Multi-register types take 4-symbol orders, single-register types
    /// take 2-symbol orders.
    pub fn matches(&self, data_type: DataType) -> bool {
        self.is_multi_word() == data_type.is_multi_register()
    }

    /// Class default: AB for single-register types, ABCD for multi-register
    pub fn default_for(data_type: DataType) -> Self {
        if data_type.is_multi_register() {
            Self::Abcd
        } else {
            Self::Ab
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LayoutError::UnknownByteOrder(s.to_string()))
    }
}

impl Default for ByteOrder {
    /// Default to the single-register big-endian order
    fn default() -> Self {
        Self::Ab
    }
}
