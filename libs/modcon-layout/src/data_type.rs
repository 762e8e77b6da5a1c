//! Parameter data types and derived layout facts
//!
//! Data types are stored in parameter configurations as legacy string
//! spellings (e.g. "FLOAT32", "boolean") and parsed on use. Derivation
//! functions are total: an unrecognized spelling falls back to a 16-bit,
//! single-register layout so offset suggestions keep working until
//! validation reports the bad type.

use crate::error::LayoutError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Default register count for STRING/ASCII parameters when unset
pub const DEFAULT_STRING_WORDS: u16 = 10;

/// Word count bounds for STRING/ASCII parameters
pub const MIN_STRING_WORDS: u16 = 1;
pub const MAX_STRING_WORDS: u16 = 125;

/// Supported parameter data types
///
/// Covers 8/16/32/64-bit signed/unsigned integers, 32/64-bit floats,
/// BCD, string and single-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    Bcd,
    String,
    Bool,
}

impl DataType {
    /// Parse a legacy data type spelling (case-insensitive)
    ///
    /// Accepts the console's stored spellings:
    /// - "FLOAT" → Float32, "DOUBLE" → Float64
    /// - "ASCII" → String
    /// - "BOOLEAN", "BIT", "BOOL" → Bool
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "INT8" => Some(Self::Int8),
            "UINT8" => Some(Self::Uint8),
            "INT16" => Some(Self::Int16),
            "UINT16" => Some(Self::Uint16),
            "INT32" => Some(Self::Int32),
            "UINT32" => Some(Self::Uint32),
            "INT64" => Some(Self::Int64),
            "UINT64" => Some(Self::Uint64),
            "FLOAT32" | "FLOAT" => Some(Self::Float32),
            "FLOAT64" | "DOUBLE" => Some(Self::Float64),
            "BCD" => Some(Self::Bcd),
            "STRING" | "ASCII" => Some(Self::String),
            "BOOLEAN" | "BIT" | "BOOL" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Parse with the 16-bit/1-word fallback for unknown spellings
    ///
    /// The fallback only affects layout suggestions; validation still
    /// rejects the unknown spelling itself.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!("Unknown data type '{}', treating as UINT16", s);
            Self::Uint16
        })
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int8 => "INT8",
            Self::Uint8 => "UINT8",
            Self::Int16 => "INT16",
            Self::Uint16 => "UINT16",
            Self::Int32 => "INT32",
            Self::Uint32 => "UINT32",
            Self::Int64 => "INT64",
            Self::Uint64 => "UINT64",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Bcd => "BCD",
            Self::String => "STRING",
            Self::Bool => "BOOLEAN",
        }
    }

    /// Bytes occupied in the range's decoded buffer
    ///
    /// STRING occupies `word_count * 2` bytes (default word count 10).
    /// All other types have a fixed size regardless of `word_count`.
    pub fn byte_size(&self, word_count: Option<u16>) -> u32 {
        match self {
            Self::Int8 | Self::Uint8 | Self::Bool => 1,
            Self::Int16 | Self::Uint16 | Self::Bcd => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
            Self::String => u32::from(word_count.unwrap_or(DEFAULT_STRING_WORDS)) * 2,
        }
    }

    /// Number of 16-bit registers the type consumes
    ///
    /// For STRING this is the user-set word count (default 10); the
    /// 8-bit and bit types still consume a whole register.
    pub fn required_word_count(&self, current: Option<u16>) -> u16 {
        match self {
            Self::Int32 | Self::Uint32 | Self::Float32 => 2,
            Self::Int64 | Self::Uint64 | Self::Float64 => 4,
            Self::String => current.unwrap_or(DEFAULT_STRING_WORDS),
            _ => 1,
        }
    }

    /// True when the type spans more than one register
    pub fn is_multi_register(&self) -> bool {
        self.required_word_count(None) > 1
    }

    /// True for BOOLEAN/BIT
    pub fn is_bit(&self) -> bool {
        matches!(self, Self::Bool)
    }

    /// True for STRING/ASCII
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// True for the integer types where `signed` is meaningful
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Uint8
                | Self::Int16
                | Self::Uint16
                | Self::Int32
                | Self::Uint32
                | Self::Int64
                | Self::Uint64
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LayoutError::UnknownDataType(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    // ========== byte_size tests ==========

    #[test]
    fn test_byte_size_fixed_types() {
        assert_eq!(DataType::Int8.byte_size(None), 1);
        assert_eq!(DataType::Uint8.byte_size(None), 1);
        assert_eq!(DataType::Bool.byte_size(None), 1);
        assert_eq!(DataType::Int16.byte_size(None), 2);
        assert_eq!(DataType::Uint16.byte_size(None), 2);
        assert_eq!(DataType::Bcd.byte_size(None), 2);
        assert_eq!(DataType::Int32.byte_size(None), 4);
        assert_eq!(DataType::Uint32.byte_size(None), 4);
        assert_eq!(DataType::Float32.byte_size(None), 4);
        assert_eq!(DataType::Int64.byte_size(None), 8);
        assert_eq!(DataType::Uint64.byte_size(None), 8);
        assert_eq!(DataType::Float64.byte_size(None), 8);
    }

    #[test]
    fn test_byte_size_ignores_word_count_for_fixed_types() {
        assert_eq!(DataType::Float32.byte_size(Some(7)), 4);
        assert_eq!(DataType::Int16.byte_size(Some(7)), 2);
    }

    #[test]
    fn test_byte_size_string() {
        assert_eq!(DataType::String.byte_size(Some(4)), 8);
        assert_eq!(DataType::String.byte_size(None), 20); // default 10 words
    }

    // ========== required_word_count tests ==========

    #[test]
    fn test_required_word_count() {
        assert_eq!(DataType::Uint16.required_word_count(None), 1);
        assert_eq!(DataType::Bool.required_word_count(None), 1);
        assert_eq!(DataType::Float32.required_word_count(None), 2);
        assert_eq!(DataType::Uint64.required_word_count(None), 4);
        assert_eq!(DataType::String.required_word_count(Some(25)), 25);
        assert_eq!(DataType::String.required_word_count(None), 10);
    }

    #[test]
    fn test_is_multi_register() {
        assert!(!DataType::Uint16.is_multi_register());
        assert!(!DataType::Bool.is_multi_register());
        assert!(DataType::Float32.is_multi_register());
        assert!(DataType::Float64.is_multi_register());
        assert!(DataType::String.is_multi_register());
    }

    // ========== parsing tests ==========

    #[test]
    fn test_parse_legacy_spellings() {
        assert_eq!(DataType::parse("FLOAT32"), Some(DataType::Float32));
        assert_eq!(DataType::parse("float"), Some(DataType::Float32));
        assert_eq!(DataType::parse("double"), Some(DataType::Float64));
        assert_eq!(DataType::parse("ascii"), Some(DataType::String));
        assert_eq!(DataType::parse("BOOLEAN"), Some(DataType::Bool));
        assert_eq!(DataType::parse("bit"), Some(DataType::Bool));
        assert_eq!(DataType::parse(" int16 "), Some(DataType::Int16));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(DataType::parse("complex128"), None);
        assert_eq!(DataType::parse(""), None);
    }

    #[test]
    fn test_fallback_is_16bit_one_word() {
        let dt = DataType::parse_or_default("no-such-type");
        assert_eq!(dt.byte_size(None), 2);
        assert_eq!(dt.required_word_count(None), 1);
    }
}
