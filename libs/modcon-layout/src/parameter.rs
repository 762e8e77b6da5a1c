//! Parameter configurations - named, typed values extracted from a range buffer

use crate::byte_order::ByteOrder;
use crate::data_type::DataType;
use serde::{Deserialize, Serialize};

/// A named, typed value extracted from a register range's response buffer
///
/// `buffer_index` (byte offset into the range's decoded buffer) is the
/// authoritative placement field; `register_index` is the legacy derived
/// field (`buffer_index / 2`) kept in sync for older stored layouts.
/// Names are unique across all ranges of a device/template,
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterConfig {
    /// Globally unique parameter name (case-insensitive)
    pub name: String,
    /// Data format spelled the way the console stores it (e.g. "FLOAT32", "BOOLEAN")
    pub data_type: String,
    /// Owning register range name
    pub register_range: String,
    /// Byte offset into the range's decoded buffer (authoritative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_index: Option<u32>,
    /// Legacy register offset, kept at `buffer_index / 2`
    #[serde(default)]
    pub register_index: u32,
    /// Registers consumed; user-settable for STRING (1-125), implied otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u16>,
    /// Byte order; must match the data type's register-count class
    #[serde(default)]
    pub byte_order: ByteOrder,
    /// Bit within the word at `buffer_index` (0-15), BOOLEAN only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_position: Option<u8>,
    /// Signed interpretation, meaningful for integer types only
    #[serde(default)]
    pub signed: bool,
    /// Linear multiplier applied to the raw decoded value
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
    /// Optional expression over `x`; takes precedence over `scaling_factor`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_equation: Option<String>,
    /// Display rounding, decimal places (0-10)
    #[serde(default)]
    pub decimal_point: u8,
    /// Optional hex mask ("0x...") ANDed with the raw word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitmask: Option<String>,
    /// Lower validity bound for decoded values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Upper validity bound for decoded values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Display unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Display description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_scaling_factor() -> f64 {
    1.0
}

impl ParameterConfig {
    /// Minimal parameter with layout defaults for the given type
    pub fn new(name: impl Into<String>, data_type: &str, register_range: impl Into<String>) -> Self {
        let dt = DataType::parse_or_default(data_type);
        Self {
            name: name.into(),
            data_type: data_type.to_string(),
            register_range: register_range.into(),
            buffer_index: Some(0),
            register_index: 0,
            word_count: Some(dt.required_word_count(None)),
            byte_order: ByteOrder::default_for(dt),
            bit_position: if dt.is_bit() { Some(0) } else { None },
            signed: false,
            scaling_factor: default_scaling_factor(),
            scaling_equation: None,
            decimal_point: 0,
            bitmask: None,
            min_value: None,
            max_value: None,
            unit: None,
            description: None,
        }
    }

    /// Parsed data type with the 16-bit/1-word fallback
    pub fn data_type(&self) -> DataType {
        DataType::parse_or_default(&self.data_type)
    }

    /// Parsed data type, `None` for unrecognized spellings
    pub fn try_data_type(&self) -> Option<DataType> {
        DataType::parse(&self.data_type)
    }

    /// True for BOOLEAN/BIT parameters
    pub fn is_bit(&self) -> bool {
        self.data_type().is_bit()
    }

    /// Bytes occupied in the range buffer
    pub fn byte_size(&self) -> u32 {
        self.data_type().byte_size(self.word_count)
    }

    /// Placement offset: `buffer_index`, or `register_index * 2` when absent
    pub fn effective_buffer_index(&self) -> u32 {
        self.buffer_index.unwrap_or(self.register_index * 2)
    }

    /// Inclusive byte span `[start, end]` in the range buffer
    ///
    /// A degenerate zero-byte size (STRING with word count 0, rejected by
    /// validation) still spans its own start byte.
    pub fn byte_span(&self) -> (u32, u32) {
        let start = self.effective_buffer_index();
        (start, start + self.byte_size().saturating_sub(1))
    }

    /// Set the placement offset, keeping `register_index` in sync
    pub fn set_buffer_index(&mut self, index: u32) {
        self.buffer_index = Some(index);
        self.register_index = index / 2;
    }

    /// Copy with a new data type applied
    ///
    /// Crossing the single/multi register class boundary resets the byte
    /// order to the class default; the word count is re-derived from the
    /// new type (STRING keeps the current user-set count).
    pub fn with_data_type(&self, new_type: &str) -> Self {
        let old = self.data_type();
        let new = DataType::parse_or_default(new_type);

        let mut updated = self.clone();
        updated.data_type = new_type.to_string();
        if old.is_multi_register() != new.is_multi_register() {
            updated.byte_order = ByteOrder::default_for(new);
        }
        updated.word_count = Some(new.required_word_count(self.word_count));
        updated.bit_position = if new.is_bit() {
            self.bit_position.or(Some(0))
        } else {
            None
        };
        updated
    }
}
