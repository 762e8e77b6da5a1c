//! Register ranges - contiguous blocks of registers requested in one read

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Modbus read operation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FunctionCode {
    /// 1 - Read Coils
    Coils = 1,
    /// 2 - Read Discrete Inputs
    DiscreteInputs = 2,
    /// 3 - Read Holding Registers
    HoldingRegisters = 3,
    /// 4 - Read Input Registers
    InputRegisters = 4,
}

impl From<FunctionCode> for u8 {
    fn from(fc: FunctionCode) -> u8 {
        fc as u8
    }
}

impl TryFrom<u8> for FunctionCode {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Coils),
            2 => Ok(Self::DiscreteInputs),
            3 => Ok(Self::HoldingRegisters),
            4 => Ok(Self::InputRegisters),
            other => Err(LayoutError::UnknownFunctionCode(other)),
        }
    }
}

impl Default for FunctionCode {
    fn default() -> Self {
        Self::HoldingRegisters
    }
}

/// A contiguous block of registers requested via one function-code read
///
/// `range_name` is the join key parameters reference; it is unique within
/// a device/template, case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRange {
    /// Unique name within the device/template (case-insensitive)
    pub range_name: String,
    /// Absolute register address of the first register
    pub start_register: u32,
    /// Number of 16-bit registers requested (>= 1)
    #[serde(default = "default_length")]
    pub length: u16,
    /// Modbus function code used to read the range
    #[serde(default)]
    pub function_code: FunctionCode,
}

fn default_length() -> u16 {
    1
}

impl RegisterRange {
    /// Bytes in the decoded response buffer (`length * 2`)
    pub fn byte_capacity(&self) -> u32 {
        u32::from(self.length) * 2
    }
}

/// Case-insensitive, trimmed name comparison used for range and parameter keys
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_function_code_round_trip() {
        for (fc, num) in [
            (FunctionCode::Coils, 1u8),
            (FunctionCode::DiscreteInputs, 2),
            (FunctionCode::HoldingRegisters, 3),
            (FunctionCode::InputRegisters, 4),
        ] {
            assert_eq!(u8::from(fc), num);
            assert_eq!(FunctionCode::try_from(num).unwrap(), fc);
        }
        assert!(FunctionCode::try_from(5).is_err());
        assert!(FunctionCode::try_from(0).is_err());
    }

    #[test]
    fn test_byte_capacity() {
        let range = RegisterRange {
            range_name: "R1".to_string(),
            start_register: 100,
            length: 4,
            function_code: FunctionCode::HoldingRegisters,
        };
        assert_eq!(range.byte_capacity(), 8);
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Main", "main"));
        assert!(names_match(" main ", "MAIN"));
        assert!(!names_match("main", "main2"));
    }

    #[test]
    fn test_serde_wire_shape() {
        let range = RegisterRange {
            range_name: "R1".to_string(),
            start_register: 100,
            length: 4,
            function_code: FunctionCode::HoldingRegisters,
        };
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(json["rangeName"], "R1");
        assert_eq!(json["startRegister"], 100);
        assert_eq!(json["functionCode"], 3);
    }
}
