//! Hexadecimal bitmasks applied to raw register words

use crate::error::{CalcError, Result};
use regex::Regex;
use std::fmt;

/// A validated `0x...` mask ANDed with the raw register word before
/// further interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmask(u64);

impl Bitmask {
    /// Parse a stored mask string
    ///
    /// Accepts only the `0x` form with at least one hex digit
    /// (`^0x[0-9A-Fa-f]+$`); anything else is a configuration error.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let re = Regex::new(r"^0x[0-9A-Fa-f]+$")
            .map_err(|e| CalcError::bitmask(format!("Regex error: {}", e)))?;
        if !re.is_match(trimmed) {
            return Err(CalcError::bitmask(format!(
                "'{}' is not a 0x-prefixed hex mask",
                text
            )));
        }
        let value = u64::from_str_radix(&trimmed[2..], 16)
            .map_err(|e| CalcError::bitmask(format!("'{}' does not fit a 64-bit mask: {}", text, e)))?;
        Ok(Self(value))
    }

    /// AND the mask with a raw register word
    pub fn apply(&self, word: u16) -> u16 {
        word & self.0 as u16
    }

    /// The mask value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}
