//! Raw value to display value pipeline
//!
//! Turns a decoded raw numeric value into the value the console shows:
//! optional bitmask, scaling equation or linear factor, decimal rounding,
//! and bounds flagging. Runtime failures fail closed per reading - a bad
//! equation marks that single reading unparseable instead of aborting the
//! rest of the reading set.

use crate::bitmask::Bitmask;
use crate::equation;
use modcon_layout::ParameterConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Display outcome for one reading
///
/// `Unparseable` marks a reading whose scaling configuration failed
/// against the real value; the raw value is still carried alongside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Value(f64),
    Unparseable,
}

impl DisplayValue {
    /// The numeric display value, if the reading parsed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unparseable => None,
        }
    }
}

/// A reading rendered for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedReading {
    /// Parameter name (flat key in the device reading)
    pub name: String,
    /// Decoded raw value, untouched by scaling
    pub raw: f64,
    /// Scaled and rounded display value
    pub display: DisplayValue,
    /// Display unit from the parameter, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// True when the raw value violates the parameter's min/max bounds
    #[serde(default)]
    pub out_of_bounds: bool,
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Extract a single bit (0-15) from a register word
pub fn extract_bit(word: u16, bit_position: u8) -> u8 {
    ((word >> (bit_position & 0x0F)) & 1) as u8
}

/// Raw value of a BOOLEAN parameter: the bit at its `bit_position`
pub fn bit_raw_value(param: &ParameterConfig, word: u16) -> f64 {
    f64::from(extract_bit(word, param.bit_position.unwrap_or(0)))
}

/// Apply the parameter's bitmask (if any) to a raw register word
pub fn masked_word(param: &ParameterConfig, word: u16) -> crate::error::Result<u16> {
    match &param.bitmask {
        Some(mask) => Ok(Bitmask::parse(mask)?.apply(word)),
        None => Ok(word),
    }
}

/// Scale a raw value per the parameter's configuration
///
/// The scaling equation takes precedence over the linear factor; the
/// result is rounded to the parameter's decimal places. Equation failure
/// yields `Unparseable`, never an error.
pub fn scaled_display(param: &ParameterConfig, raw: f64) -> DisplayValue {
    let equation_text = param
        .scaling_equation
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let scaled = match equation_text {
        Some(text) => match equation::evaluate(text, raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Scaling equation failed for '{}': {}", param.name, e);
                return DisplayValue::Unparseable;
            },
        },
        None => raw * param.scaling_factor,
    };

    DisplayValue::Value(round_to(scaled, param.decimal_point))
}

/// Render a decoded raw value into a presentation reading
pub fn render_reading(param: &ParameterConfig, raw: f64) -> DisplayedReading {
    let below = param.min_value.is_some_and(|min| raw < min);
    let above = param.max_value.is_some_and(|max| raw > max);

    DisplayedReading {
        name: param.name.clone(),
        raw,
        display: scaled_display(param, raw),
        unit: param.unit.clone(),
        out_of_bounds: below || above,
    }
}
