//! modcon-calc - Scaling/display pipeline for the modcon console
//!
//! Converts raw decoded register values into displayed values and
//! validates the scaling configuration itself. Equations run inside the
//! sandboxed `evalexpr` engine - user text never becomes host code.
//!
//! # Pipeline
//!
//! 1. Optional bitmask (`0x...`) ANDed with the raw register word
//! 2. Scaling equation over `x`, or the linear `scaling_factor`
//! 3. Rounding to the configured decimal places (presentation only)
//! 4. Min/max bounds flagging (warning, never a hard failure)
//!
//! For BOOLEAN parameters the raw value is the single bit at the
//! configured position, not a multi-byte decode.
//!
//! # Equation helpers
//!
//! | Function | Signature | Description |
//! |----------|-----------|-------------|
//! | `shr` | `shr(value, bits)` | Integer shift right |
//! | `shl` | `shl(value, bits)` | Integer shift left |
//! | `band` | `band(value, mask)` | Bitwise AND |
//! | `bor` | `bor(value, mask)` | Bitwise OR |
//!
//! # Example
//!
//! ```rust
//! use modcon_calc::{render_reading, DisplayValue, ScalingEquation};
//! use modcon_layout::ParameterConfig;
//!
//! // Configuration-time validation
//! assert!(ScalingEquation::compile("x * 1.8 + 32").is_ok());
//! assert!(ScalingEquation::compile("y + 1").is_err());
//!
//! // Read-time rendering
//! let mut param = ParameterConfig::new("Temp", "INT16", "Main");
//! param.scaling_factor = 0.1;
//! param.decimal_point = 1;
//! let reading = render_reading(&param, 235.0);
//! assert_eq!(reading.display, DisplayValue::Value(23.5));
//! ```

pub mod bitmask;
pub mod equation;
pub mod error;
pub mod pipeline;

// Re-exports for convenience
pub use bitmask::Bitmask;
pub use equation::{evaluate, ScalingEquation};
pub use error::{CalcError, Result};
pub use pipeline::{
    bit_raw_value, extract_bit, masked_word, render_reading, round_to, scaled_display,
    DisplayValue, DisplayedReading,
};
