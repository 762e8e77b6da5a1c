//! modcon-layout - Register/parameter layout model for the modcon console
//!
//! Maps named device/template parameters (typed values with byte order,
//! bit position, scaling metadata) onto byte offsets inside Modbus
//! register ranges, and validates that no two parameters alias the same
//! bytes or bits.
//!
//! # Components
//!
//! - **Data model**: [`DataType`], [`ByteOrder`], [`FunctionCode`],
//!   [`RegisterRange`], [`ParameterConfig`] with derived layout facts
//!   (byte size, word count, byte span).
//! - **Buffer allocator**: [`next_buffer_index`] / [`propose_index`] -
//!   append-after-last offset proposals for new or retyped parameters.
//! - **Overlap validator**: [`check_placement`] - first-violation-wins
//!   placement verdicts ([`PlacementConflict`]).
//!
//! All operations are pure and total: verdicts are returned as values,
//! never panics; unknown data type spellings fall back to a 16-bit,
//! single-register layout so derivations keep working until validation
//! reports them.
//!
//! # Example
//!
//! ```rust
//! use modcon_layout::{
//!     check_placement, propose_index, FunctionCode, ParameterConfig, RegisterRange,
//! };
//!
//! let ranges = vec![RegisterRange {
//!     range_name: "Main".to_string(),
//!     start_register: 100,
//!     length: 4,
//!     function_code: FunctionCode::HoldingRegisters,
//! }];
//!
//! let mut first = ParameterConfig::new("Voltage", "FLOAT32", "Main");
//! first.set_buffer_index(0);
//!
//! let mut second = ParameterConfig::new("Current", "INT16", "Main");
//! second.set_buffer_index(propose_index(&[first.clone()], "Main", None));
//! assert_eq!(second.effective_buffer_index(), 4);
//!
//! assert!(check_placement(&second, &[first], &ranges, None).is_none());
//! ```

pub mod alloc;
pub mod byte_order;
pub mod data_type;
pub mod error;
pub mod overlap;
pub mod parameter;
pub mod range;

// Re-exports for convenience
pub use alloc::{next_buffer_index, params_in_range, propose_index};
pub use byte_order::ByteOrder;
pub use data_type::{DataType, DEFAULT_STRING_WORDS, MAX_STRING_WORDS, MIN_STRING_WORDS};
pub use error::{LayoutError, Result};
pub use overlap::{check_placement, PlacementConflict};
pub use parameter::ParameterConfig;
pub use range::{names_match, FunctionCode, RegisterRange};
