//! modcon-forms - Form validation and submission shapes for the modcon console
//!
//! Orchestrates the layout model, buffer allocator, overlap validator and
//! scaling pipeline into whole-form pass/fail validation, and produces the
//! wire shapes the persistence and read services expect.
//!
//! # Components
//!
//! - **Form state**: [`DeviceForm`] / [`TemplateForm`] - one shared form
//!   core ([`ConsoleForm`]) parametrized over the metadata block; the
//!   [`LayoutDraft`] holds the ranges and parameters being edited.
//! - **Validation**: [`validate_form`] - total, never panics, returns a
//!   [`ValidationReport`] grouped by form tab.
//! - **Wizard**: [`Wizard`] - which tab is active and which error subset
//!   is currently shown.
//! - **Submission**: [`build_submission`] / [`to_data_points`] /
//!   [`from_data_points`] - the `{range, parser}` dataPoints array, and
//!   [`display_readings`] for rendering decoded readings.
//! - **Template files**: [`save_template`] / [`load_template`] - YAML
//!   import/export with validation on import.
//!
//! # Example
//!
//! ```rust
//! use modcon_forms::{
//!     build_submission, validate_form, ConnectionForm, ConnectionSetting, ConsoleForm,
//!     DeviceBasics, LayoutDraft,
//! };
//! use modcon_layout::{FunctionCode, ParameterConfig, RegisterRange};
//!
//! let mut layout = LayoutDraft::default();
//! layout.ranges.push(RegisterRange {
//!     range_name: "Main".to_string(),
//!     start_register: 100,
//!     length: 4,
//!     function_code: FunctionCode::HoldingRegisters,
//! });
//! layout.parameters.push(layout.placed(&ParameterConfig::new("V", "FLOAT32", "Main")));
//!
//! let form = ConsoleForm {
//!     basics: DeviceBasics {
//!         name: "Inverter".to_string(),
//!         make: "Acme".to_string(),
//!         model: "X1".to_string(),
//!         usage: None,
//!         description: None,
//!     },
//!     connection: Some(ConnectionForm {
//!         setting: ConnectionSetting::Tcp { host: "10.0.0.5".to_string(), port: 502 },
//!         slave_id: 1,
//!     }),
//!     layout,
//! };
//!
//! let report = validate_form(&form);
//! assert!(report.is_valid);
//! let submission = build_submission(&form);
//! assert_eq!(submission.data_points.len(), 1);
//! ```

pub mod state;
pub mod submit;
pub mod template_io;
pub mod validate;
pub mod wizard;

// Re-exports for convenience
pub use state::{
    ConnectionForm, ConnectionSetting, ConsoleForm, DeviceBasics, DeviceForm, FormBasics,
    LayoutDraft, TemplateBasics, TemplateForm, MAX_SLAVE_ID,
};
pub use submit::{
    build_submission, display_readings, from_data_points, to_data_points, DataPoint,
    DataPointParser, DataPointRange, DeviceReading, RawReading, Submission,
};
pub use template_io::{load_template, save_template, TemplateImport};
pub use validate::{validate_form, FieldError, ValidationReport, MAX_DECIMAL_POINT};
pub use wizard::{FormTab, Wizard};
