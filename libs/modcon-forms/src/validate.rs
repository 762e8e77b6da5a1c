//! Whole-form validation
//!
//! Aggregates the layout, placement and scaling checks into one
//! pass/fail report grouped by form tab. Validation is total: it always
//! returns a report, never panics and never returns an error for bad
//! user data.

use crate::state::{ConnectionSetting, ConsoleForm, FormBasics, MAX_SLAVE_ID};
use modcon_calc::{Bitmask, ScalingEquation};
use modcon_layout::{names_match, MAX_STRING_WORDS, MIN_STRING_WORDS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum display rounding accepted by the console
pub const MAX_DECIMAL_POINT: u8 = 10;

/// One field-scoped validation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation result grouped by form tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub basic_info: Vec<FieldError>,
    pub connection: Vec<FieldError>,
    pub registers: Vec<FieldError>,
    pub parameters: Vec<FieldError>,
    pub general: Vec<FieldError>,
}

impl ValidationReport {
    /// Empty, valid report
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    /// Recompute `is_valid` from the error lists
    pub fn finish(mut self) -> Self {
        self.is_valid = self.basic_info.is_empty()
            && self.connection.is_empty()
            && self.registers.is_empty()
            && self.parameters.is_empty()
            && self.general.is_empty();
        self
    }

    /// Fold another report's errors into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.basic_info.extend(other.basic_info);
        self.connection.extend(other.connection);
        self.registers.extend(other.registers);
        self.parameters.extend(other.parameters);
        self.general.extend(other.general);
        self.is_valid = self.is_valid && other.is_valid;
    }

    /// Total error count across all tabs
    pub fn error_count(&self) -> usize {
        self.basic_info.len()
            + self.connection.len()
            + self.registers.len()
            + self.parameters.len()
            + self.general.len()
    }
}

/// Validate a whole device or template form
pub fn validate_form<B: FormBasics>(form: &ConsoleForm<B>) -> ValidationReport {
    let report = ValidationReport {
        is_valid: false,
        basic_info: form.basics.validate_basics(),
        connection: if B::requires_connection() {
            validate_connection(form)
        } else {
            Vec::new()
        },
        registers: validate_ranges(form),
        parameters: validate_parameters(form),
        general: Vec::new(),
    }
    .finish();
    debug!(
        "Validated {} form: valid={} errors={}",
        B::kind(),
        report.is_valid,
        report.error_count()
    );
    report
}

fn validate_connection<B: FormBasics>(form: &ConsoleForm<B>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let connection = match &form.connection {
        Some(connection) => connection,
        None => {
            errors.push(FieldError::new("connection", "connection settings are required"));
            return errors;
        },
    };

    match &connection.setting {
        ConnectionSetting::Tcp { host, port } => {
            if host.trim().is_empty() {
                errors.push(FieldError::new("host", "IP address is required"));
            }
            if *port == 0 {
                errors.push(FieldError::new("port", "port must be between 1 and 65535"));
            }
        },
        ConnectionSetting::Rtu { serial_port, .. } => {
            if serial_port.trim().is_empty() {
                errors.push(FieldError::new("serialPort", "serial port is required"));
            }
        },
    }

    if connection.slave_id == 0 {
        errors.push(FieldError::new(
            "slaveId",
            format!("slave id must be between 1 and {}", MAX_SLAVE_ID),
        ));
    }

    errors
}

fn validate_ranges<B: FormBasics>(form: &ConsoleForm<B>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let ranges = &form.layout.ranges;

    if ranges.is_empty() && !form.layout.parameters.is_empty() {
        errors.push(FieldError::new(
            "ranges",
            "at least one register range is required before parameters can be added",
        ));
    }

    for (i, range) in ranges.iter().enumerate() {
        let field = format!("ranges[{}]", i);
        if range.range_name.trim().is_empty() {
            errors.push(FieldError::new(&field, "range name is required"));
        }
        if range.length < 1 {
            errors.push(FieldError::new(
                &field,
                format!("range '{}' must request at least 1 register", range.range_name),
            ));
        }
        let duplicated = ranges[..i]
            .iter()
            .any(|other| names_match(&other.range_name, &range.range_name));
        if duplicated && !range.range_name.trim().is_empty() {
            errors.push(FieldError::new(
                &field,
                format!("range name '{}' is already in use", range.range_name.trim()),
            ));
        }
    }

    errors
}

fn validate_parameters<B: FormBasics>(form: &ConsoleForm<B>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let parameters = &form.layout.parameters;

    for (i, param) in parameters.iter().enumerate() {
        let field = format!("parameters[{}]", i);

        if param.name.trim().is_empty() {
            errors.push(FieldError::new(&field, "parameter name is required"));
            continue;
        }

        // Duplicate names would make the placement check blind to each
        // other (it excludes by name), so they are reported here
        let duplicated = parameters[..i]
            .iter()
            .any(|other| names_match(&other.name, &param.name));
        if duplicated {
            errors.push(FieldError::new(
                &field,
                format!("parameter name '{}' is already in use", param.name.trim()),
            ));
            continue;
        }

        let data_type = match param.try_data_type() {
            Some(dt) => dt,
            None => {
                errors.push(FieldError::new(
                    &field,
                    format!("unrecognized data type '{}'", param.data_type),
                ));
                continue;
            },
        };

        if !param.byte_order.matches(data_type) {
            errors.push(FieldError::new(
                &field,
                format!(
                    "byte order {} is not valid for data type {}",
                    param.byte_order, data_type
                ),
            ));
        }

        if data_type.is_bit() {
            match param.bit_position {
                None => errors.push(FieldError::new(
                    &field,
                    "bit position is required for bit parameters",
                )),
                Some(bit) if bit > 15 => errors.push(FieldError::new(
                    &field,
                    format!("bit position {} must be between 0 and 15", bit),
                )),
                Some(_) => {},
            }
        }

        if data_type.is_string() {
            match param.word_count {
                None => errors.push(FieldError::new(
                    &field,
                    "word count is required for string parameters",
                )),
                Some(words) if !(MIN_STRING_WORDS..=MAX_STRING_WORDS).contains(&words) => {
                    errors.push(FieldError::new(
                        &field,
                        format!(
                            "word count {} must be between {} and {}",
                            words, MIN_STRING_WORDS, MAX_STRING_WORDS
                        ),
                    ))
                },
                Some(_) => {},
            }
        }

        if param.decimal_point > MAX_DECIMAL_POINT {
            errors.push(FieldError::new(
                &field,
                format!(
                    "decimal places {} must be between 0 and {}",
                    param.decimal_point, MAX_DECIMAL_POINT
                ),
            ));
        }

        if let (Some(min), Some(max)) = (param.min_value, param.max_value) {
            if min >= max {
                errors.push(FieldError::new(
                    &field,
                    format!("minimum value {} must be below maximum value {}", min, max),
                ));
            }
        }

        if let Some(mask) = &param.bitmask {
            if let Err(e) = Bitmask::parse(mask) {
                errors.push(FieldError::new(&field, e.to_string()));
            }
        }

        if let Some(equation) = param.scaling_equation.as_deref() {
            if !equation.trim().is_empty() {
                if let Err(e) = ScalingEquation::compile(equation) {
                    errors.push(FieldError::new(&field, e.to_string()));
                }
            }
        }

        if let Some(conflict) = form.layout.check(param, Some(&param.name)) {
            errors.push(FieldError::new(&field, conflict.to_string()));
        }
    }

    errors
}
