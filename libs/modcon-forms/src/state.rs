//! Form state for device and template editors
//!
//! Devices and templates share one form core; the only difference is the
//! metadata block (make/model/usage vs. device type) and whether a
//! connection tab exists. The state is plain caller-owned data - the
//! validation and allocation operations over it are pure functions.

use crate::validate::FieldError;
use modcon_layout::{check_placement, propose_index, ParameterConfig, PlacementConflict, RegisterRange};
use serde::{Deserialize, Serialize};

/// Highest addressable Modbus slave id accepted by the console
pub const MAX_SLAVE_ID: u8 = 255;

/// Transport-specific connection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ConnectionSetting {
    /// Modbus TCP
    Tcp {
        host: String,
        #[serde(default = "default_tcp_port")]
        port: u16,
    },
    /// Modbus RTU over a serial line
    Rtu {
        serial_port: String,
        #[serde(default = "default_baud_rate")]
        baud_rate: u32,
        #[serde(default = "default_data_bits")]
        data_bits: u8,
        #[serde(default = "default_stop_bits")]
        stop_bits: u8,
        #[serde(default = "default_parity")]
        parity: String,
    },
}

fn default_tcp_port() -> u16 {
    502
}
fn default_baud_rate() -> u32 {
    9600
}
fn default_data_bits() -> u8 {
    8
}
fn default_stop_bits() -> u8 {
    1
}
fn default_parity() -> String {
    "None".to_string()
}

/// Connection settings plus the slave id polled through them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionForm {
    #[serde(flatten)]
    pub setting: ConnectionSetting,
    #[serde(default = "default_slave_id")]
    pub slave_id: u8,
}

fn default_slave_id() -> u8 {
    1
}

/// Metadata block of a device form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceBasics {
    pub name: String,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Metadata block of a template (device driver) form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBasics {
    pub name: String,
    pub device_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Metadata contract shared by device and template forms
pub trait FormBasics {
    /// Whether this form kind carries a connection tab
    fn requires_connection() -> bool;

    /// Form kind label for logging and error scoping
    fn kind() -> &'static str;

    /// Required-field checks for the basics tab
    fn validate_basics(&self) -> Vec<FieldError>;
}

impl FormBasics for DeviceBasics {
    fn requires_connection() -> bool {
        true
    }

    fn kind() -> &'static str {
        "device"
    }

    fn validate_basics(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "device name is required"));
        }
        if self.make.trim().is_empty() {
            errors.push(FieldError::new("make", "make is required"));
        }
        if self.model.trim().is_empty() {
            errors.push(FieldError::new("model", "model is required"));
        }
        errors
    }
}

impl FormBasics for TemplateBasics {
    fn requires_connection() -> bool {
        false
    }

    fn kind() -> &'static str {
        "template"
    }

    fn validate_basics(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "template name is required"));
        }
        if self.device_type.trim().is_empty() {
            errors.push(FieldError::new("deviceType", "device type is required"));
        }
        errors
    }
}

/// Register ranges and parameters being edited
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDraft {
    #[serde(default)]
    pub ranges: Vec<RegisterRange>,
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

impl LayoutDraft {
    /// Next free buffer offset in a range, excluding the parameter being
    /// edited (by name) when given
    pub fn propose_buffer_index(&self, range_name: &str, excluding_name: Option<&str>) -> u32 {
        propose_index(&self.parameters, range_name, excluding_name)
    }

    /// Copy of a new parameter with its offset allocated
    pub fn placed(&self, param: &ParameterConfig) -> ParameterConfig {
        let mut placed = param.clone();
        placed.set_buffer_index(self.propose_buffer_index(&param.register_range, None));
        placed
    }

    /// Copy of an existing parameter with a new data type applied and its
    /// offset re-allocated
    pub fn retyped(&self, param: &ParameterConfig, new_type: &str) -> ParameterConfig {
        let mut updated = param.with_data_type(new_type);
        updated.set_buffer_index(
            self.propose_buffer_index(&param.register_range, Some(&param.name)),
        );
        updated
    }

    /// Placement verdict for a candidate against this draft
    pub fn check(
        &self,
        candidate: &ParameterConfig,
        excluding_name: Option<&str>,
    ) -> Option<PlacementConflict> {
        check_placement(candidate, &self.parameters, &self.ranges, excluding_name)
    }
}

/// One device or template being built/edited
///
/// Transient, in-memory state: it has no server-side identity until it is
/// converted to the submission shape and sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleForm<B> {
    pub basics: B,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionForm>,
    #[serde(default)]
    pub layout: LayoutDraft,
}

/// Device editor form
pub type DeviceForm = ConsoleForm<DeviceBasics>;
/// Template editor form
pub type TemplateForm = ConsoleForm<TemplateBasics>;
