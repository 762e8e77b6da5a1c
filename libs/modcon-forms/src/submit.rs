//! Submission and reading wire shapes
//!
//! The persistence service expects a device/template as
//! `{ deviceBasics, connectionSetting, dataPoints[] }` where each data
//! point is `{ range: {startAddress, count, fc}, parser: {parameters} }`.
//! Readings come back as `{ deviceId, readings: [{name, value}] }` and
//! are rendered through the scaling pipeline.

use crate::state::{ConnectionForm, ConsoleForm, LayoutDraft};
use modcon_calc::{render_reading, DisplayValue, DisplayedReading};
use modcon_layout::{names_match, params_in_range, ParameterConfig, RegisterRange};
use serde::{Deserialize, Serialize};

/// Wire shape of one register range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPointRange {
    #[serde(rename = "startAddress")]
    pub start_address: u32,
    pub count: u16,
    pub fc: modcon_layout::FunctionCode,
}

/// Wire shape of a range's parsing rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPointParser {
    pub parameters: Vec<ParameterConfig>,
}

/// One register range plus its parameters, as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub range: DataPointRange,
    pub parser: DataPointParser,
}

/// A finished device/template ready for the persistence service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission<B> {
    #[serde(rename = "deviceBasics")]
    pub basics: B,
    #[serde(
        rename = "connectionSetting",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub connection: Option<ConnectionForm>,
    #[serde(rename = "dataPoints")]
    pub data_points: Vec<DataPoint>,
}

/// Convert a layout draft to the submission `dataPoints` array
///
/// One data point per range, in range order, carrying that range's
/// parameters.
pub fn to_data_points(draft: &LayoutDraft) -> Vec<DataPoint> {
    draft
        .ranges
        .iter()
        .map(|range| DataPoint {
            range: DataPointRange {
                start_address: range.start_register,
                count: range.length,
                fc: range.function_code,
            },
            parser: DataPointParser {
                parameters: params_in_range(&draft.parameters, &range.range_name)
                    .cloned()
                    .collect(),
            },
        })
        .collect()
}

/// Rebuild a layout draft from a submission `dataPoints` array
///
/// The wire range carries no name; it is recovered from the parameters'
/// `registerRange` key, or synthesized (`range_1`, `range_2`, ...) for a
/// range with no parameters.
pub fn from_data_points(points: &[DataPoint]) -> LayoutDraft {
    let mut draft = LayoutDraft::default();

    for (i, point) in points.iter().enumerate() {
        let range_name = point
            .parser
            .parameters
            .first()
            .map(|p| p.register_range.trim().to_string())
            .unwrap_or_else(|| format!("range_{}", i + 1));

        draft.ranges.push(RegisterRange {
            range_name,
            start_register: point.range.start_address,
            length: point.range.count,
            function_code: point.range.fc,
        });
        draft.parameters.extend(point.parser.parameters.iter().cloned());
    }

    draft
}

/// Build the full submission object for a finished form
pub fn build_submission<B: Clone>(form: &ConsoleForm<B>) -> Submission<B> {
    Submission {
        basics: form.basics.clone(),
        connection: form.connection.clone(),
        data_points: to_data_points(&form.layout),
    }
}

/// One raw reading entry from the read service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    pub name: String,
    pub value: f64,
}

/// A decoded device reading as delivered by the read service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReading {
    #[serde(rename = "deviceId")]
    pub device_id: String,
    pub readings: Vec<RawReading>,
}

/// Render a device reading through the parameters' scaling rules
///
/// Readings without a matching parameter pass through unscaled. A
/// reading whose parameter configuration fails at runtime comes back
/// unparseable; the rest of the set is unaffected.
pub fn display_readings(
    reading: &DeviceReading,
    parameters: &[ParameterConfig],
) -> Vec<DisplayedReading> {
    reading
        .readings
        .iter()
        .map(|raw| {
            match parameters.iter().find(|p| names_match(&p.name, &raw.name)) {
                Some(param) => render_reading(param, raw.value),
                None => DisplayedReading {
                    name: raw.name.clone(),
                    raw: raw.value,
                    display: DisplayValue::Value(raw.value),
                    unit: None,
                    out_of_bounds: false,
                },
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use modcon_layout::FunctionCode;

    fn draft() -> LayoutDraft {
        let mut draft = LayoutDraft::default();
        draft.ranges.push(RegisterRange {
            range_name: "R1".to_string(),
            start_register: 100,
            length: 4,
            function_code: FunctionCode::HoldingRegisters,
        });
        let mut p = ParameterConfig::new("V", "FLOAT32", "R1");
        p.set_buffer_index(0);
        p.decimal_point = 1;
        draft.parameters.push(p);
        draft
    }

    #[test]
    fn test_wire_shape() {
        let points = to_data_points(&draft());
        let json = serde_json::to_value(&points).unwrap();
        assert_eq!(json[0]["range"]["startAddress"], 100);
        assert_eq!(json[0]["range"]["count"], 4);
        assert_eq!(json[0]["range"]["fc"], 3);
        assert_eq!(json[0]["parser"]["parameters"][0]["name"], "V");
    }

    #[test]
    fn test_round_trip_preserves_range_and_parameter() {
        let original = draft();
        let rebuilt = from_data_points(&to_data_points(&original));

        assert_eq!(rebuilt.ranges.len(), 1);
        assert_eq!(rebuilt.ranges[0].start_register, 100);
        assert_eq!(rebuilt.ranges[0].length, 4);
        assert_eq!(
            rebuilt.ranges[0].function_code,
            FunctionCode::HoldingRegisters
        );
        assert_eq!(rebuilt.parameters, original.parameters);
    }

    #[test]
    fn test_parameterless_range_gets_synthesized_name() {
        let mut original = draft();
        original.parameters.clear();

        let rebuilt = from_data_points(&to_data_points(&original));
        assert_eq!(rebuilt.ranges[0].range_name, "range_1");
    }

    #[test]
    fn test_parameters_follow_their_range() {
        let mut original = draft();
        original.ranges.push(RegisterRange {
            range_name: "R2".to_string(),
            start_register: 200,
            length: 2,
            function_code: FunctionCode::InputRegisters,
        });
        let mut p2 = ParameterConfig::new("I", "INT16", "R2");
        p2.set_buffer_index(0);
        original.parameters.push(p2);

        let points = to_data_points(&original);
        assert_eq!(points[0].parser.parameters.len(), 1);
        assert_eq!(points[0].parser.parameters[0].name, "V");
        assert_eq!(points[1].parser.parameters.len(), 1);
        assert_eq!(points[1].parser.parameters[0].name, "I");
    }

    #[test]
    fn test_display_readings_matches_by_name() {
        let draft = draft();
        let reading = DeviceReading {
            device_id: "dev-1".to_string(),
            readings: vec![
                RawReading {
                    name: "v".to_string(),
                    value: 230.46,
                },
                RawReading {
                    name: "unknown".to_string(),
                    value: 7.0,
                },
            ],
        };

        let displayed = display_readings(&reading, &draft.parameters);
        assert_eq!(displayed.len(), 2);
        assert_eq!(displayed[0].display, DisplayValue::Value(230.5));
        assert_eq!(displayed[1].display, DisplayValue::Value(7.0));
    }
}
