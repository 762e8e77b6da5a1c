//! Full device-form flow: editing, wizard navigation, submission

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use modcon_forms::{
    build_submission, from_data_points, to_data_points, validate_form, ConnectionForm,
    ConnectionSetting, ConsoleForm, DeviceBasics, FormTab, LayoutDraft, Wizard,
};
use modcon_layout::{ByteOrder, FunctionCode, ParameterConfig, RegisterRange};

fn empty_device() -> ConsoleForm<DeviceBasics> {
    ConsoleForm {
        basics: DeviceBasics {
            name: String::new(),
            make: String::new(),
            model: String::new(),
            usage: None,
            description: None,
        },
        connection: None,
        layout: LayoutDraft::default(),
    }
}

fn range(name: &str, start: u32, length: u16) -> RegisterRange {
    RegisterRange {
        range_name: name.to_string(),
        start_register: start,
        length,
        function_code: FunctionCode::HoldingRegisters,
    }
}

#[test]
fn wizard_flow_from_empty_to_submittable() {
    let mut form = empty_device();
    let mut wizard = Wizard::for_device();

    // Leaving the basics tab empty reveals its errors, and only its errors
    let report = validate_form(&form);
    wizard.next();
    let visible = wizard.visible_report(&report);
    assert!(!visible.basic_info.is_empty());
    assert!(visible.connection.is_empty());

    // Fill the form in
    form.basics.name = "Inverter".to_string();
    form.basics.make = "Acme".to_string();
    form.basics.model = "X1".to_string();
    form.connection = Some(ConnectionForm {
        setting: ConnectionSetting::Tcp {
            host: "192.168.1.20".to_string(),
            port: 502,
        },
        slave_id: 1,
    });
    form.layout.ranges.push(range("Main", 100, 4));
    let placed = form
        .layout
        .placed(&ParameterConfig::new("Voltage", "FLOAT32", "Main"));
    form.layout.parameters.push(placed);

    // Save reveals everything and passes
    let report = validate_form(&form);
    assert!(wizard.save(&report));
    assert!(wizard.is_revealed(FormTab::BasicInfo));
    assert!(wizard.is_revealed(FormTab::Parameters));

    let submission = build_submission(&form);
    assert_eq!(submission.data_points.len(), 1);
    assert_eq!(submission.data_points[0].range.start_address, 100);
}

#[test]
fn retype_in_place_resets_order_and_words() {
    // Changing the only parameter's type INT16 -> FLOAT32 resets AB -> ABCD
    // and 1 -> 2 words without moving it
    let mut form = empty_device();
    form.layout.ranges.push(range("Main", 0, 4));
    let placed = form
        .layout
        .placed(&ParameterConfig::new("Power", "INT16", "Main"));
    form.layout.parameters.push(placed);

    let before = &form.layout.parameters[0];
    assert_eq!(before.byte_order, ByteOrder::Ab);
    assert_eq!(before.word_count, Some(1));

    let retyped = form.layout.retyped(before, "FLOAT32");
    assert_eq!(retyped.byte_order, ByteOrder::Abcd);
    assert_eq!(retyped.word_count, Some(2));
    assert_eq!(retyped.effective_buffer_index(), 0);

    form.layout.parameters[0] = retyped;
    assert!(form.layout.check(&form.layout.parameters[0], Some("Power")).is_none());
}

#[test]
fn submission_shape_round_trips_exactly() {
    // The documented round trip: R1 @100 x4 fc3 with one FLOAT32 parameter
    let mut draft = LayoutDraft::default();
    draft.ranges.push(range("R1", 100, 4));
    let mut param = ParameterConfig::new("V", "FLOAT32", "R1");
    param.set_buffer_index(0);
    param.word_count = Some(2);
    param.byte_order = ByteOrder::Abcd;
    param.scaling_factor = 1.0;
    param.decimal_point = 1;
    draft.parameters.push(param.clone());

    let points = to_data_points(&draft);
    let json = serde_json::to_string(&points).unwrap();
    let parsed: Vec<modcon_forms::DataPoint> = serde_json::from_str(&json).unwrap();
    let rebuilt = from_data_points(&parsed);

    assert_eq!(rebuilt.ranges[0].start_register, 100);
    assert_eq!(rebuilt.ranges[0].length, 4);
    assert_eq!(
        rebuilt.ranges[0].function_code,
        FunctionCode::HoldingRegisters
    );
    assert_eq!(rebuilt.parameters, vec![param]);
}

#[test]
fn invalid_layout_blocks_submission() {
    let mut form = empty_device();
    form.basics.name = "Meter".to_string();
    form.basics.make = "Acme".to_string();
    form.basics.model = "M2".to_string();
    form.connection = Some(ConnectionForm {
        setting: ConnectionSetting::Tcp {
            host: "10.0.0.9".to_string(),
            port: 502,
        },
        slave_id: 1,
    });

    // Two registers only; a FLOAT64 cannot fit
    form.layout.ranges.push(range("Tiny", 0, 2));
    let mut wide = ParameterConfig::new("Energy", "FLOAT64", "Tiny");
    wide.set_buffer_index(0);
    form.layout.parameters.push(wide);

    let mut wizard = Wizard::for_device();
    let report = validate_form(&form);
    assert!(!wizard.save(&report));
    assert!(report
        .parameters
        .iter()
        .any(|e| e.message.contains("FLOAT64")));
}
