use gas_ppm_toolbox::calc::{recommend_tool, CalcError, Tool, ToolRecommendation};

fn use_tool(ul: f64) -> (Tool, f64) {
    match recommend_tool(ul).expect("recommendation") {
        ToolRecommendation::Use { tool, setting_ul } => (tool, setting_ul),
        other => panic!("{ul} uL: unexpected {other:?}"),
    }
}

#[test]
fn syringe_up_to_ten_microliters() {
    assert_eq!(use_tool(0.0), (Tool::Syringe, 0.0));
    assert_eq!(use_tool(8.841661), (Tool::Syringe, 8.84));
    assert_eq!(use_tool(10.0), (Tool::Syringe, 10.0));
}

#[test]
fn pipette_between_ten_and_hundred() {
    assert_eq!(use_tool(10.01).0, Tool::Pipette);
    assert_eq!(use_tool(39.965203), (Tool::Pipette, 40.0));
    assert_eq!(use_tool(67.458793), (Tool::Pipette, 67.5));
    assert_eq!(use_tool(100.0), (Tool::Pipette, 100.0));
}

#[test]
fn above_pipette_capacity_is_out_of_range() {
    let rec = recommend_tool(100.5).expect("recommendation");
    assert_eq!(rec, ToolRecommendation::OutOfRange { required_ul: 100.5 });
    assert_eq!(rec.tool(), None);
    assert_eq!(rec.setting_ul(), None);
}

#[test]
fn setting_rounding_per_tool() {
    assert_eq!(Tool::Syringe.round_setting(3.14159), 3.14);
    assert_eq!(Tool::Pipette.round_setting(30.3185), 30.3);
    assert_eq!(Tool::Syringe.setting_decimals(), 2);
    assert_eq!(Tool::Pipette.capacity_ul(), 100.0);
}

#[test]
fn negative_or_nan_volume_is_error() {
    assert!(matches!(recommend_tool(-0.1), Err(CalcError::InvalidInput(_))));
    assert!(matches!(recommend_tool(f64::NAN), Err(CalcError::InvalidInput(_))));
}
