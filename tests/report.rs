use gas_ppm_toolbox::i18n::Translator;
use gas_ppm_toolbox::report;
use gas_ppm_toolbox::session::{Session, SessionEvent};

#[test]
fn english_report_lines() {
    let tr = Translator::new("en-us");
    let mut session = Session::default();
    session
        .handle(SessionEvent::SelectChemical("Ethanol".into()))
        .expect("select");
    session.handle(SessionEvent::SetTemperature(23.5)).expect("temp");
    let lines = report::format_report(&tr, session.result());
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("Ethanol"), "{}", lines[0]);
    assert!(lines[0].contains("30.32"), "{}", lines[0]);
    assert!(lines[1].contains("23.5"), "{}", lines[1]);
    assert!(lines[3].contains("30.3"), "{}", lines[3]);
    assert!(lines[3].to_lowercase().contains("pipette"), "{}", lines[3]);
}

#[test]
fn stale_selection_asks_to_reselect() {
    let tr = Translator::new("ko-kr");
    let mut session = Session::default();
    session
        .handle(SessionEvent::RemoveChemical("Water (H2O)".into()))
        .expect("remove");
    let lines = report::format_report(&tr, session.result());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Water (H2O)"));
}

#[test]
fn detail_lines_show_steps() {
    let tr = Translator::new("en-us");
    let session = Session::default();
    let r = session.result().as_ref().expect("water");
    let lines = report::format_detail(&tr, r);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("18.015"));
    assert!(lines[2].contains("8.84"));
}

#[test]
fn settings_use_tool_precision() {
    use gas_ppm_toolbox::calc::Tool;
    assert_eq!(report::format_setting(Tool::Syringe, 8.84), "8.84");
    assert_eq!(report::format_setting(Tool::Pipette, 40.0), "40.0");
    assert_eq!(report::format_ul(30.318498), "30.32");
}
