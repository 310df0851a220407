use approx::assert_relative_eq;
use gas_ppm_toolbox::calc::{CalcError, CalculationInput, Tool, ToolRecommendation};
use gas_ppm_toolbox::catalog::{Catalog, CatalogError, ChemicalRecord};
use gas_ppm_toolbox::hazard::HazardInfo;
use gas_ppm_toolbox::session::{Session, SessionEvent};

#[test]
fn default_session_computes_water() {
    let session = Session::default();
    assert_eq!(session.selected(), "Water (H2O)");
    let report = session.result().as_ref().expect("report");
    assert_relative_eq!(report.required_ul, 8.84166, epsilon = 1e-4);
    assert_eq!(
        report.recommendation,
        ToolRecommendation::Use {
            tool: Tool::Syringe,
            setting_ul: 8.84
        }
    );
}

#[test]
fn every_input_event_recomputes() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::SelectChemical("THF".into()))
        .expect("select");
    let report = session.result().as_ref().expect("thf");
    assert_eq!(report.chemical.name, "THF");
    assert_eq!(report.recommendation.tool(), Some(Tool::Pipette));
    assert_eq!(report.recommendation.setting_ul(), Some(40.0));

    session.handle(SessionEvent::SetTargetPpm(500.0)).expect("ppm");
    let half = session.result().as_ref().expect("thf").required_ul;
    assert_relative_eq!(half, 39.9652 / 2.0, epsilon = 1e-3);

    session.handle(SessionEvent::SetAirVolume(0.0)).expect("air");
    assert_eq!(session.result().as_ref().expect("thf").required_ul, 0.0);
}

#[test]
fn temperature_event_is_clamped() {
    let mut session = Session::default();
    session.handle(SessionEvent::SetTemperature(80.0)).expect("temp");
    assert_eq!(session.input().temperature_c, 40.0);
    let report = session.result().as_ref().expect("report");
    assert_relative_eq!(report.molar_volume_l_per_mol, 25.680249, epsilon = 1e-6);

    session.handle(SessionEvent::SetTemperature(-10.0)).expect("temp");
    assert_eq!(session.input().temperature_c, 0.0);
}

#[test]
fn initial_input_is_clamped() {
    let session = Session::new(
        Catalog::builtin(),
        CalculationInput {
            temperature_c: 100.0,
            ..CalculationInput::default()
        },
    );
    assert_eq!(session.input().temperature_c, 40.0);
}

#[test]
fn large_volume_is_out_of_range() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::SelectChemical("n-Hexane".into()))
        .expect("select");
    assert_eq!(
        session.result().as_ref().expect("hexane").recommendation.setting_ul(),
        Some(67.5)
    );
    session.handle(SessionEvent::SetTargetPpm(2000.0)).expect("ppm");
    assert!(matches!(
        session.result().as_ref().expect("hexane").recommendation,
        ToolRecommendation::OutOfRange { .. }
    ));
}

#[test]
fn removing_selected_chemical_leaves_stale_selection() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::SelectChemical("Ethanol".into()))
        .expect("select");
    session
        .handle(SessionEvent::RemoveChemical("Ethanol".into()))
        .expect("remove");
    assert_eq!(
        session.result(),
        &Err(CalcError::ChemicalNotFound("Ethanol".into()))
    );
    assert!(session.selected_hazard().is_none());

    session.handle(SessionEvent::ResetCatalog).expect("reset");
    assert!(session.result().is_ok());
}

#[test]
fn rejected_edit_keeps_catalog() {
    let mut session = Session::default();
    let before = session.catalog().clone();
    let err = session
        .handle(SessionEvent::AddChemical(ChemicalRecord::new("Bad", 10.0, 0.0, 100.0)))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert_eq!(session.catalog(), &before);
    assert!(session.result().is_ok());
}

#[test]
fn renaming_selected_row_moves_selection() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::UpdateChemical {
            name: "Water (H2O)".into(),
            record: ChemicalRecord::new("Water", 18.015, 1.0, 100.0),
        })
        .expect("rename");
    assert_eq!(session.selected(), "Water");
    assert!(session.result().is_ok());
}

#[test]
fn edited_properties_flow_into_result() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::UpdateChemical {
            name: "Water (H2O)".into(),
            record: ChemicalRecord::new("Water (H2O)", 18.015, 1.0, 50.0),
        })
        .expect("edit");
    let report = session.result().as_ref().expect("water");
    assert_relative_eq!(report.required_ul, 2.0 * 8.84166, epsilon = 1e-3);
}

#[test]
fn hazard_event_updates_selected_hazard() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::SetHazard {
            name: "Water (H2O)".into(),
            hazard: HazardInfo::new("없음", "없음", ""),
        })
        .expect("hazard");
    let hazard = session.selected_hazard().expect("hazard");
    assert_eq!(hazard.flammability, "없음");
}

#[test]
fn replace_catalog_with_empty_gives_not_found() {
    let mut session = Session::default();
    session
        .handle(SessionEvent::ReplaceCatalog(Catalog::empty()))
        .expect("replace");
    assert!(matches!(session.result(), Err(CalcError::ChemicalNotFound(_))));
}
