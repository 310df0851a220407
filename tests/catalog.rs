use gas_ppm_toolbox::catalog::{Catalog, CatalogError, ChemicalRecord};
use gas_ppm_toolbox::hazard::HazardInfo;

#[test]
fn builtin_catalog_has_five_chemicals_in_order() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.names(),
        vec!["Water (H2O)", "Ethanol", "THF", "Toluene", "n-Hexane"]
    );
    let ethanol = catalog.find_by_name("Ethanol").expect("ethanol");
    assert_eq!(ethanol.molecular_weight, 46.07);
    assert_eq!(ethanol.density, 0.789);
    assert_eq!(ethanol.purity_percent, 95.0);
    assert!(!ethanol.hazard.is_empty());
}

#[test]
fn find_by_name_trims_and_reports_missing() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.find_by_name("  THF ").expect("thf").name, "THF");
    assert!(matches!(catalog.find_by_name(""), Err(CatalogError::NotFound(_))));
    assert!(matches!(catalog.find_by_name("   "), Err(CatalogError::NotFound(_))));
    match catalog.find_by_name("Acetone") {
        Err(CatalogError::NotFound(name)) => assert_eq!(name, "Acetone"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn find_is_case_sensitive() {
    assert!(Catalog::builtin().find_by_name("ethanol").is_err());
}

#[test]
fn add_validates_properties() {
    let mut catalog = Catalog::empty();
    for (mw, density, purity, field) in [
        (0.0, 1.0, 100.0, "molecular_weight"),
        (58.08, 0.0, 99.5, "density"),
        (58.08, 0.79, 0.0, "purity_percent"),
        (58.08, 0.79, 100.1, "purity_percent"),
    ] {
        match catalog.add(ChemicalRecord::new("Acetone", mw, density, purity)) {
            Err(CatalogError::Validation { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected {field} rejection, got {other:?}"),
        }
    }
    assert!(matches!(
        catalog.add(ChemicalRecord::new("  ", 58.08, 0.79, 99.5)),
        Err(CatalogError::EmptyName)
    ));
    assert!(catalog.is_empty());

    catalog
        .add(ChemicalRecord::new(" Acetone ", 58.08, 0.79, 99.5))
        .expect("valid row");
    assert_eq!(catalog.names(), vec!["Acetone"]);
}

#[test]
fn duplicate_names_are_rejected() {
    let mut catalog = Catalog::builtin();
    let err = catalog
        .add(ChemicalRecord::new("Ethanol", 46.07, 0.789, 99.9))
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(ref n) if n == "Ethanol"));
    assert_eq!(catalog.len(), 5);
}

#[test]
fn update_replaces_row_and_allows_rename() {
    let mut catalog = Catalog::builtin();
    catalog
        .update("Ethanol", ChemicalRecord::new("Ethanol (abs)", 46.07, 0.789, 99.8))
        .expect("rename");
    assert!(!catalog.contains("Ethanol"));
    let row = catalog.find_by_name("Ethanol (abs)").expect("renamed");
    assert_eq!(row.purity_percent, 99.8);
    assert_eq!(catalog.names()[1], "Ethanol (abs)");

    // 다른 행 이름으로 바꾸는 것은 거부
    let err = catalog
        .update("THF", ChemicalRecord::new("Toluene", 72.11, 0.89, 99.5))
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(_)));
    assert!(catalog.contains("THF"));

    let err = catalog
        .update("THF", ChemicalRecord::new("THF", 72.11, -0.89, 99.5))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { field: "density", .. }));
    assert_eq!(catalog.find_by_name("THF").expect("thf").density, 0.89);
}

#[test]
fn remove_and_reset() {
    let mut catalog = Catalog::builtin();
    let removed = catalog.remove("Toluene").expect("remove");
    assert_eq!(removed.name, "Toluene");
    assert_eq!(catalog.len(), 4);
    assert!(matches!(catalog.remove("Toluene"), Err(CatalogError::NotFound(_))));
    catalog.reset();
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn hazard_can_be_edited_without_validation() {
    let mut catalog = Catalog::builtin();
    catalog
        .set_hazard("THF", HazardInfo::new("", "", "과산화물 주의"))
        .expect("set hazard");
    let hazard = &catalog.find_by_name("THF").expect("thf").hazard;
    assert_eq!(hazard.notes, "과산화물 주의");
    assert_eq!(hazard.missing_fields().len(), 2);
}

#[test]
fn toml_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    let mut catalog = Catalog::builtin();
    catalog
        .add(ChemicalRecord::new("Acetone", 58.08, 0.79, 99.5))
        .expect("add");
    catalog.save(&path).expect("save");

    let loaded = Catalog::load(&path).expect("load");
    assert_eq!(loaded, catalog);
}

#[test]
fn import_rejects_invalid_rows() {
    let src = r#"
[[chemical]]
name = "Acetone"
molecular_weight = 58.08
density = 0.79
purity_percent = 99.5

[[chemical]]
name = "Broken"
molecular_weight = 10.0
density = 0.0
purity_percent = 100.0
"#;
    assert!(matches!(
        Catalog::from_toml_str(src),
        Err(CatalogError::Validation { field: "density", .. })
    ));

    let ok = Catalog::from_toml_str(&src.replace("density = 0.0", "density = 1.2")).expect("valid");
    assert_eq!(ok.names(), vec!["Acetone", "Broken"]);
    assert!(ok.records()[0].hazard.is_empty());
}

#[test]
fn import_rejects_duplicate_rows() {
    let src = r#"
[[chemical]]
name = "THF"
molecular_weight = 72.11
density = 0.89
purity_percent = 99.5

[[chemical]]
name = "THF"
molecular_weight = 72.11
density = 0.89
purity_percent = 99.0
"#;
    assert!(matches!(
        Catalog::from_toml_str(src),
        Err(CatalogError::DuplicateName(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        Catalog::load(&dir.path().join("none.toml")),
        Err(CatalogError::Io(_))
    ));
}
