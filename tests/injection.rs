use approx::assert_relative_eq;
use gas_ppm_toolbox::calc::{derive, molar_volume, required_volume_ul, CalcError};

// Water (H2O): MW 18.015, ρ 1.00, 순도 100 %
fn water_ul(ppm: f64, air_l: f64, temp_c: f64) -> f64 {
    required_volume_ul(ppm, 18.015, air_l, molar_volume(temp_c), 1.0, 100.0).expect("water")
}

#[test]
fn ethanol_twelve_liters_thousand_ppm() {
    let ul = required_volume_ul(1000.0, 46.07, 12.0, molar_volume(23.5), 0.789, 95.0)
        .expect("ethanol");
    assert_relative_eq!(ul, 30.3185, epsilon = 1e-3);
}

#[test]
fn water_at_room_temperature() {
    assert_relative_eq!(water_ul(1000.0, 12.0, 25.0), 8.84166, epsilon = 1e-4);
}

#[test]
fn volume_is_linear_in_ppm_and_air() {
    let base = water_ul(1000.0, 12.0, 25.0);
    assert_relative_eq!(water_ul(2000.0, 12.0, 25.0), 2.0 * base, max_relative = 1e-12);
    assert_relative_eq!(water_ul(1000.0, 24.0, 25.0), 2.0 * base, max_relative = 1e-12);
    assert_relative_eq!(water_ul(500.0, 12.0, 25.0), 4.42083, epsilon = 1e-4);
}

#[test]
fn warmer_air_needs_less_reagent() {
    assert!(water_ul(1000.0, 12.0, 0.0) > water_ul(1000.0, 12.0, 40.0));
    assert_relative_eq!(water_ul(1000.0, 12.0, 0.0), 9.65089, epsilon = 1e-4);
}

#[test]
fn zero_ppm_or_zero_air_needs_nothing() {
    assert_eq!(water_ul(0.0, 12.0, 25.0), 0.0);
    assert_eq!(water_ul(1000.0, 0.0, 25.0), 0.0);
}

#[test]
fn derivation_matches_direct_formula() {
    let vm = molar_volume(25.0);
    let d = derive(1000.0, 92.14, 12.0, vm, 0.87, 99.5).expect("toluene");
    let direct = required_volume_ul(1000.0, 92.14, 12.0, vm, 0.87, 99.5).expect("toluene");
    assert_relative_eq!(d.volume_ul, direct, max_relative = 1e-12);
    assert_relative_eq!(d.volume_ml * 1000.0, d.volume_ul, max_relative = 1e-12);
    assert_relative_eq!(d.moles, 1000.0e-6 * 12.0 / vm, max_relative = 1e-12);
    assert_relative_eq!(d.mass_g, d.moles * 92.14, max_relative = 1e-12);
    assert_relative_eq!(d.volume_ul, 52.2403, epsilon = 1e-3);
}

#[test]
fn invalid_chemical_is_reported_not_infinite() {
    let vm = molar_volume(25.0);
    for (mw, density, purity) in [
        (18.015, 0.0, 100.0),
        (18.015, 1.0, 0.0),
        (18.015, 1.0, 120.0),
        (0.0, 1.0, 100.0),
        (18.015, f64::NAN, 100.0),
    ] {
        let res = required_volume_ul(1000.0, mw, 12.0, vm, density, purity);
        assert!(
            matches!(res, Err(CalcError::InvalidChemical(_))),
            "mw={mw} density={density} purity={purity}: {res:?}"
        );
    }
}

#[test]
fn negative_inputs_are_rejected() {
    let vm = molar_volume(25.0);
    assert!(matches!(
        required_volume_ul(-1.0, 18.015, 12.0, vm, 1.0, 100.0),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(
        required_volume_ul(1000.0, 18.015, -12.0, vm, 1.0, 100.0),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(
        derive(1000.0, 18.015, 12.0, 0.0, 1.0, 100.0),
        Err(CalcError::InvalidInput(_))
    ));
}
