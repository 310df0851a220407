use approx::assert_relative_eq;
use gas_ppm_toolbox::calc::{
    clamp_temperature, molar_volume,
    molar_volume::{DEFAULT_TEMPERATURE_C, STP_MOLAR_VOLUME_L_PER_MOL},
};

#[test]
fn molar_volume_at_zero_celsius_is_stp() {
    assert_relative_eq!(molar_volume(0.0), STP_MOLAR_VOLUME_L_PER_MOL, epsilon = 1e-12);
}

#[test]
fn molar_volume_scales_with_absolute_temperature() {
    assert_relative_eq!(molar_volume(25.0), 24.450156, epsilon = 1e-6);
    assert_relative_eq!(molar_volume(23.5), 24.327146, epsilon = 1e-6);
    assert_relative_eq!(molar_volume(40.0), 25.680249, epsilon = 1e-6);
}

#[test]
fn molar_volume_increases_monotonically() {
    let mut prev = molar_volume(0.0);
    for step in 1..=80 {
        let vm = molar_volume(step as f64 * 0.5);
        assert!(vm > prev, "Vm({}) = {vm} <= {prev}", step as f64 * 0.5);
        prev = vm;
    }
}

#[test]
fn temperature_is_clamped_to_input_range() {
    assert_eq!(clamp_temperature(-5.0), 0.0);
    assert_eq!(clamp_temperature(55.0), 40.0);
    assert_eq!(clamp_temperature(23.5), 23.5);
    assert_eq!(clamp_temperature(f64::NAN), DEFAULT_TEMPERATURE_C);
}
