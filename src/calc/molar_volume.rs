//! 온도 보정 기체 몰부피.
use crate::units::{celsius_to_kelvin, STP_TEMPERATURE_K};

/// 표준 상태(0 °C, 1 atm)의 이상기체 몰부피 [L/mol]
pub const STP_MOLAR_VOLUME_L_PER_MOL: f64 = 22.4;

/// 입력 컨트롤이 허용하는 실험 온도 하한 [°C]
pub const TEMPERATURE_MIN_C: f64 = 0.0;
/// 입력 컨트롤이 허용하는 실험 온도 상한 [°C]
pub const TEMPERATURE_MAX_C: f64 = 40.0;
/// 슬라이더 기본값 [°C]
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;

/// 주어진 온도에서의 이상기체 몰부피 [L/mol]를 계산한다.
///
/// Vm = 22.4 × (273.15 + T) / 273.15
///
/// 온도 범위는 입력 단계에서 제한하며 여기서는 검사하지 않는다.
pub fn molar_volume(temperature_c: f64) -> f64 {
    STP_MOLAR_VOLUME_L_PER_MOL * celsius_to_kelvin(temperature_c) / STP_TEMPERATURE_K
}

/// 온도를 입력 컨트롤 범위 [0, 40] °C로 제한한다.
pub fn clamp_temperature(temperature_c: f64) -> f64 {
    if temperature_c.is_nan() {
        return DEFAULT_TEMPERATURE_C;
    }
    temperature_c.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C)
}
