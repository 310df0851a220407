/// 표준 상태(STP) 기준 온도 [K]
pub const STP_TEMPERATURE_K: f64 = 273.15;

/// 섭씨 온도를 켈빈으로 변환한다.
pub fn celsius_to_kelvin(value_c: f64) -> f64 {
    value_c + STP_TEMPERATURE_K
}
