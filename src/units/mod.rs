//! 계산에 쓰이는 온도/체적 스케일 정의.

pub mod temperature;
pub mod volume;

pub use temperature::{celsius_to_kelvin, STP_TEMPERATURE_K};
pub use volume::{convert_volume, VolumeUnit};
