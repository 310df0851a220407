//! 목표 PPM을 맞추기 위한 액체 시약 주입량 계산.
use super::CalcError;
use crate::units::{convert_volume, VolumeUnit};

/// PPM → 몰분율 환산 계수
const PPM_TO_FRACTION: f64 = 1e-6;

/// 주입량 계산의 단계별 중간값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectionDerivation {
    /// 기상에 필요한 분석물 몰수 [mol]
    pub moles: f64,
    /// 순수 분석물 질량 [g]
    pub mass_g: f64,
    /// 순도를 반영한 액체 시약 부피 [mL]
    pub volume_ml: f64,
    /// 주입할 액체 시약 부피 [µL]
    pub volume_ul: f64,
}

/// 필요한 액체 시약 주입량 [µL]을 계산한다.
///
/// V(µL) = (PPM × MW × V_air) / (Vm × ρ × (순도/100) × 1000)
///
/// - `ppm`: 목표 농도
/// - `molecular_weight`: 분자량 [g/mol]
/// - `air_volume_l`: 용기에 먼저 채운 공기량 [L]
/// - `molar_volume`: 기체 몰부피 [L/mol]
/// - `density`: 시약 밀도 [g/mL]
/// - `purity_percent`: 시약 순도 [%]
pub fn required_volume_ul(
    ppm: f64,
    molecular_weight: f64,
    air_volume_l: f64,
    molar_volume: f64,
    density: f64,
    purity_percent: f64,
) -> Result<f64, CalcError> {
    check_inputs(ppm, air_volume_l, molar_volume)?;
    check_chemical(molecular_weight, density, purity_percent)?;
    let purity_fraction = purity_percent / 100.0;
    Ok((ppm * molecular_weight * air_volume_l)
        / (molar_volume * density * purity_fraction * 1000.0))
}

/// 몰수 → 질량 → mL → µL 순서로 단계별 값을 계산한다.
/// 최종 µL 값은 [`required_volume_ul`]과 같다.
pub fn derive(
    ppm: f64,
    molecular_weight: f64,
    air_volume_l: f64,
    molar_volume: f64,
    density: f64,
    purity_percent: f64,
) -> Result<InjectionDerivation, CalcError> {
    check_inputs(ppm, air_volume_l, molar_volume)?;
    check_chemical(molecular_weight, density, purity_percent)?;
    let moles = ppm * PPM_TO_FRACTION * air_volume_l / molar_volume;
    let mass_g = moles * molecular_weight;
    let volume_ml = mass_g / (density * purity_percent / 100.0);
    let volume_ul = convert_volume(volume_ml, VolumeUnit::Milliliter, VolumeUnit::Microliter);
    Ok(InjectionDerivation {
        moles,
        mass_g,
        volume_ml,
        volume_ul,
    })
}

fn check_inputs(ppm: f64, air_volume_l: f64, molar_volume: f64) -> Result<(), CalcError> {
    if !ppm.is_finite() || ppm < 0.0 {
        return Err(CalcError::InvalidInput("목표 PPM은 0 이상이어야 합니다."));
    }
    if !air_volume_l.is_finite() || air_volume_l < 0.0 {
        return Err(CalcError::InvalidInput("공기 주입량은 0 이상이어야 합니다."));
    }
    if !molar_volume.is_finite() || molar_volume <= 0.0 {
        return Err(CalcError::InvalidInput(
            "몰부피가 0 이하입니다. 온도가 절대 영도 이하인지 확인하세요.",
        ));
    }
    Ok(())
}

fn check_chemical(molecular_weight: f64, density: f64, purity_percent: f64) -> Result<(), CalcError> {
    // 밀도/순도 0은 분모가 0이 된다.
    if !density.is_finite() || density <= 0.0 {
        return Err(CalcError::InvalidChemical("밀도는 0보다 커야 합니다."));
    }
    if !purity_percent.is_finite() || purity_percent <= 0.0 || purity_percent > 100.0 {
        return Err(CalcError::InvalidChemical("순도는 0 초과 100 이하여야 합니다."));
    }
    if !molecular_weight.is_finite() || molecular_weight <= 0.0 {
        return Err(CalcError::InvalidChemical("분자량은 0보다 커야 합니다."));
    }
    Ok(())
}
