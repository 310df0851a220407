//! 농도 조제 계산 모듈 모음.
//!
//! 조회 → 몰부피 → 주입량 → 도구 추천 순서로 계산하며 모두 순수 함수이다.

pub mod injection;
pub mod molar_volume;
pub mod tool;

pub use injection::{derive, required_volume_ul, InjectionDerivation};
pub use molar_volume::{clamp_temperature, molar_volume};
pub use tool::{recommend_tool, Tool, ToolRecommendation};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ChemicalRecord};

/// 계산 단계 오류. 모두 세션 안에서 입력을 고치면 회복된다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// 공기량/PPM/온도 입력 오류
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
    /// 밀도·순도 0 등 계산할 수 없는 시약 물성치
    #[error("계산 불가: 시약 물성치가 올바르지 않습니다 ({0})")]
    InvalidChemical(&'static str),
    /// 선택한 시약이 카탈로그에서 사라짐
    #[error("'{0}' 시약을 찾을 수 없습니다. 시약을 다시 선택하세요.")]
    ChemicalNotFound(String),
}

/// 화면에서 입력받는 실험 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 용기에 먼저 채운 공기량 [L]
    pub air_volume_l: f64,
    /// 목표 농도 [PPM]
    pub target_ppm: f64,
    /// 실험 온도 [°C]
    pub temperature_c: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            air_volume_l: 12.0,
            target_ppm: 1000.0,
            temperature_c: molar_volume::DEFAULT_TEMPERATURE_C,
        }
    }
}

/// 한 번의 재계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationReport {
    /// 계산에 사용한 시약 행 (계산 시점의 사본)
    pub chemical: ChemicalRecord,
    pub input: CalculationInput,
    /// 몰부피 [L/mol]
    pub molar_volume_l_per_mol: f64,
    /// 단계별 중간값
    pub derivation: InjectionDerivation,
    /// 필요 주입량 [µL]
    pub required_ul: f64,
    pub recommendation: ToolRecommendation,
}

/// 카탈로그와 입력으로 전체 계산을 다시 수행한다.
pub fn recompute(
    catalog: &Catalog,
    chemical_name: &str,
    input: &CalculationInput,
) -> Result<CalculationReport, CalcError> {
    let chemical = catalog
        .find_by_name(chemical_name)
        .map_err(|_| CalcError::ChemicalNotFound(chemical_name.trim().to_string()))?
        .clone();
    if !input.temperature_c.is_finite() {
        return Err(CalcError::InvalidInput("온도 값이 올바르지 않습니다."));
    }
    let vm = molar_volume(input.temperature_c);
    let required_ul = required_volume_ul(
        input.target_ppm,
        chemical.molecular_weight,
        input.air_volume_l,
        vm,
        chemical.density,
        chemical.purity_percent,
    )?;
    let derivation = derive(
        input.target_ppm,
        chemical.molecular_weight,
        input.air_volume_l,
        vm,
        chemical.density,
        chemical.purity_percent,
    )?;
    let recommendation = recommend_tool(required_ul)?;
    debug!(
        "{}: Vm={vm:.4} L/mol, required={required_ul:.4} uL, {:?}",
        chemical.name, recommendation
    );
    Ok(CalculationReport {
        chemical,
        input: *input,
        molar_volume_l_per_mol: vm,
        derivation,
        required_ul,
        recommendation,
    })
}
