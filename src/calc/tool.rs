//! 주입량에 따른 주입 도구(시린지/피펫) 추천.
use serde::{Deserialize, Serialize};

use super::CalcError;

/// 시린지 최대 용량 [µL]
pub const SYRINGE_MAX_UL: f64 = 10.0;
/// 피펫 최대 용량 [µL]
pub const PIPETTE_MAX_UL: f64 = 100.0;

/// 주입 도구 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    /// 10 µL 마이크로 시린지
    Syringe,
    /// 100 µL 마이크로 피펫
    Pipette,
}

impl Tool {
    /// 도구 최대 용량 [µL]
    pub fn capacity_ul(self) -> f64 {
        match self {
            Tool::Syringe => SYRINGE_MAX_UL,
            Tool::Pipette => PIPETTE_MAX_UL,
        }
    }

    /// 눈금 설정값 소수 자릿수. 피펫 다이얼은 0.1 µL 단위이다.
    pub fn setting_decimals(self) -> usize {
        match self {
            Tool::Syringe => 2,
            Tool::Pipette => 1,
        }
    }

    /// 주입량을 도구 눈금 단위로 반올림한다.
    pub fn round_setting(self, volume_ul: f64) -> f64 {
        let scale = 10f64.powi(self.setting_decimals() as i32);
        (volume_ul * scale).round() / scale
    }
}

/// 도구 추천 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolRecommendation {
    /// 해당 도구의 눈금을 `setting_ul`로 맞춘다.
    Use { tool: Tool, setting_ul: f64 },
    /// 피펫 용량(100 µL)을 넘어 단일 도구로 주입할 수 없다.
    OutOfRange { required_ul: f64 },
}

impl ToolRecommendation {
    pub fn tool(&self) -> Option<Tool> {
        match self {
            ToolRecommendation::Use { tool, .. } => Some(*tool),
            ToolRecommendation::OutOfRange { .. } => None,
        }
    }

    pub fn setting_ul(&self) -> Option<f64> {
        match self {
            ToolRecommendation::Use { setting_ul, .. } => Some(*setting_ul),
            ToolRecommendation::OutOfRange { .. } => None,
        }
    }
}

/// 필요 주입량으로 도구와 눈금 설정값을 추천한다.
/// - ≤ 10 µL: 시린지, 소수 둘째 자리
/// - ≤ 100 µL: 피펫, 소수 첫째 자리
/// - 그 이상: [`ToolRecommendation::OutOfRange`]
pub fn recommend_tool(required_ul: f64) -> Result<ToolRecommendation, CalcError> {
    if !required_ul.is_finite() || required_ul < 0.0 {
        return Err(CalcError::InvalidInput("주입량은 0 이상의 유한한 값이어야 합니다."));
    }
    let tool = if required_ul <= SYRINGE_MAX_UL {
        Tool::Syringe
    } else if required_ul <= PIPETTE_MAX_UL {
        Tool::Pipette
    } else {
        return Ok(ToolRecommendation::OutOfRange { required_ul });
    };
    Ok(ToolRecommendation::Use {
        tool,
        setting_ul: tool.round_setting(required_ul),
    })
}
