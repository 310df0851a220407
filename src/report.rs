//! 계산 결과를 화면용 문장으로 만든다. CLI와 GUI가 같이 쓴다.
use crate::calc::{CalcError, CalculationReport, Tool, ToolRecommendation};
use crate::i18n::{keys, Translator};

/// 결과 µL 표시 (소수 둘째 자리)
pub fn format_ul(value: f64) -> String {
    format!("{value:.2}")
}

/// 도구 눈금값을 도구별 자릿수로 표시한다.
pub fn format_setting(tool: Tool, setting_ul: f64) -> String {
    format!("{:.*}", tool.setting_decimals(), setting_ul)
}

pub fn tool_name(tr: &Translator, tool: Tool) -> String {
    match tool {
        Tool::Syringe => tr.t(keys::TOOL_SYRINGE),
        Tool::Pipette => tr.t(keys::TOOL_PIPETTE),
    }
}

/// 도구 추천 한 줄.
pub fn recommendation_text(tr: &Translator, rec: &ToolRecommendation) -> String {
    match rec {
        ToolRecommendation::Use { tool, setting_ul } => {
            let key = match tool {
                Tool::Syringe => keys::RESULT_TOOL_SYRINGE,
                Tool::Pipette => keys::RESULT_TOOL_PIPETTE,
            };
            tr.fill(key, &[("setting", format_setting(*tool, *setting_ul))])
        }
        ToolRecommendation::OutOfRange { required_ul } => {
            tr.fill(keys::RESULT_OUT_OF_RANGE, &[("ul", format_ul(*required_ul))])
        }
    }
}

/// 실험 팁 문장.
pub fn tip_text(tr: &Translator, report: &CalculationReport) -> String {
    tr.fill(
        keys::RESULT_TIP,
        &[
            ("ul", format_ul(report.required_ul)),
            ("air", report.input.air_volume_l.to_string()),
            ("ppm", report.input.target_ppm.to_string()),
        ],
    )
}

/// 오류를 사용자가 다음에 할 일을 알 수 있는 문장으로 바꾼다.
pub fn error_text(tr: &Translator, err: &CalcError) -> String {
    match err {
        CalcError::ChemicalNotFound(name) => tr.fill(keys::RESULT_RESELECT, &[("name", name.clone())]),
        CalcError::InvalidChemical(reason) => {
            tr.fill(keys::RESULT_INVALID_CHEMICAL, &[("reason", reason.to_string())])
        }
        CalcError::InvalidInput(_) => format!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
    }
}

/// 결과 요약 여러 줄.
pub fn format_report(tr: &Translator, result: &Result<CalculationReport, CalcError>) -> Vec<String> {
    let report = match result {
        Ok(r) => r,
        Err(e) => return vec![error_text(tr, e)],
    };
    vec![
        tr.fill(
            keys::RESULT_REQUIRED,
            &[
                ("name", report.chemical.name.clone()),
                ("ul", format_ul(report.required_ul)),
            ],
        ),
        tr.fill(
            keys::RESULT_SUMMARY,
            &[
                ("name", report.chemical.name.clone()),
                ("air", report.input.air_volume_l.to_string()),
                ("ppm", report.input.target_ppm.to_string()),
                ("temp", format!("{:.1}", report.input.temperature_c)),
            ],
        ),
        tr.fill(
            keys::RESULT_MOLAR_VOLUME,
            &[
                ("vm", format!("{:.4}", report.molar_volume_l_per_mol)),
                ("temp", format!("{:.1}", report.input.temperature_c)),
            ],
        ),
        recommendation_text(tr, &report.recommendation),
        tip_text(tr, report),
    ]
}

/// 계산식 상세 (적용 물리량 + 단계별 값).
pub fn format_detail(tr: &Translator, report: &CalculationReport) -> Vec<String> {
    let c = &report.chemical;
    let d = &report.derivation;
    vec![
        tr.t(keys::DETAIL_FORMULA),
        tr.fill(
            keys::DETAIL_CONSTANTS,
            &[
                ("mw", c.molecular_weight.to_string()),
                ("density", c.density.to_string()),
                ("purity", c.purity_percent.to_string()),
                ("vm", format!("{:.4}", report.molar_volume_l_per_mol)),
            ],
        ),
        tr.fill(
            keys::DETAIL_STEPS,
            &[
                ("mol", format!("{:.4e}", d.moles)),
                ("mass", format!("{:.4e}", d.mass_g)),
                ("ml", format!("{:.5}", d.volume_ml)),
                ("ul", format_ul(d.volume_ul)),
            ],
        ),
    ]
}
