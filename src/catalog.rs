//! 편집 가능한 화학 시약 데이터베이스.
//!
//! 행 추가/수정/삭제 시점에 물성치를 검증하고, 계산 시에는 이름으로 조회한다.
//! 기본 목록은 [`Catalog::reset`]으로 언제든 복원할 수 있다.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hazard::HazardInfo;

/// 시약 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalRecord {
    /// 카탈로그 안에서 고유한 조회 키
    pub name: String,
    /// 분자량 [g/mol]
    pub molecular_weight: f64,
    /// 밀도 [g/mL]
    pub density: f64,
    /// 순도 [%], (0, 100]
    pub purity_percent: f64,
    #[serde(default)]
    pub hazard: HazardInfo,
}

impl ChemicalRecord {
    pub fn new(name: &str, molecular_weight: f64, density: f64, purity_percent: f64) -> Self {
        Self {
            name: name.trim().to_string(),
            molecular_weight,
            density,
            purity_percent,
            hazard: HazardInfo::default(),
        }
    }

    pub fn with_hazard(mut self, hazard: HazardInfo) -> Self {
        self.hazard = hazard;
        self
    }

    /// 물성치 범위를 검사한다.
    /// MW > 0, 밀도 > 0, 0 < 순도 ≤ 100
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !self.molecular_weight.is_finite() || self.molecular_weight <= 0.0 {
            return Err(CatalogError::Validation {
                field: "molecular_weight",
                reason: "분자량은 0보다 커야 합니다.",
            });
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(CatalogError::Validation {
                field: "density",
                reason: "밀도는 0보다 커야 합니다.",
            });
        }
        if !self.purity_percent.is_finite()
            || self.purity_percent <= 0.0
            || self.purity_percent > 100.0
        {
            return Err(CatalogError::Validation {
                field: "purity_percent",
                reason: "순도는 0 초과 100 이하여야 합니다.",
            });
        }
        Ok(())
    }
}

/// 카탈로그 편집/조회/파일 입출력 오류.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("입력 검증 실패 ({field}): {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    #[error("시약 이름이 비어 있습니다.")]
    EmptyName,
    #[error("이미 존재하는 시약 이름: {0}")]
    DuplicateName(String),
    #[error("카탈로그에 없는 시약: {0}")]
    NotFound(String),
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("카탈로그 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 삽입 순서를 유지하는 시약 목록. 세션마다 하나씩 소유한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "chemical", default)]
    records: Vec<ChemicalRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            records: default_records(),
        }
    }
}

impl Catalog {
    /// 기본 시약 5종이 들어 있는 카탈로그.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[ChemicalRecord] {
        &self.records
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim();
        if key.is_empty() {
            return None;
        }
        self.records.iter().position(|r| r.name == key)
    }

    /// 이름으로 시약을 찾는다. 중복 이름이 있으면 첫 행을 돌려준다.
    /// 없는 이름은 기본 행으로 대체하지 않고 [`CatalogError::NotFound`]를 반환한다.
    pub fn find_by_name(&self, name: &str) -> Result<&ChemicalRecord, CatalogError> {
        self.position(name)
            .map(|i| &self.records[i])
            .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))
    }

    /// 새 행을 끝에 추가한다.
    pub fn add(&mut self, record: ChemicalRecord) -> Result<(), CatalogError> {
        let record = normalized(record);
        if let Err(e) = record.validate() {
            warn!("rejected chemical '{}': {e}", record.name);
            return Err(e);
        }
        if self.contains(&record.name) {
            warn!("rejected duplicate chemical '{}'", record.name);
            return Err(CatalogError::DuplicateName(record.name));
        }
        info!("added chemical '{}'", record.name);
        self.records.push(record);
        Ok(())
    }

    /// `name` 행을 `record`로 바꾼다. 이름 변경 시 다른 행과 겹치면 거부한다.
    pub fn update(&mut self, name: &str, record: ChemicalRecord) -> Result<(), CatalogError> {
        let idx = self
            .position(name)
            .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))?;
        let record = normalized(record);
        if let Err(e) = record.validate() {
            warn!("rejected edit of '{}': {e}", name.trim());
            return Err(e);
        }
        if let Some(other) = self.position(&record.name) {
            if other != idx {
                return Err(CatalogError::DuplicateName(record.name));
            }
        }
        debug!("updated chemical '{}' -> '{}'", name.trim(), record.name);
        self.records[idx] = record;
        Ok(())
    }

    /// 유해성 주석만 바꾼다. 표시 전용이라 검증하지 않는다.
    pub fn set_hazard(&mut self, name: &str, hazard: HazardInfo) -> Result<(), CatalogError> {
        let idx = self
            .position(name)
            .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))?;
        self.records[idx].hazard = hazard;
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<ChemicalRecord, CatalogError> {
        let idx = self
            .position(name)
            .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))?;
        let removed = self.records.remove(idx);
        info!("removed chemical '{}'", removed.name);
        Ok(removed)
    }

    /// 기본 카탈로그로 되돌린다.
    pub fn reset(&mut self) {
        self.records = default_records();
        info!("catalog reset to {} built-in chemicals", self.records.len());
    }

    /// TOML 문자열에서 카탈로그를 만든다. 각 행은 [`Catalog::add`]와 같은 규칙으로 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let parsed: Catalog = toml::from_str(src)?;
        let mut catalog = Catalog::empty();
        for record in parsed.records {
            catalog.add(record)?;
        }
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!("loaded {} chemicals from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        fs::write(path, self.to_toml_string()?)?;
        info!("saved {} chemicals to {}", self.len(), path.display());
        Ok(())
    }
}

fn normalized(mut record: ChemicalRecord) -> ChemicalRecord {
    record.name = record.name.trim().to_string();
    record
}

struct DefaultChemical {
    name: &'static str,
    mw: f64,
    density: f64,
    purity: f64,
    flammability: &'static str,
    toxicity: &'static str,
    notes: &'static str,
}

fn default_records() -> Vec<ChemicalRecord> {
    DEFAULT_CHEMICALS
        .iter()
        .map(|c| {
            ChemicalRecord::new(c.name, c.mw, c.density, c.purity).with_hazard(HazardInfo::new(
                c.flammability,
                c.toxicity,
                c.notes,
            ))
        })
        .collect()
}

const DEFAULT_CHEMICALS: &[DefaultChemical] = &[
    DefaultChemical {
        name: "Water (H2O)",
        mw: 18.015,
        density: 1.00,
        purity: 100.0,
        flammability: "불연성",
        toxicity: "무독성",
        notes: "바탕 시료/습도 보정용",
    },
    DefaultChemical {
        name: "Ethanol",
        mw: 46.07,
        density: 0.789,
        purity: 95.0,
        flammability: "인화성 높음 (인화점 13 °C)",
        toxicity: "눈 자극성, 급성 독성 낮음",
        notes: "점화원 차단, 밀폐 보관",
    },
    DefaultChemical {
        name: "THF",
        mw: 72.11,
        density: 0.89,
        purity: 99.5,
        flammability: "인화성 매우 높음 (인화점 -14 °C)",
        toxicity: "눈/호흡기 자극, 발암 의심 물질",
        notes: "장기 보관 시 폭발성 과산화물 생성 가능",
    },
    DefaultChemical {
        name: "Toluene",
        mw: 92.14,
        density: 0.87,
        purity: 99.5,
        flammability: "인화성 높음 (인화점 4 °C)",
        toxicity: "생식독성, 흡입 시 중추신경계 영향",
        notes: "흄후드 안에서 취급",
    },
    DefaultChemical {
        name: "n-Hexane",
        mw: 86.18,
        density: 0.66,
        purity: 95.0,
        flammability: "인화성 매우 높음 (인화점 -22 °C)",
        toxicity: "장기 노출 시 말초신경 독성",
        notes: "흡인 위험, 정전기 주의",
    },
];
