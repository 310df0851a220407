//! 시약별 안전/유해성 주석과 MSDS 조회 링크.
//!
//! 주석은 표시 전용이며 계산에는 쓰이지 않는다.
use serde::{Deserialize, Serialize};
use url::Url;

/// PubChem 검색 링크 앞부분. 뒤에 시약 이름이 붙는다.
pub const PUBCHEM_QUERY_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/#query=";

/// 인화성/독성/특이사항 자유 입력 필드.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardInfo {
    #[serde(default)]
    pub flammability: String,
    #[serde(default)]
    pub toxicity: String,
    #[serde(default)]
    pub notes: String,
}

/// 유해성 패널에 표시하는 필드 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardField {
    Flammability,
    Toxicity,
    Notes,
}

impl HazardField {
    pub const ALL: [HazardField; 3] = [
        HazardField::Flammability,
        HazardField::Toxicity,
        HazardField::Notes,
    ];

    /// 언어팩 키
    pub fn label_key(self) -> &'static str {
        match self {
            HazardField::Flammability => "hazard.flammability",
            HazardField::Toxicity => "hazard.toxicity",
            HazardField::Notes => "hazard.notes",
        }
    }
}

/// 필드 표시 상태. 비어 있으면 입력을 유도하는 안내 문구를 보여준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDisplay<'a> {
    Text(&'a str),
    Missing,
}

impl HazardInfo {
    pub fn new(flammability: &str, toxicity: &str, notes: &str) -> Self {
        Self {
            flammability: flammability.to_string(),
            toxicity: toxicity.to_string(),
            notes: notes.to_string(),
        }
    }

    pub fn get(&self, field: HazardField) -> &str {
        match field {
            HazardField::Flammability => &self.flammability,
            HazardField::Toxicity => &self.toxicity,
            HazardField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: HazardField, value: &str) {
        let slot = match field {
            HazardField::Flammability => &mut self.flammability,
            HazardField::Toxicity => &mut self.toxicity,
            HazardField::Notes => &mut self.notes,
        };
        *slot = value.trim().to_string();
    }

    /// 필드 값을 표시용으로 분류한다. 공백만 있으면 비어 있는 것으로 본다.
    pub fn display(&self, field: HazardField) -> FieldDisplay<'_> {
        let value = self.get(field).trim();
        if value.is_empty() {
            FieldDisplay::Missing
        } else {
            FieldDisplay::Text(value)
        }
    }

    pub fn missing_fields(&self) -> Vec<HazardField> {
        HazardField::ALL
            .into_iter()
            .filter(|f| self.display(*f) == FieldDisplay::Missing)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == HazardField::ALL.len()
    }
}

/// MSDS 조회용 PubChem 검색 링크를 만든다. 실제 요청은 보내지 않는다.
///
/// 공백 등은 fragment 규칙에 따라 퍼센트 인코딩된다.
pub fn msds_link(chemical_name: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{PUBCHEM_QUERY_BASE}{}", chemical_name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_missing() {
        let info = HazardInfo::new("Highly flammable", "  ", "");
        assert_eq!(
            info.display(HazardField::Flammability),
            FieldDisplay::Text("Highly flammable")
        );
        assert_eq!(
            info.missing_fields(),
            vec![HazardField::Toxicity, HazardField::Notes]
        );
        assert!(!info.is_empty());
        assert!(HazardInfo::default().is_empty());
    }

    #[test]
    fn pubchem_link_for_plain_name() {
        let url = msds_link("Ethanol").unwrap();
        assert_eq!(url.as_str(), "https://pubchem.ncbi.nlm.nih.gov/#query=Ethanol");
    }

    #[test]
    fn pubchem_link_encodes_spaces() {
        let url = msds_link("Water (H2O)").unwrap();
        assert_eq!(url.fragment(), Some("query=Water%20(H2O)"));
    }
}
