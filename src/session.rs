//! 사용자 한 명의 작업 상태(카탈로그 + 입력 + 선택 시약)와 입력 이벤트 처리.
//!
//! 입력이 하나 바뀔 때마다 [`Session::handle`]이 상태를 갱신하고 전체 계산을 다시 수행한다.
use log::{debug, warn};

use crate::calc::{self, CalcError, CalculationInput, CalculationReport};
use crate::catalog::{Catalog, CatalogError, ChemicalRecord};
use crate::hazard::HazardInfo;

/// 화면에서 발생하는 입력 변경 이벤트.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SelectChemical(String),
    SetAirVolume(f64),
    SetTargetPpm(f64),
    SetTemperature(f64),
    AddChemical(ChemicalRecord),
    UpdateChemical { name: String, record: ChemicalRecord },
    SetHazard { name: String, hazard: HazardInfo },
    RemoveChemical(String),
    ResetCatalog,
    ReplaceCatalog(Catalog),
}

/// 세션 상태. 프로세스 전역이 아니라 호출자가 소유한다.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    input: CalculationInput,
    selected: String,
    last: Result<CalculationReport, CalcError>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin(), CalculationInput::default())
    }
}

impl Session {
    /// 첫 번째 시약을 선택한 상태로 세션을 만든다.
    pub fn new(catalog: Catalog, input: CalculationInput) -> Self {
        let selected = catalog
            .names()
            .first()
            .map(|s| s.to_string())
            .unwrap_or_default();
        let input = CalculationInput {
            temperature_c: calc::clamp_temperature(input.temperature_c),
            ..input
        };
        let last = calc::recompute(&catalog, &selected, &input);
        Self {
            catalog,
            input,
            selected,
            last,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// 마지막 재계산 결과
    pub fn result(&self) -> &Result<CalculationReport, CalcError> {
        &self.last
    }

    /// 선택 시약의 유해성 주석. 선택이 끊겼으면 None.
    pub fn selected_hazard(&self) -> Option<&HazardInfo> {
        self.catalog
            .find_by_name(&self.selected)
            .ok()
            .map(|r| &r.hazard)
    }

    /// 이벤트를 반영한 뒤 다시 계산한다.
    /// 카탈로그 편집이 거부되면 상태는 그대로이고 오류만 돌려준다.
    pub fn handle(&mut self, event: SessionEvent) -> Result<(), CatalogError> {
        debug!("session event: {event:?}");
        let applied = self.apply(event);
        self.refresh();
        applied
    }

    /// 현재 상태로 계산만 다시 수행한다.
    pub fn refresh(&mut self) -> &Result<CalculationReport, CalcError> {
        self.last = calc::recompute(&self.catalog, &self.selected, &self.input);
        if let Err(CalcError::ChemicalNotFound(name)) = &self.last {
            warn!("stale chemical selection '{name}'");
        }
        &self.last
    }

    fn apply(&mut self, event: SessionEvent) -> Result<(), CatalogError> {
        match event {
            SessionEvent::SelectChemical(name) => {
                self.selected = name.trim().to_string();
            }
            SessionEvent::SetAirVolume(v) => self.input.air_volume_l = v,
            SessionEvent::SetTargetPpm(v) => self.input.target_ppm = v,
            SessionEvent::SetTemperature(t) => {
                self.input.temperature_c = calc::clamp_temperature(t);
            }
            SessionEvent::AddChemical(record) => self.catalog.add(record)?,
            SessionEvent::UpdateChemical { name, record } => {
                let new_name = record.name.trim().to_string();
                self.catalog.update(&name, record)?;
                // 선택 중인 행의 이름이 바뀌면 선택도 따라간다.
                if self.selected == name.trim() {
                    self.selected = new_name;
                }
            }
            SessionEvent::SetHazard { name, hazard } => self.catalog.set_hazard(&name, hazard)?,
            SessionEvent::RemoveChemical(name) => {
                self.catalog.remove(&name)?;
            }
            SessionEvent::ResetCatalog => self.catalog.reset(),
            SessionEvent::ReplaceCatalog(catalog) => self.catalog = catalog,
        }
        Ok(())
    }
}
