use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::catalog::{Catalog, ChemicalRecord};
use crate::config::Config;
use crate::hazard::{self, FieldDisplay, HazardField};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::session::{Session, SessionEvent};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Catalog,
    Hazard,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_HAZARD));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Hazard),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 농도 계산 메뉴. 엔터만 누르면 현재 값을 유지한다.
pub fn handle_calculate(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_INTRO));
    if let Some(name) = select_chemical(tr, session.catalog(), session.selected())? {
        session.handle(SessionEvent::SelectChemical(name))?;
    }
    let input = *session.input();
    let air = read_f64_or(&tr.t(keys::PROMPT_AIR_VOLUME), input.air_volume_l, tr)?;
    session.handle(SessionEvent::SetAirVolume(air))?;
    let ppm = read_f64_or(&tr.t(keys::PROMPT_TARGET_PPM), input.target_ppm, tr)?;
    session.handle(SessionEvent::SetTargetPpm(ppm))?;
    let temp = read_f64_or(&tr.t(keys::PROMPT_TEMPERATURE), input.temperature_c, tr)?;
    session.handle(SessionEvent::SetTemperature(temp))?;
    if (session.input().temperature_c - temp).abs() > f64::EPSILON {
        println!(
            "{}",
            tr.fill(
                keys::TEMPERATURE_CLAMPED,
                &[("temp", format!("{:.1}", session.input().temperature_c))]
            )
        );
    }
    println!();
    for line in report::format_report(tr, session.result()) {
        println!("{line}");
    }
    if let Ok(r) = session.result() {
        println!("\n{}", tr.t(keys::DETAIL_HEADING));
        for line in report::format_detail(tr, r) {
            println!("  {line}");
        }
    }
    Ok(())
}

/// 카탈로그 편집 메뉴를 처리한다.
pub fn handle_catalog(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    print_catalog(tr, session.catalog());
    println!("{}", tr.t(keys::CATALOG_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    // 편집 거부는 메시지만 보여주고 메뉴로 돌아간다.
    let outcome = match sel.trim() {
        "1" => {
            let record = read_record(tr, None)?;
            let name = record.name.clone();
            session
                .handle(SessionEvent::AddChemical(record))
                .map(|_| tr.fill(keys::CATALOG_ADDED, &[("name", name)]))
        }
        "2" => {
            let Some(name) = select_chemical(tr, session.catalog(), session.selected())? else {
                return Ok(());
            };
            let current = session.catalog().find_by_name(&name)?.clone();
            let record = read_record(tr, Some(&current))?;
            session
                .handle(SessionEvent::UpdateChemical {
                    name: name.clone(),
                    record,
                })
                .map(|_| tr.fill(keys::CATALOG_UPDATED, &[("name", name)]))
        }
        "3" => {
            let Some(name) = select_chemical(tr, session.catalog(), session.selected())? else {
                return Ok(());
            };
            session
                .handle(SessionEvent::RemoveChemical(name.clone()))
                .map(|_| tr.fill(keys::CATALOG_REMOVED, &[("name", name)]))
        }
        "4" => session
            .handle(SessionEvent::ResetCatalog)
            .map(|_| tr.t(keys::CATALOG_RESET)),
        "5" => {
            let path = read_line(&tr.t(keys::PROMPT_PATH))?;
            Catalog::load(Path::new(path.trim())).and_then(|catalog| {
                let count = catalog.len();
                session
                    .handle(SessionEvent::ReplaceCatalog(catalog))
                    .map(|_| tr.fill(keys::CATALOG_LOADED, &[("count", count.to_string())]))
            })
        }
        "6" => {
            let path = read_line(&tr.t(keys::PROMPT_PATH))?;
            session
                .catalog()
                .save(Path::new(path.trim()))
                .map(|_| tr.fill(keys::CATALOG_SAVED, &[("path", path.trim().to_string())]))
        }
        _ => Ok(tr.t(keys::INVALID_SELECTION_RETRY)),
    };
    match outcome {
        Ok(msg) => println!("{msg}"),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 선택한 시약의 유해성 정보를 보여주고 빈 항목은 입력받는다.
pub fn handle_hazard(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HAZARD_HEADING));
    let Some(name) = select_chemical(tr, session.catalog(), session.selected())? else {
        return Ok(());
    };
    let record = session.catalog().find_by_name(&name)?.clone();
    print_hazard(tr, &record);
    let answer = read_line(&tr.t(keys::HAZARD_EDIT_PROMPT))?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }
    let mut hazard = record.hazard.clone();
    for field in HazardField::ALL {
        let prompt = format!(
            "{} [{}]: ",
            tr.t(field.label_key()),
            hazard.get(field)
        );
        let value = read_line(&prompt)?;
        if !value.trim().is_empty() {
            hazard.set(field, &value);
        }
    }
    session.handle(SessionEvent::SetHazard { name, hazard })?;
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.fill(keys::SETTINGS_CURRENT_LANGUAGE, &[("lang", cfg.language.clone())])
    );
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = match sel.trim() {
        "" => return Ok(()),
        "1" => "ko-kr",
        "2" => "en-us",
        "3" => "auto",
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    cfg.language = lang.to_string();
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 카탈로그를 표 형태로 출력한다.
pub fn print_catalog(tr: &Translator, catalog: &Catalog) {
    println!("{}", tr.t(keys::CATALOG_COLUMNS));
    for (i, r) in catalog.records().iter().enumerate() {
        println!(
            "{:>2}) {:<16} {:>9.3} {:>7.3} {:>6.1}",
            i + 1,
            r.name,
            r.molecular_weight,
            r.density,
            r.purity_percent
        );
    }
}

/// 유해성 패널과 MSDS 링크를 출력한다.
pub fn print_hazard(tr: &Translator, record: &ChemicalRecord) {
    println!("[{}]", record.name);
    for field in HazardField::ALL {
        let value = match record.hazard.display(field) {
            FieldDisplay::Text(s) => s.to_string(),
            FieldDisplay::Missing => tr.t(keys::HAZARD_MISSING),
        };
        println!("- {}: {value}", tr.t(field.label_key()));
    }
    if let Ok(url) = hazard::msds_link(&record.name) {
        println!("{}: {url}", tr.t(keys::HAZARD_MSDS_LINK));
    }
}

/// 번호 또는 이름으로 시약을 고른다. 엔터만 누르면 현재 선택을 유지한다.
fn select_chemical(
    tr: &Translator,
    catalog: &Catalog,
    current: &str,
) -> Result<Option<String>, AppError> {
    let names = catalog.names();
    for (i, name) in names.iter().enumerate() {
        let mark = if *name == current { "*" } else { " " };
        println!("{mark}{:>2}) {name}", i + 1);
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_CHEMICAL))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(if catalog.contains(current) {
                Some(current.to_string())
            } else {
                None
            });
        }
        if let Ok(n) = sel.parse::<usize>() {
            if let Some(name) = n.checked_sub(1).and_then(|i| names.get(i)) {
                return Ok(Some(name.to_string()));
            }
        } else if catalog.contains(sel) {
            return Ok(Some(sel.to_string()));
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_record(tr: &Translator, current: Option<&ChemicalRecord>) -> Result<ChemicalRecord, AppError> {
    if current.is_some() {
        println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    }
    let name_prompt = if current.is_some() {
        keys::PROMPT_NEW_NAME
    } else {
        keys::PROMPT_NAME
    };
    let name = read_line(&tr.t(name_prompt))?;
    let name = match (name.trim(), current) {
        ("", Some(c)) => c.name.clone(),
        (n, _) => n.to_string(),
    };
    let mw = read_f64_or(&tr.t(keys::PROMPT_MW), current.map_or(f64::NAN, |c| c.molecular_weight), tr)?;
    let density = read_f64_or(&tr.t(keys::PROMPT_DENSITY), current.map_or(f64::NAN, |c| c.density), tr)?;
    let purity = read_f64_or(
        &tr.t(keys::PROMPT_PURITY),
        current.map_or(100.0, |c| c.purity_percent),
        tr,
    )?;
    let hazard = current.map(|c| c.hazard.clone()).unwrap_or_default();
    Ok(ChemicalRecord::new(&name, mw, density, purity).with_hazard(hazard))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

/// 숫자를 입력받는다. 빈 입력이면 `current`를 돌려준다 (NaN이면 다시 묻는다).
fn read_f64_or(prompt: &str, current: f64, tr: &Translator) -> Result<f64, AppError> {
    let prompt = if current.is_nan() {
        prompt.to_string()
    } else {
        format!("{} [{current}]: ", prompt.trim_end().trim_end_matches(':'))
    };
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() && !current.is_nan() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
