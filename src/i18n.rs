use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_HAZARD: &str = "main_menu.hazard";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_INTRO: &str = "calc.intro";
    pub const PROMPT_CHEMICAL: &str = "prompt.chemical";
    pub const PROMPT_AIR_VOLUME: &str = "prompt.air_volume";
    pub const PROMPT_TARGET_PPM: &str = "prompt.target_ppm";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const TEMPERATURE_CLAMPED: &str = "calc.temperature_clamped";
    pub const RESULT_REQUIRED: &str = "result.required";
    pub const RESULT_SUMMARY: &str = "result.summary";
    pub const RESULT_MOLAR_VOLUME: &str = "result.molar_volume";
    pub const RESULT_TOOL_SYRINGE: &str = "result.tool_syringe";
    pub const RESULT_TOOL_PIPETTE: &str = "result.tool_pipette";
    pub const RESULT_OUT_OF_RANGE: &str = "result.out_of_range";
    pub const RESULT_TIP: &str = "result.tip";
    pub const RESULT_INVALID_CHEMICAL: &str = "result.invalid_chemical";
    pub const RESULT_RESELECT: &str = "result.reselect";

    pub const DETAIL_HEADING: &str = "detail.heading";
    pub const DETAIL_FORMULA: &str = "detail.formula";
    pub const DETAIL_CONSTANTS: &str = "detail.constants";
    pub const DETAIL_STEPS: &str = "detail.steps";

    pub const TOOL_SYRINGE: &str = "tool.syringe";
    pub const TOOL_PIPETTE: &str = "tool.pipette";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_OPTIONS: &str = "catalog.options";
    pub const CATALOG_COLUMNS: &str = "catalog.columns";
    pub const CATALOG_ADDED: &str = "catalog.added";
    pub const CATALOG_UPDATED: &str = "catalog.updated";
    pub const CATALOG_REMOVED: &str = "catalog.removed";
    pub const CATALOG_RESET: &str = "catalog.reset";
    pub const CATALOG_SAVED: &str = "catalog.saved";
    pub const CATALOG_LOADED: &str = "catalog.loaded";
    pub const PROMPT_NAME: &str = "prompt.name";
    pub const PROMPT_NEW_NAME: &str = "prompt.new_name";
    pub const PROMPT_MW: &str = "prompt.mw";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_PURITY: &str = "prompt.purity";
    pub const PROMPT_PATH: &str = "prompt.path";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";

    pub const HAZARD_HEADING: &str = "hazard.heading";
    pub const HAZARD_FLAMMABILITY: &str = "hazard.flammability";
    pub const HAZARD_TOXICITY: &str = "hazard.toxicity";
    pub const HAZARD_NOTES: &str = "hazard.notes";
    pub const HAZARD_MISSING: &str = "hazard.missing";
    pub const HAZARD_MSDS_LINK: &str = "hazard.msds_link";
    pub const HAZARD_EDIT_PROMPT: &str = "hazard.edit_prompt";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 내장 언어팩으로 번역기를 생성한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let mut strings = built_in_pack(lang).unwrap_or_default();
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang_code)) {
            debug!("language pack override: {} keys", overrides.len());
            strings.extend(overrides);
        }
        Self {
            lang,
            strings,
            fallback: built_in_pack(Language::En).unwrap_or_default(),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 현재 언어 → 영어 → 키 순으로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.strings.get(key).or_else(|| self.fallback.get(key)) {
            return v.clone();
        }
        warn!("missing translation key '{key}'");
        key.to_string()
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿의 `{key}`를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 섹션은 점(.)으로 이어 붙인 키가 된다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> Option<HashMap<String, String>> {
    match lang {
        Language::En => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_korean_key_exists_in_english() {
        let ko = built_in_pack(Language::Ko).unwrap();
        let en = built_in_pack(Language::En).unwrap();
        let missing: Vec<_> = ko.keys().filter(|k| !en.contains_key(*k)).collect();
        assert!(missing.is_empty(), "missing in en-us: {missing:?}");
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-uk")), "en-us");
    }

    #[test]
    fn fill_replaces_placeholders() {
        let tr = Translator::new("en");
        let s = tr.fill(keys::RESULT_REQUIRED, &[("name", "Ethanol".into()), ("ul", "1.00".into())]);
        assert!(s.contains("Ethanol"));
        assert!(s.contains("1.00"));
    }
}
