use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calc::CalculationInput;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 화면을 처음 열 때 채워 넣는 실험 조건 기본값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultInputs {
    pub air_volume_l: f64,
    pub target_ppm: f64,
    pub temperature_c: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        let input = CalculationInput::default();
        Self {
            air_volume_l: input.air_volume_l,
            target_ppm: input.target_ppm,
            temperature_c: input.temperature_c,
        }
    }
}

impl From<DefaultInputs> for CalculationInput {
    fn from(value: DefaultInputs) -> Self {
        CalculationInput {
            air_volume_l: value.air_volume_l,
            target_ppm: value.target_ppm,
            temperature_c: value.temperature_c,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// auto | ko | ko-kr | en | en-us
    #[serde(default = "default_language")]
    pub language: String,
    /// 외부 언어팩 디렉터리
    #[serde(default)]
    pub language_pack_dir: Option<String>,
    /// 시작 시 불러올 카탈로그 파일
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default = "default_alpha")]
    pub window_alpha: f32,
    #[serde(default)]
    pub always_on_top: bool,
    #[serde(default)]
    pub defaults: DefaultInputs,
    #[serde(skip)]
    path: PathBuf,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_alpha() -> f32 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            language_pack_dir: None,
            catalog_path: None,
            window_alpha: default_alpha(),
            always_on_top: false,
            defaults: DefaultInputs::default(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = path.to_path_buf();
        info!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config {
            path: path.to_path_buf(),
            ..Config::default()
        };
        cfg.save()?;
        info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 로드했던 파일에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 설정의 기본값으로 계산 입력을 만든다.
    pub fn initial_input(&self) -> CalculationInput {
        self.defaults.into()
    }
}
