use log::info;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::session::Session;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 카탈로그 편집/파일 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),
    /// 계산 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] crate::calc::CalcError),
    /// 표준 입력이 닫힘
    #[error("입력 스트림이 닫혔습니다.")]
    InputClosed,
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator, session: &mut Session) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, session)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr, session)?,
            MenuChoice::Hazard => ui_cli::handle_hazard(tr, session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                let lang = i18n::resolve_language(&config.language, None);
                *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                info!("language switched to {}", tr.language_code());
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
