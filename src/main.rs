use clap::{Parser, Subcommand, ValueEnum};
use log::{warn, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

use gas_ppm_toolbox::{
    app::{self, AppError},
    calc::CalculationInput,
    catalog::Catalog,
    config, i18n, report,
    session::{Session, SessionEvent},
    ui_cli,
};

/// 가스 농도 조제용 액체 시약 주입량 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(name = "gas_ppm_toolbox_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 시작 시 불러올 카탈로그 TOML
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// 로그 레벨
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 주입량을 한 번 계산하고 종료한다.
    Calc {
        /// 시약 이름 (카탈로그 조회 키)
        #[arg(short, long)]
        chemical: String,
        /// 공기 주입량 [L]
        #[arg(short, long)]
        air: Option<f64>,
        /// 목표 농도 [PPM]
        #[arg(short, long)]
        ppm: Option<f64>,
        /// 실험 온도 [°C], 0~40
        #[arg(short, long)]
        temp: Option<f64>,
        /// 계산식 상세도 출력
        #[arg(long)]
        detail: bool,
    },
    /// 카탈로그 목록을 출력한다.
    List,
    /// 시약의 유해성 정보와 MSDS 링크를 출력한다.
    Hazard { chemical: String },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        cli.log_level.into(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| cfg.catalog_path.as_ref().map(PathBuf::from));
    let catalog = load_catalog(catalog_path.as_deref())?;
    let mut session = Session::new(catalog, cfg.initial_input());

    match cli.command {
        None => app::run(&mut cfg, &mut tr, &mut session),
        Some(Command::List) => {
            ui_cli::print_catalog(&tr, session.catalog());
            Ok(())
        }
        Some(Command::Hazard { chemical }) => {
            let record = session.catalog().find_by_name(&chemical)?;
            ui_cli::print_hazard(&tr, record);
            Ok(())
        }
        Some(Command::Calc {
            chemical,
            air,
            ppm,
            temp,
            detail,
        }) => {
            let base = *session.input();
            let input = CalculationInput {
                air_volume_l: air.unwrap_or(base.air_volume_l),
                target_ppm: ppm.unwrap_or(base.target_ppm),
                temperature_c: temp.unwrap_or(base.temperature_c),
            };
            session.handle(SessionEvent::SelectChemical(chemical))?;
            session.handle(SessionEvent::SetAirVolume(input.air_volume_l))?;
            session.handle(SessionEvent::SetTargetPpm(input.target_ppm))?;
            session.handle(SessionEvent::SetTemperature(input.temperature_c))?;
            for line in report::format_report(&tr, session.result()) {
                println!("{line}");
            }
            match session.result() {
                Ok(r) => {
                    if detail {
                        for line in report::format_detail(&tr, r) {
                            println!("  {line}");
                        }
                    }
                    Ok(())
                }
                Err(e) => Err(AppError::Calc(e.clone())),
            }
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    match path {
        Some(p) if p.exists() => Ok(Catalog::load(p)?),
        Some(p) => {
            warn!("catalog file {} not found, using built-in catalog", p.display());
            Ok(Catalog::builtin())
        }
        None => Ok(Catalog::builtin()),
    }
}
