#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use log::{error, info, LevelFilter};
use rfd::FileDialog;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::{fs, path::Path, path::PathBuf};
use gas_ppm_toolbox::{
    calc::{molar_volume, CalcError, Tool, ToolRecommendation},
    catalog::{Catalog, ChemicalRecord},
    config,
    hazard::{self, FieldDisplay, HazardField, HazardInfo},
    i18n::{self, keys},
    report,
    session::{Session, SessionEvent},
};

const SYRINGE_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 157, 79);
const PIPETTE_COLOR: egui::Color32 = egui::Color32::from_rgb(47, 111, 208);
const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(210, 60, 50);

#[derive(Debug, Parser)]
#[command(name = "gas_ppm_toolbox", version)]
struct GuiArgs {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let _ = TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut app_cfg = match config::load_or_default_at(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("config load failed, using defaults: {e}");
            config::Config::default()
        }
    };
    app_cfg.language = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(900.0, 720.0));
    if app_cfg.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Gas PPM Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                error!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 한글 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 폰트
/// 2) 시스템 폰트(맑은 고딕, Noto CJK, Apple SD Gothic)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NotoSansKR-Regular.ttf"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    for p in [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ] {
        candidates.push(PathBuf::from(p));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            info!("loaded UI font {}", p.display());
            return Ok(());
        }
    }
    Err("Korean font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &Path) -> Result<(), String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn tool_color(rec: &ToolRecommendation) -> egui::Color32 {
    match rec.tool() {
        Some(Tool::Syringe) => SYRINGE_COLOR,
        Some(Tool::Pipette) => PIPETTE_COLOR,
        None => WARN_COLOR,
    }
}

/// 카탈로그 표 한 행의 편집 중 값.
#[derive(Debug, Clone)]
struct RowDraft {
    original_name: String,
    record: ChemicalRecord,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Catalog,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    session: Session,
    tab: Tab,
    // 카탈로그 편집
    drafts: Vec<RowDraft>,
    new_row: ChemicalRecord,
    hazard_target: String,
    hazard_draft: HazardInfo,
    edit_status: Option<(bool, String)>,
    // 설정
    lang_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    always_on_top: bool,
    ui_scale: f32,
    font_load_error: Option<String>,
    show_settings_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let tr = i18n::Translator::new_with_pack(&config.language, config.language_pack_dir.as_deref());
        let catalog = match config.catalog_path.as_deref().map(Path::new) {
            Some(p) if p.exists() => Catalog::load(p).unwrap_or_else(|e| {
                error!("catalog load failed ({}): {e}", p.display());
                Catalog::builtin()
            }),
            _ => Catalog::builtin(),
        };
        let session = Session::new(catalog, config.initial_input());
        let mut app = Self {
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha,
            always_on_top: config.always_on_top,
            config,
            tr,
            session,
            tab: Tab::Calculator,
            drafts: Vec::new(),
            new_row: empty_row(),
            hazard_target: String::new(),
            hazard_draft: HazardInfo::default(),
            edit_status: None,
            lang_save_status: None,
            ui_scale: 1.0,
            font_load_error: None,
            show_settings_modal: false,
            show_help_modal: false,
        };
        app.sync_drafts();
        app
    }

    /// 카탈로그가 바뀐 뒤 표 편집값을 다시 채운다.
    fn sync_drafts(&mut self) {
        self.drafts = self
            .session
            .catalog()
            .records()
            .iter()
            .map(|r| RowDraft {
                original_name: r.name.clone(),
                record: r.clone(),
            })
            .collect();
        if !self.session.catalog().contains(&self.hazard_target) {
            self.hazard_target = self.session.selected().to_string();
        }
        self.hazard_draft = self
            .session
            .catalog()
            .find_by_name(&self.hazard_target)
            .map(|r| r.hazard.clone())
            .unwrap_or_default();
    }

    /// 이벤트를 세션에 넘기고 편집 결과 메시지를 남긴다.
    fn dispatch(&mut self, event: SessionEvent, ok_msg: Option<String>) {
        let edits_catalog = !matches!(
            event,
            SessionEvent::SelectChemical(_)
                | SessionEvent::SetAirVolume(_)
                | SessionEvent::SetTargetPpm(_)
                | SessionEvent::SetTemperature(_)
        );
        match self.session.handle(event) {
            Ok(()) => {
                if let Some(msg) = ok_msg {
                    self.edit_status = Some((true, msg));
                }
            }
            Err(e) => {
                self.edit_status = Some((false, format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))));
            }
        }
        if edits_catalog {
            self.sync_drafts();
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.vertical_centered(|ui| {
            ui.heading(tr.t("gui.nav.heading"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Calculator, tr.t("gui.tab.calculator")),
            (Tab::Catalog, tr.t("gui.tab.catalog")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::CALC_HEADING));
        ui.label(tr.t(keys::CALC_INTRO));
        ui.separator();

        ui.strong(tr.t("gui.calc.conditions"));
        let mut events = Vec::new();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("calc_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(ui, &tr.t("gui.calc.chemical"), &tr.t("gui.calc.chemical_tip"));
                    let mut selected = self.session.selected().to_string();
                    egui::ComboBox::from_id_source("chemical_select")
                        .selected_text(selected.clone())
                        .show_ui(ui, |ui| {
                            for name in self.session.catalog().names() {
                                ui.selectable_value(&mut selected, name.to_string(), name);
                            }
                        });
                    if selected != self.session.selected() {
                        events.push(SessionEvent::SelectChemical(selected));
                    }
                    ui.end_row();

                    let input = *self.session.input();
                    label_with_tip(ui, &tr.t("gui.calc.air_volume"), &tr.t("gui.calc.air_volume_tip"));
                    let mut air = input.air_volume_l;
                    if ui
                        .add(
                            egui::DragValue::new(&mut air)
                                .speed(0.1)
                                .clamp_range(0.0..=f64::MAX)
                                .suffix(" L"),
                        )
                        .changed()
                    {
                        events.push(SessionEvent::SetAirVolume(air));
                    }
                    ui.end_row();

                    ui.label(tr.t("gui.calc.target_ppm"));
                    let mut ppm = input.target_ppm;
                    if ui
                        .add(
                            egui::DragValue::new(&mut ppm)
                                .speed(10.0)
                                .clamp_range(0.0..=f64::MAX)
                                .suffix(" PPM"),
                        )
                        .changed()
                    {
                        events.push(SessionEvent::SetTargetPpm(ppm));
                    }
                    ui.end_row();

                    label_with_tip(ui, &tr.t("gui.calc.temperature"), &tr.t("gui.calc.temperature_tip"));
                    let mut temp = input.temperature_c;
                    if ui
                        .add(
                            egui::Slider::new(
                                &mut temp,
                                molar_volume::TEMPERATURE_MIN_C..=molar_volume::TEMPERATURE_MAX_C,
                            )
                            .step_by(0.5)
                            .suffix(" °C"),
                        )
                        .changed()
                    {
                        events.push(SessionEvent::SetTemperature(temp));
                    }
                    ui.end_row();
                });
        });
        for ev in events {
            self.dispatch(ev, None);
        }

        ui.add_space(10.0);
        ui.strong(tr.t("gui.calc.result"));
        match self.session.result().clone() {
            Ok(r) => {
                let color = tool_color(&r.recommendation);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(tr.fill(
                            keys::RESULT_REQUIRED,
                            &[
                                ("name", r.chemical.name.clone()),
                                ("ul", report::format_ul(r.required_ul)),
                            ],
                        ))
                        .size(20.0)
                        .strong(),
                    );
                    ui.colored_label(color, report::recommendation_text(&tr, &r.recommendation));
                    if let ToolRecommendation::Use { tool, .. } = r.recommendation {
                        let fill = (r.required_ul / tool.capacity_ul()).clamp(0.0, 1.0) as f32;
                        ui.add(
                            egui::ProgressBar::new(fill)
                                .fill(color)
                                .text(format!(
                                    "{} / {} µL",
                                    report::format_ul(r.required_ul),
                                    tool.capacity_ul()
                                )),
                        );
                    }
                });
                ui.horizontal(|ui| {
                    for (label, value) in [
                        (tr.t("gui.calc.metric_chemical"), r.chemical.name.clone()),
                        (tr.t("gui.calc.metric_air"), format!("{} L", r.input.air_volume_l)),
                        (tr.t("gui.calc.metric_ppm"), format!("{} PPM", r.input.target_ppm)),
                        (
                            tr.t("gui.calc.metric_vm"),
                            format!("{:.4} L/mol", r.molar_volume_l_per_mol),
                        ),
                    ] {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.small(label);
                                ui.strong(value);
                            });
                        });
                    }
                });
                egui::CollapsingHeader::new(tr.t(keys::DETAIL_HEADING))
                    .default_open(false)
                    .show(ui, |ui| {
                        for line in report::format_detail(&tr, &r) {
                            ui.label(line);
                        }
                    });
                ui.add_space(6.0);
                ui.label(egui::RichText::new(report::tip_text(&tr, &r)).italics());
            }
            Err(e) => {
                let text = report::error_text(&tr, &e);
                ui.colored_label(WARN_COLOR, text);
                if matches!(e, CalcError::ChemicalNotFound(_)) {
                    ui.small(tr.t("gui.calc.reselect_hint"));
                }
            }
        }

        ui.add_space(10.0);
        if let Some(record) = self
            .session
            .catalog()
            .find_by_name(self.session.selected())
            .ok()
            .cloned()
        {
            egui::CollapsingHeader::new(tr.t(keys::HAZARD_HEADING))
                .default_open(true)
                .show(ui, |ui| hazard_panel(ui, &tr, &record));
        }
    }

    fn ui_catalog(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::CATALOG_HEADING));
        ui.label(tr.t("gui.catalog.intro"));
        ui.separator();

        let mut pending: Option<(SessionEvent, Option<String>)> = None;
        egui::Grid::new("catalog_grid")
            .num_columns(6)
            .striped(true)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.strong(tr.t("gui.catalog.name"));
                ui.strong("MW [g/mol]");
                ui.strong(tr.t("gui.catalog.density"));
                ui.strong(tr.t("gui.catalog.purity"));
                ui.label("");
                ui.label("");
                ui.end_row();
                for draft in self.drafts.iter_mut() {
                    row_editor(ui, &mut draft.record);
                    if ui.button(tr.t("gui.catalog.apply")).clicked() {
                        pending = Some((
                            SessionEvent::UpdateChemical {
                                name: draft.original_name.clone(),
                                record: draft.record.clone(),
                            },
                            Some(tr.fill(keys::CATALOG_UPDATED, &[("name", draft.record.name.clone())])),
                        ));
                    }
                    if ui
                        .add(egui::Button::new(egui::RichText::new(tr.t("gui.catalog.delete")).color(WARN_COLOR)))
                        .clicked()
                    {
                        pending = Some((
                            SessionEvent::RemoveChemical(draft.original_name.clone()),
                            Some(tr.fill(keys::CATALOG_REMOVED, &[("name", draft.original_name.clone())])),
                        ));
                    }
                    ui.end_row();
                }
                row_editor(ui, &mut self.new_row);
                if ui.button(tr.t("gui.catalog.add")).clicked() {
                    pending = Some((
                        SessionEvent::AddChemical(self.new_row.clone()),
                        Some(tr.fill(keys::CATALOG_ADDED, &[("name", self.new_row.name.clone())])),
                    ));
                }
                ui.end_row();
            });
        if let Some((event, msg)) = pending {
            let is_add = matches!(event, SessionEvent::AddChemical(_));
            self.dispatch(event, msg);
            if is_add && matches!(self.edit_status, Some((true, _))) {
                self.new_row = empty_row();
            }
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(tr.t("gui.catalog.reset")).clicked() {
                self.dispatch(SessionEvent::ResetCatalog, Some(tr.t(keys::CATALOG_RESET)));
            }
            if ui.button(tr.t("gui.catalog.import")).clicked() {
                if let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() {
                    match Catalog::load(&path) {
                        Ok(catalog) => {
                            let msg = tr.fill(keys::CATALOG_LOADED, &[("count", catalog.len().to_string())]);
                            self.dispatch(SessionEvent::ReplaceCatalog(catalog), Some(msg));
                        }
                        Err(e) => {
                            self.edit_status = Some((false, format!("{}: {e}", tr.t(keys::ERROR_PREFIX))));
                        }
                    }
                }
            }
            if ui.button(tr.t("gui.catalog.export")).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("TOML", &["toml"])
                    .set_file_name("catalog.toml")
                    .save_file()
                {
                    self.edit_status = Some(match self.session.catalog().save(&path) {
                        Ok(()) => (
                            true,
                            tr.fill(keys::CATALOG_SAVED, &[("path", path.display().to_string())]),
                        ),
                        Err(e) => (false, format!("{}: {e}", tr.t(keys::ERROR_PREFIX))),
                    });
                }
            }
        });
        if let Some((ok, msg)) = &self.edit_status {
            ui.colored_label(if *ok { SYRINGE_COLOR } else { WARN_COLOR }, msg);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.strong(tr.t(keys::HAZARD_HEADING));
        let before = self.hazard_target.clone();
        egui::ComboBox::from_id_source("hazard_target")
            .selected_text(self.hazard_target.clone())
            .show_ui(ui, |ui| {
                for name in self.session.catalog().names() {
                    ui.selectable_value(&mut self.hazard_target, name.to_string(), name);
                }
            });
        if before != self.hazard_target {
            self.hazard_draft = self
                .session
                .catalog()
                .find_by_name(&self.hazard_target)
                .map(|r| r.hazard.clone())
                .unwrap_or_default();
        }
        egui::Grid::new("hazard_edit_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for field in HazardField::ALL {
                    ui.label(tr.t(field.label_key()));
                    let mut value = self.hazard_draft.get(field).to_string();
                    let edit = egui::TextEdit::singleline(&mut value)
                        .hint_text(tr.t(keys::HAZARD_MISSING))
                        .desired_width(360.0);
                    if ui.add(edit).changed() {
                        self.hazard_draft.set(field, &value);
                    }
                    ui.end_row();
                }
            });
        if ui.button(tr.t("gui.catalog.save_hazard")).clicked() {
            let name = self.hazard_target.clone();
            self.dispatch(
                SessionEvent::SetHazard {
                    name: name.clone(),
                    hazard: self.hazard_draft.clone(),
                },
                Some(tr.fill(keys::CATALOG_UPDATED, &[("name", name)])),
            );
        }
    }
}

fn empty_row() -> ChemicalRecord {
    ChemicalRecord::new("", 0.0, 0.0, 100.0)
}

fn row_editor(ui: &mut egui::Ui, record: &mut ChemicalRecord) {
    ui.add(egui::TextEdit::singleline(&mut record.name).desired_width(140.0));
    ui.add(egui::DragValue::new(&mut record.molecular_weight).speed(0.01).max_decimals(3));
    ui.add(egui::DragValue::new(&mut record.density).speed(0.001).max_decimals(3));
    ui.add(
        egui::DragValue::new(&mut record.purity_percent)
            .speed(0.1)
            .clamp_range(0.0..=100.0)
            .suffix(" %"),
    );
}

/// 유해성 패널. 빈 필드는 입력 안내 문구를 흐리게 표시한다.
fn hazard_panel(ui: &mut egui::Ui, tr: &i18n::Translator, record: &ChemicalRecord) {
    egui::Grid::new("hazard_view_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for field in HazardField::ALL {
                ui.strong(tr.t(field.label_key()));
                match record.hazard.display(field) {
                    FieldDisplay::Text(s) => ui.label(s),
                    FieldDisplay::Missing => ui.weak(tr.t(keys::HAZARD_MISSING)),
                };
                ui.end_row();
            }
        });
    if let Ok(url) = hazard::msds_link(&record.name) {
        ui.hyperlink_to(tr.t(keys::HAZARD_MSDS_LINK), url.as_str());
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(tr.t("gui.settings.title")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(tr.t("gui.about.title")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = self.show_settings_modal;
            egui::Window::new(tr.t("gui.settings.title"))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(tr.t("gui.settings.ui_scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(&mut self.always_on_top, tr.t("gui.settings.always_on_top"));
                    ui.label(tr.t("gui.settings.alpha"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(tr.t("gui.settings.font"));
                    if ui.button(tr.t("gui.settings.font_pick")).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            self.font_load_error = load_custom_font(ctx, &path).err();
                        }
                    }
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(WARN_COLOR, err);
                    }
                    ui.separator();
                    ui.label(tr.t("gui.settings.lang"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), tr.t("gui.settings.lang_auto"));
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(tr.t("gui.settings.save")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        self.config.always_on_top = self.always_on_top;
                        let input = *self.session.input();
                        self.config.defaults.air_volume_l = input.air_volume_l;
                        self.config.defaults.target_ppm = input.target_ppm;
                        self.config.defaults.temperature_c = input.temperature_c;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
                        self.lang_save_status = Some(match self.config.save() {
                            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
                            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                        });
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            self.show_settings_modal = open;
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(tr.t("gui.about.title"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(tr.t("gui.about.app"));
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(tr.t(keys::DETAIL_FORMULA));
                    ui.label(tr.t("gui.about.molar_volume"));
                    ui.label(tr.t("gui.about.tools"));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(120.0)
            .default_width(160.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::Catalog => self.ui_catalog(ui),
                });
        });
    }
}
