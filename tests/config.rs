use gas_ppm_toolbox::calc::CalculationInput;
use gas_ppm_toolbox::config::{self, Config};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default_at(&path).expect("config");
    assert!(path.exists());
    assert_eq!(cfg.path(), path.as_path());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.initial_input(), CalculationInput::default());
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = config::load_or_default_at(&path).expect("config");
    cfg.language = "ko-kr".into();
    cfg.always_on_top = true;
    cfg.defaults.air_volume_l = 20.0;
    cfg.defaults.temperature_c = 23.5;
    cfg.save().expect("save");

    let loaded = config::load_or_default_at(&path).expect("reload");
    assert_eq!(loaded.language, "ko-kr");
    assert!(loaded.always_on_top);
    assert_eq!(loaded.initial_input().air_volume_l, 20.0);
    assert_eq!(loaded.initial_input().temperature_c, 23.5);
}

#[test]
fn partial_config_uses_field_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n").expect("write");
    let cfg: Config = config::load_or_default_at(&path).expect("config");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.window_alpha, 1.0);
    assert!(cfg.catalog_path.is_none());
    assert_eq!(cfg.defaults.target_ppm, 1000.0);
}
