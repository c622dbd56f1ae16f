use super::*;

#[test]
fn default_config_has_expected_tick_rate() {
    let config = AppConfig::default();
    assert_eq!(config.tick_rate_ms(), 250);
}

#[test]
fn zero_tick_rate_is_clamped() {
    let raw = "[general]\ntick_rate_ms = 0\n";
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 0);
    assert_eq!(config.tick_rate_ms(), MIN_TICK_RATE_MS);
}

#[test]
fn embedded_defaults_match_struct_defaults() {
    let embedded = AppConfig::default();
    let general = GeneralConfig::default();
    let panels = PanelConfig::default();
    assert_eq!(embedded.general.preview_rows, general.preview_rows);
    assert_eq!(embedded.general.preview_columns, general.preview_columns);
    assert_eq!(embedded.general.log_file, general.log_file);
    assert_eq!(embedded.panels.width, panels.width);
    assert_eq!(embedded.panels.height, panels.height);
    assert_eq!(embedded.panels.text_input_char_limit, panels.text_input_char_limit);
    assert_eq!(embedded.theme.border_focused, ThemeConfig::default().border_focused);
}

#[test]
fn default_preview_reads_five_rows_three_columns() {
    let config = AppConfig::default();
    assert_eq!(config.general.preview_rows, 5);
    assert_eq!(config.general.preview_columns, 3);
    assert!(!config.general.show_hidden);
}

#[test]
fn default_panel_geometry() {
    let config = AppConfig::default();
    assert_eq!(config.panels.width, 100);
    assert_eq!(config.panels.height, 25);
    assert_eq!(config.panels.text_input_placeholder, "Pikachu");
    assert_eq!(config.panels.text_input_char_limit, 156);
    assert_eq!(config.panels.text_input_width, 20);
}

#[test]
fn parse_general_from_toml() {
    let raw = r#"
[general]
preview_rows = 20
start_dir = "/data"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.preview_rows, 20);
    assert_eq!(config.general.start_dir, "/data");
    assert_eq!(config.general.preview_columns, 3);
}

#[test]
fn kebab_case_aliases_are_accepted() {
    let raw = r##"
[general]
show-hidden = true
tick-rate-ms = 100

[theme]
border-focused = "#ff0000"
"##;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert!(config.general.show_hidden);
    assert_eq!(config.general.tick_rate_ms, 100);
    assert_eq!(config.theme.border_focused, "#ff0000");
}

#[test]
fn partial_toml_only_panels_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user: AppConfig = toml::from_str("[panels]\nwidth = 60\n").unwrap();
    base.merge(user);

    assert_eq!(base.panels.width, 60);
    assert_eq!(base.panels.height, 25);
    assert_eq!(base.general.tick_rate_ms, 250);
    assert_eq!(base.theme.help, "241");
}

#[test]
fn load_from_reads_user_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\npreview_rows = 9\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.general.preview_rows, 9);
}

#[test]
fn load_from_propagates_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general\npreview_rows = ").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn init_at_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let written = AppConfig::init_at(&path).unwrap();
    assert_eq!(written, path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

    let err = AppConfig::init_at(&path).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn start_dir_prefers_override_then_config() {
    let mut config = AppConfig::default();
    assert_eq!(config.start_dir(Some(Path::new("/override"))), PathBuf::from("/override"));

    config.general.start_dir = "/configured".into();
    assert_eq!(config.start_dir(None), PathBuf::from("/configured"));
}
