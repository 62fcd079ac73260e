// SPDX-License-Identifier: MPL-2.0
use smartchef::config::{self, Config, DEFAULT_SERVER_URL};
use smartchef::i18n::I18n;
use smartchef::net::settings::FailurePolicy;
use smartchef::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: Some("mr".to_string()),
        theme: ThemeMode::Dark,
        server_url: Some("https://smartchef.example".to_string()),
        sync_failure_policy: FailurePolicy::RetryOnce,
        search_debounce_ms: Some(250),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.language.as_deref(), Some("mr"));
    assert_eq!(loaded.theme, ThemeMode::Dark);
    assert_eq!(loaded.server_url(), "https://smartchef.example");
    assert_eq!(loaded.sync_failure_policy, FailurePolicy::RetryOnce);
    assert_eq!(loaded.search_debounce_ms, Some(250));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: hi
    let initial_config = Config {
        language: Some("hi".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_hi = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_hi.current_locale().to_string(), "hi");
    assert_eq!(i18n_hi.tr("navbar-recipes"), "रेसिपी");

    // 2. Change config to mr
    let marathi_config = Config {
        language: Some("mr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&marathi_config, &temp_config_file_path)
        .expect("Failed to write marathi config file");

    let loaded_marathi_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load marathi config from path");
    let i18n_mr = I18n::new(None, &loaded_marathi_config);
    assert_eq!(i18n_mr.current_locale().to_string(), "mr");
    assert_eq!(i18n_mr.tr("navbar-settings"), "सेटिंग्ज");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let config = Config {
        language: Some("hi".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("mr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "mr");
}

#[test]
fn test_invalid_config_degrades_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is { not toml").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Invalid config should degrade");
    assert_eq!(loaded.language, None);
    assert_eq!(loaded.theme, ThemeMode::Light);
    assert_eq!(loaded.server_url(), DEFAULT_SERVER_URL);
    assert_eq!(loaded.sync_failure_policy, FailurePolicy::Ignore);

    dir.close().expect("Failed to close temporary directory");
}
