// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config};
use iced_folio::app::persisted_state::AppState;
use iced_folio::ui::theming::{StateFileStore, ThemeMode, ThemeStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn toggled_theme_survives_a_restart() {
    let dir = tempdir().expect("failed to create temp dir");

    let (mut first, warning) =
        ThemeStore::load(Box::new(StateFileStore::with_base_dir(dir.path())), ThemeMode::Light);
    assert!(warning.is_none());
    assert!(!first.is_dark());
    assert!(first.toggle().is_none());

    let (second, warning) =
        ThemeStore::load(Box::new(StateFileStore::with_base_dir(dir.path())), ThemeMode::Light);
    assert!(warning.is_none());
    assert!(second.is_dark());

    let (state, _) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(state.dark_mode, Some(true));
}

#[test]
fn corrupt_state_file_falls_back_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("state.cbor"), b"not cbor at all").expect("failed to write state");

    let (store, warning) =
        ThemeStore::load(Box::new(StateFileStore::with_base_dir(dir.path())), ThemeMode::Dark);
    assert!(store.is_dark());
    assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
}

#[test]
fn configured_theme_mode_seeds_first_launch() {
    let dir = tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n").expect("failed to write config");

    let config: Config = config::load_from_path(&config_path).expect("config should parse");
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let state_dir = dir.path().join("data");
    let (store, warning) = ThemeStore::load(
        Box::new(StateFileStore::with_base_dir(&state_dir)),
        config.general.theme_mode,
    );
    assert!(warning.is_none());
    assert!(store.is_dark());
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.contact.endpoint = Some("https://example.com/contact".to_string());
    config.animations.enabled = Some(false);
    let content = toml::to_string_pretty(&config).expect("config should serialize");
    fs::write(&config_path, content).expect("config should write");

    let loaded = config::load_from_path(&config_path).expect("config should load");
    assert_eq!(loaded, config);
    assert_eq!(loaded.contact.endpoint(), Some("https://example.com/contact"));
    assert!(!loaded.animations.is_enabled());
}
