// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! hand-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Initial theme mode (used until the user toggles the theme)
//! - `[contact]` - Message endpoint and form timings
//! - `[animations]` - Reveal animations on/off
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("endpoint: {:?}", config.contact.endpoint());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Theme used when no persisted preference exists (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// When set, messages are POSTed here as JSON instead of being simulated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Delay of the simulated send, in milliseconds.
    #[serde(
        default = "default_submit_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_delay_ms: Option<u64>,

    /// Seconds the success message stays before the form resets.
    #[serde(
        default = "default_success_reset_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_reset_secs: Option<u64>,

    /// Per-request timeout of the HTTP sender, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            submit_delay_ms: default_submit_delay_ms(),
            success_reset_secs: default_success_reset_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ContactConfig {
    /// Configured endpoint, ignoring blank values.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        let ms = self
            .submit_delay_ms
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
            .min(MAX_SUBMIT_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn success_reset(&self) -> Duration {
        let secs = self
            .success_reset_secs
            .unwrap_or(DEFAULT_SUCCESS_RESET_SECS)
            .clamp(MIN_SUCCESS_RESET_SECS, MAX_SUCCESS_RESET_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Play entrance and scroll-reveal animations.
    #[serde(
        default = "default_animations_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_animations_enabled(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_ANIMATIONS_ENABLED)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub animations: AnimationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_submit_delay_ms() -> Option<u64> {
    Some(DEFAULT_SUBMIT_DELAY_MS)
}

fn default_success_reset_secs() -> Option<u64> {
    Some(DEFAULT_SUCCESS_RESET_SECS)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_animations_enabled() -> Option<bool> {
    Some(DEFAULT_ANIMATIONS_ENABLED)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config dir");
        }
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            contact: ContactConfig {
                endpoint: Some("https://example.com/contact".to_string()),
                submit_delay_ms: Some(250),
                success_reset_secs: Some(3),
                request_timeout_secs: Some(20),
            },
            animations: AnimationConfig {
                enabled: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("config parses");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.contact.endpoint, None);
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.contact.success_reset(), Duration::from_secs(5));
        assert_eq!(config.contact.request_timeout(), Duration::from_secs(10));
        assert!(config.animations.is_enabled());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let config: Config =
            toml::from_str("[contact]\nendpoint = \"http://localhost:8080/contact\"\n")
                .expect("config parses");
        assert_eq!(
            config.contact.endpoint(),
            Some("http://localhost:8080/contact")
        );
        assert_eq!(config.contact.success_reset_secs, Some(DEFAULT_SUCCESS_RESET_SECS));
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.animations, AnimationConfig::default());
    }

    #[test]
    fn blank_endpoint_is_treated_as_unset() {
        let contact = ContactConfig {
            endpoint: Some("   ".to_string()),
            ..ContactConfig::default()
        };
        assert_eq!(contact.endpoint(), None);
    }

    #[test]
    fn out_of_range_timings_are_clamped() {
        let contact = ContactConfig {
            endpoint: None,
            submit_delay_ms: Some(u64::MAX),
            success_reset_secs: Some(0),
            request_timeout_secs: Some(10_000),
        };
        assert_eq!(
            contact.submit_delay(),
            Duration::from_millis(MAX_SUBMIT_DELAY_MS)
        );
        assert_eq!(
            contact.success_reset(),
            Duration::from_secs(MIN_SUCCESS_RESET_SECS)
        );
        assert_eq!(
            contact.request_timeout(),
            Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn load_with_override_reads_settings_from_base_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        write_config(&config, &base_dir.join(CONFIG_FILE));
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ broken")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn serialized_config_uses_sectioned_format() {
        let content = toml::to_string_pretty(&Config::default()).expect("failed to serialize");

        assert!(content.contains("[general]"));
        assert!(content.contains("[contact]"));
        assert!(content.contains("[animations]"));
        assert!(content.contains("theme_mode = \"system\""));
    }
}
