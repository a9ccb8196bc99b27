// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! [`ThemeStore`] owns the single `is_dark` flag of the app. It is seeded
//! from the persisted preference (or the configured [`ThemeMode`] when none
//! exists yet), flipped by the header toggle, and written back through a
//! [`ThemePreferenceStore`] on every change. Views never hold their own copy;
//! they receive the current [`ColorScheme`] by reference.

use crate::app::persisted_state::AppState;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_card: Color,
    pub surface_muted: Color,
    pub border: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub brand_accent: Color,
    pub brand_soft: Color,
    pub on_brand_soft: Color,

    // Status
    pub error: Color,
    pub error_soft: Color,
    pub on_error_soft: Color,
    pub success: Color,
    pub success_soft: Color,
    pub on_success_soft: Color,
    pub warning: Color,
    pub info: Color,

    // Overlays
    pub overlay_background: Color,
    pub overlay_text: Color,

    // Footer (always dark)
    pub footer_background: Color,
    pub footer_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_card: palette::WHITE,
            surface_muted: palette::GRAY_100,
            border: palette::GRAY_300,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_hover: palette::PRIMARY_700,
            brand_accent: palette::ACCENT_600,
            brand_soft: palette::PRIMARY_100,
            on_brand_soft: palette::PRIMARY_900,

            error: palette::ERROR_500,
            error_soft: palette::ERROR_100,
            on_error_soft: palette::ERROR_800,
            success: palette::SUCCESS_500,
            success_soft: palette::SUCCESS_100,
            on_success_soft: palette::SUCCESS_800,
            warning: palette::WARNING_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,

            footer_background: palette::GRAY_900,
            footer_text: palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_card: palette::GRAY_900,
            surface_muted: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            text_tertiary: palette::GRAY_600,

            brand_primary: palette::PRIMARY_400,
            brand_hover: palette::PRIMARY_600,
            brand_accent: palette::ACCENT_500,
            brand_soft: palette::PRIMARY_900,
            on_brand_soft: palette::PRIMARY_100,

            error: palette::ERROR_500,
            error_soft: palette::ERROR_800,
            on_error_soft: palette::ERROR_100,
            success: palette::SUCCESS_500,
            success_soft: palette::SUCCESS_800,
            on_success_soft: palette::SUCCESS_100,
            warning: palette::WARNING_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,

            footer_background: palette::BLACK,
            footer_text: palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// `System` asks the OS; detection failures fall back to light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {other}")),
        }
    }
}

// =============================================================================
// Persistence port
// =============================================================================

/// Where the light/dark choice is remembered between sessions.
///
/// Both methods report failures as a notification key instead of an error:
/// a broken store must never prevent theming from working.
pub trait ThemePreferenceStore: fmt::Debug {
    /// Returns the stored choice, if any, and an optional warning key.
    fn load(&self) -> (Option<bool>, Option<String>);

    /// Stores `is_dark`. Returns a warning key when that failed.
    fn save(&mut self, is_dark: bool) -> Option<String>;
}

/// Persists the preference in the CBOR state file.
#[derive(Debug, Clone, Default)]
pub struct StateFileStore {
    base_dir: Option<PathBuf>,
}

impl StateFileStore {
    /// Store using the default data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rooted at `base_dir` instead of the default data directory.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }
}

impl ThemePreferenceStore for StateFileStore {
    fn load(&self) -> (Option<bool>, Option<String>) {
        let (state, warning) = AppState::load_from(self.base_dir.clone());
        (state.dark_mode, warning)
    }

    fn save(&mut self, is_dark: bool) -> Option<String> {
        // Read-modify-write so future state fields survive a theme change.
        let (mut state, _) = AppState::load_from(self.base_dir.clone());
        state.dark_mode = Some(is_dark);
        state.save_to(self.base_dir.clone())
    }
}

/// Keeps the preference in memory only. Used by tests and when the data
/// directory cannot be resolved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<bool>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(value: Option<bool>) -> Self {
        Self { value, saves: 0 }
    }

    #[must_use]
    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ThemePreferenceStore for MemoryStore {
    fn load(&self) -> (Option<bool>, Option<String>) {
        (self.value, None)
    }

    fn save(&mut self, is_dark: bool) -> Option<String> {
        self.value = Some(is_dark);
        self.saves += 1;
        None
    }
}

// =============================================================================
// ThemeStore
// =============================================================================

/// The app-wide light/dark flag and its persistence.
#[derive(Debug)]
pub struct ThemeStore {
    is_dark: bool,
    colors: ColorScheme,
    store: Box<dyn ThemePreferenceStore>,
}

impl ThemeStore {
    /// Creates a store with an explicit initial value. Nothing is persisted.
    #[must_use]
    pub fn new(is_dark: bool, store: Box<dyn ThemePreferenceStore>) -> Self {
        Self {
            is_dark,
            colors: ColorScheme::for_dark(is_dark),
            store,
        }
    }

    /// Creates a store seeded from `store`, or from `fallback` when nothing
    /// was persisted yet. Returns a warning key if the stored value could not
    /// be read.
    pub fn load(store: Box<dyn ThemePreferenceStore>, fallback: ThemeMode) -> (Self, Option<String>) {
        let (stored, warning) = store.load();
        let is_dark = stored.unwrap_or_else(|| fallback.is_dark());
        tracing::debug!(is_dark, persisted = stored.is_some(), "theme initialized");
        (Self::new(is_dark, store), warning)
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Built-in iced theme matching the current mode, for widgets that are
    /// not styled explicitly.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Flips the theme and persists the new value. Returns a warning key when
    /// persisting failed; the in-memory flip happens regardless.
    pub fn toggle(&mut self) -> Option<String> {
        self.set_dark(!self.is_dark)
    }

    /// Sets the theme explicitly and persists it.
    pub fn set_dark(&mut self, is_dark: bool) -> Option<String> {
        self.is_dark = is_dark;
        self.colors = ColorScheme::for_dark(is_dark);
        tracing::info!(is_dark, "theme changed");
        self.store.save(is_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Debug)]
    struct FailingStore;

    impl ThemePreferenceStore for FailingStore {
        fn load(&self) -> (Option<bool>, Option<String>) {
            (None, Some("notification-state-read-error".to_string()))
        }

        fn save(&mut self, _is_dark: bool) -> Option<String> {
            Some("notification-state-write-error".to_string())
        }
    }

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::System.to_string(), "system");
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn persisted_value_wins_over_fallback() {
        let (store, warning) =
            ThemeStore::load(Box::new(MemoryStore::new(Some(true))), ThemeMode::Light);
        assert!(store.is_dark());
        assert!(warning.is_none());
    }

    #[test]
    fn fallback_used_without_persisted_value() {
        let (store, _) = ThemeStore::load(Box::new(MemoryStore::new(None)), ThemeMode::Light);
        assert!(!store.is_dark());
        assert_eq!(store.iced_theme(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_recolors() {
        let mut store = ThemeStore::new(false, Box::new(MemoryStore::default()));
        assert!(store.toggle().is_none());
        assert!(store.is_dark());
        assert_eq!(store.colors(), &ColorScheme::dark());
    }

    #[test]
    fn toggle_twice_restores_value() {
        let mut store = ThemeStore::new(true, Box::new(MemoryStore::default()));
        store.toggle();
        store.toggle();
        assert!(store.is_dark());
    }

    #[test]
    fn failed_save_still_flips_and_warns() {
        let mut store = ThemeStore::new(false, Box::new(FailingStore));
        let warning = store.toggle();
        assert!(store.is_dark());
        assert_eq!(warning.as_deref(), Some("notification-state-write-error"));
    }

    #[test]
    fn failed_load_falls_back_with_warning() {
        let (store, warning) = ThemeStore::load(Box::new(FailingStore), ThemeMode::Dark);
        assert!(store.is_dark());
        assert!(warning.is_some());
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut mem = MemoryStore::new(None);
        mem.save(true);
        mem.save(false);
        assert_eq!(mem.value(), Some(false));
        assert_eq!(mem.saves(), 2);
    }

    #[test]
    fn state_file_store_round_trips() {
        let dir = tempdir().expect("create temp dir");
        let mut file_store = StateFileStore::with_base_dir(dir.path());
        assert_eq!(file_store.load(), (None, None));

        assert!(file_store.save(true).is_none());

        let reopened = StateFileStore::with_base_dir(dir.path());
        assert_eq!(reopened.load(), (Some(true), None));
    }
}
