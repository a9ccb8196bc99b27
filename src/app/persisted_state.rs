// SPDX-License-Identifier: MPL-2.0
//! Application state persisted across sessions in CBOR format.
//!
//! Holds what the app decides on the user's behalf through interaction
//! (currently the light/dark choice made with the header toggle), as
//! opposed to `settings.toml`, which the user edits by hand.
//!
//! The file lives in the data directory (see [`paths::get_app_data_dir`]).
//! Load and save never fail hard: problems come back as a notification key.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Last theme chosen with the toggle. `None` until the user toggles once,
    /// in which case `[general] theme_mode` decides.
    #[serde(default)]
    pub dark_mode: Option<bool>,
}

impl AppState {
    /// Loads state from `base_dir`, or from the default location when `None`.
    ///
    /// Returns `(state, warning)`: on failure, default state plus a
    /// notification key.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot load state file");
                let key = match err {
                    Error::State(_) => "notification-state-parse-error",
                    _ => "notification-state-read-error",
                };
                (Self::default(), Some(key.to_string()))
            }
        }
    }

    /// Saves state to `base_dir`, creating it when needed. Returns a
    /// notification key on failure.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), %err, "cannot create data directory");
                return Some("notification-state-dir-error".to_string());
            }
        }

        match self.write(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "state saved");
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot write state file");
                let key = match err {
                    Error::State(_) => "notification-state-write-error",
                    _ => "notification-state-create-error",
                };
                Some(key.to_string())
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Ok(ciborium::from_reader(BufReader::new(file))?)
    }

    fn write(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        ciborium::into_writer(self, BufWriter::new(file))?;
        Ok(())
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_theme_preference() {
        assert_eq!(AppState::default().dark_mode, None);
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let original = AppState {
            dark_mode: Some(true),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "missing file is not an error");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));

        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            dark_mode: Some(false),
        };
        assert!(state.save_to(Some(nested_dir.clone())).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn save_into_a_file_path_reports_dir_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let blocker = temp_dir.path().join("occupied");
        fs::write(&blocker, b"file, not a dir").expect("write blocker");

        let warning = AppState::default().save_to(Some(blocker.join("sub")));
        assert_eq!(warning.as_deref(), Some("notification-state-dir-error"));
    }

    #[test]
    fn read_classifies_undecodable_file_as_state_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(STATE_FILE);
        fs::write(&path, [0xff, 0x00]).expect("write file");

        assert!(matches!(AppState::read(&path), Err(Error::State(_))));
    }

    #[test]
    fn read_classifies_missing_file_as_io_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let missing = temp_dir.path().join(STATE_FILE);

        assert!(matches!(AppState::read(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn blocked_state_file_reports_create_error() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::create_dir(temp_dir.path().join(STATE_FILE)).expect("create dir");

        let warning = AppState::default().save_to(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-create-error"));
    }
}
