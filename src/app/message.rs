// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::animation::ScrollSample;
use crate::ui::contact_form;
use crate::ui::footer;
use crate::ui::header;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::projects;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Home(home::Message),
    Projects(projects::Message),
    Contact(contact_form::Message),
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was measured.
    Scrolled(ScrollSample),
    ScrollToTop,
    EscapePressed,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
    /// Redraw tick while an entrance or hover animation runs.
    AnimationFrame(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Forces the initial theme for this session instead of the persisted one.
    pub theme: Option<ThemeMode>,
    /// Contact endpoint; takes precedence over `[contact] endpoint`.
    pub endpoint: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
