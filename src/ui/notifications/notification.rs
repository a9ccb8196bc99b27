// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] carries a stable message key (the same keys the config
//! and state loaders return as warnings) plus an optional free-form detail
//! line. Keys are turned into display text by [`message_text`].

use crate::ui::theming::ColorScheme;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s).
    #[default]
    Success,
    /// Informational message (3s).
    Info,
    /// Something went wrong but the page keeps working (5s).
    Warning,
    /// Requires attention, manual dismiss.
    Error,
}

impl Severity {
    /// Accent color for this severity in the given scheme.
    #[must_use]
    pub fn accent(self, colors: &ColorScheme) -> Color {
        match self {
            Severity::Success => colors.success,
            Severity::Info => colors.info,
            Severity::Warning => colors.warning,
            Severity::Error => colors.error,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// Display text for a known message key. Unknown keys are shown verbatim.
#[must_use]
pub fn message_text(key: &str) -> &str {
    match key {
        "notification-config-load-error" => {
            "Settings file could not be read. Using default settings."
        }
        "notification-state-parse-error" => {
            "Saved preferences are corrupted and were reset."
        }
        "notification-state-read-error" => "Saved preferences could not be read.",
        "notification-state-path-error" => {
            "No data directory available. Theme preference will not be remembered."
        }
        "notification-state-dir-error" => "Could not create the data directory.",
        "notification-state-create-error" => "Could not create the preferences file.",
        "notification-state-write-error" => "Theme preference could not be saved.",
        "notification-contact-send-error" => "Your message could not be delivered.",
        "notification-contact-send-success" => "Message sent.",
        "notification-contact-endpoint-error" => {
            "Contact endpoint is unusable. Messages will only be simulated."
        }
        "notification-link-copied" => "Link copied to the clipboard.",
        other => other,
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    /// Extra context appended under the message (e.g. a transport error).
    detail: Option<String>,
    created_at: Instant,
    /// Overrides the severity default when set.
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            detail: None,
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Attaches a detail line shown below the message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Resolved display text of the message key.
    #[must_use]
    pub fn text(&self) -> &str {
        message_text(&self.message_key)
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification should auto-dismiss.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
            .is_some_and(|d| self.age() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_accents_are_distinct() {
        let colors = ColorScheme::light();
        let accents = [
            Severity::Success.accent(&colors),
            Severity::Info.accent(&colors),
            Severity::Warning.accent(&colors),
            Severity::Error.accent(&colors),
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(!Notification::error("x").should_auto_dismiss());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Severity::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn zero_custom_duration_dismisses_immediately() {
        let n = Notification::error("x").auto_dismiss(Duration::ZERO);
        assert!(n.should_auto_dismiss());
    }

    #[test]
    fn known_keys_resolve_to_sentences() {
        let n = Notification::warning("notification-state-write-error");
        assert_eq!(n.text(), "Theme preference could not be saved.");
    }

    #[test]
    fn unknown_keys_are_shown_verbatim() {
        assert_eq!(message_text("plain text"), "plain text");
    }

    #[test]
    fn detail_is_optional() {
        let n = Notification::error("notification-contact-send-error").with_detail("timeout");
        assert_eq!(n.detail(), Some("timeout"));
        assert_eq!(Notification::info("x").detail(), None);
    }
}
