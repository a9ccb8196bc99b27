// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the theme, the reveal animations, the
//! project modal and the contact form, and translates messages into side
//! effects like scrolling, persistence or message delivery.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
pub mod section;
mod subscription;
pub mod update;
pub mod view;

pub use message::{Flags, Message};

use crate::contact::{HttpSender, MessageSender, SimulatedSender};
use crate::content;
use crate::ui::animation::{EstimatedLayout, Motion, RevealTracker, ScrollSample};
use crate::ui::contact_form;
use crate::ui::design_tokens::sizing;
use crate::ui::footer;
use crate::ui::notifications::{self, Notification};
use crate::ui::projects;
use crate::ui::theming::{StateFileStore, ThemeStore};
use iced::{window, Element, Subscription, Task, Theme};
use section::{page_layout, Region};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    theme: ThemeStore,
    reveal: RevealTracker<Region>,
    layout: EstimatedLayout<Region>,
    /// Last viewport reported by the page scrollable.
    scroll: ScrollSample,
    projects: projects::State,
    contact: contact_form::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Year shown in the footer, fixed at startup.
    year: i32,
    /// Instant of the message being processed; views animate against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_dark", &self.theme.is_dark())
            .field("scroll", &self.scroll)
            .field("modal_open", &self.projects.selection().is_open())
            .field("form_status", self.contact.form().status())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("application booted twice; using default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the delivery backend: HTTP when an endpoint is set, simulated
/// otherwise. A broken endpoint falls back to simulation with a warning.
fn build_sender(
    endpoint: Option<&str>,
    contact: &config::ContactConfig,
    notifications: &mut notifications::Manager,
) -> Arc<dyn MessageSender> {
    let simulated = || -> Arc<dyn MessageSender> {
        Arc::new(SimulatedSender::new(contact.submit_delay()))
    };

    let Some(endpoint) = endpoint else {
        tracing::info!("no contact endpoint configured, simulating delivery");
        return simulated();
    };

    match HttpSender::new(endpoint, contact.request_timeout()) {
        Ok(sender) => {
            tracing::info!(endpoint, "contact messages go to endpoint");
            Arc::new(sender)
        }
        Err(err) => {
            tracing::warn!(endpoint, %err, "contact endpoint unusable, simulating delivery");
            notifications.push(
                Notification::warning("notification-contact-endpoint-error")
                    .with_detail(err.to_string()),
            );
            simulated()
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut notifications = notifications::Manager::new();
        notifications.push_warning(config_warning);

        let theme = match flags.theme {
            Some(mode) => ThemeStore::new(mode.is_dark(), Box::new(StateFileStore::new())),
            None => {
                let (theme, warning) =
                    ThemeStore::load(Box::new(StateFileStore::new()), config.general.theme_mode);
                notifications.push_warning(warning);
                theme
            }
        };

        let endpoint = flags
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| config.contact.endpoint());
        let sender = build_sender(endpoint, &config.contact, &mut notifications);

        let app = Self::with_services(&config, theme, sender, notifications);
        (app, Task::none())
    }

    /// Assembles the app around already-built services.
    fn with_services(
        config: &config::Config,
        theme: ThemeStore,
        sender: Arc<dyn MessageSender>,
        notifications: notifications::Manager,
    ) -> Self {
        let now = Instant::now();
        let mut app = Self {
            theme,
            reveal: RevealTracker::new(config.animations.is_enabled()),
            layout: page_layout(),
            scroll: ScrollSample {
                offset_y: 0.0,
                viewport_height: WINDOW_DEFAULT_HEIGHT - sizing::HEADER_HEIGHT,
                content_height: 0.0,
            },
            projects: projects::State::default(),
            contact: contact_form::State::new(sender, config.contact.success_reset()),
            notifications,
            year: footer::current_year(),
            now,
        };
        update::observe_initial(&mut app.update_context());
        app
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            theme: &mut self.theme,
            reveal: &mut self.reveal,
            layout: &self.layout,
            scroll: &mut self.scroll,
            projects: &mut self.projects,
            contact: &mut self.contact,
            notifications: &mut self.notifications,
            now: self.now,
        }
    }

    fn title(&self) -> String {
        format!("{} | Portfolio", content::profile().name)
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let animating = self
            .reveal
            .is_animating(subscription::reveal_horizon(), now)
            || self.projects.is_animating(now);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_subscription(animating),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        let mut ctx = self.update_context();

        match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, &message),
            Message::Home(message) => update::handle_home_message(&mut ctx, &message),
            Message::Projects(message) => update::handle_projects_message(&mut ctx, &message),
            Message::Contact(message) => update::handle_contact_message(&mut ctx, message),
            Message::Footer(message) => update::handle_footer_message(&mut ctx, &message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Scrolled(sample) => update::handle_scrolled(&mut ctx, sample),
            Message::ScrollToTop => update::scroll_to_top(),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::WindowCloseRequested(_id) => update::handle_window_close(&mut ctx),
            // The frame only refreshes `now`; the view does the rest.
            Message::AnimationFrame(_) => Task::none(),
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            colors: self.theme.colors(),
            is_dark: self.theme.is_dark(),
            motion: Motion::new(&self.reveal, self.now),
            scroll: &self.scroll,
            projects: &self.projects,
            contact: &self.contact,
            notifications: &self.notifications,
            year: self.year,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormField, FormStatus, SubmissionError};
    use crate::content::ProjectId;
    use crate::ui::header;
    use crate::ui::theming::MemoryStore;
    use std::time::Duration;

    fn test_app(config: &config::Config) -> App {
        App::with_services(
            config,
            ThemeStore::new(false, Box::new(MemoryStore::new(None))),
            Arc::new(SimulatedSender::new(Duration::from_millis(1))),
            notifications::Manager::new(),
        )
    }

    fn app() -> App {
        test_app(&config::Config::default())
    }

    #[test]
    fn starts_light_at_the_top() {
        let app = app();
        assert!(!app.theme.is_dark());
        assert_eq!(app.scroll.offset_y, 0.0);
        assert!(!app.projects.selection().is_open());
        assert_eq!(app.contact.form().status(), &FormStatus::Idle);
    }

    #[test]
    fn hero_is_revealed_on_launch() {
        let app = app();
        assert!(app.reveal.is_revealed(Region::Hero));
        assert!(!app.reveal.is_revealed(Region::Footer));
    }

    #[test]
    fn title_names_the_owner() {
        let app = app();
        assert!(app.title().starts_with(content::profile().name));
    }

    #[test]
    fn theme_toggle_flips_the_iced_theme() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::Header(header::Message::ToggleTheme));
        assert!(app.theme.is_dark());
        assert_eq!(app.theme(), Theme::Dark);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn scrolling_reveals_lower_sections() {
        let mut app = app();
        let sample = ScrollSample {
            offset_y: 100_000.0,
            viewport_height: 800.0,
            content_height: 101_000.0,
        };
        let _ = app.update(Message::Scrolled(sample));
        assert_eq!(app.scroll, sample);
        assert!(app.reveal.is_revealed(Region::Footer));
    }

    #[test]
    fn escape_closes_the_project_modal() {
        let mut app = app();
        let id = content::projects()[0].id;
        let _ = app.update(Message::Projects(projects::Message::CardPressed(id)));
        assert_eq!(app.projects.selection().selected(), Some(id));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.projects.selection().is_open());
    }

    #[test]
    fn escape_without_modal_is_harmless() {
        let mut app = app();
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.projects.selection().selected(), None::<ProjectId>);
    }

    #[test]
    fn invalid_submission_sets_error_status() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact_form::Message::Submit));
        assert!(matches!(app.contact.form().status(), FormStatus::Error(_)));
        assert!(app.contact.form().in_flight().is_none());
    }

    fn fill_and_submit(app: &mut App) {
        for (field, value) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Subject, "Hello"),
        ] {
            let _ = app.update(Message::Contact(contact_form::Message::FieldChanged(
                field,
                value.to_string(),
            )));
        }
        let _ = app.update(Message::Contact(contact_form::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Paste(
                Arc::new("Nice work".to_string()),
            )),
        )));
        let _ = app.update(Message::Contact(contact_form::Message::Submit));
    }

    #[test]
    fn valid_submission_starts_loading() {
        let mut app = app();
        fill_and_submit(&mut app);
        assert!(app.contact.form().status().is_loading());
        assert_eq!(app.contact.form().fields().message, "Nice work");
    }

    #[test]
    fn delivery_results_replace_each_other_as_toasts() {
        let mut app = app();
        fill_and_submit(&mut app);
        let ticket = app.contact.form().in_flight().expect("send in flight");
        let _ = app.update(Message::Contact(contact_form::Message::Sent(
            ticket,
            Err(SubmissionError::Timeout),
        )));
        let keys: Vec<_> = app.notifications.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys, ["notification-contact-send-error"]);

        let _ = app.update(Message::Contact(contact_form::Message::Submit));
        let ticket = app.contact.form().in_flight().expect("retry in flight");
        let _ = app.update(Message::Contact(contact_form::Message::Sent(ticket, Ok(()))));
        let keys: Vec<_> = app.notifications.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys, ["notification-contact-send-success"]);
    }

    #[test]
    fn disabled_animations_still_render_settled() {
        let mut config = config::Config::default();
        config.animations.enabled = Some(false);
        let app = test_app(&config);
        assert!(!app.reveal.is_enabled());
        assert!(!app.reveal.is_animating(subscription::reveal_horizon(), Instant::now()));
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.unwrap_or_default();
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
