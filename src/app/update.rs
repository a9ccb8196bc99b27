// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every component reports what it wants through an `Event`; the handlers
//! here turn those events into state changes and tasks (scrolling, clipboard,
//! toasts).

use super::section::{Region, Section};
use super::Message;
use crate::app::config::SCROLL_TOP_BUTTON_THRESHOLD;
use crate::ui::animation::{EstimatedLayout, RevealTracker, ScrollSample};
use crate::ui::contact_form::{self, Event as ContactEvent};
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::projects::{self, Event as ProjectsEvent};
use crate::ui::theming::ThemeStore;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Identifier of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Prefix shared by the contact delivery toasts.
const CONTACT_TOAST_PREFIX: &str = "notification-contact-send";

/// Mutable slices of [`super::App`] the handlers work on.
pub struct UpdateContext<'a> {
    pub theme: &'a mut ThemeStore,
    pub reveal: &'a mut RevealTracker<Region>,
    pub layout: &'a EstimatedLayout<Region>,
    pub scroll: &'a mut ScrollSample,
    pub projects: &'a mut projects::State,
    pub contact: &'a mut contact_form::State,
    pub notifications: &'a mut notifications::Manager,
    pub now: Instant,
}

/// Relative scroll position that brings `section` to the top of the page.
///
/// Falls back to the unscaled estimates while the page has not been
/// measured yet.
#[must_use]
pub fn scroll_target(
    layout: &EstimatedLayout<Region>,
    section: Section,
    sample: &ScrollSample,
) -> RelativeOffset {
    let content_height = if sample.content_height > 0.0 {
        sample.content_height
    } else {
        layout.estimated_height()
    };
    let scrollable = content_height - sample.viewport_height;
    if scrollable <= 0.0 {
        return RelativeOffset::START;
    }
    let top = layout
        .top_of(section.region(), content_height)
        .unwrap_or(0.0);
    RelativeOffset {
        x: 0.0,
        y: (top / scrollable).clamp(0.0, 1.0),
    }
}

/// Whether the floating scroll-to-top button is shown.
#[must_use]
pub fn shows_scroll_top(sample: &ScrollSample) -> bool {
    sample.offset_y > SCROLL_TOP_BUTTON_THRESHOLD
}

/// Initial viewport observation, before the scrollable reports anything.
pub fn observe_initial(ctx: &mut UpdateContext<'_>) {
    let revealed = ctx.reveal.observe(ctx.layout, ctx.scroll, ctx.now);
    tracing::debug!(?revealed, "initial regions revealed");
}

pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, sample: ScrollSample) -> Task<Message> {
    *ctx.scroll = sample;
    let revealed = ctx.reveal.observe(ctx.layout, &sample, ctx.now);
    if !revealed.is_empty() {
        tracing::debug!(?revealed, offset = sample.offset_y, "regions revealed");
    }
    Task::none()
}

pub fn scroll_to(ctx: &UpdateContext<'_>, section: Section) -> Task<Message> {
    let target = scroll_target(ctx.layout, section, ctx.scroll);
    tracing::debug!(%section, y = target.y, "scrolling to section");
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), target)
}

pub fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset::START)
}

/// Links cannot be opened in a browser from here; the URL is copied to the
/// clipboard instead and a toast says so.
pub fn open_link(ctx: &mut UpdateContext<'_>, url: &'static str) -> Task<Message> {
    tracing::info!(url, "copying link to clipboard");
    ctx.notifications
        .push(Notification::info("notification-link-copied").with_detail(url));
    iced::clipboard::write(url.to_string())
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: &header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::ScrollTo(section) => scroll_to(ctx, section),
        HeaderEvent::ToggleTheme => {
            let warning = ctx.theme.toggle();
            ctx.notifications.push_warning(warning);
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::ScrollTo(section) => scroll_to(ctx, section),
        HomeEvent::OpenLink(url) => open_link(ctx, url),
    }
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: &footer::Message) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::ScrollTo(section) => scroll_to(ctx, section),
        FooterEvent::OpenLink(url) => open_link(ctx, url),
    }
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: &projects::Message,
) -> Task<Message> {
    match ctx.projects.handle_message(message, ctx.now) {
        ProjectsEvent::None => Task::none(),
        ProjectsEvent::OpenLink(url) => open_link(ctx, url),
    }
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_form::Message,
) -> Task<Message> {
    let (event, task) = ctx.contact.handle_message(message);
    match event {
        ContactEvent::None => {}
        ContactEvent::Rejected(err) => {
            tracing::debug!(%err, "contact form needs attention");
        }
        ContactEvent::Sent => {
            ctx.notifications.clear_with_prefix(CONTACT_TOAST_PREFIX);
            ctx.notifications
                .push(Notification::success("notification-contact-send-success"));
        }
        ContactEvent::SendFailed(err) => {
            ctx.notifications.clear_with_prefix(CONTACT_TOAST_PREFIX);
            ctx.notifications.push(
                Notification::error("notification-contact-send-error").with_detail(err.to_string()),
            );
        }
    }
    task.map(Message::Contact)
}

/// Escape closes the project modal when one is open.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.projects.dismiss() {
        tracing::debug!("project modal closed with escape");
    }
    Task::none()
}

pub fn handle_window_close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    tracing::info!("window closing, cancelling pending work");
    ctx.contact.teardown();
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::section::page_layout;

    fn sample(offset_y: f32, viewport_height: f32, content_height: f32) -> ScrollSample {
        ScrollSample {
            offset_y,
            viewport_height,
            content_height,
        }
    }

    #[test]
    fn home_targets_the_top() {
        let target = scroll_target(&page_layout(), Section::Home, &sample(900.0, 700.0, 6000.0));
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn later_sections_target_further_down() {
        let layout = page_layout();
        let page = sample(0.0, 700.0, 6000.0);
        let ys: Vec<f32> = Section::ALL
            .iter()
            .map(|s| scroll_target(&layout, *s, &page).y)
            .collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
        assert!(ys.iter().all(|y| (0.0..=1.0).contains(y)));
    }

    #[test]
    fn unmeasured_page_uses_estimates() {
        let layout = page_layout();
        let target = scroll_target(&layout, Section::Contact, &sample(0.0, 700.0, 0.0));
        assert!(target.y > 0.0 && target.y < 1.0);
    }

    #[test]
    fn page_shorter_than_viewport_never_scrolls() {
        let target = scroll_target(&page_layout(), Section::Contact, &sample(0.0, 900.0, 600.0));
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn scroll_top_button_appears_past_threshold() {
        assert!(!shows_scroll_top(&sample(0.0, 700.0, 6000.0)));
        assert!(!shows_scroll_top(&sample(SCROLL_TOP_BUTTON_THRESHOLD, 700.0, 6000.0)));
        assert!(shows_scroll_top(&sample(SCROLL_TOP_BUTTON_THRESHOLD + 1.0, 700.0, 6000.0)));
    }
}
