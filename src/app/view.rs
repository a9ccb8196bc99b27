// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections under a fixed header.
//! The scroll-to-top button, the project modal and the toasts are stacked
//! on top of it.

use super::update::{shows_scroll_top, PAGE_SCROLLABLE_ID};
use super::Message;
use crate::app::section::Region;
use crate::ui::about;
use crate::ui::animation::{Motion, Preset, ScrollSample};
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer;
use crate::ui::header;
use crate::ui::home;
use crate::ui::notifications::{self, Toast};
use crate::ui::projects;
use crate::ui::skills;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::timeline;
use iced::widget::scrollable::{Scrollable, Viewport};
use iced::widget::{button, Column, Container, Id, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub is_dark: bool,
    pub motion: Motion<'a, Region>,
    pub scroll: &'a ScrollSample,
    pub projects: &'a projects::State,
    pub contact: &'a contact_form::State,
    pub notifications: &'a notifications::Manager,
    pub year: i32,
    pub now: Instant,
}

/// Converts a scrollable viewport into the sample the reveal tracker reads.
#[must_use]
pub fn scroll_sample(viewport: &Viewport) -> ScrollSample {
    ScrollSample {
        offset_y: viewport.absolute_offset().y,
        viewport_height: viewport.bounds().height,
        content_height: viewport.content_bounds().height,
    }
}

/// Renders the whole window.
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let motion = ctx.motion;

    let header = header::view(header::ViewContext {
        colors,
        is_dark: ctx.is_dark,
        frame: motion.frame(Region::Hero, Preset::SlideDown),
    })
    .map(Message::Header);

    let page = Column::new()
        .width(Length::Fill)
        .push(home::view(home::ViewContext { colors, motion }).map(Message::Home))
        .push(about::view(about::ViewContext { colors, motion }))
        .push(skills::view(skills::ViewContext { colors, motion }))
        .push(
            projects::view(projects::ViewContext {
                colors,
                motion,
                state: ctx.projects,
            })
            .map(Message::Projects),
        )
        .push(timeline::view(timeline::ViewContext { colors, motion }))
        .push(
            contact_form::view(contact_form::ViewContext {
                colors,
                motion,
                state: ctx.contact,
            })
            .map(Message::Contact),
        )
        .push(
            footer::view(footer::ViewContext {
                colors,
                motion,
                year: ctx.year,
            })
            .map(Message::Footer),
        );

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled(scroll_sample(&viewport)));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable);

    if shows_scroll_top(ctx.scroll) {
        layers = layers.push(scroll_top_button(colors));
    }

    if let Some(modal) = projects::view_modal(ctx.projects, colors, ctx.now) {
        layers = layers.push(modal.map(Message::Projects));
    }

    if let Some(toasts) = Toast::view_overlay(ctx.notifications, colors) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(layers)
        .into()
}

fn scroll_top_button(colors: &ColorScheme) -> Element<'static, Message> {
    let arrow = Container::new(Text::new("↑").size(typography::TITLE_SM))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Container::new(
        button(arrow)
            .width(Length::Fixed(sizing::ICON_BUTTON_LG))
            .height(Length::Fixed(sizing::ICON_BUTTON_LG))
            .padding(0)
            .on_press(Message::ScrollToTop)
            .style(styles::button::floating(colors)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::LG)
    .into()
}
