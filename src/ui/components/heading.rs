// SPDX-License-Identifier: MPL-2.0
//! Section headings and pill chips.

use crate::content::SectionIntro;
use crate::ui::animation::Frame;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, font::Weight, Color, Element, Font, Length};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Centered title and subtitle opening a section.
pub fn section_heading<'a, Message: 'a>(
    intro: &'static SectionIntro,
    colors: &ColorScheme,
    frame: Frame,
) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(intro.title)
                .size(typography::TITLE_LG)
                .font(BOLD)
                .color(faded(colors.text_primary, frame.opacity)),
        )
        .push(
            Text::new(intro.subtitle)
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center)
                .color(faded(colors.text_secondary, frame.opacity)),
        )
        .into()
}

/// Small rounded label (category, technology, skill).
pub fn chip<'a, Message: 'a>(
    label: impl Into<String>,
    background: Color,
    foreground: Color,
    opacity: f32,
) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::chip(background, foreground, opacity))
        .into()
}
