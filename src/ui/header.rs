// SPDX-License-Identifier: MPL-2.0
//! Sticky page header.
//!
//! Brand wordmark, one link per [`Section`] and the light/dark toggle. The
//! header sits above the page scrollable, so it never scrolls away.

use crate::app::section::Section;
use crate::content;
use crate::ui::animation::Frame;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub is_dark: bool,
    /// Entrance frame; the bar has a fixed height, so only opacity applies.
    pub frame: Frame,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    BrandPressed,
    NavPressed(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
    ToggleTheme,
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BrandPressed => Event::ScrollTo(Section::Home),
        Message::NavPressed(section) => Event::ScrollTo(*section),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Glyph of the theme toggle: the sun switches to light, the moon to dark.
#[must_use]
pub fn toggle_glyph(is_dark: bool) -> &'static str {
    if is_dark {
        "☀"
    } else {
        "☾"
    }
}

/// Render the header bar.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let opacity = ctx.frame.opacity;

    let brand = button(
        Text::new(content::profile().brand)
            .size(typography::TITLE_SM)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .padding(0)
    .on_press(Message::BrandPressed)
    .style(styles::button::brand(colors));

    let nav = Section::ALL.iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Center),
        |row, section| {
            row.push(
                button(Text::new(section.label()).size(typography::BODY))
                    .padding([spacing::XXS, 0.0])
                    .on_press(Message::NavPressed(*section))
                    .style(styles::button::nav_link(colors)),
            )
        },
    );

    let toggle = button(
        Container::new(Text::new(toggle_glyph(ctx.is_dark)).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ICON_BUTTON))
    .height(Length::Fixed(sizing::ICON_BUTTON))
    .padding(0)
    .on_press(Message::ToggleTheme)
    .style(styles::button::icon_round(colors, opacity));

    let bar = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XL)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(nav)
        .push(toggle);

    Container::new(
        Container::new(bar).max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT))
    .center_x(Length::Fill)
    .align_y(Vertical::Center)
    .padding([0.0, spacing::LG])
    .style(styles::container::header(colors))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_scrolls_home() {
        assert_eq!(update(&Message::BrandPressed), Event::ScrollTo(Section::Home));
    }

    #[test]
    fn nav_links_scroll_to_their_section() {
        for section in Section::ALL {
            assert_eq!(
                update(&Message::NavPressed(section)),
                Event::ScrollTo(section)
            );
        }
    }

    #[test]
    fn toggle_is_forwarded() {
        assert_eq!(update(&Message::ToggleTheme), Event::ToggleTheme);
    }

    #[test]
    fn toggle_shows_the_target_theme() {
        assert_eq!(toggle_glyph(true), "☀");
        assert_eq!(toggle_glyph(false), "☾");
    }
}
