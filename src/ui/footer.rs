// SPDX-License-Identifier: MPL-2.0
//! Page footer: brand blurb, quick links, social links and copyright.

use crate::app::section::{Region, Section};
use crate::content::{self, SocialLink};
use crate::ui::animation::{Motion, Preset};
use crate::ui::components::{animated, bounded};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
    /// Year printed in the copyright line.
    pub year: i32,
}

#[derive(Debug, Clone)]
pub enum Message {
    QuickLink(Section),
    OpenLink(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
    OpenLink(&'static str),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::QuickLink(section) => Event::ScrollTo(*section),
        Message::OpenLink(url) => Event::OpenLink(*url),
    }
}

/// Current local year.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} Personal Portfolio. All rights reserved. | Built with Rust & Iced")
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let column = |index: usize, title: &'static str, body: Element<'static, Message>| {
        let frame = ctx
            .motion
            .staggered(Region::Footer, Preset::SlideUp, index);
        let block = Column::new()
            .width(Length::FillPortion(1))
            .spacing(spacing::MD)
            .push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .color(faded(iced::Color::WHITE, frame.opacity)),
            )
            .push(body);
        animated(block, frame, Preset::SlideUp)
    };

    let brand = column(
        0,
        content::profile().brand,
        Text::new(content::profile().footer_blurb)
            .size(typography::BODY)
            .into(),
    );

    let quick_links = column(
        1,
        "Quick Links",
        Section::QUICK_LINKS
            .iter()
            .fold(Column::new().spacing(spacing::XS), |links, section| {
                links.push(
                    button(Text::new(section.label()).size(typography::BODY))
                        .padding(0)
                        .on_press(Message::QuickLink(*section))
                        .style(styles::button::footer_link(colors)),
                )
            })
            .into(),
    );

    let socials = column(
        2,
        "Follow Me",
        content::footer_links()
            .fold(Row::new().spacing(spacing::MD), |row, link| {
                row.push(social_button(link, colors))
            })
            .into(),
    );

    let divider = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::rule(colors.footer_text, 1.0));

    let legal = Container::new(Text::new(copyright(ctx.year)).size(typography::BODY_SM))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(bounded(
        Column::new()
            .spacing(spacing::XL)
            .push(
                Row::new()
                    .spacing(spacing::XXL)
                    .push(brand)
                    .push(quick_links)
                    .push(socials),
            )
            .push(divider)
            .push(legal),
    ))
    .width(Length::Fill)
    .padding([spacing::XXL, spacing::LG])
    .style(styles::container::footer(colors))
    .into()
}

fn social_button(link: &'static SocialLink, colors: &ColorScheme) -> Element<'static, Message> {
    button(
        Container::new(Text::new(link.kind.glyph()).size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ICON_BUTTON))
    .height(Length::Fixed(sizing::ICON_BUTTON))
    .padding(0)
    .on_press(Message::OpenLink(link.url))
    .style(styles::button::footer_social(colors))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_scroll() {
        for section in Section::QUICK_LINKS {
            assert_eq!(
                update(&Message::QuickLink(section)),
                Event::ScrollTo(section)
            );
        }
    }

    #[test]
    fn social_links_open() {
        assert_eq!(
            update(&Message::OpenLink("https://example.com")),
            Event::OpenLink("https://example.com")
        );
    }

    #[test]
    fn copyright_carries_the_year() {
        let line = copyright(2031);
        assert!(line.starts_with("© 2031 Personal Portfolio."));
        assert!(line.contains("All rights reserved."));
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
