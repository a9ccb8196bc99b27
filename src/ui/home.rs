// SPDX-License-Identifier: MPL-2.0
//! Hero section: greeting, headline, calls to action and portrait.

use crate::app::section::{Region, Section};
use crate::content::{self, SocialLink};
use crate::ui::animation::{Motion, Preset};
use crate::ui::components::{animated, bounded};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ViewWork,
    GetInTouch,
    ScrollHint,
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
        Message::ViewWork | Message::ScrollHint => Event::ScrollTo(Section::Projects),
        Message::GetInTouch => Event::ScrollTo(Section::Contact),
        Message::OpenLink(url) => Event::OpenLink(*url),
    }
}

/// Initials of the first and last word of `name`, upper-cased.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let profile = content::profile();
    let step = |index| ctx.motion.staggered(Region::Hero, Preset::SlideUp, index);

    let intro = {
        let frame = step(0);
        let o = frame.opacity;
        let block = Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(profile.greeting)
                    .size(typography::BODY_LG)
                    .color(faded(colors.brand_primary, o)),
            )
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new("Hi, I'm")
                            .size(typography::DISPLAY)
                            .font(bold())
                            .color(faded(colors.text_primary, o)),
                    )
                    .push(
                        Text::new(profile.name)
                            .size(typography::DISPLAY)
                            .font(bold())
                            .color(faded(colors.brand_accent, o)),
                    )
                    .wrap(),
            )
            .push(
                Text::new(profile.headline)
                    .size(typography::TITLE_MD)
                    .color(faded(colors.text_secondary, o)),
            );
        animated(block, frame, Preset::SlideUp)
    };

    let tagline = {
        let frame = step(1);
        animated(
            Text::new(profile.tagline)
                .size(typography::BODY_LG)
                .color(faded(colors.text_secondary, frame.opacity)),
            frame,
            Preset::SlideUp,
        )
    };

    let actions = {
        let frame = step(2);
        let o = frame.opacity;
        let row = Row::new()
            .spacing(spacing::MD)
            .push(
                button(Text::new("View My Work").size(typography::BODY))
                    .padding([spacing::SM, spacing::XL])
                    .on_press(Message::ViewWork)
                    .style(styles::button::primary(colors, o)),
            )
            .push(
                button(Text::new("Get In Touch").size(typography::BODY))
                    .padding([spacing::SM, spacing::XL])
                    .on_press(Message::GetInTouch)
                    .style(styles::button::outline(colors, o)),
            );
        animated(row, frame, Preset::SlideUp)
    };

    let socials = {
        let frame = step(3);
        let row = content::hero_links().fold(Row::new().spacing(spacing::MD), |row, link| {
            row.push(social_button(link, colors, frame.opacity))
        });
        animated(row, frame, Preset::SlideUp)
    };

    let text_column = Column::new()
        .width(Length::FillPortion(3))
        .spacing(spacing::XS)
        .push(intro)
        .push(tagline)
        .push(actions)
        .push(socials);

    let portrait = {
        let frame = ctx.motion.frame(Region::Hero, Preset::SlideRight);
        let o = frame.opacity;
        let badge = Container::new(
            Text::new(initials(profile.name))
                .size(typography::DISPLAY)
                .font(bold()),
        )
        .width(Length::Fixed(sizing::HERO_PORTRAIT))
        .height(Length::Fixed(sizing::HERO_PORTRAIT))
        .center_x(Length::Fixed(sizing::HERO_PORTRAIT))
        .center_y(Length::Fixed(sizing::HERO_PORTRAIT))
        .style(styles::container::portrait(colors, o));
        Container::new(animated(badge, frame, Preset::SlideRight))
            .width(Length::FillPortion(2))
            .align_x(Horizontal::Center)
    };

    let hint = {
        let color = faded(
            colors.text_secondary,
            ctx.motion.frame(Region::Hero, Preset::FadeIn).opacity,
        );
        button(
            Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .push(Text::new("Scroll to explore").size(typography::BODY_SM).color(color))
                .push(Text::new("↓").size(typography::BODY_LG).color(color)),
        )
        .on_press(Message::ScrollHint)
        .style(styles::button::nav_link(colors))
        .padding(spacing::XS)
    };

    let body = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .spacing(spacing::XXL)
                .align_y(Vertical::Center)
                .push(text_column)
                .push(portrait),
        )
        .push(hint);

    Container::new(bounded(body))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::hero(colors))
        .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

fn social_button<'a>(link: &'static SocialLink, colors: &ColorScheme, opacity: f32) -> Element<'a, Message> {
    button(
        Container::new(Text::new(link.kind.glyph()).size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ICON_BUTTON_LG))
    .height(Length::Fixed(sizing::ICON_BUTTON_LG))
    .padding(0)
    .on_press(Message::OpenLink(link.url))
    .style(styles::button::icon_round(colors, opacity))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_to_action_target_sections() {
        assert_eq!(update(&Message::ViewWork), Event::ScrollTo(Section::Projects));
        assert_eq!(update(&Message::ScrollHint), Event::ScrollTo(Section::Projects));
        assert_eq!(update(&Message::GetInTouch), Event::ScrollTo(Section::Contact));
    }

    #[test]
    fn social_links_open_their_url() {
        assert_eq!(
            update(&Message::OpenLink("mailto:someone@example.com")),
            Event::OpenLink("mailto:someone@example.com")
        );
    }

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(initials("Hans Cyril T. Eder"), "HE");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials(""), "");
    }
}
