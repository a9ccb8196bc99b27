// SPDX-License-Identifier: MPL-2.0
//! About section: intro, bio paragraphs, quick stats and feature cards.
//!
//! The left column (bio then stats) and the right column (features) are two
//! stagger containers revealed together with the section.

use crate::app::section::Region;
use crate::content::{self, Feature, Stat};
use crate::ui::animation::{Motion, Preset};
use crate::ui::components::{animated, bounded, section_heading};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
}

/// Render the about section. It has no interactive parts.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let profile = content::profile();

    let heading = {
        let frame = ctx.motion.staggered(Region::About, Preset::SlideUp, 0);
        animated(
            section_heading(&profile.about, colors, frame),
            frame,
            Preset::SlideUp,
        )
    };

    let bio = profile
        .bio
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |column, (index, paragraph)| {
            let frame = ctx
                .motion
                .staggered(Region::About, Preset::ScrollReveal, index);
            column.push(animated(
                Text::new(*paragraph)
                    .size(typography::BODY_LG)
                    .color(faded(colors.text_secondary, frame.opacity)),
                frame,
                Preset::ScrollReveal,
            ))
        });

    let stats = {
        let frame = ctx
            .motion
            .staggered(Region::About, Preset::ScrollReveal, profile.bio.len());
        let row = content::stats()
            .iter()
            .fold(Row::new().spacing(spacing::MD), |row, stat| {
                row.push(stat_tile(stat, colors, frame.opacity))
            });
        animated(row, frame, Preset::ScrollReveal)
    };

    let features = content::features().iter().enumerate().fold(
        Column::new().spacing(spacing::LG),
        |column, (index, feature)| {
            let frame = ctx
                .motion
                .staggered(Region::About, Preset::ScrollReveal, index);
            column.push(animated(
                feature_card(feature, colors, frame.opacity),
                frame,
                Preset::ScrollReveal,
            ))
        },
    );

    let columns = Row::new()
        .spacing(spacing::XXL)
        .push(
            Column::new()
                .width(Length::FillPortion(1))
                .spacing(spacing::LG)
                .push(bio)
                .push(stats),
        )
        .push(Container::new(features).width(Length::FillPortion(1)));

    let fade = ctx.motion.frame(Region::About, Preset::FadeIn).opacity;
    Container::new(bounded(
        Column::new()
            .spacing(spacing::XXL)
            .push(heading)
            .push(columns),
    ))
    .width(Length::Fill)
    .padding([spacing::SECTION, spacing::LG])
    .style(styles::container::section(faded(colors.surface_primary, fade)))
    .into()
}

fn stat_tile<'a, Message: 'a>(stat: &'static Stat, colors: &ColorScheme, opacity: f32) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
            .push(
                Text::new(stat.value)
                    .size(typography::TITLE_MD)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .color(faded(colors.brand_primary, opacity)),
            )
            .push(
                Text::new(stat.label)
                    .size(typography::BODY_SM)
                    .color(faded(colors.text_secondary, opacity)),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .center_x(Length::Fill)
    .style(styles::container::tinted(colors.brand_soft, opacity))
    .into()
}

fn feature_card<'a, Message: 'a>(
    feature: &'static Feature,
    colors: &ColorScheme,
    opacity: f32,
) -> Element<'a, Message> {
    let badge = Container::new(Text::new(feature.glyph).size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::FEATURE_BADGE))
        .height(Length::Fixed(sizing::FEATURE_BADGE))
        .center_x(Length::Fixed(sizing::FEATURE_BADGE))
        .center_y(Length::Fixed(sizing::FEATURE_BADGE))
        .style(styles::container::chip(
            colors.brand_soft,
            colors.brand_primary,
            opacity,
        ));

    let text = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(feature.title)
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                })
                .color(faded(colors.text_primary, opacity)),
        )
        .push(
            Text::new(feature.description)
                .size(typography::BODY)
                .color(faded(colors.text_secondary, opacity)),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Top)
            .push(badge)
            .push(text),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::tinted(colors.surface_muted, opacity))
    .into()
}
