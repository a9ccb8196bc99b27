// SPDX-License-Identifier: MPL-2.0
//! Experience timeline: one marker and card per role, joined by a rule.

use crate::app::section::Region;
use crate::content::{self, Experience};
use crate::ui::animation::{Motion, Preset};
use crate::ui::components::{animated, bounded, chip, section_heading};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{Column, Container, Row, Space, Text},
    Element, Font, Length, Padding,
};

/// Width of the connector between markers.
const RULE_WIDTH: f32 = 2.0;

pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
}

/// Whether the entry at `index` is followed by another one.
fn has_successor(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let heading = {
        let frame = ctx.motion.frame(Region::Experience, Preset::SlideUp);
        animated(
            section_heading(&content::profile().experience, colors, frame),
            frame,
            Preset::SlideUp,
        )
    };

    let entries = content::experience();
    let timeline = entries.iter().enumerate().fold(Column::new(), |column, (index, entry)| {
        column.push(entry_row(&ctx, entry, index, has_successor(index, entries.len())))
    });

    let fade = ctx.motion.frame(Region::Experience, Preset::FadeIn).opacity;
    Container::new(bounded(
        Column::new()
            .spacing(spacing::XXL)
            .push(heading)
            .push(
                Container::new(
                    Container::new(timeline).max_width(sizing::FORM_MAX_WIDTH + spacing::XXL * 2.0),
                )
                .center_x(Length::Fill),
            ),
    ))
    .width(Length::Fill)
    .padding([spacing::SECTION, spacing::LG])
    .style(styles::container::section(faded(colors.surface_primary, fade)))
    .into()
}

fn entry_row<'a, Message: 'a>(
    ctx: &ViewContext<'a>,
    entry: &'static Experience,
    index: usize,
    continued: bool,
) -> Element<'a, Message> {
    let colors = ctx.colors;
    let frame = ctx
        .motion
        .staggered(Region::Experience, Preset::ScrollReveal, index);
    let o = frame.opacity;

    let marker = Container::new(Space::new())
        .width(Length::Fixed(sizing::TIMELINE_MARKER))
        .height(Length::Fixed(sizing::TIMELINE_MARKER))
        .style(styles::container::timeline_marker(colors, o));

    let rail = {
        let rail = Column::new()
            .width(Length::Fixed(sizing::TIMELINE_MARKER))
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .push(marker);
        if continued {
            rail.push(
                Container::new(Space::new())
                    .width(Length::Fixed(RULE_WIDTH))
                    .height(Length::Fill)
                    .style(styles::container::rule(colors.text_secondary, o)),
            )
        } else {
            rail
        }
    };

    let skills = entry
        .skills
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, skill| {
            row.push(chip(*skill, colors.brand_soft, colors.brand_primary, o))
        })
        .wrap()
        .vertical_spacing(spacing::XS);

    let header = Row::new()
        .spacing(spacing::MD)
        .push(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::XXS)
                .push(
                    Text::new(entry.role)
                        .size(typography::TITLE_SM)
                        .font(Font {
                            weight: Weight::Bold,
                            ..Font::DEFAULT
                        })
                        .color(faded(colors.text_primary, o)),
                )
                .push(
                    Text::new(entry.company)
                        .size(typography::BODY)
                        .font(Font {
                            weight: Weight::Semibold,
                            ..Font::DEFAULT
                        })
                        .color(faded(colors.brand_primary, o)),
                ),
        )
        .push(
            Text::new(entry.period)
                .size(typography::BODY_SM)
                .color(faded(colors.text_tertiary, o)),
        );

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(
                Text::new(entry.description)
                    .size(typography::BODY)
                    .color(faded(colors.text_secondary, o)),
            )
            .push(skills),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card(colors, o));

    // The gap below a card belongs to the row, so the rule runs through it.
    let gap = if continued { spacing::XL } else { 0.0 };
    let row = Row::new().spacing(spacing::LG).push(rail).push(
        Container::new(card)
            .width(Length::Fill)
            .padding(Padding::ZERO.bottom(gap)),
    );

    animated(row, frame, Preset::ScrollReveal)
}
