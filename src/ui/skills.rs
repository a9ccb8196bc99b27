// SPDX-License-Identifier: MPL-2.0
//! Technical skills grid: one labelled bar per skill, filled when revealed.

use crate::app::section::Region;
use crate::content::{self, Skill};
use crate::ui::animation::{stagger_delay, Motion, Preset, Transition};
use crate::ui::components::{animated, bounded};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    font::Weight,
    widget::{progress_bar, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Skills laid out per grid row.
const COLUMNS: usize = 2;

/// Bar fill, started after the bar's own stagger delay.
const FILL: Transition = Transition::timed(1000);

pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
}

/// Width fraction of a bar at fill progress `progress`.
#[must_use]
pub fn filled_fraction(skill: &Skill, progress: f32) -> f32 {
    skill.level.fraction() * progress.clamp(0.0, 1.0)
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let title = {
        let frame = ctx.motion.frame(Region::Skills, Preset::SlideUp);
        animated(
            Text::new(content::profile().skills_title)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(faded(colors.text_primary, frame.opacity)),
            frame,
            Preset::SlideUp,
        )
    };

    let grid = content::skills()
        .chunks(COLUMNS)
        .enumerate()
        .fold(Column::new().spacing(spacing::LG), |grid, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(spacing::XXL),
                |row, (column_index, skill)| {
                    let index = row_index * COLUMNS + column_index;
                    row.push(skill_bar(&ctx, skill, index))
                },
            );
            // Keep a lone last skill at half width.
            let row = (chunk.len()..COLUMNS).fold(row, |row, _| {
                row.push(Space::new().width(Length::Fill))
            });
            grid.push(row)
        });

    Container::new(bounded(
        Column::new().spacing(spacing::XL).push(title).push(grid),
    ))
    .width(Length::Fill)
    .padding([0.0, spacing::LG])
    .into()
}

fn skill_bar<'a, Message: 'a>(
    ctx: &ViewContext<'a>,
    skill: &'static Skill,
    index: usize,
) -> Element<'a, Message> {
    let colors = ctx.colors;
    let delay = stagger_delay(index);
    let frame = ctx
        .motion
        .staggered(Region::Skills, Preset::ScrollReveal, index);
    let progress = ctx.motion.progress(Region::Skills, &FILL.delayed(delay));
    let o = frame.opacity;

    let label = Row::new()
        .push(
            Text::new(skill.name)
                .size(typography::BODY_SM)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                })
                .color(faded(colors.text_secondary, o)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(skill.level.to_string())
                .size(typography::CAPTION)
                .color(faded(colors.text_tertiary, o)),
        );

    let bar = progress_bar(0.0..=1.0, filled_fraction(skill, progress))
        .girth(sizing::PROGRESS_BAR_HEIGHT)
        .style(styles::input::skill_bar(colors, o));

    Container::new(animated(
        Column::new().spacing(spacing::XS).push(label).push(bar),
        frame,
        Preset::ScrollReveal,
    ))
    .width(Length::Fill)
    .into()
}
