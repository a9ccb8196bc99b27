// SPDX-License-Identifier: MPL-2.0
//! Project gallery and its detail modal.
//!
//! [`ProjectSelection`] is the whole modal state: one optional project id.
//! Cards grow slightly under the cursor; the growth is taken out of a fixed
//! slot so the grid never reflows.

use crate::app::section::Region;
use crate::content::{self, Project, ProjectId};
use crate::ui::animation::{preset, HoverTracker, Motion, Preset};
use crate::ui::components::{animated, bounded, chip, section_heading};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, center, mouse_area, opaque, Column, Container, Row, Space, Text},
    Element, Font, Length,
};
use std::time::Instant;

/// Technologies listed on a card before the "+N" badge.
pub const CARD_TECHNOLOGIES: usize = 3;

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    Backdrop,
    Panel,
}

/// Which project, if any, is shown in the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<ProjectId>,
}

impl ProjectSelection {
    /// Opens the modal on `id`, replacing any previous selection.
    pub fn select(&mut self, id: ProjectId) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Backdrop clicks close the modal; clicks on the panel are ignored.
    pub fn click(&mut self, target: ModalTarget) {
        if target == ModalTarget::Backdrop {
            self.close();
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected project, if its id is known to the content registry.
    #[must_use]
    pub fn project(&self) -> Option<&'static Project> {
        self.selected.and_then(content::project)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CardPressed(ProjectId),
    CardEntered(ProjectId),
    CardExited(ProjectId),
    BackdropPressed,
    PanelPressed,
    ClosePressed,
    OpenLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(&'static str),
}

/// Gallery state: modal selection, card hover and modal entrance time.
#[derive(Debug, Default)]
pub struct State {
    selection: ProjectSelection,
    hover: HoverTracker<ProjectId>,
    opened_at: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn selection(&self) -> &ProjectSelection {
        &self.selection
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) -> Event {
        match message {
            Message::CardPressed(id) => {
                tracing::debug!(project = %id, "opening project details");
                self.selection.select(*id);
                self.opened_at = Some(now);
            }
            Message::CardEntered(id) => self.hover.enter(*id, now),
            Message::CardExited(id) => self.hover.exit(*id),
            Message::BackdropPressed => self.selection.click(ModalTarget::Backdrop),
            Message::PanelPressed => self.selection.click(ModalTarget::Panel),
            Message::ClosePressed => self.selection.close(),
            Message::OpenLink(url) => return Event::OpenLink(*url),
        }
        Event::None
    }

    /// Escape key: closes the modal. Returns whether one was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.selection.is_open();
        self.selection.close();
        was_open
    }

    /// Whether a hover or modal transition still needs animation ticks.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        let modal_fading = self.selection.is_open()
            && self.opened_at.is_some_and(|at| {
                !preset(Preset::FadeIn).is_finished(now.saturating_duration_since(at))
            });
        modal_fading || self.hover.is_animating(now)
    }

    fn modal_opacity(&self, now: Instant) -> f32 {
        self.opened_at.map_or(1.0, |at| {
            preset(Preset::FadeIn)
                .sample(now.saturating_duration_since(at))
                .opacity
        })
    }
}

pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
    pub state: &'a State,
}

/// Horizontal inset of a card at hover `scale`, so the fully grown card
/// exactly fills its slot.
#[must_use]
pub fn card_inset(scale: f32) -> f32 {
    let grown = preset(Preset::HoverScale).to.scale;
    (sizing::PROJECT_CARD_WIDTH * (grown - scale) / (2.0 * grown)).max(0.0)
}

/// Render the projects section (heading and card grid).
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let heading = {
        let frame = ctx.motion.frame(Region::Projects, Preset::SlideUp);
        animated(
            section_heading(&content::profile().projects, colors, frame),
            frame,
            Preset::SlideUp,
        )
    };

    let grid = content::projects().iter().enumerate().fold(
        Row::new().spacing(spacing::LG),
        |row, (index, project)| row.push(card(&ctx, project, index)),
    );

    Container::new(bounded(
        Column::new()
            .spacing(spacing::XXL)
            .push(heading)
            .push(grid.wrap().vertical_spacing(spacing::LG)),
    ))
    .width(Length::Fill)
    .padding([spacing::SECTION, spacing::LG])
    .into()
}

fn card<'a>(ctx: &ViewContext<'a>, project: &'static Project, index: usize) -> Element<'a, Message> {
    let colors = ctx.colors;
    let frame = ctx
        .motion
        .staggered(Region::Projects, Preset::ScrollReveal, index);
    let o = frame.opacity;
    let hovered = ctx.state.hover.hovered() == Some(project.id);

    let cover = Container::new(
        Text::new(if hovered {
            "Click to view details"
        } else {
            project.category
        })
        .size(typography::BODY_SM)
        .font(semibold()),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROJECT_COVER_HEIGHT))
    .padding(spacing::MD)
    .align_y(Vertical::Bottom)
    .style(styles::container::cover(colors, o));

    let (shown, hidden) = project.visible_technologies(CARD_TECHNOLOGIES);
    let technologies = shown
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tech| {
            row.push(chip(*tech, colors.surface_muted, colors.text_secondary, o))
        });
    let technologies = if hidden > 0 {
        technologies.push(chip(
            format!("+{hidden}"),
            colors.surface_muted,
            colors.text_secondary,
            o,
        ))
    } else {
        technologies
    };

    let links = Row::new()
        .spacing(spacing::SM)
        .push(link_button("↗ Live", project.live_link, colors, o, true))
        .push(link_button("GH Code", project.github_link, colors, o, false));

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(chip(project.category, colors.brand_soft, colors.brand_primary, o))
        .push(
            Text::new(project.title)
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(faded(
                    if hovered {
                        colors.brand_primary
                    } else {
                        colors.text_primary
                    },
                    o,
                )),
        )
        .push(
            Text::new(project.description)
                .size(typography::BODY_SM)
                .color(faded(colors.text_secondary, o)),
        )
        .push(technologies.wrap().vertical_spacing(spacing::XS))
        .push(links);

    let tile = button(Column::new().push(cover).push(body))
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::CardPressed(project.id))
        .style(styles::button::card(colors, o));

    let inset = card_inset(ctx.state.hover.scale(project.id, ctx.motion.now()));
    let slot = Container::new(
        mouse_area(tile)
            .on_enter(Message::CardEntered(project.id))
            .on_exit(Message::CardExited(project.id)),
    )
    .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
    .padding(inset);

    animated(slot, frame, Preset::ScrollReveal)
}

fn link_button<'a>(
    label: &'static str,
    url: &'static str,
    colors: &ColorScheme,
    opacity: f32,
    primary: bool,
) -> Element<'a, Message> {
    let content = Container::new(Text::new(label).size(typography::BODY_SM).font(semibold()))
        .center_x(Length::Fill);
    let link = button(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::OpenLink(url));
    if primary {
        link.style(styles::button::primary(colors, opacity)).into()
    } else {
        link.style(styles::button::dark(colors, opacity)).into()
    }
}

/// Modal overlay for the selected project, or `None` when closed.
#[must_use]
pub fn view_modal<'a>(state: &'a State, colors: &'a ColorScheme, now: Instant) -> Option<Element<'a, Message>> {
    let project = state.selection.project()?;
    let fade = state.modal_opacity(now);

    let close = button(
        Container::new(Text::new("✕").size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ICON_BUTTON))
    .height(Length::Fixed(sizing::ICON_BUTTON))
    .padding(0)
    .on_press(Message::ClosePressed)
    .style(styles::button::modal_close(colors));

    let cover = Container::new(
        Row::new()
            .align_y(Vertical::Top)
            .push(
                Text::new(project.image)
                    .size(typography::CAPTION)
                    .color(faded(colors.overlay_text, opacity::OVERLAY_STRONG)),
            )
            .push(Space::new().width(Length::Fill))
            .push(close),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROJECT_COVER_HEIGHT * 2.0))
    .padding(spacing::MD)
    .style(styles::container::cover(colors, 1.0));

    let technologies = project
        .technologies
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tech| {
            row.push(chip(*tech, colors.surface_muted, colors.text_primary, 1.0))
        })
        .wrap()
        .vertical_spacing(spacing::XS);

    let links = Row::new()
        .spacing(spacing::MD)
        .push(link_button("↗ Live Demo", project.live_link, colors, 1.0, true))
        .push(link_button("GH Source Code", project.github_link, colors, 1.0, false));

    let details = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(chip(project.category, colors.brand_soft, colors.brand_primary, 1.0))
        .push(
            Text::new(project.title)
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(colors.text_primary),
        )
        .push(
            Text::new(project.description)
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(
            Text::new("Technologies:")
                .size(typography::BODY)
                .font(semibold())
                .color(colors.text_primary),
        )
        .push(technologies)
        .push(links);

    let panel = Container::new(Column::new().push(cover).push(details))
        .max_width(sizing::MODAL_WIDTH)
        .clip(true)
        .style(styles::container::modal_panel(colors));

    // The panel swallows its own clicks so they never reach the backdrop.
    let panel = opaque(mouse_area(panel).on_press(Message::PanelPressed));

    let backdrop = center(panel)
        .padding(spacing::MD)
        .style(styles::container::backdrop(colors, fade));

    Some(mouse_area(backdrop).on_press(Message::BackdropPressed).into())
}

fn semibold() -> Font {
    Font {
        weight: Weight::Semibold,
        ..Font::DEFAULT
    }
}
