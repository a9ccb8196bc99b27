// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity as alpha, radius, shadow};
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::gradient::{self, Gradient};
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Shadow, Theme};

/// Full-width band behind a page section.
pub fn section(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Hero band: diagonal wash from the page surface into the soft brand tint.
pub fn hero(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (from, to) = (colors.surface_primary, colors.brand_soft);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Degrees(135.0))
                .add_stop(0.0, from)
                .add_stop(1.0, to),
        ))),
        ..Default::default()
    }
}

/// Round brand-gradient badge standing in for the portrait photo.
pub fn portrait(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let (from, to, text) = (colors.brand_primary, colors.brand_accent, colors.overlay_text);
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(text, opacity)),
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Degrees(135.0))
                .add_stop(0.0, faded(from, opacity))
                .add_stop(1.0, faded(to, opacity)),
        ))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: faded(shadow::LG.color, opacity),
            ..shadow::LG
        },
        ..Default::default()
    }
}

/// Sticky header bar: near-opaque page surface with a hairline border.
pub fn header(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, line) = (colors.surface_primary, colors.border);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha::SURFACE,
            ..bg
        })),
        border: Border {
            color: line,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Raised card (feature, timeline entry, contact form).
pub fn card(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let (bg, text) = (colors.surface_card, colors.text_primary);
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(text, opacity)),
        background: Some(Background::Color(faded(bg, opacity))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, opacity),
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Flat tinted panel (stats, feature cards on the about section).
pub fn tinted(background: Color, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(background, opacity))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill badge (category, technology, timeline skill).
pub fn chip(background: Color, text: Color, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(text, opacity)),
        background: Some(Background::Color(faded(background, opacity))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline status banner above the contact form.
pub fn banner(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Colored placeholder standing in for a remote cover image.
pub fn cover(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let (bg, fg) = (colors.brand_primary, colors.overlay_text);
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(fg, opacity)),
        background: Some(Background::Color(faded(bg, opacity))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round dot on the experience timeline, ringed with the page surface.
pub fn timeline_marker(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let (fill, ring) = (colors.brand_primary, colors.surface_primary);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(fill, opacity))),
        border: Border {
            color: faded(ring, opacity),
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window layer behind the project modal.
pub fn backdrop(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(bg, opacity))),
        ..Default::default()
    }
}

/// Project modal panel.
pub fn modal_panel(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, text) = (colors.surface_card, colors.text_primary);
    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Always-dark footer band.
pub fn footer(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (bg, text) = (colors.footer_background, colors.footer_text);
    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Hairline rule: timeline connector and footer divider.
pub fn rule(color: Color, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(color, opacity * alpha::OVERLAY_SUBTLE))),
        ..Default::default()
    }
}
