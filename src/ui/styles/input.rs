// SPDX-License-Identifier: MPL-2.0
//! Form field and progress bar styles.

use crate::ui::design_tokens::{border, opacity as alpha, radius};
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::{progress_bar, text_input};
use iced::{Background, Border, Color, Theme};

#[derive(Debug, Clone, Copy)]
struct FieldColors {
    background: Color,
    border: Color,
    focus: Color,
    value: Color,
    placeholder: Color,
    selection: Color,
}

impl FieldColors {
    fn new(colors: &ColorScheme) -> Self {
        Self {
            background: colors.surface_card,
            border: colors.border,
            focus: colors.brand_primary,
            value: colors.text_primary,
            placeholder: colors.text_tertiary,
            selection: Color {
                a: alpha::OVERLAY_MEDIUM,
                ..colors.brand_primary
            },
        }
    }

    fn border(&self, focused: bool, disabled: bool) -> Border {
        let (color, width) = if focused {
            (self.focus, border::WIDTH_MD)
        } else {
            (self.border, border::WIDTH_SM)
        };
        Border {
            color: if disabled {
                faded(color, alpha::DISABLED)
            } else {
                color
            },
            width,
            radius: radius::MD.into(),
        }
    }

    fn value(&self, disabled: bool) -> Color {
        if disabled {
            faded(self.value, alpha::DISABLED)
        } else {
            self.value
        }
    }
}

/// Single-line contact form field. Dims while a submission is in flight.
pub fn text_field(colors: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let c = FieldColors::new(colors);
    move |_theme: &Theme, status: text_input::Status| {
        let focused = matches!(status, text_input::Status::Focused { .. });
        let disabled = matches!(status, text_input::Status::Disabled);
        text_input::Style {
            background: Background::Color(c.background),
            border: c.border(focused, disabled),
            icon: c.placeholder,
            placeholder: c.placeholder,
            value: c.value(disabled),
            selection: c.selection,
        }
    }
}

/// Skill level bar.
pub fn skill_bar(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> progress_bar::Style {
    let (track, fill) = (colors.surface_muted, colors.brand_primary);
    move |_theme: &Theme| progress_bar::Style {
        background: Background::Color(faded(track, opacity)),
        bar: Background::Color(faded(fill, opacity)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}
