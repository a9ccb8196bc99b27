// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style takes the active [`ColorScheme`] and the opacity of the
//! reveal animation the button sits in (`1.0` when settled).

use crate::ui::design_tokens::{border, opacity as alpha, palette::WHITE, radius, shadow};
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn faded_shadow(base: Shadow, opacity: f32) -> Shadow {
    Shadow {
        color: faded(base.color, opacity),
        ..base
    }
}

/// Filled call-to-action ("View My Work", "Send Message", "Live").
pub fn primary(
    colors: &ColorScheme,
    opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (base, hover) = (colors.brand_primary, colors.brand_hover);
    move |_theme: &Theme, status: button::Status| {
        let (bg, shadow, o) = match status {
            button::Status::Hovered => (hover, shadow::LG, opacity),
            button::Status::Pressed => (hover, shadow::SM, opacity),
            button::Status::Disabled => (base, shadow::NONE, opacity * alpha::DISABLED),
            button::Status::Active => (base, shadow::MD, opacity),
        };
        button::Style {
            background: Some(Background::Color(faded(bg, o))),
            text_color: faded(WHITE, o),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: faded_shadow(shadow, o),
            snap: true,
        }
    }
}

/// Bordered secondary action ("Get In Touch").
pub fn outline(
    colors: &ColorScheme,
    opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (brand, soft) = (colors.brand_primary, colors.brand_soft);
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(faded(soft, opacity)))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color: faded(brand, opacity),
            border: Border {
                color: faded(brand, opacity),
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Dark filled button ("Code", "Source Code").
pub fn dark(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (base, hover) = (colors.footer_background, colors.text_primary);
    move |theme: &Theme, status: button::Status| {
        let bg = match (status, theme) {
            (button::Status::Hovered, Theme::Light) => hover,
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(faded(bg, opacity))),
            text_color: faded(WHITE, opacity),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only navigation link in the header.
pub fn nav_link(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (idle, hover) = (colors.text_secondary, colors.brand_primary);
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => idle,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gradient-less brand wordmark in the header.
pub fn brand(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (idle, hover) = (colors.brand_primary, colors.brand_accent);
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => hover,
            _ => idle,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round icon button (theme toggle, social links).
pub fn icon_round(
    colors: &ColorScheme,
    opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (bg, fg, hover_bg) = (colors.surface_muted, colors.text_primary, colors.brand_primary);
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color, shadow) = match status {
            button::Status::Hovered | button::Status::Pressed => (hover_bg, WHITE, shadow::MD),
            _ => (bg, fg, shadow::SM),
        };
        button::Style {
            background: Some(Background::Color(faded(background, opacity))),
            text_color: faded(text_color, opacity),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: faded_shadow(shadow, opacity),
            snap: true,
        }
    }
}

/// Clickable project card. Lifts (bigger shadow, brand border) on hover.
pub fn card(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (bg, text, brand) = (colors.surface_card, colors.text_primary, colors.brand_primary);
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(Background::Color(faded(bg, opacity))),
            text_color: faded(text, opacity),
            border: Border {
                color: if hovered {
                    faded(brand, opacity)
                } else {
                    Color::TRANSPARENT
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: faded_shadow(if hovered { shadow::LG } else { shadow::MD }, opacity),
            snap: true,
        }
    }
}

/// Floating scroll-to-top button.
pub fn floating(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (base, hover) = (colors.brand_primary, colors.brand_hover);
    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => base,
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Links on the always-dark footer.
pub fn footer_link(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = colors.footer_text;
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => WHITE,
            _ => idle,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round social link on the footer band.
pub fn footer_social(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (idle, hover, text) = (colors.footer_background, colors.brand_primary, colors.footer_text);
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(Background::Color(if hovered {
                hover
            } else {
                faded(text, alpha::OVERLAY_SUBTLE)
            })),
            text_color: if hovered { WHITE } else { text },
            border: Border {
                color: idle,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Close button laid over the modal header.
pub fn modal_close(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (bg, fg) = (colors.overlay_background, colors.overlay_text);
    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered => Color { a: alpha::OVERLAY_STRONG, ..bg },
            _ => bg,
        })),
        text_color: fg,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let colors = ColorScheme::light();
        let style = primary(&colors, 1.0)(&Theme::Light, button::Status::Active);

        assert_eq!(
            style.background,
            Some(Background::Color(colors.brand_primary))
        );
    }

    #[test]
    fn primary_button_dims_when_disabled() {
        let colors = ColorScheme::dark();
        let style = primary(&colors, 1.0)(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color.a, alpha::DISABLED);
    }

    #[test]
    fn card_lifts_on_hover() {
        let colors = ColorScheme::light();
        let style_fn = card(&colors, 1.0);

        let idle = style_fn(&Theme::Light, button::Status::Active);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);

        assert!(hover.shadow.blur_radius > idle.shadow.blur_radius);
        assert_ne!(idle.border.color, hover.border.color);
    }

    #[test]
    fn animation_opacity_fades_everything() {
        let colors = ColorScheme::light();
        let style = icon_round(&colors, 0.25)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color.a, 0.25);
    }
}
