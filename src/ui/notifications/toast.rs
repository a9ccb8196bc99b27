// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored border, a glyph, the
//! resolved message and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, colors: &ColorScheme) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.accent(colors);

        let icon = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .color(accent);

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(notification.text()).size(typography::BODY));
        if let Some(detail) = notification.detail() {
            body = body.push(
                Text::new(detail)
                    .size(typography::CAPTION)
                    .color(colors.text_tertiary),
            );
        }

        let dismiss_button = button(text("✕").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style(colors));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(toast_container_style(colors, accent))
            .into()
    }

    /// Renders all visible toasts stacked in the top-right corner.
    ///
    /// Returns `None` when nothing is showing so the caller can skip the layer.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        colors: &ColorScheme,
    ) -> Option<Element<'a, Message>> {
        if manager.visible_count() == 0 {
            return None;
        }

        let toast_column = Column::with_children(
            manager
                .visible()
                .map(|notification| Self::view(notification, colors)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Some(
            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into(),
        )
    }
}

fn toast_container_style(colors: &ColorScheme, accent: Color) -> impl Fn(&Theme) -> container::Style {
    let (bg, fg) = (colors.surface_card, colors.text_primary);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(fg),
        ..Default::default()
    }
}

fn dismiss_button_style(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (fg, hover) = (colors.text_secondary, colors.text_tertiary);
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..hover
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..hover
            })),
            button::Status::Active | button::Status::Disabled => None,
        };
        button::Style {
            background,
            text_color: fg,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let colors = ColorScheme::dark();
        let accent = Severity::Success.accent(&colors);
        let style = toast_container_style(&colors, accent)(&Theme::Dark);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_fills_on_hover() {
        let colors = ColorScheme::light();
        let style_fn = dismiss_button_style(&colors);
        assert!(style_fn(&Theme::Light, button::Status::Active).background.is_none());
        assert!(style_fn(&Theme::Light, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn empty_manager_has_no_overlay() {
        let manager = Manager::new();
        assert!(Toast::view_overlay(&manager, &ColorScheme::light()).is_none());
    }
}
