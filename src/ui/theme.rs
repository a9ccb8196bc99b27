// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers for animated and layered widgets.

use iced::Color;

/// `color` with its alpha multiplied by `opacity` (clamped to `0.0..=1.0`).
///
/// Iced has no per-subtree opacity, so animated views fade by passing every
/// color they draw through this.
#[must_use]
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Linear interpolation between two colors; `t` is clamped to `0.0..=1.0`.
#[must_use]
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
