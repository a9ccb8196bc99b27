// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All visual constants of the page, grouped the way the W3C Design Tokens
draft groups them.

## Organization

- **Palette**: Base colors (neutral grays, blue/purple brand, status colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Layout widths and component sizes
- **Typography**: Font size scale, from hero display down to captions
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

    // Brand (blue to purple)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const PRIMARY_900: Color = Color::from_rgb(0.118, 0.227, 0.541);
    pub const ACCENT_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const ACCENT_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

    // Status
    pub const ERROR_100: Color = Color::from_rgb(0.996, 0.886, 0.886);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_800: Color = Color::from_rgb(0.600, 0.106, 0.106);
    pub const WARNING_500: Color = Color::from_rgb(0.918, 0.702, 0.031);
    pub const SUCCESS_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const SUCCESS_800: Color = Color::from_rgb(0.086, 0.396, 0.204);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const DISABLED: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Sticky header over scrolled content.
    pub const SURFACE: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0; // 10 units, vertical padding of page sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Widest the page content gets; wider windows show side margins.
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
    pub const FORM_MAX_WIDTH: f32 = 672.0;
    pub const MODAL_WIDTH: f32 = 640.0;

    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const PROJECT_CARD_WIDTH: f32 = 340.0;
    pub const PROJECT_COVER_HEIGHT: f32 = 120.0;
    pub const HERO_PORTRAIT: f32 = 256.0;

    pub const ICON_BUTTON: f32 = 40.0;
    pub const ICON_BUTTON_LG: f32 = 48.0;
    pub const FEATURE_BADGE: f32 = 48.0;
    pub const TIMELINE_MARKER: f32 = 16.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const MESSAGE_INPUT_HEIGHT: f32 = 120.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, largest first.

    /// Hero name
    pub const DISPLAY: f32 = 52.0;

    /// Section headings
    pub const TITLE_LG: f32 = 40.0;

    /// Hero headline, modal title
    pub const TITLE_MD: f32 = 26.0;

    /// Brand, sub-headings
    pub const TITLE_SM: f32 = 20.0;

    /// Lead paragraphs
    pub const BODY_LG: f32 = 18.0;

    /// Standard body text
    pub const BODY: f32 = 15.0;

    /// Labels, card descriptions
    pub const BODY_SM: f32 = 13.0;

    /// Badges, percentages
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Input fields, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Outline buttons, toast accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Ring around the timeline marker
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: 0.18,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::CONTENT_MAX_WIDTH > sizing::FORM_MAX_WIDTH);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::MODAL_WIDTH);
    assert!(sizing::ICON_BUTTON_LG > sizing::ICON_BUTTON);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);
};
