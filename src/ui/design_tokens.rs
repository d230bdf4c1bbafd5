// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the landing page.
//!
//! - **Palette**: Page colors (dark surface, pink accent)
//! - **Opacity**: Overlay and surface alpha levels
//! - **Spacing**: 8px grid
//! - **Sizing**: Fixed section and card sizes used by the page layout
//! - **Typography**: Font size scale
//! - **Radius** / **Shadow**: Card and button shapes
//!
//! Section and card heights are load-bearing: [`crate::ui::layout`] uses
//! them to compute element bounds for scroll reveal and anchor jumps, and
//! the view renders with the same values.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Page surfaces (darkest to lightest)
    pub const BACKGROUND: Color = Color::from_rgb(0.055, 0.055, 0.075);
    pub const SURFACE: Color = Color::from_rgb(0.09, 0.09, 0.12);
    pub const SURFACE_RAISED: Color = Color::from_rgb(0.13, 0.13, 0.17);
    pub const HERO_GLOW: Color = Color::from_rgb(0.22, 0.09, 0.2);

    // Text
    pub const TEXT: Color = Color::from_rgb(0.94, 0.94, 0.96);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.565, 0.565, 0.627); // #9090a0

    // Accents
    pub const ACCENT: Color = Color::from_rgb(1.0, 0.42, 0.616); // #ff6b9d
    pub const ACCENT_HOVER: Color = Color::from_rgb(1.0, 0.55, 0.7);
    pub const LINK: Color = Color::from_rgb(0.376, 0.647, 0.98); // #60a5fa
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Inactive slideshow dots.
    pub const DOT_IDLE: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Top navigation bar.
    pub const NAV_HEIGHT: f32 = 56.0;

    /// Hero header, slideshow included.
    pub const HERO_HEIGHT: f32 = 560.0;
    /// Slideshow viewport inside the hero.
    pub const SLIDE_HEIGHT: f32 = 300.0;
    pub const DOT_SIZE: f32 = 10.0;

    /// Section heading block (title plus spacing).
    pub const SECTION_HEADER_HEIGHT: f32 = 96.0;
    pub const FEATURE_CARD_HEIGHT: f32 = 320.0;
    pub const FEATURE_MEDIA_HEIGHT: f32 = 180.0;
    pub const STEP_HEIGHT: f32 = 96.0;
    pub const DOWNLOAD_CARD_HEIGHT: f32 = 140.0;

    /// Narrowest a grid card may get before the grid drops a column.
    pub const CARD_MIN_WIDTH: f32 = 260.0;
    pub const MAX_GRID_COLUMNS: usize = 3;

    /// Lightbox arrow buttons.
    pub const LIGHTBOX_ARROW: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero title
    pub const DISPLAY: f32 = 44.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
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
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XXL > spacing::XL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DOT_IDLE > 0.0 && opacity::DOT_IDLE < 1.0);

    assert!(sizing::SLIDE_HEIGHT < sizing::HERO_HEIGHT);
    assert!(sizing::FEATURE_MEDIA_HEIGHT < sizing::FEATURE_CARD_HEIGHT);
    assert!(sizing::MAX_GRID_COLUMNS >= 1);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
