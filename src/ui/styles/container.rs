// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Navigation bar.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BACKGROUND
        })),
        border: Border {
            color: palette::SURFACE_RAISED,
            width: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero background layer moved by the parallax effect.
pub fn hero_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::HERO_GLOW)),
        ..Default::default()
    }
}

/// Card surface. `alpha` fades the card in during reveal.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::SURFACE
        })),
        text_color: Some(Color {
            a: alpha,
            ..palette::TEXT
        }),
        border: Border {
            color: Color {
                a: alpha * opacity::OVERLAY_MEDIUM,
                ..palette::SURFACE_RAISED
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Stand-in for media that could not be found on disk.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_RAISED)),
        text_color: Some(palette::TEXT_MUTED),
        border: Border {
            color: palette::TEXT_MUTED,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
