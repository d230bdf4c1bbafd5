// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button (hero "Get it").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_HOVER,
        _ => palette::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Text-only navigation link.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::TEXT,
        _ => palette::TEXT_MUTED,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless wrapper around clickable media and cards.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::TEXT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Slideshow indicator dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::ACCENT
        } else if status == button::Status::Hovered {
            palette::TEXT_MUTED
        } else {
            Color {
                a: opacity::DOT_IDLE,
                ..WHITE
            }
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Lightbox previous/next arrows.
pub fn arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_MEDIUM,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}
