// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop covering the page while the lightbox is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Video surface. Playback itself is not rendered; the panel shows the
/// clip locator and its playback state.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(WHITE),
        border: Border {
            color: palette::ACCENT,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
