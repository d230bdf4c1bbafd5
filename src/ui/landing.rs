// SPDX-License-Identifier: MPL-2.0
//! Landing page view.
//!
//! Renders the [`Scene`] as it currently stands: whatever the controllers
//! changed (active slide, lightbox state, inline styles) shows up on the
//! next frame. Every clickable element reports itself through
//! [`Message::Clicked`]; deciding what a click means is left to the page
//! logic.

use crate::application::controller::lightbox::{ACTIVE_CLASS, OVERLAY_ID};
use crate::application::controller::slideshow::{DOT_SELECTOR, SLIDE_SELECTOR, TITLE_ID};
use crate::application::effects::HERO_BACKGROUND_SELECTOR;
use crate::application::port::{NodeId, PresentationTree};
use crate::infrastructure::Scene;
use crate::ui::assets::Assets;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::layout::{
    PageLayout, SectionShape, GRID_GAP, PAGE_PADDING, SECTIONS, SECTION_PADDING,
};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, mouse_area, Column, Container, Id, Image, Row, Scrollable, Space, Stack, Text,
};
use iced::{Color, ContentFit, Element, Length, Padding};
use std::collections::HashMap;
use std::time::Instant;

/// Id of the page scrollable, used for anchor jumps.
pub const SCROLLABLE_ID: &str = "landing-scrollable";

#[derive(Debug, Clone)]
pub enum Message {
    /// An element was clicked.
    Clicked(NodeId),
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
}

pub struct ViewContext<'a> {
    pub scene: &'a Scene,
    pub layout: &'a PageLayout,
    pub assets: &'a Assets,
    /// When each revealed element started its entrance transition.
    pub revealed_at: &'a HashMap<NodeId, Instant>,
    pub now: Instant,
}

/// Rendered opacity and vertical offset of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    pub translate_y: f32,
}

/// Interpolates an element between its inline style and its computed style
/// while its transition runs.
///
/// Without a start instant the computed style is used as is.
#[must_use]
pub fn appearance(
    scene: &Scene,
    node: NodeId,
    started: Option<Instant>,
    now: Instant,
) -> Appearance {
    let target = scene.computed_style(node);
    let settled = Appearance {
        opacity: target.opacity,
        translate_y: target.translate_y,
    };
    let Some(started) = started else {
        return settled;
    };
    if target.transition_duration.is_zero() {
        return settled;
    }

    let from = scene
        .element(node)
        .map(crate::infrastructure::Element::inline_style)
        .unwrap_or_default();
    let elapsed = now
        .saturating_duration_since(started)
        .saturating_sub(target.transition_delay);
    let progress = (elapsed.as_secs_f32() / target.transition_duration.as_secs_f32()).min(1.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    let lerp = |from: f32, to: f32| from + (to - from) * eased;

    Appearance {
        opacity: lerp(from.opacity.unwrap_or(1.0), target.opacity),
        translate_y: lerp(from.translate_y.unwrap_or(0.0), target.translate_y),
    }
}

/// Whether the transition of `node` started at `started` is still running.
#[must_use]
pub fn is_transitioning(scene: &Scene, node: NodeId, started: Instant, now: Instant) -> bool {
    let style = scene.computed_style(node);
    now.saturating_duration_since(started) < style.transition_delay + style.transition_duration
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .push(hero(&ctx))
        .extend(SECTIONS.iter().filter_map(|shape| section(&ctx, shape)));

    let scrollable = Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let page = Container::new(Column::new().push(navbar(&ctx)).push(scrollable))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut stack = Stack::new().push(page);
    if let Some(overlay) = lightbox(&ctx) {
        stack = stack.push(overlay);
    }
    stack.into()
}

fn text_of(scene: &Scene, node: NodeId) -> &str {
    scene
        .element(node)
        .map(crate::infrastructure::Element::text_content)
        .unwrap_or_default()
}

fn first_within(scene: &Scene, root: NodeId, selector: &str) -> Option<NodeId> {
    scene.query_all_within(root, selector).first().copied()
}

fn navbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = ctx
        .scene
        .query_all(".hero-title")
        .first()
        .map(|title| text_of(ctx.scene, *title))
        .unwrap_or_default();

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(brand).size(typography::TITLE_SM).color(palette::ACCENT))
        .push(Space::new().width(Length::Fill));
    for link in ctx.scene.query_all(".nav-link") {
        row = row.push(
            button(Text::new(text_of(ctx.scene, link)).size(typography::BODY))
                .style(styles::button::link)
                .on_press(Message::Clicked(link)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAV_HEIGHT))
        .padding([0.0, PAGE_PADDING])
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

/// Image, video placeholder or missing-file placeholder for `src`.
fn media<'a>(assets: &'a Assets, src: &'a str, height: f32, alpha: f32) -> Element<'a, Message> {
    if let Some(handle) = assets.image(src) {
        return Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .opacity(alpha)
            .into();
    }

    let label = if assets.video(src).is_some() {
        format!("▶  {src}")
    } else {
        src.to_string()
    };
    Container::new(Text::new(label).size(typography::CAPTION).color(Color {
        a: alpha,
        ..palette::TEXT_MUTED
    }))
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}

// =============================================================================
// Hero
// =============================================================================

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scene = ctx.scene;
    let Some(header) = scene.query_all(".hero").first().copied() else {
        return Space::new().height(Length::Shrink).into();
    };

    let parallax = first_within(scene, header, HERO_BACKGROUND_SELECTOR)
        .map_or(0.0, |bg| scene.computed_style(bg).translate_y);
    let background = Column::new()
        .push(Space::new().height(Length::Fixed(parallax.max(0.0))))
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::hero_background),
        );

    let mut foreground = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    if let Some(title) = first_within(scene, header, ".hero-title") {
        foreground = foreground.push(Text::new(text_of(scene, title)).size(typography::DISPLAY));
    }
    if let Some(tagline) = first_within(scene, header, ".hero-tagline") {
        foreground = foreground.push(
            Text::new(text_of(scene, tagline))
                .size(typography::BODY_LG)
                .color(palette::TEXT_MUTED),
        );
    }
    if let Some(slideshow) = first_within(scene, header, ".slideshow") {
        foreground = foreground.push(slideshow_view(ctx, slideshow));
    }
    if let Some(cta) = first_within(scene, header, "a.btn") {
        foreground = foreground.push(
            button(Text::new(text_of(scene, cta)).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary)
                .on_press(Message::Clicked(cta)),
        );
    }

    Container::new(
        Stack::new().push(background).push(
            Container::new(foreground)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(PAGE_PADDING)
                .align_y(Vertical::Center),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HERO_HEIGHT))
    .clip(true)
    .into()
}

fn slideshow_view<'a>(ctx: &ViewContext<'a>, slideshow: NodeId) -> Element<'a, Message> {
    let scene = ctx.scene;
    let slides = scene.query_all_within(slideshow, SLIDE_SELECTOR);
    let active = slides
        .iter()
        .copied()
        .find(|slide| scene.has_class(*slide, ACTIVE_CLASS))
        .or_else(|| slides.first().copied());

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .max_width(sizing::SLIDE_HEIGHT * 16.0 / 9.0);

    if let Some(slide) = active {
        let src = scene.src(slide).unwrap_or_default();
        column = column.push(
            button(media(ctx.assets, src, sizing::SLIDE_HEIGHT, opacity::OPAQUE))
                .padding(0)
                .style(styles::button::bare)
                .on_press(Message::Clicked(slide)),
        );
    }

    let dots = scene
        .query_all_within(slideshow, DOT_SELECTOR)
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, dot| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::DOT_SIZE))
                    .height(Length::Fixed(sizing::DOT_SIZE))
                    .style(styles::button::dot(scene.has_class(dot, ACTIVE_CLASS)))
                    .on_press(Message::Clicked(dot)),
            )
        });
    column = column.push(dots);

    if let Some(title) = scene.element_by_id(TITLE_ID) {
        column = column.push(
            Text::new(text_of(scene, title))
                .size(typography::BODY)
                .color(palette::TEXT_MUTED),
        );
    }

    column.into()
}

// =============================================================================
// Sections
// =============================================================================

fn section<'a>(ctx: &ViewContext<'a>, shape: &SectionShape) -> Option<Element<'a, Message>> {
    let scene = ctx.scene;
    let node = scene.element_by_id(shape.id)?;
    let height = ctx.layout.bounds(node)?.height;

    let heading = first_within(scene, node, "h2").map_or("", |h2| text_of(scene, h2));
    let header = Container::new(Text::new(heading).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HEADER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top);

    let columns = shape.columns(ctx.layout.columns());
    let items = scene.query_all_within(node, shape.item_selector);
    let mut grid = Column::new().spacing(GRID_GAP);
    for chunk in items.chunks(columns) {
        let mut row = Row::new().spacing(GRID_GAP);
        for item in chunk {
            row = row.push(
                Container::new(card(ctx, *item, shape))
                    .width(Length::FillPortion(1))
                    .height(Length::Fixed(shape.item_height)),
            );
        }
        // Pad short rows so cards keep their column width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    Some(
        Container::new(Column::new().push(header).push(grid))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .padding([SECTION_PADDING, PAGE_PADDING])
            .into(),
    )
}

fn card<'a>(ctx: &ViewContext<'a>, item: NodeId, shape: &SectionShape) -> Element<'a, Message> {
    let scene = ctx.scene;
    let look = appearance(scene, item, ctx.revealed_at.get(&item).copied(), ctx.now);
    let alpha = look.opacity.clamp(0.0, 1.0);
    let faded = |color: Color| Color {
        a: color.a * alpha,
        ..color
    };

    let mut body = Column::new().spacing(spacing::XS);
    let mut badge = None;
    let children = scene
        .element(item)
        .map(|element| element.children().to_vec())
        .unwrap_or_default();
    for child in children {
        let Some(element) = scene.element(child) else {
            continue;
        };
        if element.has_class("feature-gif") {
            if let Some(img) = first_within(scene, child, "img") {
                let src = scene.src(img).unwrap_or_default();
                body = body.push(
                    button(media(ctx.assets, src, sizing::FEATURE_MEDIA_HEIGHT, alpha))
                        .padding(0)
                        .style(styles::button::bare)
                        .on_press(Message::Clicked(img)),
                );
            }
        } else if element.has_class("step-number") {
            badge = Some(
                Text::new(element.text_content())
                    .size(typography::TITLE_LG)
                    .color(faded(palette::ACCENT)),
            );
        } else if element.tag_name() == "h3" {
            body = body.push(
                Text::new(element.text_content())
                    .size(typography::TITLE_SM)
                    .color(faded(palette::TEXT)),
            );
        } else {
            body = body.push(
                Text::new(element.text_content())
                    .size(typography::BODY)
                    .color(faded(palette::TEXT_MUTED)),
            );
        }
    }

    let content: Element<'a, Message> = match badge {
        Some(badge) => Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(badge)
            .push(body)
            .into(),
        None => body.into(),
    };

    let surface = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(if shape.gridded { spacing::LG } else { spacing::MD })
        .style(styles::container::card(alpha));

    let surface: Element<'a, Message> = if scene.attribute(item, "href").is_some() {
        button(surface)
            .padding(0)
            .style(styles::button::bare)
            .on_press(Message::Clicked(item))
            .into()
    } else {
        surface.into()
    };

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: look.translate_y.max(0.0),
            ..Padding::ZERO
        })
        .into()
}

// =============================================================================
// Lightbox
// =============================================================================

fn lightbox<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let scene = ctx.scene;
    let overlay = scene.element_by_id(OVERLAY_ID)?;
    if !scene.has_class(overlay, ACTIVE_CLASS) {
        return None;
    }

    let video = first_within(scene, overlay, "video")
        .filter(|video| scene.is_rendered(*video) && scene.src(*video).is_some());
    let (surface_node, surface): (NodeId, Element<'a, Message>) = match video {
        Some(video) => {
            let src = scene.src(video).unwrap_or_default();
            let playing = scene.element(video).is_some_and(|e| e.is_playing());
            let state = if playing { "▶  Playing" } else { "❚❚  Paused" };
            let panel = Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new(state).size(typography::TITLE_SM))
                .push(Text::new(src).size(typography::CAPTION));
            (
                video,
                Container::new(panel)
                    .width(Length::Fixed(sizing::SLIDE_HEIGHT * 2.0))
                    .height(Length::Fixed(sizing::SLIDE_HEIGHT * 1.2))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(styles::overlay::video_surface)
                    .into(),
            )
        }
        None => {
            let image = first_within(scene, overlay, "img")?;
            let src = scene.src(image).unwrap_or_default();
            (
                image,
                Container::new(media(ctx.assets, src, sizing::HERO_HEIGHT, opacity::OPAQUE))
                    .max_width(sizing::HERO_HEIGHT * 16.0 / 9.0)
                    .into(),
            )
        }
    };

    let arrow = |selector: &str| {
        first_within(scene, overlay, selector).map(|node| {
            button(
                Text::new(text_of(scene, node))
                    .size(typography::TITLE_LG)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fixed(sizing::LIGHTBOX_ARROW))
            .height(Length::Fixed(sizing::LIGHTBOX_ARROW))
            .style(styles::button::arrow)
            .on_press(Message::Clicked(node))
        })
    };

    let mut row = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    if let Some(prev) = arrow(".lightbox-prev") {
        row = row.push(prev);
    }
    row = row.push(mouse_area(surface).on_press(Message::Clicked(surface_node)));
    if let Some(next) = arrow(".lightbox-next") {
        row = row.push(next);
    }

    let backdrop = Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::overlay::backdrop);

    Some(
        mouse_area(backdrop)
            .on_press(Message::Clicked(overlay))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::effects::{RevealTracker, REVEALED_CLASS};
    use crate::infrastructure::build_from_manifest;
    use crate::manifest::PageManifest;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn revealed_card() -> (Scene, NodeId) {
        let mut scene = build_from_manifest(&PageManifest::demo());
        RevealTracker::attach(&mut scene, 0.1);
        let card = scene.query_all(".feature-card")[0];
        scene.add_class(card, REVEALED_CLASS);
        (scene, card)
    }

    #[test]
    fn hidden_card_stays_at_initial_style() {
        let mut scene = build_from_manifest(&PageManifest::demo());
        RevealTracker::attach(&mut scene, 0.1);
        let card = scene.query_all(".feature-card")[0];

        let look = appearance(&scene, card, None, Instant::now());

        assert_abs_diff_eq!(look.opacity, 0.0);
        assert_abs_diff_eq!(look.translate_y, 20.0);
    }

    #[test]
    fn transition_starts_from_inline_style() {
        let (scene, card) = revealed_card();
        let now = Instant::now();

        let look = appearance(&scene, card, Some(now), now);

        assert_abs_diff_eq!(look.opacity, 0.0);
        assert_abs_diff_eq!(look.translate_y, 20.0);
    }

    #[test]
    fn transition_settles_on_computed_style() {
        let (scene, card) = revealed_card();
        let started = Instant::now();
        let later = started + Duration::from_secs(5);

        let look = appearance(&scene, card, Some(started), later);

        assert_abs_diff_eq!(look.opacity, 1.0);
        assert_abs_diff_eq!(look.translate_y, 0.0);
        assert!(!is_transitioning(&scene, card, started, later));
    }

    #[test]
    fn transition_is_monotonic() {
        let (scene, card) = revealed_card();
        let started = Instant::now();

        let early = appearance(&scene, card, Some(started), started + Duration::from_millis(150));
        let late = appearance(&scene, card, Some(started), started + Duration::from_millis(450));

        assert!(early.opacity < late.opacity);
        assert!(early.translate_y > late.translate_y);
        assert!(is_transitioning(&scene, card, started, started + Duration::from_millis(450)));
    }
}
