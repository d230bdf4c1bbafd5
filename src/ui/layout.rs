// SPDX-License-Identifier: MPL-2.0
//! Vertical page geometry.
//!
//! The landing view renders every block at a fixed height from
//! [`sizing`](crate::ui::design_tokens::sizing), so element bounds can be
//! computed here without querying the widget tree. The bounds feed the
//! reveal effect and anchor scrolling.

use crate::application::effects::Bounds;
use crate::application::port::{NodeId, PresentationTree};
use crate::ui::design_tokens::{sizing, spacing};
use std::collections::HashMap;

/// Horizontal padding of the page content.
pub const PAGE_PADDING: f32 = spacing::XL;
/// Vertical padding above and below each section.
pub const SECTION_PADDING: f32 = spacing::XXL;
/// Gap between grid cells and between steps.
pub const GRID_GAP: f32 = spacing::LG;

/// How one page section lays out its items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionShape {
    /// `id` of the section element.
    pub id: &'static str,
    pub item_selector: &'static str,
    /// Items flow in a multi-column grid; otherwise they stack.
    pub gridded: bool,
    pub item_height: f32,
}

/// Sections below the hero, in page order.
pub const SECTIONS: [SectionShape; 3] = [
    SectionShape {
        id: "features",
        item_selector: ".feature-card",
        gridded: true,
        item_height: sizing::FEATURE_CARD_HEIGHT,
    },
    SectionShape {
        id: "how-it-works",
        item_selector: ".step",
        gridded: false,
        item_height: sizing::STEP_HEIGHT,
    },
    SectionShape {
        id: "download",
        item_selector: ".download-card",
        gridded: true,
        item_height: sizing::DOWNLOAD_CARD_HEIGHT,
    },
];

impl SectionShape {
    /// Columns used for this section at `grid_columns` page columns.
    #[must_use]
    pub fn columns(&self, grid_columns: usize) -> usize {
        if self.gridded {
            grid_columns
        } else {
            1
        }
    }
}

/// Number of grid columns that fit in `width`.
#[must_use]
pub fn columns_for(width: f32) -> usize {
    let usable = (width - 2.0 * PAGE_PADDING + GRID_GAP).max(0.0);
    // Truncation intended: partial columns do not fit.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fitting = (usable / (sizing::CARD_MIN_WIDTH + GRID_GAP)) as usize;
    fitting.clamp(1, sizing::MAX_GRID_COLUMNS)
}

/// Height of `count` cells laid out in `columns` columns.
#[must_use]
pub fn grid_height(count: usize, columns: usize, cell_height: f32) -> f32 {
    let rows = count.div_ceil(columns.max(1));
    if rows == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let rows = rows as f32;
    rows * cell_height + (rows - 1.0) * GRID_GAP
}

/// Computed bounds of the page blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    bounds: HashMap<NodeId, Bounds>,
    columns: usize,
    content_height: f32,
}

impl PageLayout {
    /// Lays out `tree` for a viewport `width` pixels wide.
    pub fn compute(tree: &impl PresentationTree, width: f32) -> Self {
        let columns = columns_for(width);
        let mut layout = Self {
            bounds: HashMap::new(),
            columns,
            content_height: 0.0,
        };
        let mut top = 0.0;

        if let Some(hero) = tree.query_all(".hero").first() {
            layout.insert(*hero, top, sizing::HERO_HEIGHT);
            top += sizing::HERO_HEIGHT;
        }

        for shape in SECTIONS {
            let Some(section) = tree.element_by_id(shape.id) else {
                continue;
            };
            let section_columns = shape.columns(columns);
            let items = tree.query_all_within(section, shape.item_selector);
            let grid_top = top + SECTION_PADDING + sizing::SECTION_HEADER_HEIGHT;
            for (index, item) in items.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let row = (index / section_columns) as f32;
                layout.insert(
                    *item,
                    grid_top + row * (shape.item_height + GRID_GAP),
                    shape.item_height,
                );
            }
            let height = 2.0 * SECTION_PADDING
                + sizing::SECTION_HEADER_HEIGHT
                + grid_height(items.len(), section_columns, shape.item_height);
            layout.insert(section, top, height);
            top += height;
        }

        layout.content_height = top;
        layout
    }

    fn insert(&mut self, node: NodeId, top: f32, height: f32) {
        self.bounds.insert(node, Bounds { top, height });
    }

    #[must_use]
    pub fn bounds(&self, node: NodeId) -> Option<Bounds> {
        self.bounds.get(&node).copied()
    }

    /// Grid columns used for the card grids.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total height of the scrollable content.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Relative scroll position (0.0 top, 1.0 bottom) that brings `node` to
    /// the top of a viewport `viewport_height` pixels tall.
    #[must_use]
    pub fn relative_scroll_to(&self, node: NodeId, viewport_height: f32) -> Option<f32> {
        let bounds = self.bounds(node)?;
        let scrollable = self.content_height - viewport_height;
        if scrollable <= 0.0 {
            return Some(0.0);
        }
        Some((bounds.top / scrollable).clamp(0.0, 1.0))
    }
}
