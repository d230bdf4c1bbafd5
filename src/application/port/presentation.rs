// SPDX-License-Identifier: MPL-2.0
//! Presentation tree port definition.
//!
//! The page logic never owns its markup. It reads and mutates a tree of
//! elements through [`PresentationTree`], addressing elements by [`NodeId`].
//!
//! # Design Notes
//!
//! - Node handles are plain `Copy` indices; they stay valid for the lifetime
//!   of the tree they came from
//! - Lookups return elements in document order
//! - Mutations on a handle from another tree are the caller's bug; adapters
//!   may ignore them

use std::time::Duration;

/// Handle to an element of a presentation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Whether an element takes part in rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

/// Mouse cursor shown over an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Auto,
    Pointer,
}

/// A single inline style declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Opacity(f32),
    /// Vertical translation in pixels (`transform: translateY(..)`).
    TranslateY(f32),
    /// Duration of opacity/transform transitions.
    TransitionDuration(Duration),
    TransitionDelay(Duration),
    Cursor(Cursor),
}

/// Port for reading and mutating the page markup.
pub trait PresentationTree {
    /// Element carrying the given `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// All elements matching `selector`, in document order.
    ///
    /// An unsupported or malformed selector matches nothing.
    fn query_all(&self, selector: &str) -> Vec<NodeId>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_all_within(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Parent element, `None` for the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// The `src` attribute.
    fn src(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "src")
    }

    /// Sets (`Some`) or clears (`None`) the `src` attribute.
    fn set_src(&mut self, node: NodeId, src: Option<&str>);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Replaces the text content.
    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_display(&mut self, node: NodeId, display: Display);

    /// Applies an inline style declaration.
    fn set_style(&mut self, node: NodeId, style: Style);

    /// Registers a class rule whose declarations override inline styles of
    /// every element carrying `class`.
    fn insert_rule(&mut self, class: &str, styles: &[Style]);

    /// Starts playback of a media element.
    fn play(&mut self, node: NodeId);

    fn pause(&mut self, node: NodeId);
}
