// SPDX-License-Identifier: MPL-2.0
//! In-memory presentation tree.
//!
//! [`Scene`] is an arena of [`Element`]s addressed by [`NodeId`]. It
//! implements [`PresentationTree`] so the page controllers run against it
//! both in tests and behind the Iced front-end, which renders it.

mod markup;
mod selector;

pub use markup::build as build_from_manifest;
pub use selector::SelectorList;

use crate::application::port::{Cursor, Display, NodeId, PresentationTree, Style};
use selector::{Complex, Compound};
use std::collections::BTreeMap;
use std::time::Duration;

/// A single element of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    display: Display,
    style: InlineStyle,
    playing: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Inline style declarations of an element. Unset fields use the defaults
/// of [`ComputedStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineStyle {
    pub opacity: Option<f32>,
    pub translate_y: Option<f32>,
    pub transition_duration: Option<Duration>,
    pub transition_delay: Option<Duration>,
    pub cursor: Option<Cursor>,
}

impl InlineStyle {
    fn apply(&mut self, style: Style) {
        match style {
            Style::Opacity(value) => self.opacity = Some(value),
            Style::TranslateY(value) => self.translate_y = Some(value),
            Style::TransitionDuration(value) => self.transition_duration = Some(value),
            Style::TransitionDelay(value) => self.transition_delay = Some(value),
            Style::Cursor(value) => self.cursor = Some(value),
        }
    }
}

/// Final style of an element once class rules are applied over its inline
/// declarations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub opacity: f32,
    pub translate_y: f32,
    pub transition_duration: Duration,
    pub transition_delay: Duration,
    pub cursor: Cursor,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            transition_duration: Duration::ZERO,
            transition_delay: Duration::ZERO,
            cursor: Cursor::Auto,
        }
    }
}

impl Element {
    /// Creates a detached element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            display: Display::Block,
            style: InlineStyle::default(),
            playing: false,
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.display = Display::None;
        self
    }

    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        if name == "id" {
            return self.id.as_deref();
        }
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn text_content(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn display(&self) -> Display {
        self.display
    }

    #[must_use]
    pub fn inline_style(&self) -> InlineStyle {
        self.style
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn matches(&self, compound: &Compound) -> bool {
        if compound.tag.as_deref().is_some_and(|tag| tag != self.tag) {
            return false;
        }
        if compound
            .id
            .as_deref()
            .is_some_and(|id| self.id.as_deref() != Some(id))
        {
            return false;
        }
        compound.classes.iter().all(|class| self.has_class(class))
            && compound
                .attributes
                .iter()
                .all(|attr| attr.matches(self.attribute(attr.name())))
    }
}

/// Class rule registered through [`PresentationTree::insert_rule`].
#[derive(Debug, Clone, PartialEq)]
struct ClassRule {
    class: String,
    style: InlineStyle,
}

/// Arena-backed element tree with a `body` root.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<Element>,
    rules: Vec<ClassRule>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a scene holding only the root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Appends `element` as the last child of `parent`.
    ///
    /// An unknown `parent` attaches the element to the root.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let parent = if parent.index() < self.nodes.len() {
            parent
        } else {
            self.root()
        };
        let id = NodeId::new(self.nodes.len());
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        self.nodes[parent.index()].children.push(id);
        id
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.index())
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.index())
    }

    /// Number of elements, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Descendants of `root` in document order, `root` excluded.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(element) = self.element(root) else {
            return out;
        };
        let mut stack: Vec<NodeId> = element.children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(element) = self.element(node) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        out
    }

    /// Whether the element and all of its ancestors are displayed.
    #[must_use]
    pub fn is_rendered(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            match self.element(current) {
                Some(element) if element.display == Display::Block => cursor = element.parent,
                _ => return false,
            }
        }
        true
    }

    /// Inline style with every matching class rule applied on top, in
    /// insertion order.
    #[must_use]
    pub fn computed_style(&self, node: NodeId) -> ComputedStyle {
        let mut computed = ComputedStyle::default();
        let Some(element) = self.element(node) else {
            return computed;
        };
        let layers = std::iter::once(&element.style).chain(
            self.rules
                .iter()
                .filter(|rule| element.has_class(&rule.class))
                .map(|rule| &rule.style),
        );
        for layer in layers {
            if let Some(value) = layer.opacity {
                computed.opacity = value;
            }
            if let Some(value) = layer.translate_y {
                computed.translate_y = value;
            }
            if let Some(value) = layer.transition_duration {
                computed.transition_duration = value;
            }
            if let Some(value) = layer.transition_delay {
                computed.transition_delay = value;
            }
            if let Some(value) = layer.cursor {
                computed.cursor = value;
            }
        }
        computed
    }

    fn matches_complex(&self, node: NodeId, complex: &Complex) -> bool {
        let Some((subject, ancestors)) = complex.compounds.split_last() else {
            return false;
        };
        if !self.element(node).is_some_and(|e| e.matches(subject)) {
            return false;
        }
        let mut cursor = self.element(node).and_then(|e| e.parent);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(current) = cursor else {
                    return false;
                };
                let element = &self.nodes[current.index()];
                cursor = element.parent;
                if element.matches(compound) {
                    break;
                }
            }
        }
        true
    }

    fn select(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(list) = SelectorList::parse(selector) else {
            tracing::debug!(selector, "unsupported selector matches nothing");
            return Vec::new();
        };
        self.descendants(root)
            .into_iter()
            .filter(|node| {
                list.alternatives
                    .iter()
                    .any(|complex| self.matches_complex(*node, complex))
            })
            .collect()
    }
}

impl PresentationTree for Scene {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.nodes[node.index()].id.as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.root(), selector)
    }

    fn query_all_within(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        self.select(root, selector)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(|e| e.parent)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.attribute(name))
    }

    fn set_src(&mut self, node: NodeId, src: Option<&str>) {
        if let Some(element) = self.element_mut(node) {
            match src {
                Some(src) => {
                    element.attributes.insert("src".to_string(), src.to_string());
                }
                None => {
                    element.attributes.remove("src");
                }
            }
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.element_mut(node) {
            element.text = text.to_string();
        }
    }

    fn set_display(&mut self, node: NodeId, display: Display) {
        if let Some(element) = self.element_mut(node) {
            element.display = display;
        }
    }

    fn set_style(&mut self, node: NodeId, style: Style) {
        if let Some(element) = self.element_mut(node) {
            element.style.apply(style);
        }
    }

    fn insert_rule(&mut self, class: &str, styles: &[Style]) {
        let mut style = InlineStyle::default();
        for declaration in styles {
            style.apply(*declaration);
        }
        self.rules.push(ClassRule {
            class: class.to_string(),
            style,
        });
    }

    fn play(&mut self, node: NodeId) {
        if let Some(element) = self.element_mut(node) {
            element.playing = true;
        }
    }

    fn pause(&mut self, node: NodeId) {
        if let Some(element) = self.element_mut(node) {
            element.playing = false;
        }
    }
}
