// SPDX-License-Identifier: MPL-2.0
//! Input events dispatched to the controllers.

use super::port::{NodeId, PresentationTree};

/// A click travelling from its target up to the root.
///
/// Handlers see the same event at each element of the path; any of them may
/// call [`ClickEvent::stop_propagation`] to keep it from reaching ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    target: NodeId,
    propagation_stopped: bool,
}

impl ClickEvent {
    #[must_use]
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            propagation_stopped: false,
        }
    }

    /// Element the click landed on.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Bubble path of `target`: the target itself followed by its ancestors up
/// to the root.
pub fn bubble_path(tree: &impl PresentationTree, target: NodeId) -> Vec<NodeId> {
    std::iter::successors(Some(target), |node| tree.parent(*node)).collect()
}
