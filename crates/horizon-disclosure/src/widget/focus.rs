//! Roving keyboard focus within composite widgets.
//!
//! A composite widget (an accordion, a toolbar) marks its root node and each
//! of its focusable controls with marker attributes. [`RovingFocus`] works
//! purely on that structure: given the node that currently has focus and a
//! navigation [`KeyIntent`], it resolves the control to focus next.
//!
//! # Sibling Set
//!
//! The sibling set of a control is every node carrying the control marker
//! below the nearest enclosing root, in document (depth-first pre-) order.
//! Subtrees of nested roots are skipped, so an accordion inside an accordion
//! panel keeps its own ring of headers.
//!
//! Navigation that cannot be resolved (no enclosing root, an origin that is
//! not itself a control, an empty set) does nothing. It is not an error.

use horizon_disclosure_core::{NodeId, RenderHost};

use super::keyboard::KeyIntent;

/// Structural focus navigator for one kind of composite widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RovingFocus {
    root_marker: &'static str,
    control_marker: &'static str,
}

impl RovingFocus {
    /// Create a navigator for controls marked `control_marker` inside roots
    /// marked `root_marker`.
    pub const fn new(root_marker: &'static str, control_marker: &'static str) -> Self {
        Self {
            root_marker,
            control_marker,
        }
    }

    /// The root marker attribute.
    pub fn root_marker(&self) -> &'static str {
        self.root_marker
    }

    /// The control marker attribute.
    pub fn control_marker(&self) -> &'static str {
        self.control_marker
    }

    /// The nearest enclosing root of `node`.
    pub fn root_of<H: RenderHost>(&self, host: &H, node: NodeId) -> Option<NodeId> {
        let marker = self.root_marker;
        host.closest(node, |h, n| h.has_attribute(n, marker))
    }

    /// All controls sharing a root with `origin`, in document order.
    ///
    /// Returns `None` when `origin` is not a control inside a root.
    pub fn sibling_set<H: RenderHost>(&self, host: &H, origin: NodeId) -> Option<Vec<NodeId>> {
        if !host.has_attribute(origin, self.control_marker) {
            return None;
        }
        let root = self.root_of(host, origin)?;

        let root_marker = self.root_marker;
        let controls: Vec<NodeId> = host
            .descendants_where(root, |h, n| !h.has_attribute(n, root_marker))
            .into_iter()
            .filter(|&n| host.has_attribute(n, self.control_marker))
            .collect();

        controls.contains(&origin).then_some(controls)
    }

    /// Resolve the control that `intent` moves focus to from `origin`.
    ///
    /// `Activate` never resolves a target.
    pub fn target<H: RenderHost>(
        &self,
        host: &H,
        origin: NodeId,
        intent: KeyIntent,
    ) -> Option<NodeId> {
        if !intent.is_navigation() {
            return None;
        }
        let siblings = self.sibling_set(host, origin)?;
        let len = siblings.len();
        let pos = siblings.iter().position(|&n| n == origin)?;

        let index = match intent {
            KeyIntent::Next => (pos + 1) % len,
            KeyIntent::Previous => (pos + len - 1) % len,
            KeyIntent::First => 0,
            KeyIntent::Last => len - 1,
            KeyIntent::Activate => return None,
        };
        siblings.get(index).copied()
    }

    /// Move host focus according to `intent`.
    ///
    /// Returns the newly focused control, or `None` if nothing moved.
    pub fn navigate<H: RenderHost>(
        &self,
        host: &mut H,
        origin: NodeId,
        intent: KeyIntent,
    ) -> Option<NodeId> {
        let target = self.target(host, origin, intent)?;
        host.focus(target).then_some(target)
    }
}
