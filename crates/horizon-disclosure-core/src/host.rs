//! The render-host capability consumed by widgets.
//!
//! Widgets in Horizon Disclosure are headless: they never draw. Instead they
//! describe their markup through a [`RenderHost`], which owns the actual node
//! tree (a browser DOM, a native accessibility tree, or the in-memory
//! [`Document`](crate::Document) used for tests and headless hosts).
//!
//! The capability is deliberately small:
//! - mount and unmount nodes with a tag and a parent,
//! - write attributes and text,
//! - answer structural queries (parent, children, attribute reads),
//! - move keyboard focus.
//!
//! Event delivery goes the other way: the host calls into the widget with the
//! target [`NodeId`] and the event.

use slotmap::new_key_type;

use crate::error::Result;

new_key_type! {
    /// A handle to a node mounted in a [`RenderHost`].
    ///
    /// Handles stay valid until the node (or one of its ancestors) is removed.
    pub struct NodeId;
}

impl NodeId {
    /// Convert the NodeId to a raw u64 value.
    ///
    /// This is useful for interop with external systems that need a numeric ID.
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a NodeId from a raw u64 value.
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Storage and focus capability for mounted nodes.
///
/// Mutating operations fail with [`CoreError::InvalidNode`](crate::CoreError::InvalidNode)
/// when the target is not mounted. Queries on unknown nodes return empty
/// results instead of failing.
pub trait RenderHost {
    /// Mount a new node with the given tag under `parent` (or as a root).
    fn create_node(&mut self, tag: &str, parent: Option<NodeId>) -> Result<NodeId>;

    /// Mount a new node as child number `index` of `parent`.
    ///
    /// An `index` past the end appends.
    fn insert_node(&mut self, tag: &str, parent: NodeId, index: usize) -> Result<NodeId>;

    /// Unmount a node and its whole subtree.
    fn remove_node(&mut self, node: NodeId) -> Result<()>;

    /// Set (or overwrite) an attribute.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    /// Remove an attribute if present.
    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<()>;

    /// Replace the node's own text content.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Read an attribute.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Whether the node is currently mounted.
    fn contains(&self, node: NodeId) -> bool;

    /// The node's parent, if any.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// The node's children in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Move keyboard focus to `node`.
    ///
    /// Returns `false` when the node cannot take focus; focus is then unchanged.
    fn focus(&mut self, node: NodeId) -> bool;

    /// Clear keyboard focus.
    fn blur(&mut self);

    /// The node that currently has keyboard focus.
    fn focused(&self) -> Option<NodeId>;

    /// Set an attribute when `value` is `Some`, remove it otherwise.
    fn toggle_attribute(&mut self, node: NodeId, name: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => self.set_attribute(node, name, value),
            None => self.remove_attribute(node, name),
        }
    }

    /// Whether the node carries the attribute at all.
    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Collect the subtree rooted at `node` in document (pre-)order.
    ///
    /// `descend` is consulted for every node below `node`; returning `false`
    /// keeps that node in the result but skips its children.
    fn descendants_where<F>(&self, node: NodeId, mut descend: F) -> Vec<NodeId>
    where
        Self: Sized,
        F: FnMut(&Self, NodeId) -> bool,
    {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            if descend(self, current) {
                stack.extend(self.children(current).into_iter().rev());
            }
        }
        out
    }

    /// The nearest ancestor of `node` (including `node` itself) that satisfies `pred`.
    fn closest<F>(&self, node: NodeId, mut pred: F) -> Option<NodeId>
    where
        Self: Sized,
        F: FnMut(&Self, NodeId) -> bool,
    {
        let mut current = Some(node).filter(|&n| self.contains(n));
        while let Some(n) = current {
            if pred(self, n) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }
}
