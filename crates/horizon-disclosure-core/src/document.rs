//! In-memory node tree implementing [`RenderHost`].
//!
//! [`Document`] is the headless host: it stores tags, attributes, text and
//! focus the way a browser DOM would, without any layout or painting. It
//! backs the test suites and any embedding that only needs the semantic
//! structure (for example, feeding an accessibility tree).
//!
//! Focus follows DOM rules closely enough for keyboard navigation: a node
//! cannot take focus while it or an ancestor carries `hidden`, or while it
//! carries `disabled`.

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::{CoreError, Result};
use crate::host::{NodeId, RenderHost};
use crate::logging::targets;

/// Data stored for each mounted node.
#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A headless document tree.
#[derive(Debug, Default)]
pub struct Document {
    nodes: SlotMap<NodeId, NodeData>,
    roots: Vec<NodeId>,
    focused: Option<NodeId>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are mounted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in mount order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The tag a node was created with.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.tag.as_str())
    }

    /// The node's own text content.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.text.as_str())
    }

    /// All attributes of a node, sorted by name.
    pub fn attributes(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .get(node)
            .into_iter()
            .flat_map(|n| n.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Every mounted node in document order.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            out.push(root);
            out.extend(self.descendants_where(root, |_, _| true));
        }
        out
    }

    /// The first node (document order) whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_attribute("id", id)
    }

    /// The first node (document order) whose attribute `name` equals `value`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<NodeId> {
        self.all_nodes()
            .into_iter()
            .find(|&n| self.attribute(n, name) == Some(value))
    }

    /// All nodes (document order) that carry attribute `name`.
    pub fn query_attribute(&self, name: &str) -> Vec<NodeId> {
        self.all_nodes()
            .into_iter()
            .filter(|&n| self.has_attribute(n, name))
            .collect()
    }

    /// The first node (document order) whose own text equals `text`.
    pub fn find_by_text(&self, text: &str) -> Option<NodeId> {
        self.all_nodes().into_iter().find(|&n| self.text(n) == Some(text))
    }

    /// Whether the node or any ancestor carries `hidden`.
    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.closest(node, |doc, n| doc.has_attribute(n, "hidden"))
            .is_some()
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(node).ok_or(CoreError::InvalidNode)
    }

    fn collect_subtree(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = vec![node];
        out.extend(self.descendants_where(node, |_, _| true));
        out
    }
}

impl RenderHost for Document {
    fn create_node(&mut self, tag: &str, parent: Option<NodeId>) -> Result<NodeId> {
        if let Some(p) = parent
            && !self.nodes.contains_key(p)
        {
            return Err(CoreError::InvalidNode);
        }

        let id = self.nodes.insert(NodeData {
            tag: tag.to_string(),
            parent,
            ..Default::default()
        });

        match parent {
            Some(p) => self.node_mut(p)?.children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    fn insert_node(&mut self, tag: &str, parent: NodeId, index: usize) -> Result<NodeId> {
        let id = self.create_node(tag, Some(parent))?;
        let children = &mut self.node_mut(parent)?.children;
        // The new node was appended; rotate it into place.
        if index < children.len() {
            children[index..].rotate_right(1);
        }
        Ok(id)
    }

    fn remove_node(&mut self, node: NodeId) -> Result<()> {
        let parent = self
            .nodes
            .get(node)
            .ok_or(CoreError::InvalidNode)?
            .parent;

        match parent {
            Some(p) => {
                if let Some(data) = self.nodes.get_mut(p) {
                    data.children.retain(|&c| c != node);
                }
            }
            None => self.roots.retain(|&r| r != node),
        }

        let subtree = self.collect_subtree(node);
        tracing::trace!(target: targets::DOCUMENT, removed = subtree.len(), "node removed");
        for id in subtree {
            self.nodes.remove(id);
            if self.focused == Some(id) {
                self.focused = None;
            }
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let data = self.node_mut(node)?;
        match data.attributes.get_mut(name) {
            Some(existing) if existing == value => {}
            Some(existing) => *existing = value.to_string(),
            None => {
                data.attributes.insert(name.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<()> {
        self.node_mut(node)?.attributes.remove(name);
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        let data = self.node_mut(node)?;
        if data.text != text {
            data.text = text.to_string();
        }
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn focus(&mut self, node: NodeId) -> bool {
        if !self.contains(node) || self.is_hidden(node) || self.has_attribute(node, "disabled") {
            return false;
        }
        self.focused = Some(node);
        true
    }

    fn blur(&mut self) {
        self.focused = None;
    }

    fn focused(&self) -> Option<NodeId> {
        self.focused
    }
}

static_assertions::assert_impl_all!(Document: Send, Sync);
