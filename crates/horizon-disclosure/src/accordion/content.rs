//! Content panel of an accordion item.

use std::sync::Arc;

use horizon_disclosure_core::{Environment, NodeId, RenderHost};

use super::item::ItemContext;
use crate::error::Result;
use crate::widget::accessibility::{AccessibleRole, aria, markers};

/// The collapsible region of one item.
///
/// Rendered as a `region` labelled by the header trigger. While collapsed
/// the panel carries `hidden`, which also takes its subtree out of the focus
/// order.
#[derive(Debug)]
pub struct AccordionContent {
    item: Arc<ItemContext>,
    text: String,
    node: Option<NodeId>,
}

impl AccordionContent {
    /// Create the panel for the item reachable through `env`.
    pub fn from_env(env: &Environment, text: impl Into<String>) -> Result<Self> {
        let item = env.require::<ItemContext>()?;
        Ok(Self {
            item,
            text: text.into(),
            node: None,
        })
    }

    /// The item this panel belongs to.
    pub fn item(&self) -> &Arc<ItemContext> {
        &self.item
    }

    /// Panel text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the panel text (applied on the next render).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The mounted panel node. Hosts attach richer content below it.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Mount the panel as child `index` of `parent`.
    pub fn mount<H: RenderHost>(&mut self, host: &mut H, parent: NodeId, index: usize) -> Result<()> {
        let node = host.insert_node("div", parent, index)?;
        host.set_attribute(node, markers::CONTENT, "")?;
        host.set_attribute(node, aria::ID, self.item.content_id())?;
        host.set_attribute(node, aria::ROLE, AccessibleRole::Region.aria_role())?;
        host.set_attribute(node, aria::LABELLEDBY, self.item.header_id())?;

        self.node = Some(node);
        self.render(host)
    }

    pub(crate) fn detach(&mut self) {
        self.node = None;
    }

    /// Write the current state onto the mounted panel.
    pub fn render<H: RenderHost>(&self, host: &mut H) -> Result<()> {
        let Some(node) = self.node else {
            return Ok(());
        };
        let state = self.item.state();

        host.set_text(node, &self.text)?;
        host.set_attribute(node, markers::STATE, state.as_str())?;
        host.toggle_attribute(node, aria::HIDDEN, (!state.is_open()).then_some(""))?;
        Ok(())
    }
}

static_assertions::assert_impl_all!(AccordionContent: Send, Sync);
