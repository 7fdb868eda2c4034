//! Per-item context.
//!
//! An [`ItemContext`] binds one item id to its accordion. Its header/content
//! id pair is generated once, when the item is created, and stays fixed for
//! the item's lifetime. Everything else (expanded flag, collapse permission)
//! is read from the accordion on every call, so it never goes stale.

use std::sync::Arc;

use horizon_disclosure_core::{ContextValue, Environment, IdProvider, NodeId, RenderHost};

use super::content::AccordionContent;
use super::context::AccordionContext;
use super::header::AccordionHeader;
use super::state::ItemId;
use crate::error::Result;
use crate::widget::DisclosureState;
use crate::widget::accessibility::markers;

/// Context shared by the header and content of one item.
#[derive(Debug)]
pub struct ItemContext {
    item_id: ItemId,
    header_id: String,
    content_id: String,
    accordion: Arc<AccordionContext>,
}

impl ContextValue for ItemContext {
    const MISSING_MESSAGE: &'static str = "Must be used inside AccordionItemContext Provider.";
}

impl ItemContext {
    /// Derive the context for `item_id` from the accordion reachable through `env`.
    ///
    /// Fails with the accordion's missing-provider message when `env` has no
    /// accordion.
    pub fn derive(env: &Environment, item_id: ItemId, ids: &IdProvider) -> Result<Self> {
        let accordion = env.require::<AccordionContext>()?;
        let id = ids.generate_id();
        Ok(Self {
            item_id,
            header_id: format!("header-{id}"),
            content_id: format!("content-{id}"),
            accordion,
        })
    }

    /// The item's id.
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Id of the header trigger.
    pub fn header_id(&self) -> &str {
        &self.header_id
    }

    /// Id of the content panel.
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// The accordion this item belongs to.
    pub fn accordion(&self) -> &Arc<AccordionContext> {
        &self.accordion
    }

    /// Whether the item is currently open.
    pub fn is_expanded(&self) -> bool {
        self.accordion.is_expanded(self.item_id.as_str())
    }

    /// `data-state` value for the current expansion.
    pub fn state(&self) -> DisclosureState {
        DisclosureState::from_expanded(self.is_expanded())
    }

    /// Ask the accordion to toggle this item.
    ///
    /// Returns `true` if the accordion's stored selection changed.
    pub fn toggle(&self) -> bool {
        self.accordion.toggle(&self.item_id)
    }
}

/// One item of an accordion: its context, header and panel.
#[derive(Debug)]
pub struct AccordionItem {
    context: Arc<ItemContext>,
    env: Arc<Environment>,
    header: AccordionHeader,
    content: AccordionContent,
    node: Option<NodeId>,
}

impl AccordionItem {
    /// Create an item inside the accordion reachable through `accordion_env`.
    pub fn new(
        accordion_env: &Arc<Environment>,
        item_id: ItemId,
        label: impl Into<String>,
        text: impl Into<String>,
        ids: &IdProvider,
    ) -> Result<Self> {
        let context = Arc::new(ItemContext::derive(accordion_env, item_id, ids)?);
        let env = accordion_env
            .child()
            .provide_shared(Arc::clone(&context))
            .into_shared();
        let header = AccordionHeader::from_env(&env, label)?;
        let content = AccordionContent::from_env(&env, text)?;

        Ok(Self {
            context,
            env,
            header,
            content,
            node: None,
        })
    }

    /// The item's context.
    pub fn context(&self) -> &Arc<ItemContext> {
        &self.context
    }

    /// The environment the item's parts are resolved from.
    pub fn environment(&self) -> &Arc<Environment> {
        &self.env
    }

    /// The item's id.
    pub fn item_id(&self) -> &ItemId {
        self.context.item_id()
    }

    /// The header part.
    pub fn header(&self) -> &AccordionHeader {
        &self.header
    }

    /// The header part, mutably.
    pub fn header_mut(&mut self) -> &mut AccordionHeader {
        &mut self.header
    }

    /// The content part.
    pub fn content(&self) -> &AccordionContent {
        &self.content
    }

    /// The content part, mutably.
    pub fn content_mut(&mut self) -> &mut AccordionContent {
        &mut self.content
    }

    /// The mounted item container.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Whether the item is mounted.
    pub fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    /// Mount the item container as child `index` of `parent`.
    pub fn mount<H: RenderHost>(
        &mut self,
        host: &mut H,
        parent: NodeId,
        index: usize,
        heading_tag: &str,
    ) -> Result<()> {
        let node = host.insert_node("div", parent, index)?;
        host.set_attribute(node, markers::ITEM, "")?;
        self.node = Some(node);

        self.header.mount(host, node, 0, heading_tag)?;
        self.content.mount(host, node, 1)?;
        self.render(host)
    }

    /// Remove the item's nodes from the host.
    pub fn unmount<H: RenderHost>(&mut self, host: &mut H) -> Result<()> {
        let node = self.node.take();
        self.header.detach();
        self.content.detach();
        match node {
            Some(node) if host.contains(node) => Ok(host.remove_node(node)?),
            _ => Ok(()),
        }
    }

    /// Write the current state onto the mounted nodes.
    pub fn render<H: RenderHost>(&self, host: &mut H) -> Result<()> {
        let Some(node) = self.node else {
            return Ok(());
        };
        host.set_attribute(node, markers::STATE, self.context.state().as_str())?;
        self.header.render(host)?;
        self.content.render(host)
    }
}

static_assertions::assert_impl_all!(ItemContext: Send, Sync);
static_assertions::assert_impl_all!(AccordionItem: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::AccordionConfig;
    use crate::error::AccordionError;

    fn setup(config: AccordionConfig) -> (Arc<Environment>, IdProvider) {
        let env = Environment::new()
            .provide(AccordionContext::uncontrolled(config))
            .into_shared();
        (env, IdProvider::with_prefix("t"))
    }

    #[test]
    fn test_derive_ids() {
        let (env, ids) = setup(AccordionConfig::single());
        let one = ItemContext::derive(&env, "one".into(), &ids).unwrap();
        let two = ItemContext::derive(&env, "two".into(), &ids).unwrap();

        assert_eq!(one.header_id(), "header-t-1");
        assert_eq!(one.content_id(), "content-t-1");
        assert_eq!(two.header_id(), "header-t-2");
        assert_eq!(one.item_id(), &ItemId::new("one"));
    }

    #[test]
    fn test_expansion_is_read_live() {
        let (env, ids) = setup(AccordionConfig::single());
        let one = ItemContext::derive(&env, "one".into(), &ids).unwrap();
        let two = ItemContext::derive(&env, "two".into(), &ids).unwrap();

        assert!(!one.is_expanded());
        assert!(one.toggle());
        assert!(one.is_expanded());
        assert_eq!(one.state(), DisclosureState::Open);

        assert!(two.toggle());
        assert!(!one.is_expanded());
        assert!(two.is_expanded());
    }

    #[test]
    fn test_item_mount_and_unmount() {
        let (env, ids) = setup(AccordionConfig::single().with_pre_expand("one"));
        let mut item = AccordionItem::new(&env, "one".into(), "Header 1", "Content 1", &ids).unwrap();

        let mut doc = horizon_disclosure_core::Document::new();
        let root = doc.create_node("div", None).unwrap();
        item.mount(&mut doc, root, 0, "h3").unwrap();

        let node = item.node().unwrap();
        assert_eq!(doc.attribute(node, markers::STATE), Some("open"));
        assert_eq!(doc.children(node).len(), 2);
        assert!(item.environment().contains::<ItemContext>());

        item.unmount(&mut doc).unwrap();
        assert!(!item.is_mounted());
        assert!(item.header().button_node().is_none());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_derive_without_accordion_fails() {
        let err = ItemContext::derive(&Environment::new(), "one".into(), &IdProvider::new())
            .unwrap_err();
        assert_eq!(
            err,
            AccordionError::MissingProvider {
                message: "Must be used inside Accordion Provider."
            }
        );
    }
}
