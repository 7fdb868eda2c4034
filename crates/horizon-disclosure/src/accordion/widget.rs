//! The accordion widget.
//!
//! [`Accordion`] ties the parts together: it owns the root
//! [`AccordionContext`], the ordered items, and the mounted root node. Hosts
//! mount it once, forward events with [`Accordion::dispatch`], and call
//! [`Accordion::render`] after changing state from outside (for example after
//! [`Accordion::set_value`] on a controlled accordion).
//!
//! # Markup
//!
//! ```text
//! div[data-accordion-root][data-mode]
//! └── div[data-accordion-item][data-state]           (per item)
//!     ├── h3[data-accordion-header]
//!     │   └── button#header-*[aria-controls][aria-expanded][aria-disabled]
//!     │                     [data-accordion-button][data-state]
//!     └── div#content-*[role=region][aria-labelledby][data-state][hidden?]
//! ```

use std::sync::Arc;

use horizon_disclosure_core::logging::{span_names, targets};
use horizon_disclosure_core::{Environment, IdProvider, NodeId, PerfSpan, RenderHost, Signal};

use super::config::{AccordionConfig, Mode};
use super::context::{AccordionContext, ToggleRequest};
use super::item::AccordionItem;
use super::state::{ItemId, SelectionState};
use crate::error::{AccordionError, Result};
use crate::widget::accessibility::markers;
use crate::widget::events::WidgetEvent;

/// A headless accordion.
///
/// # Signals
///
/// - `toggled(ItemId)`: every toggle request, applied or not
/// - `selection_changed(SelectionState)`: the open items changed
///
/// # Example
///
/// ```
/// use horizon_disclosure::prelude::*;
///
/// let mut doc = Document::new();
/// let mut accordion = Accordion::new(AccordionConfig::single(), IdProvider::shared());
/// accordion.add_item("one", "Header 1", "Content 1").unwrap();
/// accordion.add_item("two", "Header 2", "Content 2").unwrap();
/// accordion.mount(&mut doc, None).unwrap();
///
/// let header = accordion.header_node("one").unwrap();
/// accordion.dispatch(&mut doc, header, &mut ClickEvent::new().into()).unwrap();
/// assert!(accordion.is_expanded("one"));
/// ```
#[derive(Debug)]
pub struct Accordion {
    context: Arc<AccordionContext>,
    env: Arc<Environment>,
    ids: Arc<IdProvider>,
    items: Vec<AccordionItem>,
    root: Option<NodeId>,
    /// Nodes of removed items, unmounted on the next render.
    detached: Vec<NodeId>,
}

impl Accordion {
    /// Create an uncontrolled accordion.
    ///
    /// Ids for header/content pairs are drawn from `ids`; share one provider
    /// between accordions that end up in the same document.
    pub fn new(config: AccordionConfig, ids: Arc<IdProvider>) -> Self {
        Self::with_context(AccordionContext::uncontrolled(config), ids)
    }

    /// Create a controlled accordion.
    ///
    /// `on_toggle` receives every toggle request; the displayed value only
    /// changes through [`set_value`](Self::set_value).
    pub fn controlled<F>(
        config: AccordionConfig,
        value: SelectionState,
        on_toggle: F,
        ids: Arc<IdProvider>,
    ) -> Self
    where
        F: Fn(&ToggleRequest) + Send + Sync + 'static,
    {
        Self::with_context(AccordionContext::controlled(config, value, on_toggle), ids)
    }

    /// Create an uncontrolled accordion from a mode string.
    ///
    /// Fails with the invalid-mode error for anything but `single` or
    /// `multiple`.
    pub fn from_mode(mode: &str, ids: Arc<IdProvider>) -> Result<Self> {
        Ok(Self::new(AccordionConfig::parse(mode)?, ids))
    }

    fn with_context(context: AccordionContext, ids: Arc<IdProvider>) -> Self {
        let context = Arc::new(context);
        let env = Environment::new()
            .provide_shared(Arc::clone(&context))
            .into_shared();
        Self {
            context,
            env,
            ids,
            items: Vec::new(),
            root: None,
            detached: Vec::new(),
        }
    }

    /// Add an item (builder style).
    pub fn with_item(
        mut self,
        id: impl Into<ItemId>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self> {
        self.add_item(id, label, text)?;
        Ok(self)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The root context shared with every item.
    pub fn context(&self) -> &Arc<AccordionContext> {
        &self.context
    }

    /// The environment items are derived from.
    pub fn environment(&self) -> &Arc<Environment> {
        &self.env
    }

    /// The id provider.
    pub fn id_provider(&self) -> &Arc<IdProvider> {
        &self.ids
    }

    /// The configuration.
    pub fn config(&self) -> &AccordionConfig {
        self.context.config()
    }

    /// Single or multiple.
    pub fn mode(&self) -> Mode {
        self.context.mode()
    }

    /// Whether the application owns the value.
    pub fn is_controlled(&self) -> bool {
        self.context.is_controlled()
    }

    /// The current selection.
    pub fn value(&self) -> SelectionState {
        self.context.value()
    }

    /// Replace the selection. Call [`render`](Self::render) afterwards to
    /// update mounted markup.
    pub fn set_value(&self, value: SelectionState) -> bool {
        self.context.set_value(value)
    }

    /// Whether item `id` is open.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.context.is_expanded(id)
    }

    /// Toggle item `id` as if its header had been activated.
    ///
    /// Returns `true` if the stored selection changed.
    pub fn toggle(&self, id: &str) -> Result<bool> {
        let item = self
            .item(id)
            .ok_or_else(|| AccordionError::UnknownItem(id.into()))?;
        Ok(item.context().toggle())
    }

    /// Signal emitted for every toggle request.
    pub fn toggled(&self) -> &Signal<ItemId> {
        &self.context.toggled
    }

    /// Signal emitted when the selection changes.
    pub fn selection_changed(&self) -> &Signal<SelectionState> {
        &self.context.selection_changed
    }

    // =========================================================================
    // Item Management
    // =========================================================================

    /// Append an item. Returns its index.
    pub fn add_item(
        &mut self,
        id: impl Into<ItemId>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<usize> {
        self.insert_item(self.items.len(), id, label, text)
    }

    /// Insert an item at `index` (clamped to the item count). Returns the
    /// actual index.
    ///
    /// Mounted accordions mount the new item on the next render.
    pub fn insert_item(
        &mut self,
        index: usize,
        id: impl Into<ItemId>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<usize> {
        let id = id.into();
        if id.is_empty() {
            return Err(AccordionError::EmptyItemId);
        }
        if self.index_of(id.as_str()).is_some() {
            return Err(AccordionError::DuplicateItem(id));
        }

        let item = AccordionItem::new(&self.env, id, label, text, &self.ids)?;
        let index = index.min(self.items.len());
        tracing::debug!(target: targets::ACCORDION, item = %item.item_id(), index, "item added");
        self.items.insert(index, item);
        Ok(index)
    }

    /// Remove item `id`. Returns the index it had.
    ///
    /// An uncontrolled accordion also closes the item so the selection only
    /// refers to present items. Mounted nodes go away on the next render.
    pub fn remove_item(&mut self, id: &str) -> Result<usize> {
        let index = self
            .index_of(id)
            .ok_or_else(|| AccordionError::UnknownItem(id.into()))?;
        let item = self.items.remove(index);
        if let Some(node) = item.node() {
            self.detached.push(node);
        }
        self.context.forget(id);
        tracing::debug!(target: targets::ACCORDION, item = %id, index, "item removed");
        Ok(index)
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the accordion has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of item `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.item_id() == id)
    }

    /// Item ids in display order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.item_id().clone()).collect()
    }

    /// Item `id`.
    pub fn item(&self, id: &str) -> Option<&AccordionItem> {
        self.items.iter().find(|item| item.item_id() == id)
    }

    /// Item `id`, mutably.
    pub fn item_mut(&mut self, id: &str) -> Option<&mut AccordionItem> {
        self.items.iter_mut().find(|item| item.item_id() == id)
    }

    /// All items in display order.
    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// The mounted root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Whether the accordion is mounted.
    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// The header button of item `id`, once mounted.
    pub fn header_node(&self, id: &str) -> Option<NodeId> {
        self.item(id).and_then(|item| item.header().button_node())
    }

    /// The content panel of item `id`, once mounted.
    pub fn content_node(&self, id: &str) -> Option<NodeId> {
        self.item(id).and_then(|item| item.content().node())
    }

    /// Mount under `parent` (or as a host root) and render.
    ///
    /// Mounting an already-mounted accordion only re-renders it.
    pub fn mount<H: RenderHost>(&mut self, host: &mut H, parent: Option<NodeId>) -> Result<NodeId> {
        if let Some(root) = self.root {
            self.render(host)?;
            return Ok(root);
        }

        let _span = PerfSpan::new(span_names::MOUNT);
        let root = host.create_node("div", parent)?;
        host.set_attribute(root, markers::ACCORDION_ROOT, "")?;
        self.root = Some(root);
        tracing::debug!(target: targets::ACCORDION, items = self.items.len(), "accordion mounted");

        self.render(host)?;
        Ok(root)
    }

    /// Remove all nodes from the host.
    pub fn unmount<H: RenderHost>(&mut self, host: &mut H) -> Result<()> {
        let root = self.root.take().ok_or(AccordionError::NotMounted)?;
        if host.contains(root) {
            host.remove_node(root)?;
        }
        for item in &mut self.items {
            item.unmount(host)?;
        }
        self.detached.clear();
        Ok(())
    }

    /// Bring the mounted markup in line with the current state and items.
    pub fn render<H: RenderHost>(&mut self, host: &mut H) -> Result<()> {
        let root = self.root.ok_or(AccordionError::NotMounted)?;
        let _span = PerfSpan::new(span_names::RENDER);

        for node in self.detached.drain(..) {
            if host.contains(node) {
                host.remove_node(node)?;
            }
        }

        host.set_attribute(root, markers::MODE, self.context.mode().as_str())?;

        let heading_tag = self.context.config().heading_tag();
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.is_mounted() {
                item.render(host)?;
            } else {
                item.mount(host, root, index, &heading_tag)?;
            }
        }

        tracing::trace!(target: targets::RENDER, items = self.items.len(), "accordion rendered");
        Ok(())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Deliver an event targeted at `target`.
    ///
    /// Events for nodes other than this accordion's header buttons are left
    /// alone. Returns `true` if the event was consumed.
    pub fn dispatch<H: RenderHost>(
        &mut self,
        host: &mut H,
        target: NodeId,
        event: &mut WidgetEvent,
    ) -> Result<bool> {
        if self.root.is_none() {
            return Err(AccordionError::NotMounted);
        }
        let _span = PerfSpan::new(span_names::DISPATCH);
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.header().button_node() == Some(target))
        else {
            return Ok(false);
        };

        let handled = self.items[index].header_mut().handle_event(host, event);

        // Keyboard navigation moves host focus without focus events.
        if matches!(event, WidgetEvent::KeyPress(_)) {
            self.sync_focus(host.focused());
        }

        self.render(host)?;
        Ok(handled)
    }

    /// Align every header's focus state with the host's focused node.
    pub fn sync_focus(&mut self, focused: Option<NodeId>) {
        for item in &mut self.items {
            item.header_mut().sync_focus(focused);
        }
    }
}

static_assertions::assert_impl_all!(Accordion: Send, Sync);
