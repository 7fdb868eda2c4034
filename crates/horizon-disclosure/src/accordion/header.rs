//! Header trigger of an accordion item.
//!
//! The header renders a heading element wrapping a `button`. The button
//! carries the ARIA linkage to its panel and the marker attribute that makes
//! it part of the accordion's roving-focus ring.
//!
//! # Keyboard
//!
//! | Key          | Effect                         |
//! |--------------|--------------------------------|
//! | Space, Enter | toggle the item, focus stays   |
//! | ArrowDown    | focus next header (wraps)      |
//! | ArrowUp      | focus previous header (wraps)  |
//! | Home         | focus first header             |
//! | End          | focus last header              |
//!
//! Activation changes selection only, navigation changes focus only. End is
//! the one handled key whose default action is left to the host.

use std::sync::Arc;

use horizon_disclosure_core::logging::targets;
use horizon_disclosure_core::{Environment, NodeId, RenderHost};

use super::item::ItemContext;
use crate::error::Result;
use crate::widget::accessibility::{aria, bool_value, markers};
use crate::widget::events::{KeyPressEvent, MouseButton, WidgetEvent};
use crate::widget::focus::RovingFocus;
use crate::widget::keyboard::KeyIntent;

/// Navigator over the header triggers of one accordion.
pub const HEADER_NAVIGATION: RovingFocus =
    RovingFocus::new(markers::ACCORDION_ROOT, markers::BUTTON);

/// Focus state of a header trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    /// The trigger does not have keyboard focus.
    #[default]
    Idle,
    /// The trigger has keyboard focus.
    Focused,
}

/// The heading and trigger button of one item.
#[derive(Debug)]
pub struct AccordionHeader {
    item: Arc<ItemContext>,
    label: String,
    state: HeaderState,
    heading: Option<NodeId>,
    button: Option<NodeId>,
}

impl AccordionHeader {
    /// Create the header for the item reachable through `env`.
    ///
    /// Fails with the item provider's message when `env` has no item.
    pub fn from_env(env: &Environment, label: impl Into<String>) -> Result<Self> {
        let item = env.require::<ItemContext>()?;
        Ok(Self {
            item,
            label: label.into(),
            state: HeaderState::Idle,
            heading: None,
            button: None,
        })
    }

    /// The item this header toggles.
    pub fn item(&self) -> &Arc<ItemContext> {
        &self.item
    }

    /// Button text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the button text (applied on the next render).
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Current focus state.
    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Whether the trigger has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.state == HeaderState::Focused
    }

    /// The mounted heading node.
    pub fn heading_node(&self) -> Option<NodeId> {
        self.heading
    }

    /// The mounted button node.
    pub fn button_node(&self) -> Option<NodeId> {
        self.button
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Mount the heading (tag `heading_tag`) as child `index` of `parent`.
    pub fn mount<H: RenderHost>(
        &mut self,
        host: &mut H,
        parent: NodeId,
        index: usize,
        heading_tag: &str,
    ) -> Result<()> {
        let heading = host.insert_node(heading_tag, parent, index)?;
        host.set_attribute(heading, markers::HEADER, "")?;

        let button = host.create_node("button", Some(heading))?;
        host.set_attribute(button, aria::TYPE, "button")?;
        host.set_attribute(button, markers::BUTTON, "")?;
        host.set_attribute(button, aria::ID, self.item.header_id())?;
        host.set_attribute(button, aria::CONTROLS, self.item.content_id())?;

        self.heading = Some(heading);
        self.button = Some(button);
        self.render(host)
    }

    /// Forget mounted nodes; the owner removes them from the host.
    pub(crate) fn detach(&mut self) {
        self.heading = None;
        self.button = None;
        self.state = HeaderState::Idle;
    }

    /// Write the current state onto the mounted button.
    pub fn render<H: RenderHost>(&self, host: &mut H) -> Result<()> {
        let Some(button) = self.button else {
            return Ok(());
        };
        let expanded = self.item.is_expanded();

        host.set_text(button, &self.label)?;
        host.set_attribute(button, aria::EXPANDED, bool_value(expanded))?;
        host.set_attribute(button, aria::DISABLED, bool_value(expanded))?;
        host.set_attribute(button, markers::STATE, self.item.state().as_str())?;
        host.toggle_attribute(button, markers::FOCUSED, self.is_focused().then_some(""))?;
        Ok(())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle an event targeted at the button.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_event<H: RenderHost>(&mut self, host: &mut H, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Click(e) => {
                if e.button != MouseButton::Left {
                    return false;
                }
                self.item.toggle();
                e.base.accept();
                true
            }
            WidgetEvent::KeyPress(e) => self.handle_key(host, e),
            WidgetEvent::FocusIn(_) => {
                self.state = HeaderState::Focused;
                false
            }
            WidgetEvent::FocusOut(_) => {
                self.state = HeaderState::Idle;
                false
            }
        }
    }

    fn handle_key<H: RenderHost>(&mut self, host: &mut H, event: &mut KeyPressEvent) -> bool {
        let Some(intent) = KeyIntent::from_key(event.key) else {
            return false;
        };
        let Some(button) = self.button else {
            return false;
        };

        if intent.prevents_default() {
            event.base.prevent_default();
        }
        event.base.accept();

        if intent.is_navigation() {
            if let Some(target) = HEADER_NAVIGATION.navigate(host, button, intent) {
                tracing::trace!(target: targets::FOCUS, ?intent, ?target, "header focus moved");
            }
        } else {
            self.item.toggle();
        }
        true
    }

    /// Align the focus state with the host's focused node.
    pub fn sync_focus(&mut self, focused: Option<NodeId>) {
        self.state = if focused.is_some() && focused == self.button {
            HeaderState::Focused
        } else {
            HeaderState::Idle
        };
    }
}

static_assertions::assert_impl_all!(AccordionHeader: Send, Sync);
