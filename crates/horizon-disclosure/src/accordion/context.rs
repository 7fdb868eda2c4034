//! The accordion root context.
//!
//! [`AccordionContext`] owns the selection and the policy. Every item, header
//! and panel of one accordion reaches it through the accordion's
//! [`Environment`](horizon_disclosure_core::Environment), and every selection
//! change goes through [`AccordionContext::toggle`].
//!
//! # Ownership
//!
//! - **Uncontrolled**: the context stores the selection, seeded from
//!   `preExpand`, and applies each toggle itself.
//! - **Controlled**: the application owns the value. A toggle computes the
//!   policy's proposal and hands it to the `on_toggle` callback as a
//!   [`ToggleRequest`]; the stored value only changes when the application
//!   calls [`AccordionContext::set_value`].

use std::fmt;
use std::sync::Arc;

use horizon_disclosure_core::logging::targets;
use horizon_disclosure_core::{ContextValue, Property, Signal};
use parking_lot::RwLock;

use super::config::{AccordionConfig, Mode};
use super::state::{ItemId, SelectionPolicy, SelectionState, policy_for};

/// A toggle forwarded to the owner of a controlled accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    /// The item whose header was activated.
    pub item_id: ItemId,
    /// The selection the policy proposes.
    ///
    /// Equal to the current value when the policy refuses the change (for
    /// example collapsing the only open item without zero-collapse).
    pub next: SelectionState,
}

/// Callback receiving toggle requests in controlled mode.
pub type ToggleCallback = Arc<dyn Fn(&ToggleRequest) + Send + Sync>;

enum SelectionStore {
    Uncontrolled(Property<SelectionState>),
    Controlled {
        value: RwLock<SelectionState>,
        on_toggle: ToggleCallback,
    },
}

/// Shared state of one accordion.
pub struct AccordionContext {
    config: AccordionConfig,
    policy: Box<dyn SelectionPolicy>,
    store: SelectionStore,

    /// Emitted for every toggle request, before it is applied or forwarded.
    pub toggled: Signal<ItemId>,

    /// Emitted with the new selection whenever the value changes.
    pub selection_changed: Signal<SelectionState>,
}

impl ContextValue for AccordionContext {
    const MISSING_MESSAGE: &'static str = "Must be used inside Accordion Provider.";
}

impl AccordionContext {
    /// Create an uncontrolled context seeded from `config.pre_expand`.
    pub fn uncontrolled(config: AccordionConfig) -> Self {
        let initial = SelectionState::from_value(config.mode, config.pre_expand.as_ref());
        Self::with_store(config, SelectionStore::Uncontrolled(Property::new(initial)))
    }

    /// Create a controlled context.
    ///
    /// `config.pre_expand` is ignored; `value` is the initial external value.
    pub fn controlled<F>(config: AccordionConfig, value: SelectionState, on_toggle: F) -> Self
    where
        F: Fn(&ToggleRequest) + Send + Sync + 'static,
    {
        let value = value.into_mode(config.mode);
        Self::with_store(
            config,
            SelectionStore::Controlled {
                value: RwLock::new(value),
                on_toggle: Arc::new(on_toggle),
            },
        )
    }

    fn with_store(config: AccordionConfig, store: SelectionStore) -> Self {
        let policy = policy_for(config.mode, config.allow_zero_collapse);
        Self {
            config,
            policy,
            store,
            toggled: Signal::new(),
            selection_changed: Signal::new(),
        }
    }

    /// The configuration this context was built from.
    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Single or multiple.
    pub fn mode(&self) -> Mode {
        self.policy.mode()
    }

    /// Whether the application owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.store, SelectionStore::Controlled { .. })
    }

    /// The current selection.
    pub fn value(&self) -> SelectionState {
        match &self.store {
            SelectionStore::Uncontrolled(value) => value.get(),
            SelectionStore::Controlled { value, .. } => value.read().clone(),
        }
    }

    /// Whether `id` is currently open.
    pub fn is_expanded(&self, id: &str) -> bool {
        match &self.store {
            SelectionStore::Uncontrolled(value) => value.with(|v| v.is_open(id)),
            SelectionStore::Controlled { value, .. } => value.read().is_open(id),
        }
    }

    /// Request a toggle of `id`.
    ///
    /// Returns `true` if the stored selection changed. Controlled contexts
    /// never change here and always return `false`.
    pub fn toggle(&self, id: &ItemId) -> bool {
        self.toggled.emit(id.clone());

        match &self.store {
            SelectionStore::Uncontrolled(value) => {
                match value.update(|current| self.policy.toggle(current, id)) {
                    Some(next) => {
                        tracing::debug!(
                            target: targets::ACCORDION,
                            item = %id,
                            open = next.len(),
                            "accordion item toggled"
                        );
                        self.selection_changed.emit(next);
                        true
                    }
                    None => {
                        tracing::debug!(target: targets::ACCORDION, item = %id, "toggle left selection unchanged");
                        false
                    }
                }
            }
            SelectionStore::Controlled { value, on_toggle } => {
                let next = self.policy.toggle(&value.read(), id);
                let request = ToggleRequest {
                    item_id: id.clone(),
                    next,
                };
                tracing::debug!(target: targets::ACCORDION, item = %id, "forwarding toggle to owner");
                // The lock is released before the owner runs so it may call
                // `set_value` from inside the callback.
                on_toggle(&request);
                false
            }
        }
    }

    /// Replace the selection.
    ///
    /// This is how the owner of a controlled accordion applies a value; on an
    /// uncontrolled accordion it sets the stored value directly. The value is
    /// converted to this accordion's mode. Returns `true` if it changed.
    pub fn set_value(&self, value: SelectionState) -> bool {
        let value = value.into_mode(self.mode());
        let changed = match &self.store {
            SelectionStore::Uncontrolled(current) => current.set(value.clone()),
            SelectionStore::Controlled { value: current, .. } => {
                let mut current = current.write();
                if *current != value {
                    *current = value.clone();
                    true
                } else {
                    false
                }
            }
        };
        if changed {
            self.selection_changed.emit(value);
        }
        changed
    }

    /// Close `id` in an uncontrolled selection, for example when the item is
    /// removed. Controlled values are left to their owner.
    pub fn forget(&self, id: &str) -> bool {
        let SelectionStore::Uncontrolled(value) = &self.store else {
            return false;
        };
        match value.update(|current| current.without(id)) {
            Some(next) => {
                self.selection_changed.emit(next);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for AccordionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionContext")
            .field("mode", &self.mode())
            .field("allow_zero_collapse", &self.config.allow_zero_collapse)
            .field("controlled", &self.is_controlled())
            .field("value", &self.value())
            .finish()
    }
}

static_assertions::assert_impl_all!(AccordionContext: Send, Sync);
