//! Prelude module for Horizon Disclosure.
//!
//! ```
//! use horizon_disclosure::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use horizon_disclosure_core::{
    ConnectionId, Document, Environment, IdProvider, NodeId, Property, RenderHost, Signal,
};

// ============================================================================
// Accordion
// ============================================================================

pub use crate::accordion::{
    Accordion, AccordionConfig, AccordionContent, AccordionContext, AccordionHeader,
    AccordionItem, ItemContext, ItemId, ItemValue, Mode, SelectionState, ToggleRequest,
};

// ============================================================================
// Widget Plumbing
// ============================================================================

pub use crate::widget::{
    ClickEvent, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyIntent, KeyPressEvent,
    KeyboardModifiers, MouseButton, RovingFocus, WidgetEvent,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::AccordionError;
