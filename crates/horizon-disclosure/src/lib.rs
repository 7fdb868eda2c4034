//! Horizon Disclosure - headless accordion widgets.
//!
//! The crate renders accessible accordions into any [`RenderHost`] and keeps
//! their selection, ARIA attributes and roving keyboard focus consistent. The
//! core plumbing (signals, properties, ids, context, render hosts) is
//! re-exported from `horizon-disclosure-core`.
//!
//! # Example
//!
//! ```
//! use horizon_disclosure::prelude::*;
//!
//! let mut doc = Document::new();
//! let mut accordion = Accordion::new(
//!     AccordionConfig::multiple().with_pre_expand("faq-1"),
//!     IdProvider::shared(),
//! );
//! accordion.add_item("faq-1", "What is it?", "A disclosure widget.").unwrap();
//! accordion.add_item("faq-2", "Is it accessible?", "Yes.").unwrap();
//! accordion.mount(&mut doc, None).unwrap();
//!
//! let button = accordion.header_node("faq-2").unwrap();
//! let mut event = KeyPressEvent::key(Key::Enter).into();
//! accordion.dispatch(&mut doc, button, &mut event).unwrap();
//!
//! assert!(accordion.is_expanded("faq-1"));
//! assert!(accordion.is_expanded("faq-2"));
//! assert_eq!(doc.attribute(button, "aria-expanded"), Some("true"));
//! ```
//!
//! [`RenderHost`]: horizon_disclosure_core::RenderHost

pub mod accordion;
pub mod error;
pub mod prelude;
pub mod widget;

pub use horizon_disclosure_core::*;

pub use accordion::{
    Accordion, AccordionConfig, AccordionContext, ItemId, ItemValue, Mode, SelectionState,
    ToggleRequest,
};
pub use error::{AccordionError, INVALID_MODE_MESSAGE, Result};
