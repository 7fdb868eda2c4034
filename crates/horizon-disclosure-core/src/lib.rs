//! Core systems for Horizon Disclosure.
//!
//! This crate provides the plumbing the headless widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Change-detecting value cells
//! - **Context**: Explicit, type-keyed environments for composed widget trees
//! - **Ids**: Scoped identifier generation for ARIA linkage
//! - **Render Host**: The node-tree capability widgets render into, plus an
//!   in-memory [`Document`] implementation
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_disclosure_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Render Host Example
//!
//! ```
//! use horizon_disclosure_core::{Document, RenderHost};
//!
//! let mut doc = Document::new();
//! let root = doc.create_node("div", None).unwrap();
//! let button = doc.create_node("button", Some(root)).unwrap();
//! doc.set_attribute(button, "aria-expanded", "false").unwrap();
//!
//! assert!(doc.focus(button));
//! assert_eq!(doc.focused(), Some(button));
//! ```

mod context;
mod document;
mod error;
mod host;
mod id;
pub mod logging;
pub mod property;
pub mod signal;

pub use context::{ContextValue, Environment};
pub use document::Document;
pub use error::{CoreError, Result};
pub use host::{NodeId, RenderHost};
pub use id::{DEFAULT_ID_PREFIX, IdProvider};
pub use logging::{DocumentTreeDebug, PerfSpan, TreeFormatOptions, TreeStyle};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
