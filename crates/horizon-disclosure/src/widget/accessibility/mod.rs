//! Accessibility support for the disclosure widgets.
//!
//! Widgets describe their semantics through ARIA attributes on host nodes.
//! This module holds the role vocabulary and the attribute names they write.
//! With the `accessibility` feature, roles also map onto
//! [AccessKit](https://accesskit.dev/) roles for hosts that build a native
//! accessibility tree.

pub mod attributes;
mod role;

pub use attributes::{DisclosureState, aria, bool_value, markers};
pub use role::AccessibleRole;
