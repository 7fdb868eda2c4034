//! Accordion (disclosure) widgets.
//!
//! An accordion is a vertical stack of items, each a header trigger plus a
//! collapsible panel. The parts are layered:
//!
//! - [`AccordionContext`]: the root; owns the selection and its policy
//! - [`ItemContext`]: one item's id pair and expanded flag, read live from
//!   the root
//! - [`AccordionHeader`] and [`AccordionContent`]: the rendered parts
//! - [`Accordion`]: the widget that owns items and drives a render host
//!
//! Selection behaviour is picked once from the [`Mode`]:
//!
//! | Mode       | Toggle an open item                    | Toggle a closed item  |
//! |------------|----------------------------------------|-----------------------|
//! | `single`   | closes it if zero-collapse is allowed  | opens it, closes the rest |
//! | `multiple` | closes it unless it is the last one open and zero-collapse is off | opens it |

mod config;
mod content;
mod context;
mod header;
mod item;
mod state;
mod widget;

pub use config::{AccordionConfig, DEFAULT_HEADING_LEVEL, Mode};
pub use content::AccordionContent;
pub use context::{AccordionContext, ToggleCallback, ToggleRequest};
pub use header::{AccordionHeader, HEADER_NAVIGATION, HeaderState};
pub use item::{AccordionItem, ItemContext};
pub use state::{
    ItemId, ItemValue, MultiplePolicy, SelectionPolicy, SelectionState, SinglePolicy, policy_for,
};
pub use widget::Accordion;
