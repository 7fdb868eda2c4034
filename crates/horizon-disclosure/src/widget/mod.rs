//! Widget plumbing shared by the disclosure widgets.
//!
//! - [`events`]: the events hosts deliver to widgets
//! - [`keyboard`]: key decoding and intent classification
//! - [`focus`]: structural roving-focus navigation
//! - [`accessibility`]: roles and ARIA attribute vocabulary

pub mod accessibility;
pub mod events;
pub mod focus;
pub mod keyboard;

pub use accessibility::{AccessibleRole, DisclosureState};
pub use events::{
    ClickEvent, EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent,
    KeyboardModifiers, MouseButton, WidgetEvent,
};
pub use focus::RovingFocus;
pub use keyboard::KeyIntent;
