//! Attribute names and values written into host markup.

/// ARIA and standard HTML attribute names.
pub mod aria {
    /// Element id, target of `aria-controls`/`aria-labelledby`.
    pub const ID: &str = "id";
    /// Explicit role.
    pub const ROLE: &str = "role";
    /// Whether the controlled region is expanded.
    pub const EXPANDED: &str = "aria-expanded";
    /// Id of the region a trigger controls.
    pub const CONTROLS: &str = "aria-controls";
    /// Whether the trigger is currently inert.
    pub const DISABLED: &str = "aria-disabled";
    /// Id of the node labelling a region.
    pub const LABELLEDBY: &str = "aria-labelledby";
    /// Boolean attribute hiding a node from rendering and focus.
    pub const HIDDEN: &str = "hidden";
    /// Button `type` attribute.
    pub const TYPE: &str = "type";
}

/// Structural marker attributes used by styling hooks and focus navigation.
pub mod markers {
    /// Marks the root node of an accordion.
    pub const ACCORDION_ROOT: &str = "data-accordion-root";
    /// Marks an item container.
    pub const ITEM: &str = "data-accordion-item";
    /// Marks the heading wrapper of an item.
    pub const HEADER: &str = "data-accordion-header";
    /// Marks a header trigger; the roving focus sibling set.
    pub const BUTTON: &str = "data-accordion-button";
    /// Marks a content panel.
    pub const CONTENT: &str = "data-accordion-content";
    /// `open` or `closed`.
    pub const STATE: &str = "data-state";
    /// `single` or `multiple`, on the root.
    pub const MODE: &str = "data-mode";
    /// Present on a trigger while it has keyboard focus.
    pub const FOCUSED: &str = "data-focused";
}

/// Open/closed state written to `data-state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    /// The item is expanded.
    Open,
    /// The item is collapsed.
    Closed,
}

impl DisclosureState {
    /// State for an expanded flag.
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded { Self::Open } else { Self::Closed }
    }

    /// Attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Whether this is [`DisclosureState::Open`].
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// ARIA boolean value (`"true"`/`"false"`).
pub fn bool_value(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_state() {
        assert_eq!(DisclosureState::from_expanded(true).as_str(), "open");
        assert_eq!(DisclosureState::from_expanded(false).as_str(), "closed");
        assert!(DisclosureState::Open.is_open());
        assert_eq!(bool_value(true), "true");
        assert_eq!(bool_value(false), "false");
    }
}
