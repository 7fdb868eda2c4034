//! Accessibility roles for widget nodes.

/// The accessibility role of a rendered node.
///
/// Only roles the disclosure widgets write explicitly are listed; buttons and
/// headings get theirs from the element tag. With the `accessibility` feature
/// enabled it maps onto AccessKit's `Role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A landmark region labelled by its trigger (an accordion panel).
    Region,
}

impl AccessibleRole {
    /// The ARIA `role` attribute value.
    pub fn aria_role(self) -> &'static str {
        match self {
            AccessibleRole::Region => "region",
        }
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        match self {
            AccessibleRole::Region => accesskit::Role::Region,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleRole> for accesskit::Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}
