//! Selection state and the per-mode toggle policies.
//!
//! The selection is a tagged [`SelectionState`]: one optional open item in
//! single mode, a set of open items in multiple mode. A [`SelectionPolicy`]
//! computes the next state for a toggle request. The policy is chosen once,
//! when the accordion is constructed, from its [`Mode`].
//!
//! Policies are pure: they never store anything and never look at which items
//! are mounted. Unknown ids are valid values.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::Mode;

/// Caller-supplied identifier of an accordion item.
///
/// Compared by exact string equality. The empty id stands for "no selection".
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty ("no selection") id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One id or a list of ids, as written in configuration (`preExpand`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    /// A single id.
    One(ItemId),
    /// Several ids.
    Many(Vec<ItemId>),
}

impl From<&str> for ItemValue {
    fn from(id: &str) -> Self {
        Self::One(id.into())
    }
}

impl From<ItemId> for ItemValue {
    fn from(id: ItemId) -> Self {
        Self::One(id)
    }
}

impl<T: Into<ItemId>> From<Vec<T>> for ItemValue {
    fn from(ids: Vec<T>) -> Self {
        Self::Many(ids.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ItemId> + Clone, const N: usize> From<[T; N]> for ItemValue {
    fn from(ids: [T; N]) -> Self {
        Self::Many(ids.into_iter().map(Into::into).collect())
    }
}

/// Which items are open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Single mode: at most one open item.
    Single(Option<ItemId>),
    /// Multiple mode: any number of open items.
    Multiple(HashSet<ItemId>),
}

impl SelectionState {
    /// Single-mode state; the empty id normalises to "nothing open".
    pub fn single(id: Option<impl Into<ItemId>>) -> Self {
        Self::Single(id.map(Into::into).filter(|id| !id.is_empty()))
    }

    /// Multiple-mode state from any collection of ids. Empty ids are dropped.
    pub fn multiple<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        Self::Multiple(
            ids.into_iter()
                .map(Into::into)
                .filter(|id| !id.is_empty())
                .collect(),
        )
    }

    /// Nothing open, in the given mode.
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::Single(None),
            Mode::Multiple => Self::Multiple(HashSet::new()),
        }
    }

    /// Build a state for `mode` from a configured value.
    ///
    /// In single mode a list contributes its first non-empty id. In multiple
    /// mode a lone id becomes a one-element set.
    pub fn from_value(mode: Mode, value: Option<&ItemValue>) -> Self {
        match (mode, value) {
            (_, None) => Self::empty(mode),
            (Mode::Single, Some(ItemValue::One(id))) => Self::single(Some(id)),
            (Mode::Single, Some(ItemValue::Many(ids))) => {
                Self::single(ids.iter().find(|id| !id.is_empty()))
            }
            (Mode::Multiple, Some(ItemValue::One(id))) => Self::multiple([id]),
            (Mode::Multiple, Some(ItemValue::Many(ids))) => Self::multiple(ids),
        }
    }

    /// The mode this state belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Multiple(_) => Mode::Multiple,
        }
    }

    /// Convert to `mode`, keeping as much of the selection as fits.
    ///
    /// Multiple to single keeps the smallest id so the result is deterministic.
    pub fn into_mode(self, mode: Mode) -> Self {
        match (self, mode) {
            (state @ Self::Single(_), Mode::Single) => state,
            (state @ Self::Multiple(_), Mode::Multiple) => state,
            (Self::Single(open), Mode::Multiple) => Self::Multiple(open.into_iter().collect()),
            (Self::Multiple(open), Mode::Single) => Self::Single(open.into_iter().min()),
        }
    }

    /// Whether `id` is open.
    pub fn is_open(&self, id: &str) -> bool {
        match self {
            Self::Single(open) => open.as_ref().is_some_and(|open| open == id),
            Self::Multiple(open) => open.iter().any(|open| open == id),
        }
    }

    /// Number of open items.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(open) => usize::from(open.is_some()),
            Self::Multiple(open) => open.len(),
        }
    }

    /// Whether nothing is open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Open ids in sorted order.
    pub fn open_items(&self) -> Vec<ItemId> {
        match self {
            Self::Single(open) => open.iter().cloned().collect(),
            Self::Multiple(open) => open.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect(),
        }
    }

    /// This state with `id` closed.
    pub fn without(&self, id: &str) -> Self {
        match self {
            Self::Single(Some(open)) if open == id => Self::Single(None),
            Self::Multiple(open) => {
                Self::Multiple(open.iter().filter(|open| *open != id).cloned().collect())
            }
            other => other.clone(),
        }
    }
}

/// Computes the next selection for a toggle request.
pub trait SelectionPolicy: fmt::Debug + Send + Sync {
    /// The mode this policy implements.
    fn mode(&self) -> Mode;

    /// Whether a toggle may leave zero items open.
    fn allow_zero_collapse(&self) -> bool;

    /// The state after toggling `requested` in `current`.
    fn toggle(&self, current: &SelectionState, requested: &ItemId) -> SelectionState;

    /// Whether toggling the open item `id` would close it.
    ///
    /// Items that are not open trivially "can collapse".
    fn can_collapse(&self, current: &SelectionState, id: &str) -> bool;
}

/// At most one open item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinglePolicy {
    allow_zero_collapse: bool,
}

impl SinglePolicy {
    /// Create the policy.
    pub fn new(allow_zero_collapse: bool) -> Self {
        Self {
            allow_zero_collapse,
        }
    }
}

impl SelectionPolicy for SinglePolicy {
    fn mode(&self) -> Mode {
        Mode::Single
    }

    fn allow_zero_collapse(&self) -> bool {
        self.allow_zero_collapse
    }

    fn toggle(&self, current: &SelectionState, requested: &ItemId) -> SelectionState {
        let open = match current.clone().into_mode(Mode::Single) {
            SelectionState::Single(open) => open,
            SelectionState::Multiple(_) => None,
        };

        match open {
            Some(open) if open == *requested => {
                if self.can_collapse(current, requested.as_str()) {
                    SelectionState::Single(None)
                } else {
                    SelectionState::Single(Some(open))
                }
            }
            _ => SelectionState::single(Some(requested)),
        }
    }

    fn can_collapse(&self, current: &SelectionState, id: &str) -> bool {
        !current.is_open(id) || self.allow_zero_collapse
    }
}

/// Any number of open items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplePolicy {
    allow_zero_collapse: bool,
}

impl MultiplePolicy {
    /// Create the policy.
    pub fn new(allow_zero_collapse: bool) -> Self {
        Self {
            allow_zero_collapse,
        }
    }
}

impl SelectionPolicy for MultiplePolicy {
    fn mode(&self) -> Mode {
        Mode::Multiple
    }

    fn allow_zero_collapse(&self) -> bool {
        self.allow_zero_collapse
    }

    fn toggle(&self, current: &SelectionState, requested: &ItemId) -> SelectionState {
        let mut open = match current.clone().into_mode(Mode::Multiple) {
            SelectionState::Multiple(open) => open,
            SelectionState::Single(_) => HashSet::new(),
        };

        if requested.is_empty() {
            return SelectionState::Multiple(open);
        }

        if open.contains(requested) {
            if self.can_collapse(current, requested.as_str()) {
                open.remove(requested);
            }
        } else {
            open.insert(requested.clone());
        }
        SelectionState::Multiple(open)
    }

    /// The last open item stays open unless zero-collapse is allowed.
    fn can_collapse(&self, current: &SelectionState, id: &str) -> bool {
        !current.is_open(id) || self.allow_zero_collapse || current.len() > 1
    }
}

/// The policy implementing `mode`.
pub fn policy_for(mode: Mode, allow_zero_collapse: bool) -> Box<dyn SelectionPolicy> {
    match mode {
        Mode::Single => Box::new(SinglePolicy::new(allow_zero_collapse)),
        Mode::Multiple => Box::new(MultiplePolicy::new(allow_zero_collapse)),
    }
}

static_assertions::assert_impl_all!(SelectionState: Send, Sync);
static_assertions::assert_impl_all!(ItemId: Send, Sync);
