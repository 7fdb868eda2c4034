//! Explicit context passing for composed widget trees.
//!
//! An [`Environment`] is a chain of type-keyed values. A provider creates a
//! child environment carrying its value, and any descendant that holds the
//! child can look the value up by type. Lookups walk from the innermost
//! environment outwards, so an inner provider shadows an outer one of the
//! same type.
//!
//! Values that must be present implement [`ContextValue`] and are fetched
//! with [`Environment::require`], which fails fast with the value's own
//! "must be used inside a provider" message.
//!
//! # Example
//!
//! ```
//! use horizon_disclosure_core::{ContextValue, Environment};
//!
//! struct Theme(&'static str);
//!
//! impl ContextValue for Theme {
//!     const MISSING_MESSAGE: &'static str = "Must be used inside Theme Provider.";
//! }
//!
//! let root = Environment::new().provide(Theme("dark")).into_shared();
//! let child = root.child().into_shared();
//!
//! assert_eq!(child.require::<Theme>().unwrap().0, "dark");
//! assert!(Environment::new().require::<Theme>().is_err());
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::logging::targets;

/// A value that can be required from an [`Environment`].
pub trait ContextValue: Any + Send + Sync {
    /// Message reported when the value is required but no provider supplied it.
    const MISSING_MESSAGE: &'static str;
}

/// A chain of type-keyed context values.
#[derive(Default)]
pub struct Environment {
    parent: Option<Arc<Environment>>,
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty environment whose lookups fall back to `self`.
    pub fn child(self: &Arc<Self>) -> Environment {
        Environment {
            parent: Some(Arc::clone(self)),
            values: HashMap::new(),
        }
    }

    /// Add a value to this environment (builder style).
    pub fn provide<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Add a shared value to this environment (builder style).
    pub fn provide_shared<T: Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
        self.values.insert(TypeId::of::<T>(), value);
        self
    }

    /// Add or replace a value in this environment.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Wrap this environment for sharing with descendants.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Look up a value by type, searching enclosing environments.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let key = TypeId::of::<T>();
        let mut env = Some(self);
        while let Some(current) = env {
            if let Some(value) = current.values.get(&key) {
                return Arc::clone(value).downcast::<T>().ok();
            }
            env = current.parent.as_deref();
        }
        None
    }

    /// Look up a required value, failing with its missing-provider message.
    pub fn require<T: ContextValue>(&self) -> Result<Arc<T>> {
        self.get::<T>().ok_or_else(|| {
            let type_name = std::any::type_name::<T>();
            tracing::debug!(target: targets::CONTEXT, type_name, "required context missing");
            CoreError::MissingContext {
                type_name,
                message: T::MISSING_MESSAGE,
            }
        })
    }

    /// Whether a value of type `T` is reachable from this environment.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.get::<T>().is_some()
    }

    /// Number of environments in the chain, including this one.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut env = self.parent.as_deref();
        while let Some(current) = env {
            depth += 1;
            env = current.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("values", &self.values.len())
            .field("depth", &self.depth())
            .finish()
    }
}

static_assertions::assert_impl_all!(Environment: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Outer(u32);

    impl ContextValue for Outer {
        const MISSING_MESSAGE: &'static str = "Must be used inside Outer Provider.";
    }

    #[derive(Debug, PartialEq)]
    struct Inner(&'static str);

    impl ContextValue for Inner {
        const MISSING_MESSAGE: &'static str = "Must be used inside Inner Provider.";
    }

    #[test]
    fn test_get_from_self() {
        let env = Environment::new().provide(Outer(1));
        assert_eq!(*env.get::<Outer>().unwrap(), Outer(1));
        assert!(env.get::<Inner>().is_none());
    }

    #[test]
    fn test_child_falls_back_to_parent() {
        let root = Environment::new().provide(Outer(7)).into_shared();
        let child = root.child().provide(Inner("item")).into_shared();

        assert_eq!(*child.require::<Outer>().unwrap(), Outer(7));
        assert_eq!(*child.require::<Inner>().unwrap(), Inner("item"));
        assert!(root.get::<Inner>().is_none());
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn test_inner_provider_shadows_outer() {
        let root = Environment::new().provide(Outer(1)).into_shared();
        let child = root.child().provide(Outer(2));
        assert_eq!(*child.require::<Outer>().unwrap(), Outer(2));
    }

    #[test]
    fn test_require_reports_missing_message() {
        let env = Environment::new();
        let err = env.require::<Inner>().unwrap_err();
        assert_eq!(err.to_string(), "Must be used inside Inner Provider.");
        match err {
            CoreError::MissingContext { type_name, .. } => assert!(type_name.contains("Inner")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_provide_shared_keeps_identity() {
        let value = Arc::new(Outer(3));
        let env = Environment::new().provide_shared(value.clone());
        assert!(Arc::ptr_eq(&env.get::<Outer>().unwrap(), &value));
    }
}
