//! Change-detecting property cells.
//!
//! [`Property<T>`] wraps a value behind a lock and reports whether a write
//! actually changed it. Widgets pair a property with a [`Signal`](crate::Signal)
//! and emit only when a write returns `true`.
//!
//! # Example
//!
//! ```
//! use horizon_disclosure_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let next = self.value.get() + 1;
//!         if self.value.set(next) {
//!             self.value_changed.emit(next);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.increment();
//! assert_eq!(counter.value.get(), 1);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }

    /// Compute the next value from the current one under a single write lock.
    ///
    /// Returns the new value if it differs from the old one, `None` otherwise.
    /// Readers never observe an intermediate state.
    pub fn update<F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> T,
    {
        let mut current = self.value.write();
        let next = f(&current);
        if *current != next {
            *current = next.clone();
            Some(next)
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_basic() {
        let prop = Property::new(42);
        assert_eq!(prop.get(), 42);
    }

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_set_silent() {
        let prop = Property::new(String::from("a"));
        prop.set_silent(String::from("b"));
        assert_eq!(prop.get(), "b");
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new(1);
        assert_eq!(prop.replace(1), None);
        assert_eq!(prop.replace(2), Some(1));
        assert_eq!(prop.get(), 2);
    }

    #[test]
    fn test_property_update() {
        let prop = Property::new(vec![1, 2]);

        let changed = prop.update(|v| {
            let mut next = v.clone();
            next.push(3);
            next
        });
        assert_eq!(changed, Some(vec![1, 2, 3]));

        let unchanged = prop.update(|v| v.clone());
        assert_eq!(unchanged, None);
        assert_eq!(prop.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(String::from("hello"));
        let len = prop.with(|s| s.len());
        assert_eq!(len, 5);
    }

    #[test]
    fn test_property_thread_safe() {
        let prop = Arc::new(Property::new(0));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let prop = prop.clone();
                std::thread::spawn(move || {
                    prop.set(i);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!((0..4).contains(&prop.get()));
    }

    #[test]
    fn test_property_default() {
        let prop: Property<i32> = Property::default();
        assert_eq!(prop.get(), 0);
    }
}
