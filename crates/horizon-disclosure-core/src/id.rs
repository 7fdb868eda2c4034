//! Identifier generation for ARIA linkage.
//!
//! [`IdProvider`] hands out string identifiers that are unique within the
//! provider's scope. Every accordion that shares one provider draws from the
//! same counter, so header and content ids never collide between instances
//! mounted side by side.
//!
//! Providers are explicit values: create one per mounted tree (or share one
//! across several trees with [`IdProvider::shared`]) and pass it to the
//! widgets that need ids. There is no process-wide singleton.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default prefix used when no scope prefix is configured.
pub const DEFAULT_ID_PREFIX: &str = "hd";

/// A scoped, monotonically increasing id allocator.
#[derive(Debug)]
pub struct IdProvider {
    prefix: String,
    next: AtomicU64,
}

impl IdProvider {
    /// Create a provider with the default prefix.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }

    /// Create a provider whose ids start with `prefix`.
    ///
    /// Distinct prefixes keep ids from separately-owned providers apart when
    /// their trees end up in the same document.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Create a provider wrapped for sharing between widgets.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The scope prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Generate a fresh identifier.
    ///
    /// Never returns the same value twice for the lifetime of the provider.
    pub fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let id = format!("{}-{}", self.prefix, n);
        crate::disclosure_trace!(id = %id, "id generated");
        id
    }

    /// Number of ids generated so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}

impl Default for IdProvider {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(IdProvider: Send, Sync);
