//! Error types for Horizon Disclosure core systems.

/// Errors raised by the core plumbing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A context value was requested from an [`Environment`](crate::Environment)
    /// that no enclosing provider supplied.
    ///
    /// The message is chosen by the provider's owner so that each kind of
    /// context can report its own composition mistake.
    #[error("{message}")]
    MissingContext {
        /// The Rust type that was requested.
        type_name: &'static str,
        /// The human-readable error message.
        message: &'static str,
    },

    /// The node ID is not mounted in the render host.
    #[error("Invalid or unmounted node ID")]
    InvalidNode,
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
