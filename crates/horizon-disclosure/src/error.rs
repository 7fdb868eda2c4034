//! Error types for the disclosure widgets.

use horizon_disclosure_core::CoreError;

use crate::accordion::ItemId;

/// Message reported for an unsupported accordion mode.
pub const INVALID_MODE_MESSAGE: &str =
    "Invalid Accordion `type` props. It's should be either `single` or `multiple`";

/// Errors raised while configuring, composing or driving an accordion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccordionError {
    /// The configured mode is neither `single` nor `multiple`.
    #[error("Invalid Accordion `type` props. It's should be either `single` or `multiple`")]
    InvalidMode {
        /// The rejected value.
        value: String,
    },

    /// A part was used outside the provider it depends on.
    #[error("{message}")]
    MissingProvider {
        /// The missing provider's message.
        message: &'static str,
    },

    /// An item with this id already exists in the accordion.
    #[error("Duplicate accordion item `{0}`")]
    DuplicateItem(ItemId),

    /// No item with this id exists in the accordion.
    #[error("Unknown accordion item `{0}`")]
    UnknownItem(ItemId),

    /// Item ids must be non-empty; the empty id means "nothing open".
    #[error("Accordion item ids must not be empty")]
    EmptyItemId,

    /// The operation needs the accordion to be mounted in a render host.
    #[error("Accordion is not mounted")]
    NotMounted,

    /// A render host operation failed.
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for AccordionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingContext { message, .. } => Self::MissingProvider { message },
            other => Self::Core(other),
        }
    }
}

/// A specialized Result type for accordion operations.
pub type Result<T> = std::result::Result<T, AccordionError>;
