//! Error types for command construction.

use thiserror::Error;

/// Errors raised while building or registering command definitions.
///
/// Both variants are reported synchronously at the offending call and
/// are never recovered from internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The caller supplied structurally invalid input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl CommandError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Check if this is an [`CommandError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an [`CommandError::InvalidOperation`].
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

/// Result type for command operations.
pub type CommandResult<T> = std::result::Result<T, CommandError>;
