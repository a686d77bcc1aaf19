//! Error types for registry operations.

use crate::task::domain::{CategoryNameError, TaskValidationError};
use thiserror::Error;

/// Result type for task registry operations.
pub type TaskRegistryResult<T> = Result<T, TaskRegistryError>;

/// Broad classification of [`TaskRegistryError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryErrorKind {
    /// A required identifying field was blank.
    Validation,
    /// The identifying key is already taken.
    Duplicate,
    /// The identifying key does not exist.
    NotFound,
}

/// Errors returned by [`TaskRegistry`](super::TaskRegistry) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRegistryError {
    /// The category name is blank.
    #[error("invalid category name: {0}")]
    InvalidCategoryName(#[from] CategoryNameError),

    /// The task has a blank required field.
    #[error("invalid task: {0}")]
    InvalidTask(#[from] TaskValidationError),

    /// A category with the same name already exists.
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),

    /// A task with the same title already exists.
    #[error("task '{0}' already exists")]
    DuplicateTask(String),

    /// The category is not known to the registry.
    #[error("category '{0}' does not exist")]
    CategoryNotFound(String),

    /// No task has the given title.
    #[error("task '{0}' does not exist")]
    TaskNotFound(String),
}

impl TaskRegistryError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> RegistryErrorKind {
        match self {
            Self::InvalidCategoryName(_) | Self::InvalidTask(_) => RegistryErrorKind::Validation,
            Self::DuplicateCategory(_) | Self::DuplicateTask(_) => RegistryErrorKind::Duplicate,
            Self::CategoryNotFound(_) | Self::TaskNotFound(_) => RegistryErrorKind::NotFound,
        }
    }
}
