//! Error types for task and category validation.

use super::TaskField;
use thiserror::Error;

/// Errors returned while validating a task record.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// A required field is empty after trimming.
    #[error("task {0} must not be empty")]
    BlankField(TaskField),
}

/// Errors returned while constructing category names.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CategoryNameError {
    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    Blank,
}
