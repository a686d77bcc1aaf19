//! Domain model for categorised tasks.
//!
//! Tasks are plain values; the invariants that tie them to categories and
//! to each other are enforced by the registry service, not by the types
//! themselves.

mod category;
mod error;
mod task;

pub use category::CategoryName;
pub use error::{CategoryNameError, TaskValidationError};
pub use task::{Task, TaskField};
