//! Application services for task and category management.

mod config;
mod error;
mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryErrorKind, TaskRegistryError, TaskRegistryResult};
pub use registry::TaskRegistry;
