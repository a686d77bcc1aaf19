//! Taskdeck: in-memory registry of categorised tasks.
//!
//! This crate keeps a set of tasks, each filed under a named category and
//! optionally flagged as favourite, and answers simple lookups over them.
//! It is a library component with no persistence or I/O of its own.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: task and category values with their validity rules
//! - **Ports**: the storage contract the registry drives
//! - **Adapters**: the vector-backed in-memory store
//! - **Services**: the registry enforcing uniqueness and category references
//!
//! # Modules
//!
//! - [`task`]: task domain, storage and registry service
//! - [`logging`]: optional process-wide logger bootstrap
//!
//! # Examples
//!
//! ```
//! use taskdeck::task::{domain::Task, services::TaskRegistry};
//!
//! let mut registry = TaskRegistry::new();
//! registry.add_category("errands").expect("new category");
//! registry
//!     .add_task(Task::new("buy milk", "semi-skimmed", "errands"))
//!     .expect("valid task");
//! registry.mark_favorite("buy milk").expect("known task");
//!
//! let favorites = registry.list_favorites_by_title();
//! assert_eq!(favorites.len(), 1);
//! ```

pub mod logging;
pub mod task;
