//! Port contracts for task registry storage.

pub mod store;

pub use store::TaskStore;
