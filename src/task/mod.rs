//! Task and category management.
//!
//! A [`services::TaskRegistry`] owns an ordered list of tasks and an ordered
//! list of category names. Task titles are unique, and a task can only be
//! added under a category the registry already knows. Favourite flags are
//! toggled in place, and the query methods return tasks sorted ascending by
//! title. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
