//! Adapter implementations of the task registry ports.

pub mod memory;
