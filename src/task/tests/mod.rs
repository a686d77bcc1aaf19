//! Unit tests for the task module.
//!
//! Tests are organised by layer, covering happy paths, rejection paths and
//! ordering guarantees for the public APIs.
