//! Registry configuration.

use serde::Deserialize;

/// Construction options for a [`TaskRegistry`](super::TaskRegistry).
///
/// Both values are allocation hints for the in-memory store and never
/// change observable behaviour.
///
/// # Examples
///
/// ```
/// use taskdeck::task::services::RegistryConfig;
///
/// let config = RegistryConfig::from_json(r#"{ "task_capacity": 64 }"#)
///     .expect("valid registry config");
/// assert_eq!(config.task_capacity, 64);
/// assert_eq!(config.category_capacity, RegistryConfig::default().category_capacity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of tasks to pre-allocate room for.
    pub task_capacity: usize,
    /// Number of categories to pre-allocate room for.
    pub category_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            task_capacity: 16,
            category_capacity: 8,
        }
    }
}

impl RegistryConfig {
    /// Parses a configuration from JSON. Missing fields take their default
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}
