//! Category name value type.

use super::CategoryNameError;
use std::fmt;

/// Name of a task category.
///
/// The name is stored exactly as supplied. Whitespace is only consulted to
/// reject blank names; comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated category name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNameError::Blank`] when the name is empty or
    /// consists only of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryNameError> {
        let name = value.into();
        if name.trim().is_empty() {
            return Err(CategoryNameError::Blank);
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned name.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CategoryName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CategoryName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
