//! Task record and its validity rules.

use super::TaskValidationError;
use std::fmt;

/// Required textual fields of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task title, which also identifies the task.
    Title,
    /// The free-form task description.
    Description,
    /// The name of the category the task belongs to.
    Category,
}

impl TaskField {
    /// Returns the lowercase field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled unit of work with a description, a category and a favourite
/// flag.
///
/// Construction stores fields exactly as given, blank values included.
/// Validity is checked by the registry when the task is inserted, not
/// continuously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    description: String,
    category: String,
    favorite: bool,
}

impl Task {
    /// Creates a task that is not marked as favourite.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            favorite: false,
        }
    }

    /// Creates a task that is already marked as favourite.
    #[must_use]
    pub fn favorite(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(title, description, category).with_favorite(true)
    }

    /// Sets the favourite flag.
    #[must_use]
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the referenced category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns whether the task is marked as favourite.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Updates the favourite flag in place.
    pub const fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    /// Checks that title, description and category are all non-blank.
    ///
    /// Fields are checked in that order and the first blank one is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::BlankField`] naming the first field
    /// that is empty after trimming.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        let fields = [
            (TaskField::Title, &self.title),
            (TaskField::Description, &self.description),
            (TaskField::Category, &self.category),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(TaskValidationError::BlankField(*field)),
            None => Ok(()),
        }
    }

    /// Returns `true` when [`Task::validate`] succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
