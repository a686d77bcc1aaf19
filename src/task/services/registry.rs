//! Task registry service.
//!
//! The registry owns the task and category collections through a
//! [`TaskStore`] and enforces two invariants on every mutation:
//!
//! - task titles are unique (exact, case-sensitive match);
//! - a task can only be inserted under a category the registry knows.
//!
//! Every check runs before the store is touched, so a failed call leaves
//! both collections unchanged. Removing a category does not cascade: tasks
//! that reference it stay in place.

use super::{RegistryConfig, TaskRegistryError, TaskRegistryResult};
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{CategoryName, Task},
    ports::TaskStore,
};
use log::debug;

/// Owner of all tasks and categories.
#[derive(Debug, Clone)]
pub struct TaskRegistry<S = InMemoryTaskStore>
where
    S: TaskStore,
{
    store: S,
}

impl TaskRegistry<InMemoryTaskStore> {
    /// Creates an empty registry backed by an [`InMemoryTaskStore`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Creates an empty in-memory registry sized by `config`.
    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self::with_store(InMemoryTaskStore::with_capacity(
            config.task_capacity,
            config.category_capacity,
        ))
    }
}

impl Default for TaskRegistry<InMemoryTaskStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TaskRegistry<S>
where
    S: TaskStore,
{
    /// Creates a registry over an existing store.
    ///
    /// The store is trusted as given; its contents are not re-validated.
    #[must_use]
    pub const fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Returns all category names in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryName] {
        self.store.categories()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.tasks().len()
    }

    /// Returns `true` when the registry holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.tasks().is_empty()
    }

    /// Finds the task with the given title.
    #[must_use]
    pub fn find_task(&self, title: &str) -> Option<&Task> {
        self.store.find_task(title)
    }

    /// Returns whether a task with the given title exists.
    #[must_use]
    pub fn has_task(&self, title: &str) -> bool {
        self.store.find_task(title).is_some()
    }

    /// Returns whether the category name is known.
    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.store.contains_category(name)
    }

    /// Adds a new category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::InvalidCategoryName`] when `name` is
    /// blank, or [`TaskRegistryError::DuplicateCategory`] when a category
    /// with exactly the same name already exists.
    pub fn add_category(&mut self, name: impl Into<String>) -> TaskRegistryResult<()> {
        let category = CategoryName::new(name).map_err(|err| rejected(err.into()))?;
        if self.store.contains_category(category.as_str()) {
            return Err(rejected(TaskRegistryError::DuplicateCategory(
                category.into_inner(),
            )));
        }

        debug!("event=category_added category={category}");
        self.store.insert_category(category);
        Ok(())
    }

    /// Removes a category.
    ///
    /// Tasks that reference the category are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::CategoryNotFound`] when the category is
    /// unknown.
    pub fn remove_category(&mut self, name: &str) -> TaskRegistryResult<()> {
        let removed = self
            .store
            .take_category(name)
            .ok_or_else(|| rejected(TaskRegistryError::CategoryNotFound(name.to_owned())))?;

        let orphaned = self
            .store
            .tasks()
            .iter()
            .filter(|task| task.category() == name)
            .count();
        debug!("event=category_removed category={removed} orphaned_tasks={orphaned}");
        Ok(())
    }

    /// Adds a task.
    ///
    /// Checks run in order: field validity, title uniqueness, then category
    /// existence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::InvalidTask`] when a required field is
    /// blank, [`TaskRegistryError::DuplicateTask`] when the title is taken,
    /// or [`TaskRegistryError::CategoryNotFound`] when the category is
    /// unknown.
    pub fn add_task(&mut self, task: Task) -> TaskRegistryResult<()> {
        task.validate().map_err(|err| rejected(err.into()))?;
        if self.has_task(task.title()) {
            return Err(rejected(TaskRegistryError::DuplicateTask(
                task.title().to_owned(),
            )));
        }
        if !self.has_category(task.category()) {
            return Err(rejected(TaskRegistryError::CategoryNotFound(
                task.category().to_owned(),
            )));
        }

        debug!(
            "event=task_added title={} category={} favorite={}",
            task.title(),
            task.category(),
            task.is_favorite()
        );
        self.store.insert_task(task);
        Ok(())
    }

    /// Removes the task with the given title and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::TaskNotFound`] when no task has that
    /// title.
    pub fn remove_task(&mut self, title: &str) -> TaskRegistryResult<Task> {
        let removed = self
            .store
            .take_task(title)
            .ok_or_else(|| rejected(TaskRegistryError::TaskNotFound(title.to_owned())))?;
        debug!("event=task_removed title={title}");
        Ok(removed)
    }

    /// Marks the task with the given title as favourite.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::TaskNotFound`] when no task has that
    /// title.
    pub fn mark_favorite(&mut self, title: &str) -> TaskRegistryResult<()> {
        self.set_favorite(title, true)
    }

    /// Clears the favourite flag of the task with the given title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::TaskNotFound`] when no task has that
    /// title.
    pub fn unmark_favorite(&mut self, title: &str) -> TaskRegistryResult<()> {
        self.set_favorite(title, false)
    }

    /// Returns favourite tasks sorted ascending by title.
    ///
    /// Titles compare byte-wise, so uppercase sorts before lowercase.
    #[must_use]
    pub fn list_favorites_by_title(&self) -> Vec<&Task> {
        sorted_by_title(self.store.tasks().iter().filter(|task| task.is_favorite()))
    }

    /// Returns the tasks of one category sorted ascending by title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::CategoryNotFound`] when the category is
    /// unknown, even if some task still references it.
    pub fn list_by_category(&self, name: &str) -> TaskRegistryResult<Vec<&Task>> {
        if !self.has_category(name) {
            return Err(rejected(TaskRegistryError::CategoryNotFound(
                name.to_owned(),
            )));
        }
        Ok(sorted_by_title(
            self.store
                .tasks()
                .iter()
                .filter(|task| task.category() == name),
        ))
    }

    fn set_favorite(&mut self, title: &str, favorite: bool) -> TaskRegistryResult<()> {
        let task = self
            .store
            .task_mut(title)
            .ok_or_else(|| rejected(TaskRegistryError::TaskNotFound(title.to_owned())))?;
        task.set_favorite(favorite);
        debug!("event=favorite_changed title={title} favorite={favorite}");
        Ok(())
    }
}

fn sorted_by_title<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut selected: Vec<&Task> = tasks.collect();
    selected.sort_by(|left, right| left.title().cmp(right.title()));
    selected
}

fn rejected(err: TaskRegistryError) -> TaskRegistryError {
    debug!("event=operation_rejected kind={:?} reason={err}", err.kind());
    err
}
