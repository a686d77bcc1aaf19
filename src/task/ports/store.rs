//! Storage port for the task registry.

use crate::task::domain::{CategoryName, Task};

/// Ordered storage for tasks and category names.
///
/// Implementations keep both collections in insertion order and perform no
/// validation of their own. The registry service checks every invariant
/// before calling a mutating method, so a store only has to honour the
/// requested change.
pub trait TaskStore {
    /// Returns all stored tasks in insertion order.
    fn tasks(&self) -> &[Task];

    /// Returns all stored category names in insertion order.
    fn categories(&self) -> &[CategoryName];

    /// Appends a task after every task already stored.
    fn insert_task(&mut self, task: Task);

    /// Removes and returns the first task with the given title.
    ///
    /// Returns `None` when no task has that title.
    fn take_task(&mut self, title: &str) -> Option<Task>;

    /// Returns the stored slot of the first task with the given title.
    ///
    /// Returns `None` when no task has that title.
    fn task_mut(&mut self, title: &str) -> Option<&mut Task>;

    /// Appends a category name after every name already stored.
    fn insert_category(&mut self, name: CategoryName);

    /// Removes and returns the category with the given name.
    ///
    /// Returns `None` when the name is unknown.
    fn take_category(&mut self, name: &str) -> Option<CategoryName>;

    /// Finds the first task with the given title.
    fn find_task(&self, title: &str) -> Option<&Task> {
        self.tasks().iter().find(|task| task.title() == title)
    }

    /// Returns whether the category name is stored.
    fn contains_category(&self, name: &str) -> bool {
        self.categories().iter().any(|category| category == name)
    }
}
