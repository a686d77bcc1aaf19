//! Vector-backed task store.

use crate::task::{
    domain::{CategoryName, Task},
    ports::TaskStore,
};

/// In-memory [`TaskStore`] backed by two vectors.
///
/// Lookups are linear scans over insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
    categories: Vec<CategoryName>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for the given number of tasks and
    /// categories.
    #[must_use]
    pub fn with_capacity(tasks: usize, categories: usize) -> Self {
        Self {
            tasks: Vec::with_capacity(tasks),
            categories: Vec::with_capacity(categories),
        }
    }
}

impl TaskStore for InMemoryTaskStore {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    fn insert_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn take_task(&mut self, title: &str) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.title() == title)?;
        Some(self.tasks.remove(position))
    }

    fn task_mut(&mut self, title: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.title() == title)
    }

    fn insert_category(&mut self, name: CategoryName) {
        self.categories.push(name);
    }

    fn take_category(&mut self, name: &str) -> Option<CategoryName> {
        let position = self
            .categories
            .iter()
            .position(|category| category == name)?;
        Some(self.categories.remove(position))
    }
}
