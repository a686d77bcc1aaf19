//! Given steps for task registry BDD scenarios.

use super::world::{TaskWorld, unique_title};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::task::domain::Task;

#[given("an empty task registry")]
fn empty_registry(world: &mut TaskWorld) {
    *world = TaskWorld::new();
}

#[given(r#"a category "{name}""#)]
fn existing_category(world: &mut TaskWorld, name: String) -> Result<(), eyre::Report> {
    world
        .registry
        .add_category(name)
        .wrap_err("add category for scenario setup")
}

#[given(r#"a task "{title}" under "{category}""#)]
fn existing_task(world: &mut TaskWorld, title: String, category: String) -> Result<(), eyre::Report> {
    world
        .registry
        .add_task(Task::new(title, "description", category))
        .wrap_err("add task for scenario setup")
}

#[given(r#"a batch of {count:usize} tasks under "{category}""#)]
fn task_batch(world: &mut TaskWorld, count: usize, category: String) -> Result<(), eyre::Report> {
    add_batch(world, count, &category, false)
}

#[given(r#"a favorite batch of {count:usize} tasks under "{category}""#)]
fn favorite_task_batch(
    world: &mut TaskWorld,
    count: usize,
    category: String,
) -> Result<(), eyre::Report> {
    add_batch(world, count, &category, true)
}

fn add_batch(
    world: &mut TaskWorld,
    count: usize,
    category: &str,
    favorite: bool,
) -> Result<(), eyre::Report> {
    for _ in 0..count {
        let task = Task::new(unique_title(), unique_title(), category).with_favorite(favorite);
        world
            .registry
            .add_task(task)
            .wrap_err("add batch task for scenario setup")?;
    }
    Ok(())
}
