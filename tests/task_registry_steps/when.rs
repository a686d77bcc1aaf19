//! When steps for task registry BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::when;
use taskdeck::task::domain::Task;

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.title().to_owned()).collect()
}

#[when(r#"tasks are listed for category "{name}""#)]
fn list_category(world: &mut TaskWorld, name: String) {
    let listing = world
        .registry
        .list_by_category(&name)
        .map(|tasks| titles(&tasks));
    world.last_listing = world.record(listing);
}

#[when("favorite tasks are listed")]
fn list_favorites(world: &mut TaskWorld) {
    let listing = titles(&world.registry.list_favorites_by_title());
    world.last_listing = Some(listing);
    world.last_error = None;
}

#[when(r#"a task "{title}" is added under "{category}""#)]
fn add_task(world: &mut TaskWorld, title: String, category: String) {
    let result = world
        .registry
        .add_task(Task::new(title, "description", category));
    world.record(result);
}

#[when("a blank category name is added")]
fn add_blank_category(world: &mut TaskWorld) {
    let result = world.registry.add_category("   ");
    world.record(result);
}

#[when(r#"the category "{name}" is removed"#)]
fn remove_category(world: &mut TaskWorld, name: String) {
    let result = world.registry.remove_category(&name);
    world.record(result);
}

#[when(r#"the task "{title}" is marked as favorite"#)]
fn mark_favorite(world: &mut TaskWorld, title: String) {
    let result = world.registry.mark_favorite(&title);
    world.record(result);
}

#[when(r#"the task "{title}" is unmarked as favorite"#)]
fn unmark_favorite(world: &mut TaskWorld, title: String) {
    let result = world.registry.unmark_favorite(&title);
    world.record(result);
}
