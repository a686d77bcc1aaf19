//! Then steps for task registry BDD scenarios.

use super::world::TaskWorld;
use eyre::{ensure, eyre};
use rstest_bdd_macros::then;
use taskdeck::task::services::RegistryErrorKind;

#[then("{count:usize} tasks are returned in ascending title order")]
fn listing_sorted(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre!("missing listing in scenario world"))?;

    ensure!(
        listing.len() == count,
        "expected {count} tasks, found {}",
        listing.len()
    );
    ensure!(
        listing.windows(2).all(|pair| pair.first() <= pair.last()),
        "listing is not sorted by title: {listing:?}"
    );
    Ok(())
}

#[then("the registry holds {count:usize} tasks")]
fn registry_size(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    ensure!(
        world.registry.len() == count,
        "expected {count} tasks, found {}",
        world.registry.len()
    );
    Ok(())
}

#[then("the operation fails with a duplicate error")]
fn duplicate_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, RegistryErrorKind::Duplicate)
}

#[then("the operation fails with a not found error")]
fn not_found_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, RegistryErrorKind::NotFound)
}

#[then("the operation fails with a validation error")]
fn validation_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, RegistryErrorKind::Validation)
}

#[then(r#"the task "{title}" still references "{category}""#)]
fn task_still_references(
    world: &TaskWorld,
    title: String,
    category: String,
) -> Result<(), eyre::Report> {
    let task = world
        .registry
        .find_task(&title)
        .ok_or_else(|| eyre!("task '{title}' is missing"))?;
    ensure!(
        task.category() == category,
        "expected category '{category}', found '{}'",
        task.category()
    );
    Ok(())
}

#[then(r#"the task "{title}" is a favorite"#)]
fn task_is_favorite(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    expect_favorite(world, &title, true)
}

#[then(r#"the task "{title}" is not a favorite"#)]
fn task_is_not_favorite(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    expect_favorite(world, &title, false)
}

fn expect_error_kind(world: &TaskWorld, kind: RegistryErrorKind) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre!("expected a {kind:?} error, but the operation succeeded"))?;
    ensure!(err.kind() == kind, "expected a {kind:?} error, got {err:?}");
    Ok(())
}

fn expect_favorite(world: &TaskWorld, title: &str, expected: bool) -> Result<(), eyre::Report> {
    let task = world
        .registry
        .find_task(title)
        .ok_or_else(|| eyre!("task '{title}' is missing"))?;
    ensure!(
        task.is_favorite() == expected,
        "expected favorite={expected} for '{title}'"
    );
    Ok(())
}
