//! Then steps for task undo BDD scenarios.

use super::world::{TaskUndoWorld, run_async};
use rstest_bdd_macros::then;

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &TaskUndoWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.tasks().len();
    eyre::ensure!(actual == count, "expected {count} live tasks, found {actual}");
    Ok(())
}

#[then(r#"the board contains "{title}""#)]
fn board_contains(world: &TaskUndoWorld, title: String) -> Result<(), eyre::Report> {
    world.task_titled(&title).map(|_| ())
}

#[then(r#"the task "{title}" earns {revenue:u32} over {hours:u32} hours"#)]
fn task_amounts(
    world: &TaskUndoWorld,
    title: String,
    revenue: u32,
    hours: u32,
) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        (task.revenue() - f64::from(revenue)).abs() < f64::EPSILON,
        "expected revenue {revenue}, found {}",
        task.revenue()
    );
    eyre::ensure!(
        (task.time_taken() - f64::from(hours)).abs() < f64::EPSILON,
        "expected {hours} hours, found {}",
        task.time_taken()
    );
    Ok(())
}

#[then(r#""{title}" can be restored"#)]
fn can_restore(world: &TaskUndoWorld, title: String) -> Result<(), eyre::Report> {
    let deleted = world
        .store
        .last_deleted()
        .ok_or_else(|| eyre::eyre!("undo slot is empty"))?;
    eyre::ensure!(
        deleted.title() == title,
        "undo slot holds {:?}, expected {title:?}",
        deleted.title()
    );
    Ok(())
}

#[then("nothing can be restored")]
fn nothing_to_restore(world: &TaskUndoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.store.last_deleted().is_none(),
        "undo slot should be empty"
    );
    Ok(())
}

#[then("storage holds {count:usize} tasks")]
fn storage_holds(world: &TaskUndoWorld, count: usize) -> Result<(), eyre::Report> {
    run_async(world.store.flush());
    let stored = world.storage.stored_tasks();
    eyre::ensure!(
        stored.as_slice() == world.store.tasks(),
        "stored tasks differ from the live list"
    );
    eyre::ensure!(
        stored.len() == count,
        "expected {count} stored tasks, found {}",
        stored.len()
    );
    Ok(())
}
