//! Given steps for task undo BDD scenarios.

use super::world::{TaskUndoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::NewTask;

#[given("a loaded task board")]
fn loaded_board(world: &mut TaskUndoWorld) -> Result<(), eyre::Report> {
    run_async(world.store.load());
    eyre::ensure!(!world.store.is_loading(), "store is still loading");
    Ok(())
}

#[given(r#"a task "{title}" earning {revenue:u32} over {hours:u32} hours"#)]
fn task_exists(
    world: &mut TaskUndoWorld,
    title: String,
    revenue: u32,
    hours: u32,
) -> Result<(), eyre::Report> {
    let payload = NewTask::new(title, f64::from(revenue), f64::from(hours))
        .wrap_err("build task payload for undo scenario")?;
    world.store.add(payload);
    Ok(())
}
