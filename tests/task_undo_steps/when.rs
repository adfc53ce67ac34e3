//! When steps for task undo BDD scenarios.

use super::world::TaskUndoWorld;
use rstest_bdd_macros::when;

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut TaskUndoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.store.delete(id);
    Ok(())
}

#[when("the last deletion is undone")]
fn undo_last_deletion(world: &mut TaskUndoWorld) {
    world.store.undo_delete();
}

#[when("the undo offer is dismissed")]
fn dismiss_undo(world: &mut TaskUndoWorld) {
    world.store.clear_last_deleted();
}
