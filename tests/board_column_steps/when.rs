//! When steps for board column BDD scenarios.

use super::world::{BoardColumnWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the task is moved to column "{column}""#)]
fn move_task_to_column(world: &mut BoardColumnWorld, column: String) -> Result<(), eyre::Report> {
    let (project_id, task_id) = world
        .task_ref
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(world.tasks.move_to_column(project_id, task_id, &column))
        .wrap_err("move task to column")?;
    Ok(())
}

#[when("the selected board is deleted")]
fn delete_selected_board(world: &mut BoardColumnWorld) -> Result<(), eyre::Report> {
    let board = run_async(world.boards.current_board()).wrap_err("load selected board")?;
    world.last_board_error = run_async(world.boards.delete_board(board.id())).err();
    Ok(())
}

#[when("column {index:usize} is removed from the selected board")]
fn remove_column(world: &mut BoardColumnWorld, index: usize) -> Result<(), eyre::Report> {
    let board = run_async(world.boards.current_board()).wrap_err("load selected board")?;
    world.last_board_error = run_async(world.boards.remove_column(board.id(), index)).err();
    Ok(())
}
