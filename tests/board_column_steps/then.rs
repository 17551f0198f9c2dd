//! Then steps for board column BDD scenarios.

use super::world::{BoardColumnWorld, run_async};
use eyre::WrapErr;
use projectboard::task::domain::{Task, TaskStatus};
use rstest_bdd_macros::then;

fn scenario_task(world: &BoardColumnWorld) -> Result<Task, eyre::Report> {
    let (project_id, task_id) = world
        .task_ref
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let project = run_async(world.tasks.find_project(project_id))
        .wrap_err("load scenario project")?
        .ok_or_else(|| eyre::eyre!("scenario project was not stored"))?;
    project
        .task(task_id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("scenario task was not stored"))
}

#[then(r#"the task is shown in column "{column}""#)]
fn task_shown_in_column(world: &BoardColumnWorld, column: String) -> Result<(), eyre::Report> {
    let task = scenario_task(world)?;
    let shown = run_async(world.boards.column_for_status(task.status()))
        .wrap_err("resolve column for task")?;
    eyre::ensure!(shown == column, "expected column {column}, found {shown}");
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &BoardColumnWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = scenario_task(world)?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the change is rejected as a guard")]
fn change_rejected_as_guard(world: &BoardColumnWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_board_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the change to be rejected"))?;
    eyre::ensure!(
        error.is_guard_rejection(),
        "expected a guard rejection, got {error:?}"
    );
    Ok(())
}

#[then("{count:usize} board remains")]
fn boards_remain(world: &BoardColumnWorld, count: usize) -> Result<(), eyre::Report> {
    let catalog = run_async(world.boards.catalog()).wrap_err("load board catalog")?;
    eyre::ensure!(
        catalog.board_count() == count,
        "expected {count} boards, found {}",
        catalog.board_count()
    );
    Ok(())
}

#[then(r#"the selected board is "{name}""#)]
fn selected_board_is(world: &BoardColumnWorld, name: String) -> Result<(), eyre::Report> {
    let board = run_async(world.boards.current_board()).wrap_err("load selected board")?;
    eyre::ensure!(
        board.name() == name,
        "expected selected board {name}, found {}",
        board.name()
    );
    Ok(())
}

#[then("the selected board has {count:usize} column")]
fn selected_board_column_count(
    world: &BoardColumnWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let board = run_async(world.boards.current_board()).wrap_err("load selected board")?;
    eyre::ensure!(
        board.columns().len() == count,
        "expected {count} columns, found {}",
        board.columns().len()
    );
    Ok(())
}
