//! Given steps for board column BDD scenarios.

use super::world::{BoardColumnWorld, run_async};
use eyre::WrapErr;
use projectboard::{
    board::services::CreateBoardRequest,
    task::{domain::TaskStatus, services::CreateProjectRequest},
};
use rstest_bdd_macros::given;

#[given(r#"a board "{name}" with columns "{columns}""#)]
fn board_with_columns(
    world: &mut BoardColumnWorld,
    name: String,
    columns: String,
) -> Result<(), eyre::Report> {
    let board = run_async(
        world
            .boards
            .create_board(CreateBoardRequest::from_column_list(name, &columns)),
    )
    .wrap_err("create board for scenario")?;
    run_async(world.boards.select_board(board.id())).wrap_err("select scenario board")?;

    if world.created_boards.is_empty() {
        let catalog = run_async(world.boards.catalog()).wrap_err("load board catalog")?;
        let seeded: Vec<_> = catalog
            .boards()
            .map(|seeded_board| seeded_board.id().clone())
            .filter(|id| id != board.id())
            .collect();
        for id in &seeded {
            run_async(world.boards.delete_board(id)).wrap_err("remove seeded board")?;
        }
    }
    world.created_boards.push(board.id().clone());
    Ok(())
}

#[given(r#"a project task with status "{status}""#)]
fn project_task_with_status(
    world: &mut BoardColumnWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let project = run_async(
        world
            .tasks
            .create_project(CreateProjectRequest::new("Scenario project")),
    )
    .wrap_err("create project for scenario")?;
    let task = run_async(world.tasks.add_task(project.id(), "Scenario task"))
        .wrap_err("add task for scenario")?;
    run_async(world.tasks.set_status(project.id(), task.id(), parsed))
        .wrap_err("set scenario task status")?;
    world.task_ref = Some((project.id().clone(), task.id().clone()));
    Ok(())
}
