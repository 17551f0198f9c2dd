//! In-memory integration tests for moving tasks across board columns.

use super::helpers::{Workspace, workspace};
use projectboard::{
    board::{domain::resolve_column, services::CreateBoardRequest},
    task::{domain::TaskStatus, services::CreateProjectRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_across_a_custom_board_updates_status(workspace: Workspace) {
    let board = workspace
        .board_service
        .create_board(CreateBoardRequest::from_column_list(
            "Delivery",
            "Open, Development, QA, Deployment",
        ))
        .await
        .expect("board creation should succeed");
    workspace
        .board_service
        .select_board(board.id())
        .await
        .expect("selection should succeed");
    let project = workspace
        .project_service
        .create_project(CreateProjectRequest::new("Checkout"))
        .await
        .expect("project creation should succeed");
    let task = workspace
        .project_service
        .add_task(project.id(), "Add card payments")
        .await
        .expect("task creation should succeed");

    let mut visited = Vec::new();
    for column in board.columns() {
        let moved = workspace
            .project_service
            .move_to_column(project.id(), task.id(), column)
            .await
            .expect("move should succeed");
        let shown = workspace
            .board_service
            .column_for_status(moved.status())
            .await
            .expect("column lookup should succeed");
        visited.push((moved.status(), shown));
    }

    assert_eq!(
        visited,
        vec![
            (TaskStatus::Backlog, "Open".to_owned()),
            (TaskStatus::InProgress, "Development".to_owned()),
            (TaskStatus::Review, "QA".to_owned()),
            (TaskStatus::Done, "Deployment".to_owned()),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_a_column_moves_display_but_not_status(workspace: Workspace) {
    let board = workspace
        .board_service
        .current_board()
        .await
        .expect("default board should load");
    let project = workspace
        .project_service
        .create_project(CreateProjectRequest::new("Docs"))
        .await
        .expect("project creation should succeed");
    let task = workspace
        .project_service
        .add_task(project.id(), "Proofread guide")
        .await
        .expect("task creation should succeed");
    workspace
        .project_service
        .move_to_column(project.id(), task.id(), "Review")
        .await
        .expect("move should succeed");

    workspace
        .board_service
        .remove_column(board.id(), 2)
        .await
        .expect("column removal should succeed");

    let stored = workspace
        .project_service
        .find_project(project.id())
        .await
        .expect("lookup should succeed")
        .and_then(|found| found.task(task.id()).map(|stored_task| stored_task.status()));
    assert_eq!(stored, Some(TaskStatus::Review));
    let shown = workspace
        .board_service
        .column_for_status(TaskStatus::Review)
        .await
        .expect("column lookup should succeed");
    assert_eq!(shown, "Backlog");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_task_is_shown_on_every_board(workspace: Workspace) {
    for columns in ["Alpha, Beta", "To Do, Done", "Review"] {
        workspace
            .board_service
            .create_board(CreateBoardRequest::from_column_list("Probe", columns))
            .await
            .expect("board creation should succeed");
    }
    let catalog = workspace
        .board_service
        .catalog()
        .await
        .expect("catalog should load");

    for board in catalog.boards() {
        for status in TaskStatus::ALL {
            let column = resolve_column(status, board.columns());
            assert!(
                board.columns().iter().any(|label| label == column),
                "{status} on {} resolved outside the board",
                board.name()
            );
        }
    }
}
