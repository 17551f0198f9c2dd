//! In-memory integration tests for project and task bookkeeping.

use super::helpers::{Workspace, workspace};
use chrono::NaiveDate;
use projectboard::{
    board::services::WorkspaceOverview,
    task::{
        domain::{TaskStatus, format_hms},
        ports::ProjectRepository,
        services::CreateProjectRequest,
    },
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_bookkeeping_is_persisted(workspace: Workspace) {
    let project = workspace
        .project_service
        .create_project(CreateProjectRequest::new("Launch").with_color("bg-pink-500"))
        .await
        .expect("project creation should succeed");
    let task = workspace
        .project_service
        .add_task(project.id(), "Press kit")
        .await
        .expect("task creation should succeed");
    let due = NaiveDate::from_ymd_opt(2025, 9, 30);

    workspace
        .project_service
        .rename_task(project.id(), task.id(), "Press kit v2")
        .await
        .expect("rename should succeed");
    workspace
        .project_service
        .assign_task(project.id(), task.id(), Some("sam".to_owned()))
        .await
        .expect("assign should succeed");
    workspace
        .project_service
        .set_due_date(project.id(), task.id(), due)
        .await
        .expect("due date should be set");

    let stored = workspace
        .projects
        .find_by_id(project.id())
        .await
        .expect("lookup should succeed")
        .expect("project should exist");
    let stored_task = stored.task(task.id()).expect("task should exist");
    assert_eq!(stored_task.title(), "Press kit v2");
    assert_eq!(stored_task.assignee(), Some("sam"));
    assert_eq!(stored_task.due(), due);
    assert_eq!(stored_task.status(), TaskStatus::Backlog);
    assert_eq!(stored.color(), "bg-pink-500");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overview_reflects_completed_work(workspace: Workspace) {
    let project = workspace
        .project_service
        .create_project(CreateProjectRequest::new("Release"))
        .await
        .expect("project creation should succeed");
    for title in ["Changelog", "Tag", "Announce"] {
        let task = workspace
            .project_service
            .add_task(project.id(), title)
            .await
            .expect("task creation should succeed");
        if title != "Announce" {
            workspace
                .project_service
                .move_to_column(project.id(), task.id(), "Done")
                .await
                .expect("move should succeed");
        }
    }

    let projects = workspace
        .project_service
        .list_projects()
        .await
        .expect("listing should succeed");
    let board = workspace
        .board_service
        .current_board()
        .await
        .expect("board should load");
    let overview = WorkspaceOverview::build(&projects, &board, chrono::Utc::now());

    assert_eq!(overview.completion_percent, 67);
    assert_eq!(overview.active_count, 1);
    assert_eq!(format_hms(overview.tracked_seconds), "00:00:00");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_drops_its_tasks(workspace: Workspace) {
    let keep = workspace
        .project_service
        .create_project(CreateProjectRequest::new("Keep"))
        .await
        .expect("project creation should succeed");
    let doomed = workspace
        .project_service
        .create_project(CreateProjectRequest::new("Drop"))
        .await
        .expect("project creation should succeed");
    workspace
        .project_service
        .add_task(doomed.id(), "Doomed")
        .await
        .expect("task creation should succeed");

    workspace
        .project_service
        .delete_project(doomed.id())
        .await
        .expect("delete should succeed");

    let names: Vec<String> = workspace
        .project_service
        .list_projects()
        .await
        .expect("listing should succeed")
        .iter()
        .map(|project| project.name().to_owned())
        .collect();
    assert_eq!(names, [keep.name()]);
}
