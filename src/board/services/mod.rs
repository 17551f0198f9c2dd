//! Application services for board management and dashboards.

mod management;
mod overview;
pub mod planning;

pub use management::{
    BoardManagementService, BoardServiceError, BoardServiceResult, CreateBoardRequest,
};
pub use overview::{
    ColumnShare, OverviewError, OverviewService, ProjectSummary, WorkspaceOverview,
};
pub use planning::{
    CALENDAR_DAYS, DayAgenda, NO_DUE_DATE_DAYS, Priority, PriorityMatrix, TIMELINE_DAYS,
    TOP_TRACKED_LIMIT, TaskEntry, UPCOMING_DEADLINE_LIMIT, calendar, days_until, timeline,
    top_tracked, upcoming_deadlines,
};
