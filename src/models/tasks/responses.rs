use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::responses::SubmissionInfo;
use crate::models::tasks::entities::Task;

/// 任务列表响应（导师/管理员视角）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct TaskListResponse {
    pub items: Vec<Task>,
    pub pagination: PaginationInfo,
}

/// 学生任务列表项（附带本人提交状态）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct StudentTaskListItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub status: SubmissionStatus,
    pub is_late: bool,
}

/// 学生任务列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct StudentTaskListResponse {
    pub items: Vec<StudentTaskListItem>,
    pub pagination: PaginationInfo,
}

/// 学生任务视图（详情）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct StudentTaskViewResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub status: SubmissionStatus,
    pub is_late: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionInfo>,
}

/// 任务统计响应
///
/// total 为解析出的指派学生总数，五个状态桶精确划分 total；
/// 没有提交行的学生计入 todo。
#[derive(Debug, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct TaskStatsResponse {
    pub task_id: i64,
    pub total: i64,
    pub todo: i64,
    pub in_progress: i64,
    pub submitted: i64,
    pub approved: i64,
    pub rejected: i64,
}
