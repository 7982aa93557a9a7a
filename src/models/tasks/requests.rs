use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::files::entities::FileRef;
use crate::models::submissions::entities::SubmissionStatus;

/// 创建任务请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub target_majors: Option<String>, // 逗号分隔 OR 集合，空为面向全体
    pub rubric_ids: Option<Vec<i64>>,
    pub attachments: Option<Vec<FileRef>>,
}

/// 更新任务请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式
    pub target_majors: Option<String>,
    pub rubric_ids: Option<Vec<i64>>,
    pub attachments: Option<Vec<FileRef>>,
}

/// 任务列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct TaskListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub created_by: Option<i64>,
    /// 学生视角的状态过滤（todo/in_progress/submitted/approved/rejected）
    pub status: Option<SubmissionStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct TaskListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub created_by: Option<i64>,
}
