use serde::Serialize;
use ts_rs::TS;

use crate::models::files::entities::FileRef;
use crate::models::submissions::entities::{Submission, SubmissionStatus};

/// 提交详情（学生视角，嵌在任务视图里）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionInfo {
    pub files: Vec<FileRef>,
    pub note: Option<String>,
    pub submitted_at: Option<String>,
    pub is_late: bool,
    pub reviewed_at: Option<String>,
    pub review_notes: Option<String>,
    pub score: Option<f64>,
}

impl SubmissionInfo {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            files: submission.files.clone(),
            note: submission.note.clone(),
            submitted_at: submission.submitted_at.map(|dt| dt.to_rfc3339()),
            is_late: submission.is_late,
            reviewed_at: submission.reviewed_at.map(|dt| dt.to_rfc3339()),
            review_notes: submission.review_notes.clone(),
            score: submission.score,
        }
    }
}

/// 任务提交列表项（导师监控视角，按学生展开）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct TaskSubmissionListItem {
    pub student_id: i64,
    pub student_code: String,
    pub student_name: String,
    pub status: SubmissionStatus,
    pub is_late: bool,
    pub submitted_at: Option<String>,
    pub files: Vec<FileRef>,
    pub note: Option<String>,
    pub reviewed_at: Option<String>,
    pub review_notes: Option<String>,
    pub score: Option<f64>,
}

/// 任务提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct TaskSubmissionListResponse {
    pub task_id: i64,
    pub items: Vec<TaskSubmissionListItem>,
}
