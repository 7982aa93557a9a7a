use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::TaskService;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::responses::{TaskSubmissionListItem, TaskSubmissionListResponse};
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 列出任务的提交情况（按学生展开）
/// GET /api/v1/tasks/{id}/submissions
///
/// 每个指派学生一条记录，按学号排序；没有台账行的学生
/// 以 todo 状态出现，学号与姓名从名册反范式化带出。
pub async fn list_task_submissions(
    service: &TaskService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 权限检查：只有导师或管理员可以查看提交列表
    if !actor.is_mentor() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有导师或管理员可以查看提交列表",
        )));
    }

    // 获取任务信息
    let task = match storage.get_task_by_id(task_id).await {
        Ok(Some(task)) => task,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TaskNotFound,
                "任务不存在",
            )));
        }
        Err(e) => return Ok(error_response(e, "查询任务失败")),
    };

    // 指派集合（已按学号排序）与台账行
    let assignees = match storage.resolve_assignees(&task).await {
        Ok(assignees) => assignees,
        Err(e) => return Ok(error_response(e, "解析指派学生失败")),
    };

    let rows = match storage.list_task_submissions(task_id).await {
        Ok(rows) => rows,
        Err(e) => return Ok(error_response(e, "查询提交列表失败")),
    };

    let mut row_map: HashMap<i64, Submission> =
        rows.into_iter().map(|s| (s.student_id, s)).collect();

    let items = assignees
        .into_iter()
        .map(|student| match row_map.remove(&student.id) {
            Some(submission) => TaskSubmissionListItem {
                student_id: student.id,
                student_code: student.student_code,
                student_name: student.name,
                status: submission.status,
                is_late: submission.is_late,
                submitted_at: submission.submitted_at.map(|dt| dt.to_rfc3339()),
                files: submission.files,
                note: submission.note,
                reviewed_at: submission.reviewed_at.map(|dt| dt.to_rfc3339()),
                review_notes: submission.review_notes,
                score: submission.score,
            },
            None => TaskSubmissionListItem {
                student_id: student.id,
                student_code: student.student_code,
                student_name: student.name,
                status: SubmissionStatus::Todo,
                is_late: false,
                submitted_at: None,
                files: vec![],
                note: None,
                reviewed_at: None,
                review_notes: None,
                score: None,
            },
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TaskSubmissionListResponse { task_id, items },
        "查询成功",
    )))
}
