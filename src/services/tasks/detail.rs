use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::responses::SubmissionInfo;
use crate::models::tasks::responses::StudentTaskViewResponse;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 获取任务详情
/// GET /api/v1/tasks/{id}
///
/// 导师/管理员拿到任务本体；学生拿到本人视角的任务视图
/// `{status, is_late, due_date, submission?}`，无台账行即 todo。
pub async fn get_task(
    service: &TaskService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    if !actor.is_student() {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(task, "查询成功")));
    }

    // 学生视角：必须在名册中且任务指派给其专业
    let student = match storage.get_student_by_user_id(actor.id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "当前账号不在学生名册中",
            )));
        }
        Err(e) => return Ok(error_response(e, "查询学生名册失败")),
    };

    if !task.targets_major(&student.major) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "该任务未指派给当前学生",
        )));
    }

    let row = match storage.get_submission(task.id, student.id).await {
        Ok(row) => row,
        Err(e) => return Ok(error_response(e, "查询提交失败")),
    };

    let view = match row {
        Some(submission) => StudentTaskViewResponse {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date.to_rfc3339(),
            status: submission.status,
            is_late: submission.is_late,
            submission: Some(SubmissionInfo::from_submission(&submission)),
        },
        None => StudentTaskViewResponse {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date.to_rfc3339(),
            status: SubmissionStatus::Todo,
            is_late: false,
            submission: None,
        },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(view, "查询成功")))
}
