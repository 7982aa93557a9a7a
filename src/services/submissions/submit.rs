use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubmissionService, resolve_assigned_student};
use crate::models::ApiResponse;
use crate::models::submissions::requests::SubmitTaskRequest;
use crate::models::users::entities::Actor;
use crate::services::error_response;

/// 学生提交/重交任务
/// POST /api/v1/tasks/{id}/submit
///
/// 覆盖旧提交；迟交按当前时间对比任务截止时间判定。
/// 所有前置校验失败都不落库，台账保持原样。
pub async fn submit_task(
    service: &SubmissionService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
    req: SubmitTaskRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (task, student) = match resolve_assigned_student(&storage, actor, task_id).await {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    match storage
        .submit(task.id, student.id, req.files, req.note)
        .await
    {
        Ok(submission) => {
            info!(
                task_id = task.id,
                student_id = student.id,
                is_late = submission.is_late,
                "任务提交成功"
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "提交成功")))
        }
        Err(e) => Ok(error_response(e, "提交任务失败")),
    }
}
