use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, resolve_assigned_student};
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 学生撤回提交行
/// DELETE /api/v1/tasks/{id}/submission
///
/// 仅 in_progress 可撤回；已提交/已评审的记录不支持学生删除。
pub async fn withdraw_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (task, student) = match resolve_assigned_student(&storage, actor, task_id).await {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };

    match storage.withdraw_submission(task.id, student.id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("提交已撤回"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "没有可撤回的提交",
        ))),
        Err(e) => Ok(error_response(e, "撤回提交失败")),
    }
}
