use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, resolve_assigned_student};
use crate::models::ApiResponse;
use crate::models::users::entities::Actor;
use crate::services::error_response;

/// 学生开始任务（todo -> in_progress）
/// POST /api/v1/tasks/{id}/start
pub async fn start_task(
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

    match storage.start_submission(task.id, student.id).await {
        Ok(submission) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "任务已开始")))
        }
        Err(e) => Ok(error_response(e, "开始任务失败")),
    }
}
