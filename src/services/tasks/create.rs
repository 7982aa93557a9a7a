use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::tasks::requests::CreateTaskRequest;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 创建任务
/// POST /api/v1/tasks
pub async fn create_task(
    service: &TaskService,
    request: &HttpRequest,
    actor: Actor,
    req: CreateTaskRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 权限检查：只有导师或管理员可以布置任务
    if !actor.is_mentor() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有导师或管理员可以创建任务",
        )));
    }

    match storage.create_task(actor.id, req).await {
        Ok(task) => Ok(HttpResponse::Ok().json(ApiResponse::success(task, "任务创建成功"))),
        Err(e) => Ok(error_response(e, "创建任务失败")),
    }
}
