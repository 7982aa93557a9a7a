use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::tasks::requests::UpdateTaskRequest;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 更新任务
/// PUT /api/v1/tasks/{id}
///
/// 已有提交时同样允许编辑；历史提交的迟交标记不追溯重算。
pub async fn update_task(
    service: &TaskService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
    req: UpdateTaskRequest,
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

    // 权限检查：导师只能编辑自己创建的任务，管理员不受限
    if !actor.is_admin() {
        if !actor.is_mentor() {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "没有编辑任务的权限",
            )));
        }
        if task.created_by != actor.id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能编辑自己创建的任务",
            )));
        }
    }

    match storage.update_task(task_id, req).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(ApiResponse::success(task, "任务更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TaskNotFound,
            "任务不存在",
        ))),
        Err(e) => Ok(error_response(e, "更新任务失败")),
    }
}
