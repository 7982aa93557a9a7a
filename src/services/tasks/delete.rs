use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 删除任务
/// DELETE /api/v1/tasks/{id}
///
/// 已有提交时删除被拒绝（409），评审记录不可静默销毁。
pub async fn delete_task(
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

    // 权限检查：导师只能删除自己创建的任务，管理员不受限
    if !actor.is_admin() {
        if !actor.is_mentor() {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "没有删除任务的权限",
            )));
        }
        if task.created_by != actor.id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能删除自己创建的任务",
            )));
        }
    }

    match storage.delete_task(task_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("任务已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TaskNotFound,
            "任务不存在",
        ))),
        Err(e) => Ok(error_response(e, "删除任务失败")),
    }
}
