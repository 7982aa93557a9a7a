use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 获取任务统计
/// GET /api/v1/tasks/{id}/stats
///
/// total 为指派学生总数，五个状态桶精确划分 total，
/// 没有提交行的学生计入 todo。
pub async fn get_task_stats(
    service: &TaskService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 权限检查：只有导师或管理员可以查看统计
    if !actor.is_mentor() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有导师或管理员可以查看统计",
        )));
    }

    match storage.get_task_stats(task_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功"))),
        Err(e) => Ok(error_response(e, "查询任务统计失败")),
    }
}
