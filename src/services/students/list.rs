use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::StudentListParams;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 列出学生名册
/// GET /api/v1/students
pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    actor: Actor,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 权限检查：导师与管理员可以查看名册
    if !actor.is_mentor() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "没有查看学生名册的权限",
        )));
    }

    match storage.list_students_with_pagination(params.into()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "查询成功"))),
        Err(e) => Ok(error_response(e, "查询学生列表失败")),
    }
}
