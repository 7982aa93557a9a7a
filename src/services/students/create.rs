use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 创建学生名册记录
/// POST /api/v1/students
pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    actor: Actor,
    req: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 权限检查：只有管理员可以维护名册
    if !actor.is_admin() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有管理员可以维护学生名册",
        )));
    }

    // 轻量字段校验
    if req.student_code.trim().is_empty() || req.name.trim().is_empty() || req.major.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学号、姓名、专业均不能为空",
        )));
    }

    match storage.create_student(req).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "学生创建成功"))),
        Err(e) => Ok(error_response(e, "创建学生失败")),
    }
}
