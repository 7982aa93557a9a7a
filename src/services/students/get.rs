use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 获取学生详情
/// GET /api/v1/students/{id}
///
/// 导师/管理员可以查看任何学生；学生只能查看自己的名册记录。
pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    actor: Actor,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在",
            )));
        }
        Err(e) => return Ok(error_response(e, "查询学生失败")),
    };

    if !actor.is_mentor() && student.user_id != actor.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查看自己的名册记录",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(student, "查询成功")))
}
