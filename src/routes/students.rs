use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{CreateStudentRequest, StudentListParams};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::StudentService;
use crate::utils::jwt::JwtUtils;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// 创建学生
pub async fn create_student(
    req: HttpRequest,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .create_student(&req, actor, body.into_inner())
        .await
}

// 列出学生
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .list_students(&req, actor, query.into_inner())
        .await
}

// 获取学生详情
pub async fn get_student(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .get_student(&req, actor, path.into_inner())
        .await
}

pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_student))),
    );
}
