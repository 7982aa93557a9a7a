use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{ReviewRequest, SubmitTaskRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::SubmissionService;
use crate::utils::jwt::JwtUtils;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 学生开始任务
pub async fn start_task(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    SUBMISSION_SERVICE
        .start_task(&req, actor, path.into_inner())
        .await
}

// 学生提交/重交任务
pub async fn submit_task(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SubmitTaskRequest>,
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

    SUBMISSION_SERVICE
        .submit_task(&req, actor, path.into_inner(), body.into_inner())
        .await
}

// 学生撤回提交行
pub async fn withdraw_submission(
    req: HttpRequest,
    path: web::Path<i64>,
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

    SUBMISSION_SERVICE
        .withdraw_submission(&req, actor, path.into_inner())
        .await
}

// 导师评审提交
pub async fn review_submission(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<ReviewRequest>,
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

    let (task_id, student_id) = path.into_inner();
    SUBMISSION_SERVICE
        .review_submission(&req, actor, task_id, student_id, body.into_inner())
        .await
}

pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tasks")
            .service(web::resource("/{id}/start").route(web::post().to(start_task)))
            .service(web::resource("/{id}/submit").route(web::post().to(submit_task)))
            .service(
                web::resource("/{id}/submission").route(web::delete().to(withdraw_submission)),
            )
            .service(
                web::resource("/{id}/students/{student_id}/review")
                    .route(web::post().to(review_submission)),
            ),
    );
}
