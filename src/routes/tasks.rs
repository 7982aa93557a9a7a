use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::tasks::requests::{CreateTaskRequest, TaskListParams, UpdateTaskRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::TaskService;
use crate::utils::jwt::JwtUtils;

// 懒加载的全局 TaskService 实例
static TASK_SERVICE: Lazy<TaskService> = Lazy::new(TaskService::new_lazy);

// 创建任务
pub async fn create_task(
    req: HttpRequest,
    body: web::Json<CreateTaskRequest>,
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

    TASK_SERVICE.create_task(&req, actor, body.into_inner()).await
}

// 列出任务（导师全量视角 / 学生指派视角）
pub async fn list_tasks(
    req: HttpRequest,
    query: web::Query<TaskListParams>,
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

    TASK_SERVICE.list_tasks(&req, actor, query.into_inner()).await
}

// 获取任务详情
pub async fn get_task(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    TASK_SERVICE.get_task(&req, actor, path.into_inner()).await
}

// 更新任务
pub async fn update_task(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateTaskRequest>,
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

    TASK_SERVICE
        .update_task(&req, actor, path.into_inner(), body.into_inner())
        .await
}

// 删除任务
pub async fn delete_task(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    TASK_SERVICE.delete_task(&req, actor, path.into_inner()).await
}

// 获取任务统计
pub async fn get_task_stats(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let actor = match JwtUtils::extract_actor(&req) {
        Some(actor) => actor,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    TASK_SERVICE
        .get_task_stats(&req, actor, path.into_inner())
        .await
}

// 列出任务提交情况（按学生展开）
pub async fn list_task_submissions(
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

    TASK_SERVICE
        .list_task_submissions(&req, actor, path.into_inner())
        .await
}

pub fn configure_tasks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tasks")
            .service(
                web::resource("")
                    .route(web::get().to(list_tasks))
                    .route(web::post().to(create_task)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_task))
                    .route(web::put().to(update_task))
                    .route(web::delete().to(delete_task)),
            )
            .service(web::resource("/{id}/stats").route(web::get().to(get_task_stats)))
            .service(
                web::resource("/{id}/submissions").route(web::get().to(list_task_submissions)),
            ),
    );
}
