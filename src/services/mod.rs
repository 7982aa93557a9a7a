pub mod students;
pub mod submissions;
pub mod tasks;

pub use students::StudentService;
pub use submissions::SubmissionService;
pub use tasks::TaskService;

use actix_web::HttpResponse;

use crate::errors::InternshipError;
use crate::models::{ApiResponse, ErrorCode};

/// 把存储层错误映射为统一的 HTTP 响应
///
/// 错误信息原样透出（包含违反的字段、当前/期望状态），
/// 不做吞并或粗化；仅基础设施错误折叠为 500。
pub(crate) fn error_response(err: InternshipError, context: &str) -> HttpResponse {
    match err {
        InternshipError::Validation(msg) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::ValidationFailed, msg),
        ),
        InternshipError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        InternshipError::InvalidState(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::InvalidState, msg))
        }
        InternshipError::Authorization(msg) => {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, msg))
        }
        InternshipError::Authentication(msg) => {
            HttpResponse::Unauthorized().json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg))
        }
        other => {
            tracing::error!("{context}: {other}");
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("{context}: {other}"),
            ))
        }
    }
}
