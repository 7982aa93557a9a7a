use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::submissions::requests::ReviewRequest;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 导师评审提交
/// POST /api/v1/tasks/{id}/students/{student_id}/review
///
/// 仅 submitted 状态可评审；并发双评由存储层条件更新串行化，
/// 后到的决定收到 409 而不是悄悄覆盖先到的。
pub async fn review_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    actor: Actor,
    task_id: i64,
    student_id: i64,
    req: ReviewRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 权限检查：只有导师或管理员可以评审
    if !actor.is_mentor() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有导师或管理员可以评审提交",
        )));
    }

    match storage
        .review_submission(
            task_id,
            student_id,
            actor.id,
            req.decision,
            req.score,
            &req.review_notes,
        )
        .await
    {
        Ok(submission) => {
            info!(
                task_id,
                student_id,
                reviewer_id = actor.id,
                status = %submission.status,
                "评审完成"
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评审完成")))
        }
        Err(e) => Ok(error_response(e, "评审提交失败")),
    }
}
