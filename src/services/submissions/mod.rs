pub mod review;
pub mod start;
pub mod submit;
pub mod withdraw;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::entities::Student;
use crate::models::submissions::requests::{ReviewRequest, SubmitTaskRequest};
use crate::models::tasks::entities::Task;
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn start_task(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        start::start_task(self, request, actor, task_id).await
    }

    pub async fn submit_task(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
        req: SubmitTaskRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_task(self, request, actor, task_id, req).await
    }

    pub async fn withdraw_submission(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        withdraw::withdraw_submission(self, request, actor, task_id).await
    }

    pub async fn review_submission(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
        student_id: i64,
        req: ReviewRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_submission(self, request, actor, task_id, student_id, req).await
    }
}

/// 检查学生身份并确认任务指派给该学生
///
/// 提交侧的公共前置：操作者必须是名册中的学生，任务必须存在
/// 且其专业过滤命中该学生。
async fn resolve_assigned_student(
    storage: &Arc<dyn Storage>,
    actor: Actor,
    task_id: i64,
) -> Result<(Task, Student), HttpResponse> {
    if !actor.is_student() {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有学生可以执行此操作",
        )));
    }

    let student = match storage.get_student_by_user_id(actor.id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "当前账号不在学生名册中",
            )));
        }
        Err(e) => return Err(error_response(e, "查询学生名册失败")),
    };

    let task = match storage.get_task_by_id(task_id).await {
        Ok(Some(task)) => task,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TaskNotFound,
                "任务不存在",
            )));
        }
        Err(e) => return Err(error_response(e, "查询任务失败")),
    };

    if !task.targets_major(&student.major) {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "该任务未指派给当前学生",
        )));
    }

    Ok((task, student))
}
