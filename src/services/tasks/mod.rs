pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod stats;
pub mod submissions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tasks::requests::{CreateTaskRequest, TaskListParams, UpdateTaskRequest};
use crate::models::users::entities::Actor;
use crate::storage::Storage;

pub struct TaskService {
    storage: Option<Arc<dyn Storage>>,
}

impl TaskService {
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

    pub async fn create_task(
        &self,
        request: &HttpRequest,
        actor: Actor,
        req: CreateTaskRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_task(self, request, actor, req).await
    }

    pub async fn list_tasks(
        &self,
        request: &HttpRequest,
        actor: Actor,
        params: TaskListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_tasks(self, request, actor, params).await
    }

    pub async fn get_task(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_task(self, request, actor, task_id).await
    }

    pub async fn update_task(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
        req: UpdateTaskRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_task(self, request, actor, task_id, req).await
    }

    pub async fn delete_task(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_task(self, request, actor, task_id).await
    }

    pub async fn get_task_stats(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        stats::get_task_stats(self, request, actor, task_id).await
    }

    pub async fn list_task_submissions(
        &self,
        request: &HttpRequest,
        actor: Actor,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        submissions::list_task_submissions(self, request, actor, task_id).await
    }
}
