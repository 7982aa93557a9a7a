pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{CreateStudentRequest, StudentListParams};
use crate::models::users::entities::Actor;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        actor: Actor,
        req: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, actor, req).await
    }

    pub async fn list_students(
        &self,
        request: &HttpRequest,
        actor: Actor,
        params: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, actor, params).await
    }

    pub async fn get_student(
        &self,
        request: &HttpRequest,
        actor: Actor,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, request, actor, student_id).await
    }
}
