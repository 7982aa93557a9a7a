//! 任务存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::tasks::{ActiveModel, Column, Entity as Tasks};
use crate::errors::{InternshipError, Result};
use crate::models::{
    PaginationInfo,
    tasks::{
        entities::Task,
        requests::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest},
        responses::TaskListResponse,
    },
};
use crate::utils::escape_like_pattern;
use crate::utils::validate::{validate_target_majors, validate_task_title};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建任务
    ///
    /// 截止时间不得早于创建时刻（仅创建时检查，之后时间自然前进不受影响）。
    pub async fn create_task_impl(&self, created_by: i64, req: CreateTaskRequest) -> Result<Task> {
        validate_task_title(&req.title).map_err(InternshipError::validation)?;
        if let Some(ref filter) = req.target_majors {
            validate_target_majors(filter).map_err(InternshipError::validation)?;
        }

        let now = chrono::Utc::now();
        if req.due_date < now {
            return Err(InternshipError::validation(format!(
                "截止时间不得早于创建时间: due_date={}, now={}",
                req.due_date.to_rfc3339(),
                now.to_rfc3339()
            )));
        }

        let rubric_ids = match req.rubric_ids {
            Some(ref ids) if !ids.is_empty() => Some(serde_json::to_string(ids)?),
            _ => None,
        };
        let attachments = match req.attachments {
            Some(ref files) if !files.is_empty() => Some(serde_json::to_string(files)?),
            _ => None,
        };

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            target_majors: Set(req.target_majors),
            rubric_ids: Set(rubric_ids),
            attachments: Set(attachments),
            created_by: Set(created_by),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("创建任务失败: {e}")))?;

        Ok(result.into_task())
    }

    /// 通过 ID 获取任务
    pub async fn get_task_by_id_impl(&self, task_id: i64) -> Result<Option<Task>> {
        let result = Tasks::find_by_id(task_id)
            .one(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询任务失败: {e}")))?;

        Ok(result.map(|m| m.into_task()))
    }

    /// 更新任务（部分字段）
    ///
    /// 已有提交时同样允许编辑；历史提交的 is_late 不做追溯重算。
    pub async fn update_task_impl(
        &self,
        task_id: i64,
        update: UpdateTaskRequest,
    ) -> Result<Option<Task>> {
        let Some(existing) = Tasks::find_by_id(task_id)
            .one(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询任务失败: {e}")))?
        else {
            return Ok(None);
        };

        if let Some(ref title) = update.title {
            validate_task_title(title).map_err(InternshipError::validation)?;
        }
        if let Some(ref filter) = update.target_majors {
            validate_target_majors(filter).map_err(InternshipError::validation)?;
        }

        let mut model: ActiveModel = existing.into_active_model();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }
        if let Some(target_majors) = update.target_majors {
            model.target_majors = Set(if target_majors.trim().is_empty() {
                None
            } else {
                Some(target_majors)
            });
        }
        if let Some(rubric_ids) = update.rubric_ids {
            model.rubric_ids = Set(if rubric_ids.is_empty() {
                None
            } else {
                Some(serde_json::to_string(&rubric_ids)?)
            });
        }
        if let Some(attachments) = update.attachments {
            model.attachments = Set(if attachments.is_empty() {
                None
            } else {
                Some(serde_json::to_string(&attachments)?)
            });
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("更新任务失败: {e}")))?;

        Ok(Some(result.into_task()))
    }

    /// 删除任务
    ///
    /// 已有提交行时拒绝删除，评审记录不可静默销毁。
    pub async fn delete_task_impl(&self, task_id: i64) -> Result<bool> {
        let submission_count = Submissions::find()
            .filter(SubmissionColumn::TaskId.eq(task_id))
            .count(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询提交数失败: {e}")))?;

        if submission_count > 0 {
            return Err(InternshipError::invalid_state(format!(
                "任务已有 {submission_count} 条提交，不允许删除"
            )));
        }

        let result = Tasks::delete_by_id(task_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("删除任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出全部任务（不分页，按截止时间排序）
    pub async fn list_all_tasks_impl(&self, search: Option<String>) -> Result<Vec<Task>> {
        let mut select = Tasks::find();

        if let Some(ref search) = search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(&pattern))
                    .add(Column::Description.like(&pattern)),
            );
        }

        let tasks = select
            .order_by_asc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(tasks.into_iter().map(|m| m.into_task()).collect())
    }

    /// 列出任务（分页，按截止时间排序）
    pub async fn list_tasks_with_pagination_impl(
        &self,
        query: TaskListQuery,
    ) -> Result<TaskListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Tasks::find();

        // 创建者筛选
        if let Some(created_by) = query.created_by {
            select = select.filter(Column::CreatedBy.eq(created_by));
        }

        // 标题/描述搜索
        if let Some(ref search) = query.search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(&pattern))
                    .add(Column::Description.like(&pattern)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::DueDate);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询任务总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询任务页数失败: {e}")))?;

        let tasks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(TaskListResponse {
            items: tasks.into_iter().map(|m| m.into_task()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::in_memory_storage;
    use crate::errors::InternshipError;
    use crate::models::files::entities::FileRef;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::tasks::requests::{CreateTaskRequest, UpdateTaskRequest};

    fn valid_task() -> CreateTaskRequest {
        CreateTaskRequest {
            title: "Buat high-fidelity wireframe".to_string(),
            description: Some("Gunakan Figma untuk layar utama".to_string()),
            due_date: chrono::Utc::now() + chrono::Duration::days(7),
            target_majors: Some("RPL".to_string()),
            rubric_ids: Some(vec![3, 7]),
            attachments: None,
        }
    }

    #[tokio::test]
    async fn test_create_task_round_trip() {
        let storage = in_memory_storage().await;

        let created = storage.create_task_impl(10, valid_task()).await.unwrap();
        let fetched = storage
            .get_task_by_id_impl(created.id)
            .await
            .unwrap()
            .expect("task should exist");

        assert_eq!(fetched.title, "Buat high-fidelity wireframe");
        assert_eq!(fetched.rubric_ids, vec![3, 7]);
        assert_eq!(fetched.created_by, 10);
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_title() {
        let storage = in_memory_storage().await;

        let mut req = valid_task();
        req.title = "  ".to_string();
        let err = storage.create_task_impl(10, req).await.unwrap_err();
        assert!(matches!(err, InternshipError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_task_rejects_past_due_date() {
        let storage = in_memory_storage().await;

        let mut req = valid_task();
        req.due_date = chrono::Utc::now() - chrono::Duration::hours(1);
        let err = storage.create_task_impl(10, req).await.unwrap_err();
        assert!(matches!(err, InternshipError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_task_partial_fields() {
        let storage = in_memory_storage().await;

        let created = storage.create_task_impl(10, valid_task()).await.unwrap();
        let updated = storage
            .update_task_impl(
                created.id,
                UpdateTaskRequest {
                    title: Some("Susun interactive prototype".to_string()),
                    description: None,
                    due_date: None,
                    target_majors: None,
                    rubric_ids: None,
                    attachments: None,
                },
            )
            .await
            .unwrap()
            .expect("task should exist");

        assert_eq!(updated.title, "Susun interactive prototype");
        // 未提供的字段保持原值
        assert_eq!(
            updated.description.as_deref(),
            Some("Gunakan Figma untuk layar utama")
        );
    }

    #[tokio::test]
    async fn test_update_unknown_task_returns_none() {
        let storage = in_memory_storage().await;

        let result = storage
            .update_task_impl(
                9999,
                UpdateTaskRequest {
                    title: Some("x".to_string()),
                    description: None,
                    due_date: None,
                    target_majors: None,
                    rubric_ids: None,
                    attachments: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_task_blocked_when_submissions_exist() {
        let storage = in_memory_storage().await;

        let task = storage.create_task_impl(10, valid_task()).await.unwrap();
        let student = storage
            .create_student_impl(CreateStudentRequest {
                user_id: 1,
                student_code: "S001".to_string(),
                name: "Andi".to_string(),
                major: "RPL".to_string(),
                cohort: None,
                active: Some(true),
            })
            .await
            .unwrap();

        storage
            .submit_impl(
                task.id,
                student.id,
                vec![FileRef {
                    url: "https://storage.example.com/f/a.pdf".to_string(),
                    filename: Some("a.pdf".to_string()),
                    size_bytes: Some(1024),
                    mime_type: Some("application/pdf".to_string()),
                }],
                None,
            )
            .await
            .unwrap();

        let err = storage.delete_task_impl(task.id).await.unwrap_err();
        assert!(matches!(err, InternshipError::InvalidState(_)));

        // 任务仍然存在
        assert!(storage.get_task_by_id_impl(task.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_task_without_submissions() {
        let storage = in_memory_storage().await;

        let task = storage.create_task_impl(10, valid_task()).await.unwrap();
        assert!(storage.delete_task_impl(task.id).await.unwrap());
        assert!(storage.get_task_by_id_impl(task.id).await.unwrap().is_none());
    }
}
