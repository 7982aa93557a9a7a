//! 学生名册存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{InternshipError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
        responses::StudentListResponse,
    },
    tasks::entities::Task,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            student_code: Set(req.student_code),
            name: Set(req.name),
            major: Set(req.major),
            cohort: Set(req.cohort),
            active: Set(req.active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过账号 ID 获取学生
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出学生（分页）
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 专业筛选
        if let Some(ref major) = query.major {
            select = select.filter(Column::Major.eq(major));
        }

        // 在册状态筛选
        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }

        // 学号/姓名搜索
        if let Some(ref search) = query.search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(
                Condition::any()
                    .add(Column::StudentCode.like(&pattern))
                    .add(Column::Name.like(&pattern)),
            );
        }

        // 按学号排序，保证稳定输出
        select = select.order_by_asc(Column::StudentCode);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 解析任务的指派学生集合
    ///
    /// 专业过滤是逗号分隔的 OR 集合，在内存中匹配；
    /// 每次调用重新计算，学生名册变化后立即生效。
    pub async fn resolve_assignees_impl(&self, task: &Task) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::StudentCode)
            .all(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询学生名册失败: {e}")))?;

        Ok(students
            .into_iter()
            .map(|m| m.into_student())
            .filter(|s| task.targets_major(&s.major))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::in_memory_storage;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::tasks::requests::CreateTaskRequest;

    fn student(user_id: i64, code: &str, major: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            user_id,
            student_code: code.to_string(),
            name: format!("Student {code}"),
            major: major.to_string(),
            cohort: Some("2024".to_string()),
            active: Some(true),
        }
    }

    fn task(target_majors: Option<&str>) -> CreateTaskRequest {
        CreateTaskRequest {
            title: "Wireframe aplikasi".to_string(),
            description: None,
            due_date: chrono::Utc::now() + chrono::Duration::days(7),
            target_majors: target_majors.map(str::to_string),
            rubric_ids: None,
            attachments: None,
        }
    }

    #[tokio::test]
    async fn test_resolve_assignees_filters_by_major() {
        let storage = in_memory_storage().await;

        storage
            .create_student_impl(student(1, "S001", "RPL"))
            .await
            .unwrap();
        storage
            .create_student_impl(student(2, "S002", "TKJ"))
            .await
            .unwrap();
        storage
            .create_student_impl(student(3, "S003", "MM"))
            .await
            .unwrap();

        let t = storage
            .create_task_impl(100, task(Some("RPL,TKJ")))
            .await
            .unwrap();
        let assignees = storage.resolve_assignees_impl(&t).await.unwrap();

        let codes: Vec<_> = assignees.iter().map(|s| s.student_code.as_str()).collect();
        assert_eq!(codes, vec!["S001", "S002"]);
    }

    #[tokio::test]
    async fn test_resolve_assignees_general_task_targets_all_active() {
        let storage = in_memory_storage().await;

        storage
            .create_student_impl(student(1, "S001", "RPL"))
            .await
            .unwrap();
        let mut inactive = student(2, "S002", "TKJ");
        inactive.active = Some(false);
        storage.create_student_impl(inactive).await.unwrap();

        let t = storage.create_task_impl(100, task(None)).await.unwrap();
        let assignees = storage.resolve_assignees_impl(&t).await.unwrap();

        assert_eq!(assignees.len(), 1);
        assert_eq!(assignees[0].student_code, "S001");
    }

    #[tokio::test]
    async fn test_list_students_search_and_pagination() {
        let storage = in_memory_storage().await;

        for i in 1..=15 {
            storage
                .create_student_impl(student(i, &format!("S{i:03}"), "RPL"))
                .await
                .unwrap();
        }

        let page1 = storage
            .list_students_with_pagination_impl(crate::models::students::requests::StudentListQuery {
                page: Some(1),
                size: Some(10),
                major: None,
                search: None,
                active: None,
            })
            .await
            .unwrap();

        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.pagination.total, 15);
        assert_eq!(page1.pagination.total_pages, 2);

        let searched = storage
            .list_students_with_pagination_impl(crate::models::students::requests::StudentListQuery {
                page: Some(1),
                size: Some(10),
                major: None,
                search: Some("S001".to_string()),
                active: None,
            })
            .await
            .unwrap();

        assert_eq!(searched.items.len(), 1);
        assert_eq!(searched.items[0].student_code, "S001");
    }
}
