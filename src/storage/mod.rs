use std::sync::Arc;

use crate::models::{
    files::entities::FileRef,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
        responses::StudentListResponse,
    },
    submissions::entities::{ReviewDecision, Submission},
    tasks::{
        entities::Task,
        requests::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest},
        responses::{TaskListResponse, TaskStatsResponse},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生名册方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过账号ID获取学生信息（JWT sub -> 名册记录）
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 解析任务的指派学生集合（按目标专业过滤，每次调用重新计算）
    async fn resolve_assignees(&self, task: &Task) -> Result<Vec<Student>>;

    /// 任务管理方法
    // 创建任务
    async fn create_task(&self, created_by: i64, task: CreateTaskRequest) -> Result<Task>;
    // 通过ID获取任务信息
    async fn get_task_by_id(&self, task_id: i64) -> Result<Option<Task>>;
    // 更新任务信息
    async fn update_task(&self, task_id: i64, update: UpdateTaskRequest) -> Result<Option<Task>>;
    // 删除任务（已有提交时拒绝）
    async fn delete_task(&self, task_id: i64) -> Result<bool>;
    // 列出任务
    async fn list_tasks_with_pagination(&self, query: TaskListQuery) -> Result<TaskListResponse>;
    // 列出全部任务（学生指派过滤在内存中完成，不分页）
    async fn list_all_tasks(&self, search: Option<String>) -> Result<Vec<Task>>;

    /// 提交台账方法
    // 获取某任务某学生的当前提交
    async fn get_submission(&self, task_id: i64, student_id: i64) -> Result<Option<Submission>>;
    // 学生开始任务（todo -> in_progress，创建稀疏行）
    async fn start_submission(&self, task_id: i64, student_id: i64) -> Result<Submission>;
    // 学生提交/重交（todo|in_progress|rejected -> submitted，覆盖旧内容）
    async fn submit(
        &self,
        task_id: i64,
        student_id: i64,
        files: Vec<FileRef>,
        note: Option<String>,
    ) -> Result<Submission>;
    // 导师评审（submitted -> approved|rejected，条件更新防并发双评）
    async fn review_submission(
        &self,
        task_id: i64,
        student_id: i64,
        reviewer_id: i64,
        decision: ReviewDecision,
        score: Option<f64>,
        review_notes: &str,
    ) -> Result<Submission>;
    // 学生撤回提交行（仅 in_progress）
    async fn withdraw_submission(&self, task_id: i64, student_id: i64) -> Result<bool>;
    // 列出某任务的全部提交行
    async fn list_task_submissions(&self, task_id: i64) -> Result<Vec<Submission>>;
    // 任务统计（各状态计数精确划分指派总数）
    async fn get_task_stats(&self, task_id: i64) -> Result<TaskStatsResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
