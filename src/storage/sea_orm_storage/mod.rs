//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod students;
mod submissions;
mod tasks;

use crate::config::AppConfig;
use crate::errors::{InternshipError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config.database.pool_size, config.database.timeout)
                .await?
        } else {
            Self::connect_generic(&db_url, config.database.pool_size, config.database.timeout)
                .await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| InternshipError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| InternshipError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| InternshipError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| InternshipError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(InternshipError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生名册模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn resolve_assignees(&self, task: &Task) -> Result<Vec<Student>> {
        self.resolve_assignees_impl(task).await
    }

    // 任务模块
    async fn create_task(&self, created_by: i64, task: CreateTaskRequest) -> Result<Task> {
        self.create_task_impl(created_by, task).await
    }

    async fn get_task_by_id(&self, task_id: i64) -> Result<Option<Task>> {
        self.get_task_by_id_impl(task_id).await
    }

    async fn update_task(&self, task_id: i64, update: UpdateTaskRequest) -> Result<Option<Task>> {
        self.update_task_impl(task_id, update).await
    }

    async fn delete_task(&self, task_id: i64) -> Result<bool> {
        self.delete_task_impl(task_id).await
    }

    async fn list_tasks_with_pagination(&self, query: TaskListQuery) -> Result<TaskListResponse> {
        self.list_tasks_with_pagination_impl(query).await
    }

    async fn list_all_tasks(&self, search: Option<String>) -> Result<Vec<Task>> {
        self.list_all_tasks_impl(search).await
    }

    // 提交台账模块
    async fn get_submission(&self, task_id: i64, student_id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(task_id, student_id).await
    }

    async fn start_submission(&self, task_id: i64, student_id: i64) -> Result<Submission> {
        self.start_submission_impl(task_id, student_id).await
    }

    async fn submit(
        &self,
        task_id: i64,
        student_id: i64,
        files: Vec<FileRef>,
        note: Option<String>,
    ) -> Result<Submission> {
        self.submit_impl(task_id, student_id, files, note).await
    }

    async fn review_submission(
        &self,
        task_id: i64,
        student_id: i64,
        reviewer_id: i64,
        decision: ReviewDecision,
        score: Option<f64>,
        review_notes: &str,
    ) -> Result<Submission> {
        self.review_submission_impl(
            task_id,
            student_id,
            reviewer_id,
            decision,
            score,
            review_notes,
        )
        .await
    }

    async fn withdraw_submission(&self, task_id: i64, student_id: i64) -> Result<bool> {
        self.withdraw_submission_impl(task_id, student_id).await
    }

    async fn list_task_submissions(&self, task_id: i64) -> Result<Vec<Submission>> {
        self.list_task_submissions_impl(task_id).await
    }

    async fn get_task_stats(&self, task_id: i64) -> Result<TaskStatsResponse> {
        self.get_task_stats_impl(task_id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! 测试用的内存数据库存储
    //!
    //! SQLite 内存库对每个连接都是独立的，连接池必须固定为单连接。

    use super::SeaOrmStorage;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    pub async fn in_memory_storage() -> SeaOrmStorage {
        let opt = SqliteConnectOptions::from_str("sqlite::memory:").expect("valid sqlite url");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opt)
            .await
            .expect("in-memory sqlite should connect");

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None)
            .await
            .expect("migrations should apply");

        SeaOrmStorage { db }
    }
}
