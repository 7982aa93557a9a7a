//! 数据模型定义
//!
//! `entities` 为业务实体，`requests`/`responses` 为 HTTP 层数据结构。

pub mod common;
pub mod files;
pub mod students;
pub mod submissions;
pub mod tasks;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
