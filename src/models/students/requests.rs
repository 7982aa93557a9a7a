use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub student_code: String,
    pub name: String,
    pub major: String,
    pub cohort: Option<String>,
    pub active: Option<bool>,
}

/// 学生列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub major: Option<String>,
    pub search: Option<String>,
    pub active: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub major: Option<String>,
    pub search: Option<String>,
    pub active: Option<bool>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            major: params.major,
            search: params.search,
            active: params.active,
        }
    }
}
