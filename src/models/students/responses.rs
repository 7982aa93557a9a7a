use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::students::entities::Student;

/// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}
