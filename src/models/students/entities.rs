use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生名册记录
//
// 名册由管理员维护；账号与角色在外部身份服务，user_id 为其账号 ID。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    // 学号
    pub student_code: String,
    pub name: String,
    // 专业，如 "RPL"、"TKJ"
    pub major: String,
    // 届别，如 "2024"
    pub cohort: Option<String>,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
