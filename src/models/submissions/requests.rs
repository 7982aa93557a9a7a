use serde::Deserialize;
use ts_rs::TS;

use crate::models::files::entities::FileRef;
use crate::models::submissions::entities::ReviewDecision;

/// 提交任务请求（首交与重交共用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitTaskRequest {
    // 至少一个文件，文件本体已经由上传服务保管
    pub files: Vec<FileRef>,
    pub note: Option<String>,
}

/// 评审请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ReviewRequest {
    pub decision: ReviewDecision,
    // approve 时必填，0-100；reject 时忽略
    pub score: Option<f64>,
    pub review_notes: String,
}
