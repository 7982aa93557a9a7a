use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::files::entities::FileRef;

// 提交状态
//
// 台账采用稀疏表示：没有提交行即视为 todo，读路径统一按此解释。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Todo,       // 尚未开始（无提交行）
    InProgress, // 学生已开始，未提交
    Submitted,  // 已提交，等待评审
    Approved,   // 已通过（终态）
    Rejected,   // 已驳回，学生可重交
}

impl SubmissionStatus {
    pub const TODO: &'static str = "todo";
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const SUBMITTED: &'static str = "submitted";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";

    /// 该状态下学生是否可以提交（首交或重交）
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Todo | SubmissionStatus::InProgress | SubmissionStatus::Rejected
        )
    }

    /// 该状态下导师是否可以评审
    pub fn can_review(&self) -> bool {
        *self == SubmissionStatus::Submitted
    }

    /// 该状态下学生是否可以撤回提交行
    pub fn can_withdraw(&self) -> bool {
        *self == SubmissionStatus::InProgress
    }

    /// 是否为终态（approved 之后不再发生任何迁移）
    pub fn is_terminal(&self) -> bool {
        *self == SubmissionStatus::Approved
    }

    /// 可由学生提交迁入 submitted 的源状态集合，用于存储层的条件更新
    pub fn submittable_values() -> &'static [&'static str] {
        &[Self::TODO, Self::IN_PROGRESS, Self::REJECTED]
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: todo, in_progress, submitted, approved, rejected"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Todo => write!(f, "{}", SubmissionStatus::TODO),
            SubmissionStatus::InProgress => write!(f, "{}", SubmissionStatus::IN_PROGRESS),
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Approved => write!(f, "{}", SubmissionStatus::APPROVED),
            SubmissionStatus::Rejected => write!(f, "{}", SubmissionStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(SubmissionStatus::Todo),
            "in_progress" => Ok(SubmissionStatus::InProgress),
            "submitted" => Ok(SubmissionStatus::Submitted),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 评审决定
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

// 提交实体
//
// 每个 (task, student) 对至多一条当前提交；重交覆盖内容与时间戳。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub task_id: i64,
    pub student_id: i64,
    pub status: SubmissionStatus,
    pub files: Vec<FileRef>,
    pub note: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_late: bool,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub reviewer_id: Option<i64>,
    pub review_notes: Option<String>,
    pub score: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_allowed_states() {
        assert!(SubmissionStatus::Todo.can_submit());
        assert!(SubmissionStatus::InProgress.can_submit());
        assert!(SubmissionStatus::Rejected.can_submit());
        assert!(!SubmissionStatus::Submitted.can_submit());
        assert!(!SubmissionStatus::Approved.can_submit());
    }

    #[test]
    fn test_review_only_from_submitted() {
        assert!(SubmissionStatus::Submitted.can_review());
        assert!(!SubmissionStatus::Todo.can_review());
        assert!(!SubmissionStatus::InProgress.can_review());
        assert!(!SubmissionStatus::Approved.can_review());
        assert!(!SubmissionStatus::Rejected.can_review());
    }

    #[test]
    fn test_approved_is_terminal() {
        assert!(SubmissionStatus::Approved.is_terminal());
        assert!(!SubmissionStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_withdraw_only_in_progress() {
        assert!(SubmissionStatus::InProgress.can_withdraw());
        assert!(!SubmissionStatus::Submitted.can_withdraw());
        assert!(!SubmissionStatus::Rejected.can_withdraw());
    }

    #[test]
    fn test_status_round_trip() {
        for s in [
            SubmissionStatus::Todo,
            SubmissionStatus::InProgress,
            SubmissionStatus::Submitted,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            let parsed: SubmissionStatus = s.to_string().parse().expect("should parse");
            assert_eq!(parsed, s);
        }
    }
}
