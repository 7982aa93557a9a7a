use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::files::entities::FileRef;

// 任务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct Task {
    // 唯一 ID
    pub id: i64,
    // 任务标题
    pub title: String,
    // 任务描述（富文本）
    pub description: Option<String>,
    // 截止时间（必填）
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 目标专业过滤，逗号分隔的 OR 集合，如 "RPL,TKJ"；空表示面向全体
    pub target_majors: Option<String>,
    // 关联的评分量规 ID 列表
    pub rubric_ids: Vec<i64>,
    // 任务级附件（非提交附件）
    pub attachments: Vec<FileRef>,
    // 创建者（导师/管理员）ID
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Task {
    /// 是否为面向全体学生的任务（无专业过滤）
    pub fn is_general(&self) -> bool {
        match &self.target_majors {
            None => true,
            Some(filter) => {
                let f = filter.trim();
                f.is_empty() || f.eq_ignore_ascii_case("general")
            }
        }
    }

    /// 任务是否指派给该专业的学生
    ///
    /// 过滤是 OR 集合："RPL,TKJ" 匹配两个专业中的任意一个。
    pub fn targets_major(&self, major: &str) -> bool {
        if self.is_general() {
            return true;
        }
        self.target_majors
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .any(|m| m.eq_ignore_ascii_case(major))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_filter(filter: Option<&str>) -> Task {
        Task {
            id: 1,
            title: "Wireframe".to_string(),
            description: None,
            due_date: chrono::Utc::now(),
            target_majors: filter.map(str::to_string),
            rubric_ids: vec![],
            attachments: vec![],
            created_by: 10,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_general_task_targets_everyone() {
        assert!(task_with_filter(None).targets_major("RPL"));
        assert!(task_with_filter(Some("")).targets_major("TKJ"));
        assert!(task_with_filter(Some("general")).targets_major("MM"));
    }

    #[test]
    fn test_filter_is_or_set() {
        let t = task_with_filter(Some("RPL,TKJ"));
        assert!(t.targets_major("RPL"));
        assert!(t.targets_major("TKJ"));
        assert!(!t.targets_major("MM"));
    }

    #[test]
    fn test_filter_tolerates_spaces_and_case() {
        let t = task_with_filter(Some("rpl, tkj"));
        assert!(t.targets_major("RPL"));
        assert!(t.targets_major("TKJ"));
    }
}
