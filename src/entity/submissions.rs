//! 提交实体
//!
//! 每个 (task, student) 对至多一行，重交覆盖旧内容而不是追加历史。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_id: i64,
    pub student_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub files: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub submitted_at: Option<i64>,
    pub is_late: bool,
    pub reviewed_at: Option<i64>,
    pub reviewer_id: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    pub score: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tasks::Entity",
        from = "Column::TaskId",
        to = "super::tasks::Column::Id"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus};
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            task_id: self.task_id,
            student_id: self.student_id,
            status: self
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Todo),
            files: serde_json::from_str(&self.files).unwrap_or_default(),
            note: self.note,
            submitted_at: self
                .submitted_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            is_late: self.is_late,
            reviewed_at: self
                .reviewed_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            reviewer_id: self.reviewer_id,
            review_notes: self.review_notes,
            score: self.score,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
