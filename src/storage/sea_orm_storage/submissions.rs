//! 提交台账存储操作
//!
//! 状态机的全部迁移在这里落库。submit/review 都走条件更新：
//! 只有当前状态仍然允许迁移时才会写入，并发竞争的失败方收到
//! InvalidState 而不是静默覆盖。

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{InternshipError, Result};
use crate::models::{
    files::entities::FileRef,
    submissions::entities::{ReviewDecision, Submission, SubmissionStatus},
    tasks::responses::TaskStatsResponse,
};
use crate::utils::lateness::is_late;
use crate::utils::validate::{validate_review_notes, validate_score, validate_submission_files};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 获取某任务某学生的当前提交
    pub async fn get_submission_impl(
        &self,
        task_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::TaskId.eq(task_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 学生开始任务（todo -> in_progress）
    ///
    /// 台账采用稀疏表示，这里才真正创建 (task, student) 行。
    pub async fn start_submission_impl(
        &self,
        task_id: i64,
        student_id: i64,
    ) -> Result<Submission> {
        if let Some(existing) = self.get_submission_impl(task_id, student_id).await? {
            return Err(InternshipError::invalid_state(format!(
                "任务已开始，当前状态: {}",
                existing.status
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            task_id: Set(task_id),
            student_id: Set(student_id),
            status: Set(SubmissionStatus::InProgress.to_string()),
            files: Set("[]".to_string()),
            is_late: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("创建提交行失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 学生提交/重交（todo|in_progress|rejected -> submitted）
    ///
    /// 覆盖旧的文件与备注，重置评审字段；迟交按当前时间对比
    /// 原始截止时间计算，重交不享受宽限。整个调用 all-or-nothing：
    /// 任何前置校验失败都不落库。
    pub async fn submit_impl(
        &self,
        task_id: i64,
        student_id: i64,
        files: Vec<FileRef>,
        note: Option<String>,
    ) -> Result<Submission> {
        validate_submission_files(&files).map_err(InternshipError::validation)?;

        let task = self
            .get_task_by_id_impl(task_id)
            .await?
            .ok_or_else(|| InternshipError::not_found(format!("任务不存在: {task_id}")))?;

        let now = chrono::Utc::now();
        let late = is_late(now, task.due_date);
        let files_json = serde_json::to_string(&files)?;

        match self.get_submission_impl(task_id, student_id).await? {
            None => {
                // 首交：直接插入 submitted 行，唯一索引挡住并发重复插入
                let model = ActiveModel {
                    task_id: Set(task_id),
                    student_id: Set(student_id),
                    status: Set(SubmissionStatus::Submitted.to_string()),
                    files: Set(files_json),
                    note: Set(note),
                    submitted_at: Set(Some(now.timestamp())),
                    is_late: Set(late),
                    created_at: Set(now.timestamp()),
                    updated_at: Set(now.timestamp()),
                    ..Default::default()
                };

                let result = model.insert(&self.db).await.map_err(|e| {
                    InternshipError::database_operation(format!("创建提交失败: {e}"))
                })?;

                Ok(result.into_submission())
            }
            Some(existing) => {
                if !existing.status.can_submit() {
                    return Err(InternshipError::invalid_state(format!(
                        "当前状态 {} 不允许提交，允许: todo/in_progress/rejected",
                        existing.status
                    )));
                }

                // 条件更新：仅当状态仍允许提交时写入
                let result = Submissions::update_many()
                    .set(ActiveModel {
                        status: Set(SubmissionStatus::Submitted.to_string()),
                        files: Set(files_json),
                        note: Set(note),
                        submitted_at: Set(Some(now.timestamp())),
                        is_late: Set(late),
                        reviewed_at: Set(None),
                        reviewer_id: Set(None),
                        review_notes: Set(None),
                        score: Set(None),
                        updated_at: Set(now.timestamp()),
                        ..Default::default()
                    })
                    .filter(Column::Id.eq(existing.id))
                    .filter(
                        Column::Status.is_in(SubmissionStatus::submittable_values().iter().copied()),
                    )
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        InternshipError::database_operation(format!("更新提交失败: {e}"))
                    })?;

                if result.rows_affected == 0 {
                    return Err(InternshipError::invalid_state(
                        "提交与其他操作冲突，状态已变更，请刷新后重试",
                    ));
                }

                self.get_submission_impl(task_id, student_id)
                    .await?
                    .ok_or_else(|| InternshipError::database_operation("提交行丢失"))
            }
        }
    }

    /// 导师评审（submitted -> approved|rejected）
    ///
    /// 条件更新保证同一提交至多记录一个评审决定，
    /// 并发双评的后到者收到 InvalidState。
    pub async fn review_submission_impl(
        &self,
        task_id: i64,
        student_id: i64,
        reviewer_id: i64,
        decision: ReviewDecision,
        score: Option<f64>,
        review_notes: &str,
    ) -> Result<Submission> {
        validate_review_notes(review_notes).map_err(InternshipError::validation)?;

        // approve 必须带分数；reject 不记分（schema 允许但按观察到的用法不存）
        let stored_score = match decision {
            ReviewDecision::Approve => {
                let score = score.ok_or_else(|| {
                    InternshipError::validation("通过评审必须给出 0-100 的分数")
                })?;
                validate_score(score).map_err(InternshipError::validation)?;
                Some(score)
            }
            ReviewDecision::Reject => None,
        };

        let existing = self
            .get_submission_impl(task_id, student_id)
            .await?
            .ok_or_else(|| {
                InternshipError::not_found(format!(
                    "提交不存在: task={task_id}, student={student_id}"
                ))
            })?;

        if !existing.status.can_review() {
            return Err(InternshipError::invalid_state(format!(
                "当前状态 {} 不允许评审，仅 submitted 可评审",
                existing.status
            )));
        }

        let new_status = match decision {
            ReviewDecision::Approve => SubmissionStatus::Approved,
            ReviewDecision::Reject => SubmissionStatus::Rejected,
        };

        let now = chrono::Utc::now().timestamp();
        let result = Submissions::update_many()
            .set(ActiveModel {
                status: Set(new_status.to_string()),
                reviewed_at: Set(Some(now)),
                reviewer_id: Set(Some(reviewer_id)),
                review_notes: Set(Some(review_notes.to_string())),
                score: Set(stored_score),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(Column::Id.eq(existing.id))
            .filter(Column::Status.eq(SubmissionStatus::SUBMITTED))
            .exec(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("写入评审失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(InternshipError::invalid_state(
                "评审冲突：该提交已被其他评审者处理",
            ));
        }

        self.get_submission_impl(task_id, student_id)
            .await?
            .ok_or_else(|| InternshipError::database_operation("提交行丢失"))
    }

    /// 学生撤回提交行
    ///
    /// 仅 in_progress 可撤回；已提交/已评审的记录只能由管理侧处理。
    pub async fn withdraw_submission_impl(&self, task_id: i64, student_id: i64) -> Result<bool> {
        let Some(existing) = self.get_submission_impl(task_id, student_id).await? else {
            return Ok(false);
        };

        if !existing.status.can_withdraw() {
            return Err(InternshipError::invalid_state(format!(
                "当前状态 {} 不允许撤回，仅 in_progress 可撤回",
                existing.status
            )));
        }

        let result = Submissions::delete_many()
            .filter(Column::Id.eq(existing.id))
            .filter(Column::Status.eq(SubmissionStatus::IN_PROGRESS))
            .exec(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("撤回提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出某任务的全部提交行
    pub async fn list_task_submissions_impl(&self, task_id: i64) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::TaskId.eq(task_id))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| InternshipError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 任务统计
    ///
    /// total 为指派学生总数；无提交行的学生计入 todo；
    /// 不在指派集合内的遗留行不参与计数，五个桶精确划分 total。
    pub async fn get_task_stats_impl(&self, task_id: i64) -> Result<TaskStatsResponse> {
        let task = self
            .get_task_by_id_impl(task_id)
            .await?
            .ok_or_else(|| InternshipError::not_found(format!("任务不存在: {task_id}")))?;

        let assignees = self.resolve_assignees_impl(&task).await?;
        let assignee_ids: HashSet<i64> = assignees.iter().map(|s| s.id).collect();
        let total = assignees.len() as i64;

        let rows = self.list_task_submissions_impl(task_id).await?;

        let mut explicit_todo = 0i64;
        let mut in_progress = 0i64;
        let mut submitted = 0i64;
        let mut approved = 0i64;
        let mut rejected = 0i64;

        for row in &rows {
            if !assignee_ids.contains(&row.student_id) {
                continue;
            }
            match row.status {
                SubmissionStatus::Todo => explicit_todo += 1,
                SubmissionStatus::InProgress => in_progress += 1,
                SubmissionStatus::Submitted => submitted += 1,
                SubmissionStatus::Approved => approved += 1,
                SubmissionStatus::Rejected => rejected += 1,
            }
        }

        let counted = explicit_todo + in_progress + submitted + approved + rejected;
        let todo = total - counted + explicit_todo;

        Ok(TaskStatsResponse {
            task_id,
            total,
            todo,
            in_progress,
            submitted,
            approved,
            rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::SeaOrmStorage;
    use super::super::test_support::in_memory_storage;
    use crate::errors::InternshipError;
    use crate::models::files::entities::FileRef;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::submissions::entities::{ReviewDecision, SubmissionStatus};
    use crate::models::tasks::entities::Task;
    use crate::models::tasks::requests::{CreateTaskRequest, UpdateTaskRequest};
    use crate::models::tasks::responses::TaskStatsResponse;

    fn file(name: &str) -> FileRef {
        FileRef {
            url: format!("https://storage.example.com/f/{name}"),
            filename: Some(name.to_string()),
            size_bytes: Some(2048),
            mime_type: Some("application/pdf".to_string()),
        }
    }

    async fn seed_student(storage: &SeaOrmStorage, user_id: i64, code: &str, major: &str) -> i64 {
        storage
            .create_student_impl(CreateStudentRequest {
                user_id,
                student_code: code.to_string(),
                name: format!("Student {code}"),
                major: major.to_string(),
                cohort: Some("2024".to_string()),
                active: Some(true),
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_task(storage: &SeaOrmStorage, due_in_hours: i64) -> Task {
        storage
            .create_task_impl(
                100,
                CreateTaskRequest {
                    title: "Laporan mingguan".to_string(),
                    description: Some("Susun laporan kegiatan minggu ini".to_string()),
                    due_date: chrono::Utc::now() + chrono::Duration::hours(due_in_hours),
                    target_majors: None,
                    rubric_ids: None,
                    attachments: None,
                },
            )
            .await
            .unwrap()
    }

    /// 把任务截止时间改到过去，模拟时间前进到截止之后
    async fn move_due_date_to_past(storage: &SeaOrmStorage, task_id: i64) {
        storage
            .update_task_impl(
                task_id,
                UpdateTaskRequest {
                    title: None,
                    description: None,
                    due_date: Some(chrono::Utc::now() - chrono::Duration::hours(1)),
                    target_majors: None,
                    rubric_ids: None,
                    attachments: None,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_row_means_todo() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        assert!(
            storage
                .get_submission_impl(task.id, student_id)
                .await
                .unwrap()
                .is_none()
        );

        let stats = storage.get_task_stats_impl(task.id).await.unwrap();
        assert_eq!(stats.todo, 1);
        assert_eq!(stats.total, 1);
    }

    #[tokio::test]
    async fn test_submit_with_zero_files_fails_without_mutation() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        let err = storage
            .submit_impl(task.id, student_id, vec![], Some("done".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::Validation(_)));

        // 台账未被触碰
        assert!(
            storage
                .get_submission_impl(task.id, student_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_successful_submit_sets_timestamp_and_on_time_flag() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        let before = chrono::Utc::now();
        let submission = storage
            .submit_impl(task.id, student_id, vec![file("a.pdf")], None)
            .await
            .unwrap();
        let after = chrono::Utc::now();

        assert_eq!(submission.status, SubmissionStatus::Submitted);
        assert!(!submission.is_late);
        let submitted_at = submission.submitted_at.expect("submitted_at must be set");
        assert!(submitted_at >= before - chrono::Duration::seconds(1));
        assert!(submitted_at <= after + chrono::Duration::seconds(1));
        // 未评审时评审字段必须为空
        assert!(submission.reviewed_at.is_none());
        assert!(submission.score.is_none());
    }

    #[tokio::test]
    async fn test_submit_after_due_date_is_late() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        move_due_date_to_past(&storage, task.id).await;

        let submission = storage
            .submit_impl(task.id, student_id, vec![file("a.pdf")], None)
            .await
            .unwrap();
        assert!(submission.is_late);
    }

    #[tokio::test]
    async fn test_start_creates_in_progress_row_once() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        let row = storage
            .start_submission_impl(task.id, student_id)
            .await
            .unwrap();
        assert_eq!(row.status, SubmissionStatus::InProgress);
        assert!(row.submitted_at.is_none());

        let err = storage
            .start_submission_impl(task.id, student_id)
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_review_without_submission_is_not_found() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        let err = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Approve,
                Some(90.0),
                "Sudah sesuai dengan rubrik",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_review_in_progress_is_invalid_state() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        storage
            .start_submission_impl(task.id, student_id)
            .await
            .unwrap();

        let err = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Approve,
                Some(90.0),
                "Sudah sesuai dengan rubrik",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_review_validation_failures_leave_ledger_unchanged() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        storage
            .submit_impl(task.id, student_id, vec![file("a.pdf")], None)
            .await
            .unwrap();

        // 评语太短
        let err = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Reject,
                None,
                "singkat",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::Validation(_)));

        // approve 缺分数
        let err = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Approve,
                None,
                "Sudah sesuai dengan rubrik",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::Validation(_)));

        // 分数越界
        let err = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Approve,
                Some(150.0),
                "Sudah sesuai dengan rubrik",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::Validation(_)));

        // 全部失败，状态保持 submitted
        let row = storage
            .get_submission_impl(task.id, student_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, SubmissionStatus::Submitted);
        assert!(row.reviewed_at.is_none());
    }

    #[tokio::test]
    async fn test_reject_resubmit_approve_full_lifecycle() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        // 按时首交
        let first = storage
            .submit_impl(
                task.id,
                student_id,
                vec![file("laporan-v1.pdf")],
                Some("Versi pertama".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(first.status, SubmissionStatus::Submitted);
        assert!(!first.is_late);

        // 驳回
        let rejected = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Reject,
                None,
                "Perlu revisi pada bagian pengujian",
            )
            .await
            .unwrap();
        assert_eq!(rejected.status, SubmissionStatus::Rejected);
        assert!(rejected.reviewed_at.is_some());
        assert!(rejected.score.is_none());

        // 截止时间已过后重交：用原始截止时间判定，记为迟交
        move_due_date_to_past(&storage, task.id).await;
        let resubmitted = storage
            .submit_impl(
                task.id,
                student_id,
                vec![file("laporan-v2.pdf")],
                Some("Sudah direvisi".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(resubmitted.status, SubmissionStatus::Submitted);
        assert!(resubmitted.is_late);
        // 重交覆盖内容并清空评审字段
        assert_eq!(
            resubmitted.files[0].filename.as_deref(),
            Some("laporan-v2.pdf")
        );
        assert!(resubmitted.reviewed_at.is_none());
        assert!(resubmitted.review_notes.is_none());

        // 通过
        let approved = storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Approve,
                Some(85.0),
                "Revisi sudah baik, diterima.",
            )
            .await
            .unwrap();
        assert_eq!(approved.status, SubmissionStatus::Approved);
        assert_eq!(approved.score, Some(85.0));
        assert!(approved.reviewed_at.is_some());

        // approved 为终态：再次提交被拒
        let err = storage
            .submit_impl(task.id, student_id, vec![file("laporan-v3.pdf")], None)
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_double_review_records_only_first_decision() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        storage
            .submit_impl(task.id, student_id, vec![file("a.pdf")], None)
            .await
            .unwrap();

        storage
            .review_submission_impl(
                task.id,
                student_id,
                100,
                ReviewDecision::Approve,
                Some(88.0),
                "Sudah sesuai dengan rubrik",
            )
            .await
            .unwrap();

        // 第二个评审者（比如双击）到达时状态已不再是 submitted
        let err = storage
            .review_submission_impl(
                task.id,
                student_id,
                101,
                ReviewDecision::Reject,
                None,
                "Perlu revisi pada bagian pengujian",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::InvalidState(_)));

        // 第一个决定保持不变
        let row = storage
            .get_submission_impl(task.id, student_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, SubmissionStatus::Approved);
        assert_eq!(row.reviewer_id, Some(100));
        assert_eq!(row.score, Some(88.0));
    }

    #[tokio::test]
    async fn test_withdraw_only_in_progress() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;
        let student_id = seed_student(&storage, 1, "S001", "RPL").await;

        // 无行可撤
        assert!(
            !storage
                .withdraw_submission_impl(task.id, student_id)
                .await
                .unwrap()
        );

        storage
            .start_submission_impl(task.id, student_id)
            .await
            .unwrap();
        assert!(
            storage
                .withdraw_submission_impl(task.id, student_id)
                .await
                .unwrap()
        );

        // 已提交后不可撤回
        storage
            .submit_impl(task.id, student_id, vec![file("a.pdf")], None)
            .await
            .unwrap();
        let err = storage
            .withdraw_submission_impl(task.id, student_id)
            .await
            .unwrap_err();
        assert!(matches!(err, InternshipError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_stats_partition_ten_students() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;

        let mut student_ids = Vec::new();
        for i in 1..=10 {
            student_ids.push(seed_student(&storage, i, &format!("S{i:03}"), "RPL").await);
        }

        // 5 人提交，其中 1 人被通过、1 人被驳回，3 人等待评审，5 人未动
        for student_id in student_ids.iter().take(5) {
            storage
                .submit_impl(task.id, *student_id, vec![file("a.pdf")], None)
                .await
                .unwrap();
        }
        storage
            .review_submission_impl(
                task.id,
                student_ids[0],
                100,
                ReviewDecision::Approve,
                Some(90.0),
                "Sudah sesuai dengan rubrik",
            )
            .await
            .unwrap();
        storage
            .review_submission_impl(
                task.id,
                student_ids[1],
                100,
                ReviewDecision::Reject,
                None,
                "Perlu revisi pada bagian pengujian",
            )
            .await
            .unwrap();

        let stats = storage.get_task_stats_impl(task.id).await.unwrap();
        assert_eq!(
            stats,
            TaskStatsResponse {
                task_id: task.id,
                total: 10,
                todo: 5,
                in_progress: 0,
                submitted: 3,
                approved: 1,
                rejected: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_stats_buckets_always_partition_total() {
        let storage = in_memory_storage().await;
        let task = seed_task(&storage, 24).await;

        let s1 = seed_student(&storage, 1, "S001", "RPL").await;
        let s2 = seed_student(&storage, 2, "S002", "RPL").await;
        let _s3 = seed_student(&storage, 3, "S003", "RPL").await;

        storage.start_submission_impl(task.id, s1).await.unwrap();
        storage
            .submit_impl(task.id, s2, vec![file("a.pdf")], None)
            .await
            .unwrap();

        let stats = storage.get_task_stats_impl(task.id).await.unwrap();
        assert_eq!(
            stats.total,
            stats.todo + stats.in_progress + stats.submitted + stats.approved + stats.rejected
        );
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.submitted, 1);
        assert_eq!(stats.todo, 1);
    }

    #[tokio::test]
    async fn test_stats_unknown_task_is_not_found() {
        let storage = in_memory_storage().await;
        let err = storage.get_task_stats_impl(9999).await.unwrap_err();
        assert!(matches!(err, InternshipError::NotFound(_)));
    }
}
