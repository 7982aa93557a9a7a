use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::tasks::requests::{TaskListParams, TaskListQuery};
use crate::models::tasks::responses::{StudentTaskListItem, StudentTaskListResponse};
use crate::models::users::entities::Actor;
use crate::models::{ApiResponse, ErrorCode, PaginationInfo};
use crate::services::error_response;

/// 列出任务
/// GET /api/v1/tasks
///
/// 导师/管理员看到全部任务；学生只看到指派给自己的任务，
/// 每项附带本人的提交状态，可按状态过滤。
pub async fn list_tasks(
    service: &TaskService,
    request: &HttpRequest,
    actor: Actor,
    params: TaskListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if !actor.is_student() {
        // 导师/管理员视角：直接分页
        let query = TaskListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
            created_by: params.created_by,
        };

        return match storage.list_tasks_with_pagination(query).await {
            Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "查询成功"))),
            Err(e) => Ok(error_response(e, "查询任务列表失败")),
        };
    }

    // 学生视角：先解析名册身份
    let student = match storage.get_student_by_user_id(actor.id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "当前账号不在学生名册中",
            )));
        }
        Err(e) => return Ok(error_response(e, "查询学生名册失败")),
    };

    // 指派过滤是逗号分隔的 OR 集合，在内存中完成；
    // 状态来自本人的台账行，无行即 todo
    let tasks = match storage.list_all_tasks(params.search.clone()).await {
        Ok(tasks) => tasks,
        Err(e) => return Ok(error_response(e, "查询任务列表失败")),
    };

    let mut items = Vec::new();
    for task in tasks {
        if !task.targets_major(&student.major) {
            continue;
        }

        let row = match storage.get_submission(task.id, student.id).await {
            Ok(row) => row,
            Err(e) => return Ok(error_response(e, "查询提交状态失败")),
        };
        let (status, is_late) = row
            .map(|s| (s.status, s.is_late))
            .unwrap_or((SubmissionStatus::Todo, false));

        if let Some(filter) = params.status {
            if filter != status {
                continue;
            }
        }

        items.push(StudentTaskListItem {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date.to_rfc3339(),
            status,
            is_late,
        });
    }

    // 内存分页（任务量在实习场景下很小）
    let page = params.pagination.page.max(1);
    let size = params.pagination.size.clamp(1, 100);
    let total = items.len() as i64;
    let total_pages = (total + size - 1) / size;
    let items: Vec<_> = items
        .into_iter()
        .skip(((page - 1) * size) as usize)
        .take(size as usize)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentTaskListResponse {
            items,
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages,
            },
        },
        "查询成功",
    )))
}
