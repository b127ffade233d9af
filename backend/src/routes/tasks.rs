//! # 할 일(Task) API 라우트 핸들러
//!
//! 할 일 CRUD를 위한 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /task | `list_tasks` | 내 할 일 목록 |
//! | POST | /task | `create_task` | 새 할 일 추가 |
//! | PATCH | /task/:id | `update_task` | 상태 변경 |
//! | DELETE | /task/:id | `delete_task` | 할 일 삭제 |
//!
//! 모든 핸들러는 `AuthUser` 추출자로 인증을 요구하며,
//! 소유자 기준으로만 조회/수정/삭제합니다.

use crate::{
    db,
    error::AppError,
    middleware::auth::AuthUser,
    models::task::{CreateTaskRequest, UpdateTaskRequest},
    routes::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /task` — 요청자의 할 일 전체 목록을 조회합니다.
pub async fn list_tasks(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let tasks = db::tasks::list_tasks(&state.pool, &user.user_id).await?;
    Ok(Json(json!({ "tasks": tasks })))
}

/// `POST /task` — 새 할 일을 추가합니다.
///
/// `task`, `priority`, `dueDate` 세 필드가 모두 필요합니다.
/// 소유자는 요청 본문이 아니라 검증된 토큰에서 가져옵니다.
pub async fn create_task(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (task, priority, due_date) = match (&req.task, req.priority, &req.due_date) {
        (Some(task), Some(priority), Some(due_date))
            if !task.is_empty() && !due_date.is_empty() =>
        {
            (task, priority, due_date)
        }
        _ => return Err(AppError::BadRequest("Missing fields".to_string())),
    };

    let id = uuid::Uuid::now_v7().to_string();
    let created =
        db::tasks::create_task(&state.pool, &id, &user.user_id, task, due_date, priority).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Task Added successfully", "task": created })),
    ))
}

/// `PATCH /task/:id` — 할 일의 상태를 변경합니다.
///
/// 요청자가 소유한 레코드만 수정됩니다. 남의 레코드는 404로 처리됩니다.
pub async fn update_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Value>, AppError> {
    let status = req
        .status
        .ok_or_else(|| AppError::BadRequest("Missing fields".to_string()))?;

    let task = db::tasks::update_task_status(&state.pool, &id, &user.user_id, status)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "task": task })))
}

/// `DELETE /task/:id` — 할 일을 삭제합니다. 소유자 확인은 PATCH와 동일합니다.
pub async fn delete_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::tasks::delete_task(&state.pool, &id, &user.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({ "message": "Task deleted" })))
}
