//! # 일기(Journal) API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /journal | `list_entries` | 내 일기 목록 (최신순) |
//! | POST | /journal | `create_entry` | 새 일기 작성 |
//! | PATCH | /journal/:id | `update_entry` | 부분 수정 |
//! | DELETE | /journal/:id | `delete_entry` | 일기 삭제 |

use crate::{
    db,
    error::AppError,
    middleware::auth::AuthUser,
    models::journal::{CreateJournalRequest, Mood, UpdateJournalRequest},
    routes::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list_entries(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let entries = db::journal::list_entries(&state.pool, &user.user_id).await?;
    Ok(Json(json!({ "entries": entries })))
}

/// `POST /journal` — 새 일기를 작성합니다.
///
/// `content`만 필수입니다. `title`은 선택, `mood`는 없으면 neutral입니다.
pub async fn create_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateJournalRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let content = match &req.content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(AppError::BadRequest("Content is required".to_string())),
    };

    let id = uuid::Uuid::now_v7().to_string();
    let entry = db::journal::create_entry(
        &state.pool,
        &id,
        &user.user_id,
        req.title.as_deref(),
        content,
        req.mood.unwrap_or(Mood::Neutral),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Journal entry saved", "entry": entry })),
    ))
}

/// `PATCH /journal/:id` — 전달된 필드(title/content/mood)만 수정합니다.
pub async fn update_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateJournalRequest>,
) -> Result<Json<Value>, AppError> {
    let entry = db::journal::update_entry(
        &state.pool,
        &id,
        &user.user_id,
        req.title.as_deref(),
        req.content.as_deref(),
        req.mood,
    )
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "entry": entry })))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::journal::delete_entry(&state.pool, &id, &user.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({ "message": "Journal entry deleted" })))
}
