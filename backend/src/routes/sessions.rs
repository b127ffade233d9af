//! # 집중/명상 세션 API 라우트 핸들러
//!
//! 뽀모도로 집중 세션과 명상 세션을 기록하고 조회하는 핸들러들입니다.
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /pomodoro | `list_pomodoro` | 내 집중 세션 목록 |
//! | POST | /pomodoro | `create_pomodoro` | 집중 세션 기록 |
//! | GET | /meditation | `list_meditation` | 내 명상 세션 목록 |
//! | POST | /meditation | `create_meditation` | 명상 세션 기록 |
//!
//! ## 세션 사용 흐름
//! ```text
//! 1. 클라이언트 타이머 종료 → POST /pomodoro (또는 /meditation)
//! 2. 대시보드 → GET /analytics/* (집계 조회)
//! ```
//!
//! 세션 기록은 추가 전용이라 수정/삭제 라우트가 없습니다.

use crate::{
    db,
    error::AppError,
    middleware::auth::AuthUser,
    models::session::{CreateFocusSessionRequest, CreateMeditationSessionRequest, FocusStatus},
    routes::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn list_pomodoro(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let sessions = db::sessions::list_focus_sessions(&state.pool, &user.user_id).await?;
    Ok(Json(json!({ "sessions": sessions })))
}

/// `POST /pomodoro` — 집중 세션 한 사이클을 기록합니다.
///
/// `startTime`, `endTime`, `duration`이 필수이며
/// `status`는 없으면 completed로 기록됩니다.
pub async fn create_pomodoro(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateFocusSessionRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (start_time, end_time, duration) = match (&req.start_time, &req.end_time, req.duration) {
        (Some(start), Some(end), Some(duration)) if !start.is_empty() && !end.is_empty() => {
            (start, end, duration)
        }
        _ => return Err(AppError::BadRequest("Missing required fields".to_string())),
    };

    let id = uuid::Uuid::now_v7().to_string();
    db::sessions::create_focus_session(
        &state.pool,
        &id,
        &user.user_id,
        start_time,
        end_time,
        duration,
        req.status.unwrap_or(FocusStatus::Completed),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Pomodoro cycle saved successfully" })),
    ))
}

pub async fn list_meditation(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let sessions = db::sessions::list_meditation_sessions(&state.pool, &user.user_id).await?;
    Ok(Json(json!({ "sessions": sessions })))
}

/// `POST /meditation` — 명상 세션을 기록합니다. 필수 필드는 집중 세션과 같습니다.
pub async fn create_meditation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateMeditationSessionRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (start_time, end_time, duration) = match (&req.start_time, &req.end_time, req.duration) {
        (Some(start), Some(end), Some(duration)) if !start.is_empty() && !end.is_empty() => {
            (start, end, duration)
        }
        _ => return Err(AppError::BadRequest("Missing required fields".to_string())),
    };

    let id = uuid::Uuid::now_v7().to_string();
    db::sessions::create_meditation_session(
        &state.pool,
        &id,
        &user.user_id,
        start_time,
        end_time,
        duration,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Meditation session saved successfully" })),
    ))
}
