//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `analytics`: 대시보드 집계 핸들러
//! - `auth`: 인증 관련 (회원가입, 로그인)
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `journal`: 일기 CRUD 핸들러
//! - `sessions`: 집중/명상 세션 기록 핸들러
//! - `tasks`: 할 일 CRUD 핸들러

pub mod analytics;
pub mod auth;
pub mod health;
pub mod journal;
pub mod sessions;
pub mod tasks;

#[cfg(test)]
mod tests;

use axum::{
    routing::{get, patch, post},
    Router,
};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 풀이 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
    /// JWT 토큰 서명용 비밀키
    pub jwt_secret: String,
}

/// API 라우터를 구성합니다.
///
/// `/signup`, `/signin`, `/health`를 제외한 모든 경로는
/// `Authorization: Bearer <token>` 헤더가 필요합니다
/// (각 핸들러의 `AuthUser` 추출자가 검증).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .route("/task", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/task/{id}",
            patch(tasks::update_task).delete(tasks::delete_task),
        )
        .route(
            "/journal",
            get(journal::list_entries).post(journal::create_entry),
        )
        .route(
            "/journal/{id}",
            patch(journal::update_entry).delete(journal::delete_entry),
        )
        .route(
            "/pomodoro",
            get(sessions::list_pomodoro).post(sessions::create_pomodoro),
        )
        .route(
            "/meditation",
            get(sessions::list_meditation).post(sessions::create_meditation),
        )
        .route("/analytics/weekly-trends", get(analytics::weekly_trends))
        .route(
            "/analytics/productivity-distribution",
            get(analytics::productivity_distribution),
        )
        .route("/analytics/daily-mood", get(analytics::daily_mood))
        .route("/analytics/stats", get(analytics::stats))
        .route("/analytics/achievements", get(analytics::achievements))
        .route("/health", get(health::health_check))
        .with_state(state)
}
