//! # 집중/명상 세션 데이터베이스 쿼리 모듈
//!
//! 뽀모도로 집중 세션과 명상 세션의 생성, 조회를 담당하는 SQL 쿼리 함수들입니다.
//! 두 기록 모두 추가 전용(append-only)이라 UPDATE/DELETE 쿼리가 없습니다.

use crate::error::AppError;
use crate::models::session::{FocusSession, FocusStatus, MeditationSession};
use sqlx::SqlitePool;

pub async fn create_focus_session(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    start_time: &str,
    end_time: &str,
    duration: i64,
    status: FocusStatus,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO focus_sessions (id, user_id, start_time, end_time, duration, status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(start_time)
    .bind(end_time)
    .bind(duration)
    .bind(status)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_focus_sessions(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<FocusSession>, AppError> {
    let sessions = sqlx::query_as::<_, FocusSession>(
        r#"
        SELECT id, user_id, start_time, end_time, duration, status, created_at
        FROM focus_sessions
        WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

pub async fn create_meditation_session(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    start_time: &str,
    end_time: &str,
    duration: i64,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO meditation_sessions (id, user_id, start_time, end_time, duration)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(start_time)
    .bind(end_time)
    .bind(duration)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_meditation_sessions(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<MeditationSession>, AppError> {
    let sessions = sqlx::query_as::<_, MeditationSession>(
        r#"
        SELECT id, user_id, start_time, end_time, duration, created_at
        FROM meditation_sessions
        WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}
