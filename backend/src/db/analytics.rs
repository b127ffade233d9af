//! # 대시보드 집계 쿼리 모듈
//!
//! 분석(analytics) 엔드포인트에서 쓰는 사용자별 카운트/합계 쿼리들입니다.
//! 모든 쿼리는 요청자의 `user_id`로 범위가 제한됩니다.

use crate::error::AppError;
use crate::models::task::TaskStatus;
use sqlx::SqlitePool;

pub async fn count_focus_sessions(pool: &SqlitePool, user_id: &str) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM focus_sessions WHERE user_id = ?"#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn count_meditation_sessions(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM meditation_sessions WHERE user_id = ?"#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn count_tasks(pool: &SqlitePool, user_id: &str) -> Result<i64, AppError> {
    let count =
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM tasks WHERE user_id = ?"#)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok(count)
}

pub async fn count_completed_tasks(pool: &SqlitePool, user_id: &str) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM tasks WHERE user_id = ? AND status = ?"#,
    )
    .bind(user_id)
    .bind(TaskStatus::Completed)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// 집중 세션 duration(분)의 합계. 기록이 없으면 0입니다.
pub async fn total_focus_minutes(pool: &SqlitePool, user_id: &str) -> Result<i64, AppError> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"SELECT COALESCE(SUM(duration), 0) FROM focus_sessions WHERE user_id = ?"#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

pub async fn total_meditation_minutes(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<i64, AppError> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"SELECT COALESCE(SUM(duration), 0) FROM meditation_sessions WHERE user_id = ?"#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

/// "얼리버드" 업적 판정용 집중 세션 시작 시각 목록.
pub async fn list_focus_start_times(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<String>, AppError> {
    let times = sqlx::query_scalar::<_, String>(
        r#"SELECT start_time FROM focus_sessions WHERE user_id = ?"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(times)
}
