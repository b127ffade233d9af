//! # 분석(Analytics) API 라우트 핸들러
//!
//! 대시보드가 그리는 집계 데이터를 만들어 주는 핸들러들입니다.
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | /analytics/weekly-trends | `weekly_trends` |
//! | GET | /analytics/productivity-distribution | `productivity_distribution` |
//! | GET | /analytics/daily-mood | `daily_mood` |
//! | GET | /analytics/stats | `stats` |
//! | GET | /analytics/achievements | `achievements` |
//!
//! 모든 집계는 요청자 소유의 레코드만 대상으로 합니다.
//! weekly-trends의 주별 분해는 아직 자리표시자입니다 (아래 TODO 참고).

use crate::{db, error::AppError, middleware::auth::AuthUser, routes::AppState};
use axum::{extract::State, Json};
use chrono::{DateTime, Timelike};
use serde_json::{json, Value};

/// `GET /analytics/weekly-trends` — 주별 집중/명상 추이.
pub async fn weekly_trends(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let focus = db::analytics::count_focus_sessions(&state.pool, &user.user_id).await?;
    let meditation = db::analytics::count_meditation_sessions(&state.pool, &user.user_id).await?;

    // TODO: created_at을 주 단위로 버킷팅해서 실제 주별 추이를 계산
    let data = json!([
        { "week": "Week 1", "focus": focus, "meditation": meditation },
        { "week": "Week 2", "focus": focus, "meditation": meditation },
    ]);

    Ok(Json(data))
}

/// `GET /analytics/productivity-distribution` — 활동 유형별 비중.
/// color는 차트 라이브러리가 그대로 쓰는 HEX 값입니다.
pub async fn productivity_distribution(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let focus = db::analytics::count_focus_sessions(&state.pool, &user.user_id).await?;
    let meditation = db::analytics::count_meditation_sessions(&state.pool, &user.user_id).await?;
    let tasks = db::analytics::count_tasks(&state.pool, &user.user_id).await?;

    let data = json!([
        { "name": "Focus", "value": focus, "color": "#3b82f6" },
        { "name": "Meditation", "value": meditation, "color": "#10b981" },
        { "name": "Tasks", "value": tasks, "color": "#f59e0b" },
    ]);

    Ok(Json(data))
}

/// `GET /analytics/daily-mood` — 일기에서 뽑은 일별 기분 점수.
/// energy는 아직 수집하지 않는 값이라 고정 5입니다.
pub async fn daily_mood(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let entries = db::journal::list_entries(&state.pool, &user.user_id).await?;

    let data: Vec<Value> = entries
        .iter()
        .map(|entry| {
            // date는 ISO-8601 문자열이므로 앞 10글자가 YYYY-MM-DD
            let day = entry.date.get(..10).unwrap_or(&entry.date);
            json!({
                "day": day,
                "mood": entry.mood.score(),
                "energy": 5,
            })
        })
        .collect();

    Ok(Json(json!(data)))
}

/// `GET /analytics/stats` — 대시보드 상단 요약 카드 수치.
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let focus_minutes = db::analytics::total_focus_minutes(&state.pool, &user.user_id).await?;
    let completed_sessions =
        db::analytics::count_focus_sessions(&state.pool, &user.user_id).await?;
    let meditation_minutes =
        db::analytics::total_meditation_minutes(&state.pool, &user.user_id).await?;
    let tasks_completed = db::analytics::count_completed_tasks(&state.pool, &user.user_id).await?;

    Ok(Json(json!({
        "totalFocusTime": format!("{:.1}", focus_minutes as f64 / 60.0),
        "completedSessions": completed_sessions,
        "meditationMinutes": meditation_minutes,
        "tasksCompleted": tasks_completed,
    })))
}

/// `GET /analytics/achievements` — 달성한 업적 목록.
///
/// 임계값 규칙:
/// - 집중 세션 50회 이상 → Focus Master
/// - 명상 세션 7회 이상 → Mindful Week
/// - 완료한 할 일 100개 이상 → Task Crusher
/// - 오전 9시 이전에 시작한 집중 세션 존재 → Early Bird
pub async fn achievements(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let focus_count = db::analytics::count_focus_sessions(&state.pool, &user.user_id).await?;
    let meditation_count =
        db::analytics::count_meditation_sessions(&state.pool, &user.user_id).await?;
    let tasks_completed = db::analytics::count_completed_tasks(&state.pool, &user.user_id).await?;

    let mut achievements = Vec::new();

    if focus_count >= 50 {
        achievements.push(json!({
            "title": "Focus Master",
            "description": "Completed 50 focus sessions",
            "emoji": "🎯",
            "date": "Recently",
        }));
    }

    if meditation_count >= 7 {
        achievements.push(json!({
            "title": "Mindful Week",
            "description": "Meditated 7 days in a row",
            "emoji": "🧘‍♀️",
            "date": "Recently",
        }));
    }

    if tasks_completed >= 100 {
        achievements.push(json!({
            "title": "Task Crusher",
            "description": "Completed 100 tasks",
            "emoji": "✅",
            "date": "Recently",
        }));
    }

    // 시작 시각을 파싱할 수 없는 기록은 얼리버드 판정에서 제외
    let start_times = db::analytics::list_focus_start_times(&state.pool, &user.user_id).await?;
    let early_bird = start_times
        .iter()
        .filter_map(|s| DateTime::parse_from_rfc3339(s).ok())
        .any(|dt| dt.hour() < 9);

    if early_bird {
        achievements.push(json!({
            "title": "Early Bird",
            "description": "Started 5 morning sessions",
            "emoji": "🌅",
            "date": "Recently",
        }));
    }

    Ok(Json(json!(achievements)))
}
