//! 라우터 레벨 통합 테스트.
//!
//! 실제 서버를 띄우지 않고 in-memory SQLite 풀 위에서
//! 라우터를 직접 호출(oneshot)하여 전체 요청/응답 흐름을 검증합니다.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use super::{router, AppState};
use crate::middleware::auth::Claims;

const SECRET: &str = "test-secret";

async fn test_app() -> (Router, SqlitePool) {
    // in-memory SQLite는 연결마다 별도 DB가 되므로 연결을 1개로 고정
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let app = router(AppState {
        pool: pool.clone(),
        jwt_secret: SECRET.to_string(),
    });

    (app, pool)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// 가입 후 로그인까지 마치고 토큰을 돌려주는 헬퍼.
async fn signup_and_signin(app: &Router, name: &str, email: &str, password: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/signup",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        "POST",
        "/signin",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn signup_rejects_missing_fields() {
    let (app, _pool) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/signup",
        None,
        Some(json!({ "name": "Ann", "email": "ann@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let (app, _pool) = test_app().await;
    let payload = json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" });

    let (status, _) = send(&app, "POST", "/signup", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", "/signup", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn stored_password_hash_is_not_plaintext() {
    let (app, pool) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/signup",
        None,
        Some(json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = 'ann@x.com'")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_ne!(hash, "secret1");
    // Argon2 PHC string format
    assert!(hash.starts_with("$argon2"));
}

#[tokio::test]
async fn signin_unknown_email_is_not_found() {
    let (app, _pool) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/signin",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "whatever" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn signin_wrong_password_is_unauthorized() {
    let (app, _pool) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/signup",
        None,
        Some(json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/signin",
        None,
        Some(json!({ "email": "ann@x.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_without_token_is_unauthenticated() {
    let (app, _pool) = test_app().await;

    let (status, _) = send(&app, "GET", "/task", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_forbidden() {
    let (app, _pool) = test_app().await;

    let (status, _) = send(&app, "GET", "/task", Some("not.a.token"), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn expired_token_is_forbidden() {
    let (app, _pool) = test_app().await;

    // 만료 시각이 과거인 토큰을 직접 서명해서 보낸다
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: "user-1".to_string(),
        email: "ann@x.com".to_string(),
        name: "Ann".to_string(),
        iat: (now - chrono::Duration::hours(25)).timestamp(),
        exp: (now - chrono::Duration::hours(1)).timestamp(),
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let (status, _) = send(&app, "GET", "/task", Some(&token), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn task_lifecycle() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/task",
        Some(&token),
        Some(json!({ "task": "Write report", "priority": "high", "dueDate": "2025-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["task"]["status"], "pending");
    assert_eq!(body["task"]["priority"], "high");
    assert_eq!(body["task"]["dueDate"], "2025-01-01");
    let task_id = body["task"]["id"].as_str().unwrap().to_string();

    // List contains exactly that task
    let (status, body) = send(&app, "GET", "/task", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], task_id.as_str());
    assert_eq!(tasks[0]["task"], "Write report");

    // Patch status
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/task/{task_id}"),
        Some(&token),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["status"], "completed");

    // Delete, then the list no longer includes it
    let (status, _) = send(&app, "DELETE", &format!("/task/{task_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/task", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["tasks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_task_requires_all_fields() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    // Missing dueDate
    let (status, _) = send(
        &app,
        "POST",
        "/task",
        Some(&token),
        Some(json!({ "task": "Write report", "priority": "high" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing priority
    let (status, _) = send(
        &app,
        "POST",
        "/task",
        Some(&token),
        Some(json!({ "task": "Write report", "dueDate": "2025-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_task_is_stamped_with_caller_identity() {
    let (app, pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, body) = send(
        &app,
        "POST",
        "/task",
        Some(&token),
        Some(json!({ "task": "Write report", "priority": "low", "dueDate": "2025-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let ann_id: String = sqlx::query_scalar("SELECT id FROM users WHERE email = 'ann@x.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(body["task"]["userId"], ann_id.as_str());
}

#[tokio::test]
async fn ownership_isolation_across_collections() {
    let (app, _pool) = test_app().await;
    let ann = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;
    let bob = signup_and_signin(&app, "Bob", "bob@x.com", "secret2").await;

    // Ann records one of everything
    let (status, body) = send(
        &app,
        "POST",
        "/task",
        Some(&ann),
        Some(json!({ "task": "Write report", "priority": "high", "dueDate": "2025-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let task_id = body["task"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/journal",
        Some(&ann),
        Some(json!({ "content": "Good day", "mood": "happy" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let entry_id = body["entry"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/pomodoro",
        Some(&ann),
        Some(json!({
            "startTime": "2025-01-01T10:00:00Z",
            "endTime": "2025-01-01T10:25:00Z",
            "duration": 25,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/meditation",
        Some(&ann),
        Some(json!({
            "startTime": "2025-01-01T11:00:00Z",
            "endTime": "2025-01-01T11:10:00Z",
            "duration": 10,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Bob sees none of it
    let (_, body) = send(&app, "GET", "/task", Some(&bob), None).await;
    assert!(body["tasks"].as_array().unwrap().is_empty());
    let (_, body) = send(&app, "GET", "/journal", Some(&bob), None).await;
    assert!(body["entries"].as_array().unwrap().is_empty());
    let (_, body) = send(&app, "GET", "/pomodoro", Some(&bob), None).await;
    assert!(body["sessions"].as_array().unwrap().is_empty());
    let (_, body) = send(&app, "GET", "/meditation", Some(&bob), None).await;
    assert!(body["sessions"].as_array().unwrap().is_empty());

    // Bob cannot mutate or delete Ann's records by id
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/task/{task_id}"),
        Some(&bob),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/task/{task_id}"), Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/journal/{entry_id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Ann still sees her task, untouched
    let (_, body) = send(&app, "GET", "/task", Some(&ann), None).await;
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["status"], "pending");
}

#[tokio::test]
async fn journal_requires_content() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, _) = send(
        &app,
        "POST",
        "/journal",
        Some(&token),
        Some(json!({ "title": "No content" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn journal_lifecycle() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    // Mood defaults to neutral, title is optional
    let (status, body) = send(
        &app,
        "POST",
        "/journal",
        Some(&token),
        Some(json!({ "content": "Dear diary" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entry"]["mood"], "neutral");
    assert!(body["entry"]["title"].is_null());
    let entry_id = body["entry"]["id"].as_str().unwrap().to_string();

    // Partial update: only the provided fields change
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/journal/{entry_id}"),
        Some(&token),
        Some(json!({ "mood": "happy", "title": "A title" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["mood"], "happy");
    assert_eq!(body["entry"]["title"], "A title");
    assert_eq!(body["entry"]["content"], "Dear diary");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/journal/{entry_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/journal", Some(&token), None).await;
    assert!(body["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn session_creation_requires_all_fields() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, _) = send(
        &app,
        "POST",
        "/pomodoro",
        Some(&token),
        Some(json!({ "startTime": "2025-01-01T10:00:00Z", "duration": 25 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/meditation",
        Some(&token),
        Some(json!({ "startTime": "2025-01-01T11:00:00Z", "endTime": "2025-01-01T11:10:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pomodoro_status_defaults_to_completed() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, _) = send(
        &app,
        "POST",
        "/pomodoro",
        Some(&token),
        Some(json!({
            "startTime": "2025-01-01T10:00:00Z",
            "endTime": "2025-01-01T10:25:00Z",
            "duration": 25,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/pomodoro", Some(&token), None).await;
    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["status"], "completed");
    assert_eq!(sessions[0]["duration"], 25);
}

#[tokio::test]
async fn stats_reflect_recorded_activity() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, _) = send(
        &app,
        "POST",
        "/pomodoro",
        Some(&token),
        Some(json!({
            "startTime": "2025-01-01T10:00:00Z",
            "endTime": "2025-01-01T10:50:00Z",
            "duration": 50,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/meditation",
        Some(&token),
        Some(json!({
            "startTime": "2025-01-01T11:00:00Z",
            "endTime": "2025-01-01T11:10:00Z",
            "duration": 10,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // One completed task
    let (_, body) = send(
        &app,
        "POST",
        "/task",
        Some(&token),
        Some(json!({ "task": "Write report", "priority": "high", "dueDate": "2025-01-01" })),
    )
    .await;
    let task_id = body["task"]["id"].as_str().unwrap().to_string();
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/task/{task_id}"),
        Some(&token),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/analytics/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalFocusTime"], "0.8"); // 50 minutes
    assert_eq!(body["completedSessions"], 1);
    assert_eq!(body["meditationMinutes"], 10);
    assert_eq!(body["tasksCompleted"], 1);
}

#[tokio::test]
async fn analytics_shapes_match_dashboard_expectations() {
    let (app, _pool) = test_app().await;
    let token = signup_and_signin(&app, "Ann", "ann@x.com", "secret1").await;

    let (_, body) = send(
        &app,
        "POST",
        "/journal",
        Some(&token),
        Some(json!({ "content": "Good day", "mood": "happy" })),
    )
    .await;
    assert_eq!(body["entry"]["mood"], "happy");

    let (status, body) = send(&app, "GET", "/analytics/weekly-trends", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let weeks = body.as_array().unwrap();
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0]["week"], "Week 1");

    let (status, body) = send(
        &app,
        "GET",
        "/analytics/productivity-distribution",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let buckets = body.as_array().unwrap();
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[0]["name"], "Focus");
    assert!(buckets[0]["color"].as_str().unwrap().starts_with('#'));

    let (status, body) = send(&app, "GET", "/analytics/daily-mood", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["mood"], 4); // happy
    assert_eq!(days[0]["energy"], 5);
    assert_eq!(days[0]["day"].as_str().unwrap().len(), 10);

    let (status, body) = send(&app, "GET", "/analytics/achievements", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    // Fresh account: no thresholds crossed yet
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_check_is_public() {
    let (app, _pool) = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
