use crate::error::AppError;
use crate::models::task::{Task, TaskPriority, TaskStatus};
use sqlx::SqlitePool;

pub async fn list_tasks(pool: &SqlitePool, user_id: &str) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, task, due_date, status, priority, created_at, updated_at
        FROM tasks
        WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

pub async fn create_task(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    task: &str,
    due_date: &str,
    priority: TaskPriority,
) -> Result<Task, AppError> {
    // status는 DB 기본값('pending')으로 설정됩니다
    sqlx::query(
        r#"
        INSERT INTO tasks (id, user_id, task, due_date, priority)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(task)
    .bind(due_date)
    .bind(priority)
    .execute(pool)
    .await?;

    find_task(pool, id, user_id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created task".to_string()))
}

pub async fn find_task(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
) -> Result<Option<Task>, AppError> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, task, due_date, status, priority, created_at, updated_at
        FROM tasks
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}

/// 상태를 변경합니다. 요청자가 소유하지 않은 레코드면 `None`을 반환합니다.
pub async fn update_task_status(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    status: TaskStatus,
) -> Result<Option<Task>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET status = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(status)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find_task(pool, id, user_id).await
}

/// 삭제 성공 여부를 반환합니다. 소유자가 아니면 아무것도 지워지지 않습니다.
pub async fn delete_task(pool: &SqlitePool, id: &str, user_id: &str) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
