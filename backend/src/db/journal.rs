use crate::error::AppError;
use crate::models::journal::{JournalEntry, Mood};
use sqlx::SqlitePool;

pub async fn list_entries(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<JournalEntry>, AppError> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, user_id, title, content, mood, date, created_at, updated_at
        FROM journal_entries
        WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn create_entry(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    title: Option<&str>,
    content: &str,
    mood: Mood,
) -> Result<JournalEntry, AppError> {
    sqlx::query(
        r#"
        INSERT INTO journal_entries (id, user_id, title, content, mood)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(content)
    .bind(mood)
    .execute(pool)
    .await?;

    find_entry(pool, id, user_id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created entry".to_string()))
}

pub async fn find_entry(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
) -> Result<Option<JournalEntry>, AppError> {
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, user_id, title, content, mood, date, created_at, updated_at
        FROM journal_entries
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

/// 부분 수정: 전달된 필드만 바꾸고 나머지는 기존 값을 유지합니다(COALESCE).
/// 요청자가 소유하지 않은 레코드면 `None`을 반환합니다.
pub async fn update_entry(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    title: Option<&str>,
    content: Option<&str>,
    mood: Option<Mood>,
) -> Result<Option<JournalEntry>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE journal_entries
        SET title = COALESCE(?, title),
            content = COALESCE(?, content),
            mood = COALESCE(?, mood),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(mood)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find_entry(pool, id, user_id).await
}

pub async fn delete_entry(pool: &SqlitePool, id: &str, user_id: &str) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        DELETE FROM journal_entries
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
