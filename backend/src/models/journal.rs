use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Stressed,
}

impl Mood {
    /// 일별 기분 그래프에 쓰는 1~4 척도 값.
    pub fn score(self) -> i64 {
        match self {
            Mood::Sad => 1,
            Mood::Neutral => 2,
            Mood::Stressed => 3,
            Mood::Happy => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub content: String,
    pub mood: Mood,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Mood>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJournalRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Mood>,
}
