//! # 집중/명상 세션 모델 정의
//!
//! 뽀모도로 집중 세션과 명상 세션의 기록 구조체들입니다.
//! 두 기록 모두 추가 전용(append-only)이며 수정/삭제 API가 없습니다.

use serde::{Deserialize, Serialize};

/// 집중 세션의 결과. 끝까지 마쳤는지, 건너뛰었는지를 기록합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum FocusStatus {
    Completed,
    Skipped,
}

/// 뽀모도로 집중 세션 한 사이클의 기록
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    pub user_id: String,
    pub start_time: String,
    pub end_time: String,
    /// 분 단위
    pub duration: i64,
    pub status: FocusStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MeditationSession {
    pub id: String,
    pub user_id: String,
    pub start_time: String,
    pub end_time: String,
    /// 분 단위
    pub duration: i64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFocusSessionRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration: Option<i64>,
    pub status: Option<FocusStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeditationSessionRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration: Option<i64>,
}
