//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `analytics`: 대시보드용 집계(카운트/합계) 쿼리
//! - `journal`: 일기 CRUD 쿼리
//! - `sessions`: 집중/명상 세션 기록 쿼리
//! - `tasks`: 할 일 CRUD 쿼리
//! - `users`: 사용자 인증 관련 쿼리
//!
//! 소유권 규칙: 목록 조회는 항상 `user_id`로 필터링하고,
//! 수정/삭제 쿼리는 `WHERE id = ? AND user_id = ?`로 잠급니다.
//! 다른 사용자의 레코드는 존재하지 않는 것처럼 동작합니다.

pub mod analytics;
pub mod journal;
pub mod sessions;
pub mod tasks;
pub mod users;
