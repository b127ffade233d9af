//! # FocusFlow 클라이언트 라이브러리
//!
//! 브라우저측 앱의 비시각(non-visual) 계층입니다. 화면(뷰)은 이 크레이트 위에
//! 올라가고, 여기서는 다음을 담당합니다:
//!
//! - `session`: 로그인 상태 머신 (토큰 보관, 로컬 디코딩, 만료 검사)
//! - `guest`: 비로그인 게스트 모드의 기기 로컬 저장소
//! - `api`: 인증 엔드포인트(/signin, /signup) 호출
//! - `storage`: localStorage에 해당하는 키-값 저장소 추상화

pub mod api;
pub mod guest;
pub mod session;
pub mod storage;

pub use api::{ApiError, AuthApi, HttpAuthApi, SignInResponse};
pub use guest::{GuestJournal, GuestJournalEntry, GuestTask, GuestTaskList};
pub use session::{Claims, SessionError, SessionManager, SessionState, UserProfile};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
