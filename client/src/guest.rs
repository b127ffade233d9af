//! # 게스트 모드 로컬 저장소
//!
//! 로그인하지 않은 사용자의 할 일/일기는 서버로 보내지 않고
//! 기기 로컬 저장소에만 둡니다. 이 모듈은 네트워크 계층을 아예 받지 않으므로
//! 게스트 데이터가 서버로 새어나갈 방법이 구조적으로 없습니다.
//!
//! 변경이 있을 때마다 목록 전체를 직렬화해서 통째로 다시 씁니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::KeyValueStorage;

/// 게스트 할 일 목록의 저장소 키
pub const GUEST_TASKS_KEY: &str = "focusflow-todos";
/// 게스트 일기 목록의 저장소 키
pub const GUEST_JOURNAL_KEY: &str = "focusflow-journal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub created_at: String,
}

pub struct GuestTaskList<S> {
    storage: S,
    tasks: Vec<GuestTask>,
}

impl<S: KeyValueStorage> GuestTaskList<S> {
    /// 저장소에서 전체 목록을 읽어옵니다. 없거나 깨져 있으면 빈 목록입니다.
    pub fn load(storage: S) -> Self {
        let tasks = storage
            .get(GUEST_TASKS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { storage, tasks }
    }

    pub fn tasks(&self) -> &[GuestTask] {
        &self.tasks
    }

    /// 새 할 일을 목록 맨 앞에 추가합니다. 내용이 비어 있으면 무시합니다.
    pub fn add(&mut self, text: &str, priority: &str, deadline: Option<&str>) -> Option<&GuestTask> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = GuestTask {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            priority: priority.to_string(),
            deadline: deadline.map(str::to_string),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.tasks.insert(0, task);
        self.save();

        self.tasks.first()
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.save();
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.save();
        }
        removed
    }

    fn save(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(raw) => self.storage.set(GUEST_TASKS_KEY, &raw),
            Err(e) => tracing::warn!("failed to serialize guest tasks: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestJournalEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub mood: String,
    pub date: String,
}

pub struct GuestJournal<S> {
    storage: S,
    entries: Vec<GuestJournalEntry>,
}

impl<S: KeyValueStorage> GuestJournal<S> {
    pub fn load(storage: S) -> Self {
        let entries = storage
            .get(GUEST_JOURNAL_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { storage, entries }
    }

    pub fn entries(&self) -> &[GuestJournalEntry] {
        &self.entries
    }

    /// 새 일기를 맨 앞에 추가합니다. 내용이 비어 있으면 무시합니다.
    pub fn add(
        &mut self,
        title: Option<&str>,
        content: &str,
        mood: &str,
    ) -> Option<&GuestJournalEntry> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let entry = GuestJournalEntry {
            id: Uuid::new_v4().to_string(),
            title: title.map(str::to_string),
            content: content.to_string(),
            mood: mood.to_string(),
            date: chrono::Utc::now().to_rfc3339(),
        };
        self.entries.insert(0, entry);
        self.save();

        self.entries.first()
    }

    /// 기존 일기를 덮어씁니다. 해당 id가 없으면 false를 반환합니다.
    pub fn edit(&mut self, id: &str, title: Option<&str>, content: &str, mood: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.title = title.map(str::to_string);
        entry.content = content.to_string();
        entry.mood = mood.to_string();
        self.save();
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.save();
        }
        removed
    }

    fn save(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(raw) => self.storage.set(GUEST_JOURNAL_KEY, &raw),
            Err(e) => tracing::warn!("failed to serialize guest journal: {}", e),
        }
    }
}
