use super::enums::Category;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier, used as the lookup key in the collection.
///
/// Freshly created ids are UUID v4 strings; ids loaded from older data
/// (numeric timestamps) are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry in one of the two lists. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Fixed to the active mode at creation time
    pub category: Category,
    /// Informational only; absent on records imported from older data
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: TaskId, text: String, category: Category) -> Self {
        Self {
            id,
            text,
            category,
            created_at: Some(Utc::now()),
        }
    }

    /// Check the collection invariant: non-blank text
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// All tasks of both categories, in creation order
pub type TaskCollection = IndexMap<TaskId, Task>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_differ() {
        let a = TaskId::new_random();
        let b = TaskId::new_random();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_legacy_id_kept_verbatim() {
        let id = TaskId::from("1700000000000");
        assert_eq!(id.as_str(), "1700000000000");
        assert_eq!(id.to_string(), "1700000000000");
    }

    #[test]
    fn test_task_new_sets_timestamp() {
        let task = Task::new(TaskId::from("a"), "Pack bags".to_string(), Category::Travel);
        assert!(task.created_at.is_some());
        assert_eq!(task.category, Category::Travel);
        assert!(task.is_valid());
    }

    #[test]
    fn test_blank_task_is_invalid() {
        let task = Task::new(TaskId::from("a"), "  \t".to_string(), Category::Work);
        assert!(!task.is_valid());
    }
}
