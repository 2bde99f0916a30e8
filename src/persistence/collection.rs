use crate::domain::{Category, Task, TaskCollection, TaskId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// On-disk shape of one task, keyed by id in the enclosing object
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTask {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    /// Older data used a boolean instead of a category
    #[serde(default, skip_serializing)]
    working: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl StoredTask {
    fn from_task(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            category: Some(task.category),
            working: None,
            created_at: task.created_at,
        }
    }

    fn into_task(self, id: TaskId) -> Option<Task> {
        let category = self.category.or(match self.working {
            Some(true) => Some(Category::Work),
            Some(false) => Some(Category::Travel),
            None => None,
        })?;
        let task = Task {
            id,
            text: self.text,
            category,
            created_at: self.created_at,
        };
        task.is_valid().then_some(task)
    }
}

/// Result of decoding a stored collection
#[derive(Debug, Default)]
pub struct DecodedTasks {
    pub tasks: TaskCollection,
    /// Ids of records that were present but violated the task invariants
    pub skipped: Vec<String>,
}

/// Serialize the whole collection as an id-keyed JSON object in creation order
pub fn encode_tasks(tasks: &TaskCollection) -> serde_json::Result<String> {
    let stored: IndexMap<&str, StoredTask> = tasks
        .iter()
        .map(|(id, task)| (id.as_str(), StoredTask::from_task(task)))
        .collect();
    serde_json::to_string_pretty(&stored)
}

/// Parse a stored collection.
///
/// Fails only when the document is not a JSON object; individual bad records
/// are dropped and reported in `skipped`.
pub fn decode_tasks(raw: &str) -> serde_json::Result<DecodedTasks> {
    let records: IndexMap<String, serde_json::Value> = serde_json::from_str(raw)?;

    let mut decoded = DecodedTasks::default();
    for (id, value) in records {
        let task = serde_json::from_value::<StoredTask>(value)
            .ok()
            .and_then(|stored| stored.into_task(TaskId::from(id.clone())));
        match task {
            Some(task) => {
                decoded.tasks.insert(task.id.clone(), task);
            }
            None => decoded.skipped.push(id),
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> TaskCollection {
        let mut tasks = TaskCollection::new();
        for (id, text, category) in [
            ("b", "Buy milk", Category::Work),
            ("a", "Tokyo", Category::Travel),
            ("c", "File report", Category::Work),
        ] {
            let task = Task::new(TaskId::from(id), text.to_string(), category);
            tasks.insert(task.id.clone(), task);
        }
        tasks
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let tasks = sample();
        let decoded = decode_tasks(&encode_tasks(&tasks).unwrap()).unwrap();

        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.tasks, tasks);
        let ids: Vec<&str> = decoded.tasks.keys().map(TaskId::as_str).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_collection_encodes_to_object() {
        let raw = encode_tasks(&TaskCollection::new()).unwrap();
        assert_eq!(raw, "{}");
        assert!(decode_tasks(&raw).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_decode_legacy_records() {
        let raw = r#"{
            "1700000000001": {"text": "Buy milk", "working": true},
            "1700000000002": {"text": "Tokyo", "working": false}
        }"#;
        let decoded = decode_tasks(raw).unwrap();

        assert_eq!(decoded.tasks.len(), 2);
        let milk = &decoded.tasks[&TaskId::from("1700000000001")];
        assert_eq!(milk.category, Category::Work);
        assert_eq!(milk.created_at, None);
        let tokyo = &decoded.tasks[&TaskId::from("1700000000002")];
        assert_eq!(tokyo.category, Category::Travel);
    }

    #[test]
    fn test_decode_skips_invalid_records() {
        let raw = r#"{
            "ok": {"text": "Keep", "category": "work"},
            "blank": {"text": "   ", "category": "work"},
            "nocat": {"text": "Orphan"},
            "badcat": {"text": "Beach", "category": "holiday"},
            "notobj": 42
        }"#;
        let decoded = decode_tasks(raw).unwrap();

        assert_eq!(decoded.tasks.len(), 1);
        assert!(decoded.tasks.contains_key(&TaskId::from("ok")));
        assert_eq!(decoded.skipped, vec!["blank", "nocat", "badcat", "notobj"]);
    }

    #[test]
    fn test_decode_non_object_fails() {
        assert!(decode_tasks("[1, 2, 3]").is_err());
        assert!(decode_tasks("garbage").is_err());
    }
}
