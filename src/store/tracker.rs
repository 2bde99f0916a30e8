use super::error::StoreResult;
use super::mode_store::ModeStore;
use super::task_store::TaskStore;
use crate::domain::{Category, Task, TaskCollection, TaskId};
use crate::persistence::KeyValueStore;

/// The handle the front ends talk to: one storage backend, the active mode,
/// and the task collection.
///
/// New tasks always take the mode that is active at the moment of creation,
/// and listings always filter by the active mode.
pub struct Tracker<G: KeyValueStore> {
    gateway: G,
    mode: ModeStore,
    tasks: TaskStore,
}

impl<G: KeyValueStore> Tracker<G> {
    /// Load both stores from `gateway`
    pub fn open(gateway: G) -> StoreResult<Self> {
        let mode = ModeStore::load(&gateway);
        let tasks = TaskStore::load(&gateway)?;
        Ok(Self {
            gateway,
            mode,
            tasks,
        })
    }

    /// Re-read the persisted mode, replacing the in-memory one
    pub fn load_mode(&mut self) -> Category {
        self.mode = ModeStore::load(&self.gateway);
        self.mode.mode()
    }

    /// Re-read the persisted collection, replacing the in-memory one
    pub fn load_tasks(&mut self) -> StoreResult<&TaskCollection> {
        self.tasks = TaskStore::load(&self.gateway)?;
        Ok(self.tasks.tasks())
    }

    pub fn mode(&self) -> Category {
        self.mode.mode()
    }

    pub fn set_mode(&mut self, mode: Category) -> StoreResult<()> {
        self.mode.set_mode(&mut self.gateway, mode)
    }

    pub fn toggle_mode(&mut self) -> StoreResult<Category> {
        let next = self.mode().other();
        self.set_mode(next)?;
        Ok(next)
    }

    /// Add a task under the active mode
    pub fn add_task(&mut self, text: &str) -> StoreResult<Task> {
        let category = self.mode.mode();
        self.tasks.add(&mut self.gateway, text, category)
    }

    /// Delete a task. Callers confirm with the user first.
    pub fn delete_task(&mut self, id: &TaskId) -> StoreResult<Task> {
        self.tasks.delete(&mut self.gateway, id)
    }

    /// Tasks of the active mode in creation order
    pub fn list_tasks(&self) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks.list(self.mode.mode())
    }

    pub fn list_category(&self, category: Category) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks.list(category)
    }

    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Drop every task and the stored mode, back to a fresh start.
    ///
    /// A clear that fails partway may have removed some keys already, so
    /// the in-memory state is re-read from whatever storage still holds.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        if let Err(err) = self.tasks.clear_all(&mut self.gateway) {
            self.mode = ModeStore::load(&self.gateway);
            if let Ok(tasks) = TaskStore::load(&self.gateway) {
                self.tasks = tasks;
            }
            return Err(err);
        }
        self.mode.reset();
        Ok(())
    }

    #[cfg(test)]
    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    #[cfg(test)]
    pub fn into_gateway(self) -> G {
        self.gateway
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FileStore, MemoryStore};
    use crate::store::StoreError;
    use pretty_assertions::assert_eq;

    fn texts<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<&'a str> {
        tasks.map(|task| task.text.as_str()).collect()
    }

    fn restart(tracker: Tracker<MemoryStore>) -> Tracker<MemoryStore> {
        Tracker::open(tracker.into_gateway()).unwrap()
    }

    #[test]
    fn test_work_then_travel_scenario() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        assert_eq!(tracker.mode(), Category::Work);

        tracker.add_task("Buy milk").unwrap();
        assert_eq!(texts(tracker.list_tasks()), vec!["Buy milk"]);

        tracker.set_mode(Category::Travel).unwrap();
        tracker.add_task("Tokyo").unwrap();
        assert_eq!(texts(tracker.list_tasks()), vec!["Tokyo"]);
        assert_eq!(texts(tracker.list_category(Category::Work)), vec!["Buy milk"]);
    }

    #[test]
    fn test_category_fixed_at_creation() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let task = tracker.add_task("Quarterly review").unwrap();

        tracker.set_mode(Category::Travel).unwrap();
        tracker.set_mode(Category::Work).unwrap();
        tracker.set_mode(Category::Travel).unwrap();

        assert!(tracker.list_tasks().all(|t| t.id != task.id));
        assert_eq!(tracker.get_task(&task.id).unwrap().category, Category::Work);
    }

    #[test]
    fn test_restart_reproduces_state() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.add_task("a").unwrap();
        tracker.toggle_mode().unwrap();
        let b = tracker.add_task("b").unwrap();
        tracker.add_task("c").unwrap();
        tracker.delete_task(&b.id).unwrap();

        let before: Vec<Task> = tracker.list_category(Category::Travel).cloned().collect();
        let mode = tracker.mode();
        let count = tracker.task_count();

        let tracker = restart(tracker);
        assert_eq!(tracker.mode(), mode);
        assert_eq!(tracker.task_count(), count);
        let after: Vec<Task> = tracker.list_category(Category::Travel).cloned().collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.add_task("work item").unwrap();
        tracker.set_mode(Category::Travel).unwrap();
        tracker.add_task("Paris").unwrap();

        tracker.clear_all().unwrap();
        assert_eq!(tracker.mode(), Category::Work);
        assert_eq!(tracker.task_count(), 0);

        let tracker = restart(tracker);
        assert_eq!(tracker.mode(), Category::Work);
        assert_eq!(tracker.task_count(), 0);
    }

    #[test]
    fn test_failed_clear_keeps_mode_and_tasks() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.set_mode(Category::Travel).unwrap();
        tracker.add_task("Rome").unwrap();
        tracker.gateway_mut().fail_writes = true;

        assert!(tracker.clear_all().is_err());
        assert_eq!(tracker.mode(), Category::Travel);
        assert_eq!(tracker.task_count(), 1);
    }

    #[test]
    fn test_partial_clear_matches_storage() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.set_mode(Category::Travel).unwrap();
        tracker.add_task("Rome").unwrap();
        tracker.gateway_mut().stuck_key = Some(crate::persistence::TASKS_KEY);

        assert!(tracker.clear_all().is_err());
        // settings went away, tasks did not
        assert_eq!(tracker.mode(), Category::Work);
        assert_eq!(texts(tracker.list_category(Category::Travel)), vec!["Rome"]);

        let tracker = restart(tracker);
        assert_eq!(tracker.mode(), Category::Work);
        assert_eq!(tracker.task_count(), 1);
    }

    #[test]
    fn test_failed_toggle_keeps_mode() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.gateway_mut().fail_writes = true;
        let err = tracker.toggle_mode().unwrap_err();
        assert!(matches!(err, StoreError::PersistenceUnavailable(_)));
        assert_eq!(tracker.mode(), Category::Work);
    }

    #[test]
    fn test_load_mode_and_tasks_reread_storage() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.add_task("kept").unwrap();
        tracker.set_mode(Category::Travel).unwrap();

        assert_eq!(tracker.load_mode(), Category::Travel);
        assert_eq!(tracker.load_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_text_leaves_collection_alone() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        assert!(matches!(tracker.add_task(""), Err(StoreError::EmptyText)));
        assert!(matches!(tracker.add_task("   "), Err(StoreError::EmptyText)));
        assert_eq!(tracker.task_count(), 0);
    }

    #[test]
    fn test_file_backed_restart() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let mut tracker = Tracker::open(FileStore::open(temp_dir.path()).unwrap()).unwrap();
            tracker.add_task("Buy milk").unwrap();
            tracker.set_mode(Category::Travel).unwrap();
            tracker.add_task("Tokyo").unwrap();
        }

        let tracker = Tracker::open(FileStore::open(temp_dir.path()).unwrap()).unwrap();
        assert_eq!(tracker.mode(), Category::Travel);
        assert_eq!(texts(tracker.list_tasks()), vec!["Tokyo"]);
        assert_eq!(texts(tracker.list_category(Category::Work)), vec!["Buy milk"]);
    }

    #[test]
    fn test_legacy_storage_import() {
        let gateway = MemoryStore::new()
            .with_entry(crate::persistence::SETTINGS_KEY, "{\"working\":false}")
            .with_entry(
                crate::persistence::TASKS_KEY,
                r#"{"1": {"text": "Report", "working": true}, "2": {"text": "Seoul", "working": false}}"#,
            );
        let tracker = Tracker::open(gateway).unwrap();

        assert_eq!(tracker.mode(), Category::Travel);
        assert_eq!(texts(tracker.list_tasks()), vec!["Seoul"]);
        assert_eq!(texts(tracker.list_category(Category::Work)), vec!["Report"]);
    }
}
