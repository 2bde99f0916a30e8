//! The task collection and its write-through persistence.
//!
//! Every mutation builds the next collection, writes it in full, and only
//! then replaces the in-memory state. A failed write therefore leaves the
//! store exactly as it was.

use super::error::{StoreError, StoreResult};
use crate::domain::{Category, Task, TaskCollection, TaskId};
use crate::persistence::{decode_tasks, encode_tasks, KeyValueStore, TASKS_KEY};
use log::{error, info, warn};

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: TaskCollection,
}

impl TaskStore {
    /// Load the persisted collection.
    ///
    /// Missing or malformed data yields an empty collection. A backend read
    /// failure is returned instead, so a later write cannot silently replace
    /// data that merely could not be read.
    pub fn load<G: KeyValueStore + ?Sized>(gateway: &G) -> StoreResult<Self> {
        let raw = match gateway.get(TASKS_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                error!("event=tasks_load status=error reason=\"{}\"", err);
                return Err(err.into());
            }
        };

        let tasks = match raw {
            None => TaskCollection::new(),
            Some(raw) => match decode_tasks(&raw) {
                Ok(decoded) => {
                    for id in &decoded.skipped {
                        warn!("event=tasks_load status=skipped id={}", id);
                    }
                    decoded.tasks
                }
                Err(err) => {
                    warn!("event=tasks_load status=defaulted reason=\"{}\"", err);
                    TaskCollection::new()
                }
            },
        };

        info!("event=tasks_load status=ok count={}", tasks.len());
        Ok(Self { tasks })
    }

    #[cfg(test)]
    pub fn from_tasks(tasks: TaskCollection) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a task in `category`. The text is kept exactly as given.
    pub fn add<G: KeyValueStore + ?Sized>(
        &mut self,
        gateway: &mut G,
        text: &str,
        category: Category,
    ) -> StoreResult<Task> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }

        let task = Task::new(self.fresh_id(), text.to_string(), category);
        let mut next = self.tasks.clone();
        next.insert(task.id.clone(), task.clone());

        self.commit(gateway, next)?;
        info!("event=task_add status=ok id={} category={}", task.id, category);
        Ok(task)
    }

    /// Tasks of one category in creation order. The iterator borrows the
    /// store and can be cloned to walk the list again.
    pub fn list(&self, category: Category) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks
            .values()
            .filter(move |task| task.category == category)
    }

    /// Remove a task and return it. Confirmation is the caller's business.
    pub fn delete<G: KeyValueStore + ?Sized>(
        &mut self,
        gateway: &mut G,
        id: &TaskId,
    ) -> StoreResult<Task> {
        let mut next = self.tasks.clone();
        let removed = next
            .shift_remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        self.commit(gateway, next)?;
        info!("event=task_delete status=ok id={}", id);
        Ok(removed)
    }

    /// Wipe the whole backing storage (mode included) and empty the collection
    pub fn clear_all<G: KeyValueStore + ?Sized>(&mut self, gateway: &mut G) -> StoreResult<()> {
        if let Err(err) = gateway.clear() {
            error!("event=clear_all status=error reason=\"{}\"", err);
            return Err(err.into());
        }
        info!("event=clear_all status=ok removed={}", self.tasks.len());
        self.tasks.clear();
        Ok(())
    }

    fn commit<G: KeyValueStore + ?Sized>(
        &mut self,
        gateway: &mut G,
        next: TaskCollection,
    ) -> StoreResult<()> {
        let raw = encode_tasks(&next)?;
        if let Err(err) = gateway.set(TASKS_KEY, &raw) {
            error!("event=tasks_persist status=error reason=\"{}\"", err);
            return Err(err.into());
        }
        self.tasks = next;
        Ok(())
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new_random();
            if !self.tasks.contains_key(&id) {
                return id;
            }
        }
    }
}
