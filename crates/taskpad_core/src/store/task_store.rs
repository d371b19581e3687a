//! Task list state holder.
//!
//! # Responsibility
//! - Own the ordered, in-memory task collection.
//! - Provide add/remove/toggle/update entry points for UI actions.
//!
//! # Invariants
//! - No two tasks share an id.
//! - Insertion order is stable: create appends, edit/toggle never reorder,
//!   delete removes in place.
//! - Mutations targeting an absent id are silent no-ops, not errors.
//! - `revision` advances exactly when observable state changed.

use crate::model::task::{normalize_task_text, TaskId, TaskItem, TaskValidationError};
use log::debug;

/// Ordered in-memory collection of task items.
///
/// Linear scans are fine here: the collection is a single screenful of
/// user-entered tasks, never a bulk dataset.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<TaskItem>,
    revision: u64,
}

impl TaskStore {
    /// Creates an empty store at revision zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw input and appends a new open task.
    ///
    /// # Contract
    /// - Trims `raw_text`; rejects whitespace-only input with
    ///   [`TaskValidationError::EmptyText`] and mutates nothing.
    /// - On success appends `{ fresh id, trimmed text, completed: false }`
    ///   and returns the new id.
    pub fn add(&mut self, raw_text: &str) -> Result<TaskId, TaskValidationError> {
        let text = normalize_task_text(raw_text)?;
        let task = TaskItem::new(text);
        let id = task.id;
        self.tasks.push(task);
        self.bump();
        debug!("event=task_add module=store status=ok id={id} count={}", self.tasks.len());
        Ok(id)
    }

    /// Removes the task with the given id, preserving relative order of the
    /// remaining tasks. Silent no-op when `id` is absent: the postcondition
    /// (no such task) already holds.
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            self.bump();
            debug!("event=task_remove module=store status=ok id={id} count={}", self.tasks.len());
        }
    }

    /// Flips the completion flag on the task with the given id.
    /// Silent no-op when `id` is absent.
    pub fn toggle_complete(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
            let completed = task.completed;
            self.bump();
            debug!("event=task_toggle module=store status=ok id={id} completed={completed}");
        }
    }

    /// Replaces the text of the task with the given id verbatim.
    ///
    /// # Contract
    /// - Performs no validation; the edit flow normalizes the draft before
    ///   calling (see [`crate::store::edit::EditSession::confirm`]).
    /// - Silent no-op when `id` is absent.
    pub fn update_text(&mut self, id: TaskId, new_text: impl Into<String>) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.text = new_text.into();
            self.bump();
            debug!("event=task_update module=store status=ok id={id}");
        }
    }

    /// Returns the full collection in insertion order.
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    /// Returns one task by id, if present.
    pub fn get(&self, id: TaskId) -> Option<&TaskItem> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Change counter for the presentation layer.
    ///
    /// Advances synchronously on every effective mutation; comparing two
    /// readings tells a renderer whether its copy of the list is stale.
    /// Rejected adds and absent-id mutations leave it unchanged.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;

    #[test]
    fn revision_starts_at_zero() {
        assert_eq!(TaskStore::new().revision(), 0);
    }

    #[test]
    fn rejected_add_does_not_advance_revision() {
        let mut store = TaskStore::new();
        let _ = store.add("   ");
        assert_eq!(store.revision(), 0);
    }
}
