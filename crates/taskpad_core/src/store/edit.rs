//! Edit-dialog sub-state machine.
//!
//! # Responsibility
//! - Hold the draft text while the user edits one task in a dialog.
//! - Apply the draft to the store only on an explicit, valid confirm.
//!
//! # Invariants
//! - The underlying task is untouched while the session is `Editing`.
//! - `cancel` discards the draft unconditionally.
//! - A confirm with a whitespace-only draft applies nothing and keeps the
//!   session in `Editing` (the dialog stays open; no error is surfaced).

use crate::model::task::{normalize_task_text, TaskId};
use crate::store::task_store::TaskStore;

/// Editing state: idle, or capturing a draft for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// No edit dialog is open.
    Idle,
    /// The dialog is open for `task_id`; `draft` tracks the input field.
    Editing { task_id: TaskId, draft: String },
}

/// Drives one edit dialog at a time on top of a [`TaskStore`].
///
/// The session never owns the store; callers pass it in at the two
/// transition points that read or write task state.
#[derive(Debug, Default)]
pub struct EditSession {
    state: EditState,
}

impl Default for EditState {
    fn default() -> Self {
        Self::Idle
    }
}

impl EditSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for the presentation layer to render the dialog.
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Opens the dialog for `id`, snapshotting its current text as the
    /// draft. Silent no-op when `id` is absent (the row was deleted between
    /// render and tap).
    pub fn begin(&mut self, store: &TaskStore, id: TaskId) {
        if let Some(task) = store.get(id) {
            self.state = EditState::Editing {
                task_id: id,
                draft: task.text.clone(),
            };
        }
    }

    /// Replaces the draft as the user types. No-op while `Idle`.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Applies the draft and closes the dialog.
    ///
    /// # Contract
    /// - Non-empty draft after trimming: writes the trimmed text via
    ///   [`TaskStore::update_text`] and returns to `Idle`.
    /// - Whitespace-only draft: the transition does not occur; the session
    ///   stays `Editing` and the store is untouched.
    /// - No-op while `Idle`.
    pub fn confirm(&mut self, store: &mut TaskStore) {
        if let EditState::Editing { task_id, draft } = &self.state {
            if let Ok(text) = normalize_task_text(draft) {
                store.update_text(*task_id, text);
                self.state = EditState::Idle;
            }
        }
    }

    /// Discards the draft and closes the dialog without touching the store.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }
}
