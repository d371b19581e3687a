//! Task item domain model.
//!
//! # Responsibility
//! - Define the single record shape rendered by the task list UI.
//! - Provide text normalization shared by the add and edit flows.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty and trimmed once a task exists.
//! - `completed` starts as `false` and only changes via an explicit toggle.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Random v4 ids keep uniqueness safe under rapid successive adds.
pub type TaskId = Uuid;

/// A single to-do entry shown in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Stable ID used by the UI to address remove/toggle/edit actions.
    pub id: TaskId,
    /// User-entered description, normalized via [`normalize_task_text`].
    pub text: String,
    /// Completion flag driven by the checkbox toggle.
    pub completed: bool,
}

impl TaskItem {
    /// Creates a new open task with a generated stable ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The caller passes already-normalized text; this constructor does
    ///   not re-validate.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by tests and by callers that already hold an identity.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Validation error for user-entered task text.
///
/// The only failing input in the whole core: text that is empty after
/// trimming. Surfaced to the user as a blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input was empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Trims raw user input and rejects whitespace-only text.
///
/// # Contract
/// - Returns the trimmed text on success.
/// - Returns [`TaskValidationError::EmptyText`] when nothing remains after
///   trimming; the caller must leave all state untouched in that case.
pub fn normalize_task_text(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}
