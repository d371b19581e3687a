//! FFI use-case API for the task list screen.
//!
//! # Responsibility
//! - Expose core task/edit/theme operations to Dart via FRB sync calls.
//! - Own the process-lifetime app session the UI operates on.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Responses are plain data envelopes; the UI re-renders from snapshots.
//! - Unparseable task-id strings behave like absent ids (silent no-op);
//!   the UI can only hold ids this layer handed out.

use std::sync::{Mutex, OnceLock, PoisonError};
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    EditSession, EditState, Palette, TaskId, TaskStore, ThemeState,
};
use uuid::Uuid;

/// All mutable state for one app process, created on first use and torn
/// down only at process exit. The UI never sees this type, only snapshots.
struct AppSession {
    tasks: TaskStore,
    edit: EditSession,
    theme: ThemeState,
}

impl AppSession {
    fn new() -> Self {
        log::info!("event=session_init module=ffi status=ok");
        Self {
            tasks: TaskStore::new(),
            edit: EditSession::new(),
            theme: ThemeState::default(),
        }
    }
}

static APP_SESSION: OnceLock<Mutex<AppSession>> = OnceLock::new();

fn with_session<T>(f: impl FnOnce(&mut AppSession) -> T) -> T {
    let session = APP_SESSION.get_or_init(|| Mutex::new(AppSession::new()));
    // A poisoned lock only means a previous caller panicked mid-call; the
    // state itself is still the best available truth for the UI.
    let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, UI-thread safe.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error text on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as rendered by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemView {
    /// Stable task ID in string form.
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Ordered read model of the task list plus its change counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<TaskItemView>,
    /// Advances on every effective mutation; equal revisions mean the UI
    /// copy is still current.
    pub revision: u64,
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation left its postcondition satisfied.
    pub ok: bool,
    /// Created task ID, present for successful adds.
    pub task_id: Option<String>,
    /// Human-readable message for diagnostics or the blocking notification.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            task_id: None,
            message: message.into(),
        }
    }

    fn created(message: impl Into<String>, task_id: TaskId) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id.to_string()),
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Validates and appends a new task.
///
/// # FFI contract
/// - Whitespace-only input returns `ok=false` with the validation message
///   the UI shows as a blocking notification; state is untouched.
/// - Success returns the created id; the UI clears its input field.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String) -> TaskActionResponse {
    with_session(|session| match session.tasks.add(text.as_str()) {
        Ok(id) => TaskActionResponse::created("Task added.", id),
        Err(err) => TaskActionResponse::rejected(err.to_string()),
    })
}

/// Removes a task by id. Absent or unparseable ids are already-satisfied
/// postconditions, so the response is still `ok=true`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_remove(id: String) -> TaskActionResponse {
    with_session(|session| {
        if let Some(id) = parse_task_id(&id) {
            session.tasks.remove(id);
        }
        TaskActionResponse::success("Task removed.")
    })
}

/// Flips the completion flag on a task. No-op on absent ids.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_complete(id: String) -> TaskActionResponse {
    with_session(|session| {
        if let Some(id) = parse_task_id(&id) {
            session.tasks.toggle_complete(id);
        }
        TaskActionResponse::success("Task toggled.")
    })
}

/// Replaces a task's text verbatim. The edit flow validates drafts before
/// calling; direct callers get the same no-validation semantics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update(id: String, text: String) -> TaskActionResponse {
    with_session(|session| {
        if let Some(id) = parse_task_id(&id) {
            session.tasks.update_text(id, text);
        }
        TaskActionResponse::success("Task updated.")
    })
}

/// Returns the ordered task list for rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> TaskListSnapshot {
    with_session(|session| TaskListSnapshot {
        tasks: session
            .tasks
            .tasks()
            .iter()
            .map(|task| TaskItemView {
                id: task.id.to_string(),
                text: task.text.clone(),
                completed: task.completed,
            })
            .collect(),
        revision: session.tasks.revision(),
    })
}

/// Edit-dialog state as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStateView {
    /// Whether the dialog is open.
    pub editing: bool,
    /// Target task id while editing.
    pub task_id: Option<String>,
    /// Current draft text while editing.
    pub draft: Option<String>,
}

fn edit_state_view(session: &AppSession) -> EditStateView {
    match session.edit.state() {
        EditState::Idle => EditStateView {
            editing: false,
            task_id: None,
            draft: None,
        },
        EditState::Editing { task_id, draft } => EditStateView {
            editing: true,
            task_id: Some(task_id.to_string()),
            draft: Some(draft.clone()),
        },
    }
}

/// Opens the edit dialog for a task, snapshotting its text as the draft.
/// No-op on absent ids; the returned view then still reads idle.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_begin(id: String) -> EditStateView {
    with_session(|session| {
        if let Some(id) = parse_task_id(&id) {
            session.edit.begin(&session.tasks, id);
        }
        edit_state_view(session)
    })
}

/// Tracks the dialog input field while the user types.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_set_draft(text: String) -> EditStateView {
    with_session(|session| {
        session.edit.set_draft(text);
        edit_state_view(session)
    })
}

/// Applies the draft when it is non-empty after trimming and closes the
/// dialog; a whitespace-only draft leaves the dialog open and applies
/// nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_confirm() -> EditStateView {
    with_session(|session| {
        session.edit.confirm(&mut session.tasks);
        edit_state_view(session)
    })
}

/// Discards the draft and closes the dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_cancel() -> EditStateView {
    with_session(|session| {
        session.edit.cancel();
        edit_state_view(session)
    })
}

/// Current edit-dialog state without mutating anything.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_state() -> EditStateView {
    with_session(|session| edit_state_view(session))
}

/// Palette projection with owned strings for the Dart side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView {
    pub primary: String,
    pub background: String,
    pub card: String,
    pub text: String,
    pub border: String,
    pub secondary: String,
    pub danger: String,
    pub success: String,
    pub neutral: String,
    pub text_secondary: String,
    pub completed_text: String,
    pub modal_overlay: String,
}

impl From<&Palette> for PaletteView {
    fn from(palette: &Palette) -> Self {
        Self {
            primary: palette.primary.to_owned(),
            background: palette.background.to_owned(),
            card: palette.card.to_owned(),
            text: palette.text.to_owned(),
            border: palette.border.to_owned(),
            secondary: palette.secondary.to_owned(),
            danger: palette.danger.to_owned(),
            success: palette.success.to_owned(),
            neutral: palette.neutral.to_owned(),
            text_secondary: palette.text_secondary.to_owned(),
            completed_text: palette.completed_text.to_owned(),
            modal_overlay: palette.modal_overlay.to_owned(),
        }
    }
}

/// Theme read model: active mode plus the derived palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSnapshot {
    /// `light` or `dark`.
    pub mode: String,
    pub palette: PaletteView,
    /// Advances on every mode change.
    pub revision: u64,
}

fn theme_snapshot_view(session: &AppSession) -> ThemeSnapshot {
    ThemeSnapshot {
        mode: session.theme.mode().as_str().to_owned(),
        palette: PaletteView::from(session.theme.palette()),
        revision: session.theme.revision(),
    }
}

/// Applies the host appearance preference the UI read at startup.
/// Any value other than the literal `dark` selects light mode.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_initialize(host_preference: String) -> ThemeSnapshot {
    with_session(|session| {
        session.theme.on_host_preference_change(&host_preference);
        theme_snapshot_view(session)
    })
}

/// Applies a changed host appearance preference. Overwrites a prior
/// manual toggle by design of the host-event contract.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_host_preference_changed(host_preference: String) -> ThemeSnapshot {
    with_session(|session| {
        session.theme.on_host_preference_change(&host_preference);
        theme_snapshot_view(session)
    })
}

/// Flips the mode on the user's manual toggle.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_toggle() -> ThemeSnapshot {
    with_session(|session| {
        session.theme.toggle();
        theme_snapshot_view(session)
    })
}

/// Current theme read model without mutating anything.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_snapshot() -> ThemeSnapshot {
    with_session(|session| theme_snapshot_view(session))
}
