//! Core state logic for Taskpad.
//! This crate is the single source of truth for task-list and theme state.

pub mod logging;
pub mod model;
pub mod store;
pub mod theme;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_task_text, TaskId, TaskItem, TaskValidationError};
pub use store::edit::{EditSession, EditState};
pub use store::task_store::TaskStore;
pub use theme::palette::{Palette, ThemeMode, DARK, LIGHT};
pub use theme::state::{mode_from_host_preference, ThemeState, HOST_PREFERENCE_DARK};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
