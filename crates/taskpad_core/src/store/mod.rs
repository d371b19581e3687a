//! In-memory state holders driving the task list screen.
//!
//! # Responsibility
//! - Own the volatile task collection and its mutation entry points.
//! - Own the edit-dialog sub-state machine layered on top of it.
//!
//! # Invariants
//! - All state is process-local; nothing here touches durable storage.
//! - Every effective mutation synchronously advances a revision counter so
//!   the presentation layer can re-read a consistent model.

pub mod edit;
pub mod task_store;
