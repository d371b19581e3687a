//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record consumed by the presentation layer.
//! - Own input validation for user-entered task text.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` assigned at creation.
//! - Stored task text is never empty and never carries leading/trailing
//!   whitespace.

pub mod task;
