//! FFI crate wiring for the Flutter-facing bridge.

pub mod api;
