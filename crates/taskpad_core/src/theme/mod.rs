//! Theme selection and color palettes.
//!
//! # Responsibility
//! - Track the active light/dark mode across host events and manual toggles.
//! - Map the active mode to a fixed semantic color palette.
//!
//! # Invariants
//! - The palette is a pure function of the mode; there is no independently
//!   mutable color state.
//! - Every host-reported preference maps to a defined mode; theme handling
//!   has no failure path.

pub mod palette;
pub mod state;
