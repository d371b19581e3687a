//! Theme state holder.
//!
//! # Responsibility
//! - Initialize the mode from the host-reported appearance preference.
//! - Track host preference changes and the user's manual toggle.
//!
//! # Invariants
//! - Only the literal preference `"dark"` selects dark mode; any other or
//!   absent value falls back to light.
//! - A host preference change overwrites the mode unconditionally, even
//!   after a manual toggle.

use crate::theme::palette::{Palette, ThemeMode};
use log::debug;

/// Host appearance preference string that selects dark mode.
pub const HOST_PREFERENCE_DARK: &str = "dark";

/// Holds the active theme mode for one app session.
///
/// Owned by the composition root and passed to whoever needs it; this is
/// deliberately not a process-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    revision: u64,
}

/// Maps a host-reported preference string to a mode.
///
/// Infallible: unknown or empty values mean light.
pub fn mode_from_host_preference(preference: &str) -> ThemeMode {
    if preference == HOST_PREFERENCE_DARK {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

impl ThemeState {
    /// Initializes from the preference the host reported at startup.
    pub fn from_host_preference(preference: &str) -> Self {
        let mode = mode_from_host_preference(preference);
        debug!("event=theme_init module=theme status=ok mode={}", mode.as_str());
        Self { mode, revision: 0 }
    }

    /// Re-applies the mapping when the host reports a changed preference.
    ///
    /// Unconditional overwrite, not a merge: a prior manual toggle is
    /// discarded here.
    pub fn on_host_preference_change(&mut self, preference: &str) {
        self.set_mode(mode_from_host_preference(preference));
    }

    /// Flips the mode on the user's manual toggle. The choice holds until
    /// the next host preference change event.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.flipped());
    }

    /// Active mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette derived from the active mode.
    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }

    /// Change counter for the presentation layer, advanced on every mode
    /// change. A host event re-reporting the current mode leaves it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode != mode {
            self.mode = mode;
            self.revision += 1;
            debug!("event=theme_mode module=theme status=ok mode={}", mode.as_str());
        }
    }
}

impl Default for ThemeState {
    /// Light mode, matching the fallback for an absent host preference.
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            revision: 0,
        }
    }
}
