//! Theme mode and the two fixed color palettes.

use serde::{Deserialize, Serialize};

/// Active theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Stable string id used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The fixed palette for this mode. Pure: same mode, same palette.
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Semantic color roles consumed by the presentation layer.
///
/// Values are CSS-style color strings (hex or rgba) because the consuming
/// UI toolkit parses them directly; core never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Accent for headers, checkboxes and primary buttons.
    pub primary: &'static str,
    /// Screen background.
    pub background: &'static str,
    /// List row and dialog surface.
    pub card: &'static str,
    /// Default foreground text.
    pub text: &'static str,
    /// Hairline borders around rows and inputs.
    pub border: &'static str,
    /// Secondary action buttons (edit).
    pub secondary: &'static str,
    /// Destructive action buttons (delete).
    pub danger: &'static str,
    /// Positive confirmation accents.
    pub success: &'static str,
    /// Neutral/disabled elements.
    pub neutral: &'static str,
    /// De-emphasized text such as hints and counters.
    pub text_secondary: &'static str,
    /// Struck-through text of completed tasks.
    pub completed_text: &'static str,
    /// Scrim behind the edit dialog.
    pub modal_overlay: &'static str,
}

/// Light-mode palette.
pub const LIGHT: Palette = Palette {
    primary: "#3B82F6",
    background: "#F9FAFB",
    card: "#FFFFFF",
    text: "#111827",
    border: "#E5E7EB",
    secondary: "#6B7280",
    danger: "#DC2626",
    success: "#059669",
    neutral: "#9CA3AF",
    text_secondary: "#4B5563",
    completed_text: "#9CA3AF",
    modal_overlay: "rgba(17, 24, 39, 0.3)",
};

/// Dark-mode palette.
pub const DARK: Palette = Palette {
    primary: "#60A5FA",
    background: "#111827",
    card: "#1F2937",
    text: "#F9FAFB",
    border: "#374151",
    secondary: "#9CA3AF",
    danger: "#EF4444",
    success: "#10B981",
    neutral: "#6B7280",
    text_secondary: "#D1D5DB",
    completed_text: "#6B7280",
    modal_overlay: "rgba(17, 24, 39, 0.7)",
};
