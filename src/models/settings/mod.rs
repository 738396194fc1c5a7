// Settings module
// Display preferences owned by the host shells, never by the countdown core

use serde::{Deserialize, Serialize};

/// Preferences persisted between launches of the menu-bar shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    /// Show only the icon in the menu bar, hiding the countdown text.
    pub compact_mode: bool,
}

impl DisplayPreferences {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            compact_mode: self.compact_mode,
        }
    }

    pub fn toggled_compact(self) -> Self {
        Self {
            compact_mode: !self.compact_mode,
        }
    }
}

/// Rendering switches passed explicitly into each render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub compact_mode: bool,
}
