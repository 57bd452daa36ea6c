//! Theme System - semantic palette with persisted preset selection.
//!
//! A theme is a small set of semantic colors. Three named presets
//! (sophisticated, earthy, walnut) sit alongside the unthemed terminal
//! default. Applying a named preset persists the choice under the
//! `preferred-theme` key; applying anything unknown reverts to the default
//! and removes the key, so a stale or hand-edited preference can never wedge
//! the UI.

pub mod presets;

pub use presets::{default_theme, earthy, get_preset, preset_names, sophisticated, walnut};

use crossterm::style::Color;

use crate::prefs::PrefStore;

/// Preference-store key for the persisted theme choice.
pub const THEME_KEY: &str = "preferred-theme";

// =============================================================================
// Theme
// =============================================================================

/// Semantic color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Preset name (e.g. "earthy"); "default" for the unthemed palette.
    pub name: String,
    /// Primary text color.
    pub text: Color,
    /// Muted/secondary text.
    pub text_muted: Color,
    /// Accent for highlights (active nav, copy flash).
    pub accent: Color,
    /// Background fill.
    pub background: Color,
    /// Typewriter caret color.
    pub caret: Color,
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

// =============================================================================
// ThemeStore
// =============================================================================

/// Owns the active theme and keeps the persisted choice in sync.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    active: Theme,
}

impl ThemeStore {
    /// Restore the persisted choice; an unknown stored name degrades to the
    /// default palette without touching the store.
    pub fn load(prefs: &PrefStore) -> Self {
        let active = prefs
            .get(THEME_KEY)
            .and_then(get_preset)
            .unwrap_or_else(default_theme);
        Self { active }
    }

    /// Apply a preset by name.
    ///
    /// A named preset is applied and persisted. Anything else (including
    /// "default") reverts to the default palette and removes the stored key.
    pub fn apply(&mut self, name: &str, prefs: &mut PrefStore) {
        match get_preset(name) {
            Some(theme) if name != "default" => {
                prefs.set(THEME_KEY, name);
                self.active = theme;
            }
            _ => {
                prefs.remove(THEME_KEY);
                self.active = default_theme();
            }
        }
    }

    /// Advance to the next preset in display order, wrapping.
    pub fn cycle(&mut self, prefs: &mut PrefStore) {
        let names = preset_names();
        let current = names
            .iter()
            .position(|n| *n == self.active.name)
            .unwrap_or(0);
        let next = names[(current + 1) % names.len()];
        self.apply(next, prefs);
    }

    /// The active theme.
    pub fn active(&self) -> &Theme {
        &self.active
    }
}

// =============================================================================
// Tests
// =============================================================================
