//! # folio-tui
//!
//! Portfolio-style interaction layer for the terminal.
//!
//! The centerpiece is a phrase-cycling typewriter engine - a four-state loop
//! (Typing, Holding, Deleting, Pausing) that types and deletes phrases
//! character by character with a blinking caret, honoring a reduced-motion
//! preference with a persisted override. Around it sit the usual portfolio
//! page behaviors: an eased pointer trail, a theme switcher persisted to a
//! preference store, a scroll-driven section highlighter, count-up
//! statistics, and a copy-to-clipboard action with a fallback buffer.
//!
//! ## Architecture
//!
//! Every animated piece is an explicit instance owning its own mutable
//! state, advanced by a `tick` operation fed timestamps from the outside:
//!
//! ```text
//! input events ─┐
//!               ▼
//!          pipeline loop ── tick(now) ──▶ engine / pointer / counters
//!               │                               │
//!               └────────── draw ◀── state ─────┘
//! ```
//!
//! The pipeline is the only place that knows about scheduling and the
//! terminal; the state machines are deterministic under synthetic clocks.
//!
//! ## Modules
//!
//! - [`engine`] - the typewriter state machine and phrase list
//! - [`renderer`] - render surfaces (terminal and in-memory)
//! - [`state`] - pointer trail, sections, counters, clipboard, motion
//! - [`theme`] - palette presets and the persisted switcher
//! - [`prefs`] - single-file key/value preference store
//! - [`pipeline`] - mount/tick/run frame loop

pub mod engine;
pub mod pipeline;
pub mod prefs;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{DEFAULT_PHRASES, EngineState, PhraseList, Timings, Typewriter};

pub use renderer::{CARET_GLYPH, StringSurface, Surface, TerminalSurface};

pub use state::{
    // Motion
    MotionPreference,
    // Pointer
    EASE_AMOUNT, PointerTrail,
    // Sections
    ACTIVE_THRESHOLD, COUNT_THRESHOLD, Section, SectionTracker, WHEEL_SCROLL,
    // Counters
    COUNT_DURATION, CountUp,
    // Clipboard feedback
    CopyFeedback, FEEDBACK_DURATION,
};

pub use theme::{
    // Types
    THEME_KEY, Theme, ThemeStore,
    // Presets
    default_theme, earthy, get_preset, preset_names, sophisticated, walnut,
};

pub use prefs::PrefStore;

pub use pipeline::{App, AppConfig, MountHandle, mount, run, tick};
