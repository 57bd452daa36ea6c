//! Typewriter Engine - phrase-cycling typing animation.
//!
//! Cycles through a phrase list, typing and deleting character by character
//! with a blinking caret:
//!
//! ```text
//! Typing -> Holding -> Deleting -> Pausing -> Typing (next phrase, wrapping)
//! ```
//!
//! The engine never schedules itself. An external loop calls
//! [`Typewriter::tick`] with a timestamp; the engine advances at most one
//! step per tick, and only when the elapsed time meets the active state's
//! delay. Ticks that arrive faster than the delay are no-ops, and slow
//! frames advance exactly one step, so the animation is frame-rate
//! independent and fully deterministic under synthetic clocks.
//!
//! # Reduced motion
//!
//! When the motion preference resolves to reduced (and no override is
//! stored), the engine renders the first phrase statically, hides the caret,
//! and stays in that degraded mode permanently.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::engine::{PhraseList, Timings, Typewriter};
//! use folio_tui::renderer::StringSurface;
//! use folio_tui::state::motion::MotionPreference;
//! use std::time::Instant;
//!
//! let mut tw = Typewriter::new(
//!     PhraseList::default(),
//!     Timings::default(),
//!     MotionPreference::full_motion(),
//!     StringSurface::new(),
//!     Instant::now(),
//! );
//!
//! // In the frame loop:
//! tw.tick(Instant::now());
//! ```

pub mod phrases;

pub use phrases::{DEFAULT_PHRASES, PhraseList};

use std::time::{Duration, Instant};

use crate::renderer::Surface;
use crate::state::motion::MotionPreference;

// =============================================================================
// Timings
// =============================================================================

/// Per-state delays plus the caret blink period.
///
/// Defaults match the observed portfolio pacing: brisk typing, a long hold
/// on the full phrase, faster deletion, and a short pause before the next
/// phrase. The caret blinks at the standard 2 FPS cursor rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between typed characters.
    pub type_delay: Duration,
    /// How long the full phrase stays on screen before deletion.
    pub hold_delay: Duration,
    /// Delay between deleted characters.
    pub delete_delay: Duration,
    /// Pause on the empty line before typing the next phrase.
    pub pause_delay: Duration,
    /// Caret visibility toggle period, independent of the typing states.
    pub blink_period: Duration,
}

impl Timings {
    /// Construct from millisecond values.
    pub const fn from_millis(
        type_delay: u64,
        hold_delay: u64,
        delete_delay: u64,
        pause_delay: u64,
        blink_period: u64,
    ) -> Self {
        Self {
            type_delay: Duration::from_millis(type_delay),
            hold_delay: Duration::from_millis(hold_delay),
            delete_delay: Duration::from_millis(delete_delay),
            pause_delay: Duration::from_millis(pause_delay),
            blink_period: Duration::from_millis(blink_period),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_millis(90, 1100, 60, 300, 500)
    }
}

// =============================================================================
// Engine State
// =============================================================================

/// The four typewriter states. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Revealing the current phrase one character per step.
    Typing,
    /// Full phrase on screen, waiting out the hold delay.
    Holding,
    /// Removing one character per step.
    Deleting,
    /// Empty line, waiting out the pause delay before the next phrase.
    Pausing,
}

// =============================================================================
// Typewriter
// =============================================================================

/// Phrase-cycling typewriter engine.
///
/// Owns all of its mutable state; no globals. Writes rendered text and caret
/// visibility to the [`Surface`] it was constructed with.
pub struct Typewriter<S: Surface> {
    phrases: PhraseList,
    timings: Timings,
    surface: S,
    state: EngineState,
    /// Character position in `[0, char_count(current phrase)]`.
    char_index: usize,
    /// Index into the phrase list, advances (wrapping) on Pausing -> Typing.
    word_index: usize,
    caret_visible: bool,
    last_update: Instant,
    last_blink: Instant,
    /// False means reduced-motion degraded mode: first phrase rendered
    /// statically, no further transitions ever.
    animated: bool,
}

impl<S: Surface> Typewriter<S> {
    /// Create the engine and perform the initial render.
    ///
    /// With full motion the surface starts empty with a visible caret and
    /// the engine in [`EngineState::Typing`]. With reduced motion (and no
    /// override) the first phrase is rendered whole, the caret is hidden,
    /// and [`tick`](Self::tick) becomes a permanent no-op.
    pub fn new(
        phrases: PhraseList,
        timings: Timings,
        motion: MotionPreference,
        mut surface: S,
        now: Instant,
    ) -> Self {
        let animated = motion.animations_allowed();

        let char_index = if animated {
            surface.set_text("");
            surface.set_caret_visible(true);
            0
        } else {
            surface.set_text(phrases.first());
            surface.set_caret_visible(false);
            phrases.char_count(0)
        };

        Self {
            phrases,
            timings,
            surface,
            state: EngineState::Typing,
            char_index,
            word_index: 0,
            caret_visible: animated,
            last_update: now,
            last_blink: now,
            animated,
        }
    }

    /// Advance the animation by at most one step.
    ///
    /// Caret blink timing is evaluated on every tick, independent of the
    /// four typing states. The state machine itself only advances when the
    /// elapsed time since the last state-relevant update meets the active
    /// state's delay.
    pub fn tick(&mut self, now: Instant) {
        if !self.animated {
            return;
        }

        if now.duration_since(self.last_blink) >= self.timings.blink_period {
            self.caret_visible = !self.caret_visible;
            self.last_blink = now;
            self.surface.set_caret_visible(self.caret_visible);
        }

        if now.duration_since(self.last_update) < self.state_delay() {
            return;
        }
        self.last_update = now;

        match self.state {
            EngineState::Typing => {
                let len = self.phrases.char_count(self.word_index);
                self.char_index = (self.char_index + 1).min(len);
                self.render_prefix();
                if self.char_index == len {
                    self.state = EngineState::Holding;
                }
            }
            EngineState::Holding => {
                self.state = EngineState::Deleting;
            }
            EngineState::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                self.render_prefix();
                if self.char_index == 0 {
                    self.state = EngineState::Pausing;
                }
            }
            EngineState::Pausing => {
                self.word_index = (self.word_index + 1) % self.phrases.len();
                self.state = EngineState::Typing;
            }
        }
    }

    /// Write the char-boundary-safe prefix of the current phrase.
    fn render_prefix(&mut self) {
        let prefix: String = self
            .phrases
            .get(self.word_index)
            .chars()
            .take(self.char_index)
            .collect();
        self.surface.set_text(&prefix);
    }

    fn state_delay(&self) -> Duration {
        match self.state {
            EngineState::Typing => self.timings.type_delay,
            EngineState::Holding => self.timings.hold_delay,
            EngineState::Deleting => self.timings.delete_delay,
            EngineState::Pausing => self.timings.pause_delay,
        }
    }

    /// Current state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Character position within the current phrase.
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// Index of the current phrase.
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Current caret visibility.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// True when running the full animation, false in the reduced-motion
    /// degraded mode.
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// The phrase list this engine cycles through.
    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface (for restyling).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

// =============================================================================
// Tests
// =============================================================================
