//! Interaction state.
//!
//! Each submodule owns one self-contained behavior from the interaction
//! layer. All animated pieces follow the same shape: an explicit instance
//! owning its mutable state, advanced by a `tick` fed from the frame loop.
//!
//! - [`motion`] - reduced-motion preference with stored override
//! - [`pointer`] - eased pointer-trailing indicator
//! - [`sections`] - scroll-driven active-section highlighting
//! - [`counter`] - visibility-triggered count-up statistics
//! - [`clipboard`] - copy action with fallback buffer and label feedback

pub mod clipboard;
pub mod counter;
pub mod motion;
pub mod pointer;
pub mod sections;

pub use clipboard::{CopyFeedback, FEEDBACK_DURATION};
pub use counter::{COUNT_DURATION, CountUp};
pub use motion::MotionPreference;
pub use pointer::{EASE_AMOUNT, PointerTrail};
pub use sections::{ACTIVE_THRESHOLD, COUNT_THRESHOLD, Section, SectionTracker, WHEEL_SCROLL};
