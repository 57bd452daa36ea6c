//! Clipboard Module - copy support with internal fallback buffer.
//!
//! The primary path writes an OSC 52 escape sequence to the terminal, which
//! hands the text to the hosting terminal emulator's clipboard. When that
//! write fails (stdout unavailable, non-terminal environment) the text is
//! still retained in an internal buffer, so a copy never fails loudly and
//! paste keeps working within the process.
//!
//! [`CopyFeedback`] models the button-label flash: the label flips to
//! "Copied!" on copy and reverts after a fixed delay, driven by `tick`.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::state::clipboard;
//!
//! clipboard::copy("fn main() {}");
//!
//! if let Some(text) = clipboard::paste() {
//!     println!("on clipboard: {text}");
//! }
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// How long the copy feedback label stays flipped.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Label shown while feedback is active.
pub const FEEDBACK_LABEL: &str = "Copied!";

thread_local! {
    /// Internal clipboard buffer, the fallback when the terminal path is
    /// unavailable and the source for in-process paste.
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

// =============================================================================
// Public API
// =============================================================================

/// Copy text to the clipboard. Never fails loudly.
///
/// The text lands in the internal buffer unconditionally; the OSC 52 write
/// to the terminal is best effort. Empty strings are ignored.
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }

    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = Some(text.to_string());
    });

    let mut stdout = io::stdout().lock();
    let _ = write_osc52(&mut stdout, text);
}

/// Paste text from the internal buffer.
///
/// Returns the most recently copied text, or None if nothing was copied.
pub fn paste() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().clone())
}

/// Clear the internal buffer.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = None;
    });
}

/// Check if the internal buffer has content.
pub fn has_content() -> bool {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().is_some())
}

/// Write the OSC 52 set-clipboard sequence for `text` into `out`.
///
/// The payload is base64-encoded per the OSC 52 spec. Exposed so embedders
/// can target a writer other than stdout.
pub fn write_osc52(out: &mut impl Write, text: &str) -> io::Result<()> {
    let payload = STANDARD.encode(text.as_bytes());
    write!(out, "\x1b]52;c;{payload}\x07")?;
    out.flush()
}

// =============================================================================
// Copy Feedback
// =============================================================================

/// Button-label flash after a copy: "Copied!" for a fixed duration, then
/// back to the idle label.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    idle_label: String,
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
            copied_at: None,
        }
    }

    /// Flip the label; restarts the revert timer on repeated copies.
    pub fn trigger(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Revert the label once the feedback duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.copied_at
            && now.duration_since(at) >= FEEDBACK_DURATION
        {
            self.copied_at = None;
        }
    }

    /// The label to display right now.
    pub fn label(&self) -> &str {
        if self.copied_at.is_some() {
            FEEDBACK_LABEL
        } else {
            &self.idle_label
        }
    }

    pub fn is_active(&self) -> bool {
        self.copied_at.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================
