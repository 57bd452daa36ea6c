//! Render Surfaces - where the typewriter writes its output.
//!
//! A [`Surface`] is the text-displaying element the engine renders into. The
//! contract is deliberately thin: the surface accepts arbitrary-length text
//! replacement on every call, with no validation, plus a caret visibility
//! toggle that maps to whatever caret indicator the surface draws.
//!
//! Two implementations:
//!
//! - [`TerminalSurface`] - draws at a fixed cell position via crossterm,
//!   with theme colors and a block caret glyph.
//! - [`StringSurface`] - in-memory recorder used by tests and embedders
//!   that render elsewhere.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::theme::Theme;
use crate::types::Attr;

// =============================================================================
// Surface Trait
// =============================================================================

/// A text surface the typewriter engine renders into.
pub trait Surface {
    /// Replace the displayed text. No validation, any length.
    fn set_text(&mut self, text: &str);

    /// Toggle the caret indicator.
    fn set_caret_visible(&mut self, visible: bool);
}

// =============================================================================
// StringSurface
// =============================================================================

/// In-memory surface recording every render, for tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct StringSurface {
    text: String,
    caret_visible: bool,
    history: Vec<String>,
}

impl StringSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current caret visibility.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Every text ever rendered, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Surface for StringSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.history.push(text.to_string());
    }

    fn set_caret_visible(&mut self, visible: bool) {
        self.caret_visible = visible;
    }
}

// =============================================================================
// TerminalSurface
// =============================================================================

/// Caret glyph drawn after the text, simulating a text-input cursor.
pub const CARET_GLYPH: char = '▌';

/// Terminal-backed surface drawing a single styled line.
///
/// `set_text` / `set_caret_visible` only update state; the pipeline calls
/// [`draw`](TerminalSurface::draw) once per frame.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    x: u16,
    y: u16,
    text: String,
    caret_visible: bool,
    text_color: Color,
    caret_color: Color,
    attrs: Attr,
}

impl TerminalSurface {
    /// Create a surface anchored at the given cell position, styled with
    /// terminal default colors.
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            text: String::new(),
            caret_visible: true,
            text_color: Color::Reset,
            caret_color: Color::Reset,
            attrs: Attr::BOLD,
        }
    }

    /// Restyle from a theme (applied on theme switch).
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.text_color = theme.text;
        self.caret_color = theme.caret;
    }

    /// Move the anchor cell (applied on terminal resize).
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }

    /// Queue the line into `out`. The caller flushes.
    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, MoveTo(self.x, self.y), Clear(ClearType::UntilNewLine))?;
        for attr in self.attrs.to_crossterm() {
            queue!(out, SetAttribute(attr))?;
        }
        queue!(
            out,
            SetForegroundColor(self.text_color),
            Print(&self.text)
        )?;
        if self.caret_visible {
            queue!(out, SetForegroundColor(self.caret_color), Print(CARET_GLYPH))?;
        }
        queue!(out, ResetColor, SetAttribute(crossterm::style::Attribute::Reset))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }
}

impl Surface for TerminalSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_caret_visible(&mut self, visible: bool) {
        self.caret_visible = visible;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_surface_records_history() {
        let mut surface = StringSurface::new();

        surface.set_text("a");
        surface.set_text("ab");
        surface.set_text("");

        assert_eq!(surface.text(), "");
        assert_eq!(surface.history(), &["a", "ab", ""]);
    }

    #[test]
    fn test_string_surface_caret() {
        let mut surface = StringSurface::new();
        assert!(!surface.caret_visible());

        surface.set_caret_visible(true);
        assert!(surface.caret_visible());

        surface.set_caret_visible(false);
        assert!(!surface.caret_visible());
    }

    #[test]
    fn test_terminal_surface_state_only() {
        let mut surface = TerminalSurface::new(2, 3);

        surface.set_text("hello");
        surface.set_caret_visible(false);

        assert_eq!(surface.text(), "hello");
        assert!(!surface.caret_visible());
    }

    #[test]
    fn test_terminal_surface_draw_includes_text_and_caret() {
        let mut surface = TerminalSurface::new(0, 0);
        surface.set_text("hi");
        surface.set_caret_visible(true);

        let mut buf = Vec::new();
        surface.draw(&mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert!(rendered.contains("hi"));
        assert!(rendered.contains(CARET_GLYPH));
    }

    #[test]
    fn test_terminal_surface_draw_hides_caret() {
        let mut surface = TerminalSurface::new(0, 0);
        surface.set_text("hi");
        surface.set_caret_visible(false);

        let mut buf = Vec::new();
        surface.draw(&mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert!(!rendered.contains(CARET_GLYPH));
    }
}
