//! Frame composition.
//!
//! Draws one frame of the portfolio page: nav bar, typewriter hero line,
//! statistics row, code box with its copy label, and the pointer trail on
//! top. Purely a consumer of the state instances; nothing here mutates
//! animation state.

use std::io::{self, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use crate::theme::Theme;
use crate::types::Attr;

use super::mount::App;

/// Glyph for the pointer-trailing indicator.
const TRAIL_GLYPH: char = '●';

/// Row positions of the fixed chrome.
const NAV_ROW: u16 = 0;
const STATS_ROW: u16 = 4;
const CODE_ROW: u16 = 6;

/// Draw one frame to stdout.
pub fn draw(app: &mut App) -> io::Result<()> {
    let mut out = stdout().lock();
    let theme = app.themes.active().clone();

    queue!(
        out,
        SetBackgroundColor(theme.background),
        Clear(ClearType::All)
    )?;

    draw_nav(&mut out, app, &theme)?;
    app.engine.surface().draw(&mut out)?;
    draw_stats(&mut out, app, &theme)?;
    draw_code(&mut out, app, &theme)?;
    draw_footer(&mut out, app, &theme)?;

    if app.pointer.is_enabled() {
        let (x, y) = app.pointer.position();
        queue!(
            out,
            MoveTo(x, y),
            SetForegroundColor(theme.accent),
            Print(TRAIL_GLYPH),
            ResetColor
        )?;
    }

    out.flush()
}

fn draw_nav(out: &mut impl Write, app: &App, theme: &Theme) -> io::Result<()> {
    queue!(out, MoveTo(1, NAV_ROW))?;
    let active = app.tracker.active_id().map(str::to_string);

    for (i, section) in app.tracker.sections().iter().enumerate() {
        if i > 0 {
            queue!(out, SetForegroundColor(theme.text_muted), Print(" │ "))?;
        }
        if active.as_deref() == Some(section.id.as_str()) {
            styled(out, &section.id, theme.accent, Attr::BOLD | Attr::UNDERLINE)?;
        } else {
            styled(out, &section.id, theme.text_muted, Attr::NONE)?;
        }
    }
    Ok(())
}

fn draw_stats(out: &mut impl Write, app: &App, theme: &Theme) -> io::Result<()> {
    queue!(out, MoveTo(2, STATS_ROW))?;
    for (i, (label, counter)) in app.counters.iter().enumerate() {
        if i > 0 {
            queue!(out, Print("   "))?;
        }
        styled(out, &counter.value().to_string(), theme.accent, Attr::BOLD)?;
        queue!(out, Print(" "))?;
        styled(out, label, theme.text_muted, Attr::NONE)?;
    }
    Ok(())
}

fn draw_code(out: &mut impl Write, app: &App, theme: &Theme) -> io::Result<()> {
    let label = format!("[c] {}", app.feedback.label());
    queue!(out, MoveTo(2, CODE_ROW))?;
    if app.feedback.is_active() {
        styled(out, &label, theme.accent, Attr::BOLD)?;
    } else {
        styled(out, &label, theme.text, Attr::NONE)?;
    }

    for (i, line) in app.code_snippet.lines().enumerate() {
        queue!(out, MoveTo(4, CODE_ROW + 1 + i as u16))?;
        styled(out, line, theme.text_muted, Attr::DIM)?;
    }
    Ok(())
}

fn draw_footer(out: &mut impl Write, app: &App, theme: &Theme) -> io::Result<()> {
    let (_, height) = app.size;
    queue!(out, MoveTo(1, height.saturating_sub(1)))?;
    styled(
        out,
        "q quit · t theme · c copy · ↑/↓ scroll · 1-9 jump",
        theme.text_muted,
        Attr::DIM,
    )
}

/// Print one styled run and reset.
fn styled(out: &mut impl Write, text: &str, color: crossterm::style::Color, attrs: Attr) -> io::Result<()> {
    for attr in attrs.to_crossterm() {
        queue!(out, SetAttribute(attr))?;
    }
    queue!(
        out,
        SetForegroundColor(color),
        Print(text),
        ResetColor,
        SetAttribute(Attribute::Reset)
    )
}
