//! Mount API - application lifecycle and frame loop.
//!
//! [`mount`] prepares the terminal and builds the application state from its
//! configuration and the preference store. The returned handle is driven
//! either by the blocking [`run`] loop or by calling [`tick`] manually.
//! Unmounting (or dropping the handle) restores the terminal.
//!
//! The loop owns all event subscriptions: input is polled here and routed
//! into the state instances, timestamps are handed to every `tick`
//! participant, and a frame is drawn. The state machines themselves stay
//! free of any scheduling concerns.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::pipeline::{AppConfig, mount, run};
//!
//! let mut handle = mount(AppConfig::default())?;
//! run(&mut handle)?;
//! handle.unmount();
//! ```

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

use crate::engine::{PhraseList, Timings, Typewriter};
use crate::prefs::PrefStore;
use crate::renderer::TerminalSurface;
use crate::state::clipboard::{self, CopyFeedback};
use crate::state::counter::CountUp;
use crate::state::motion::MotionPreference;
use crate::state::pointer::PointerTrail;
use crate::state::sections::{COUNT_THRESHOLD, Section, SectionTracker, WHEEL_SCROLL};
use crate::theme::ThemeStore;

use super::view;

/// Event poll budget per frame, roughly 60 FPS.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Arrow-key scroll step in rows.
const LINE_SCROLL: i32 = 1;

/// Page-key scroll step in rows.
const PAGE_SCROLL: i32 = 10;

// =============================================================================
// Configuration
// =============================================================================

/// Page content and pacing for a mounted application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Phrases for the typewriter hero line.
    pub phrases: PhraseList,
    /// Typewriter pacing.
    pub timings: Timings,
    /// Page sections in order, page coordinates.
    pub sections: Vec<Section>,
    /// Id of the section hosting the statistics row.
    pub stats_section: String,
    /// Statistics as (label, target) pairs.
    pub stats: Vec<(String, u64)>,
    /// Snippet behind the copy action.
    pub code_snippet: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phrases: PhraseList::default(),
            timings: Timings::default(),
            sections: vec![
                Section::new("home", 0, 20),
                Section::new("stats", 20, 10),
                Section::new("projects", 30, 30),
                Section::new("contact", 60, 20),
            ],
            stats_section: "stats".to_string(),
            stats: vec![
                ("projects".to_string(), 24),
                ("commits".to_string(), 1850),
                ("years".to_string(), 6),
            ],
            code_snippet: "fn main() {\n    println!(\"hello\");\n}\n".to_string(),
        }
    }
}

// =============================================================================
// App State
// =============================================================================

/// All runtime state behind a mounted application.
///
/// Building an `App` has no terminal side effects; only [`mount`] and the
/// draw path touch the terminal. That keeps the whole event routing and
/// animation surface testable with synthetic events and clocks.
pub struct App {
    pub(crate) engine: Typewriter<TerminalSurface>,
    pub(crate) pointer: PointerTrail,
    pub(crate) tracker: SectionTracker,
    pub(crate) counters: Vec<(String, CountUp)>,
    pub(crate) feedback: CopyFeedback,
    pub(crate) themes: ThemeStore,
    pub(crate) prefs: PrefStore,
    pub(crate) motion: MotionPreference,
    pub(crate) code_snippet: String,
    pub(crate) stats_section: String,
    pub(crate) size: (u16, u16),
}

impl App {
    /// Build the application state from config, preferences, and the
    /// terminal size.
    pub fn new(config: AppConfig, prefs: PrefStore, size: (u16, u16)) -> Self {
        let motion = MotionPreference::detect(&prefs);
        let themes = ThemeStore::load(&prefs);
        let (width, height) = size;

        let mut surface = TerminalSurface::new(2, 2);
        surface.apply_theme(themes.active());
        let engine = Typewriter::new(
            config.phrases,
            config.timings,
            motion,
            surface,
            Instant::now(),
        );

        let pointer = PointerTrail::new(width, height, motion.animations_allowed());
        let tracker = SectionTracker::new(config.sections, height);

        let counters = config
            .stats
            .iter()
            .map(|(label, target)| {
                let mut counter = CountUp::new(*target);
                if !motion.animations_allowed() {
                    counter.complete();
                }
                (label.clone(), counter)
            })
            .collect();

        Self {
            engine,
            pointer,
            tracker,
            counters,
            feedback: CopyFeedback::new("Copy"),
            themes,
            prefs,
            motion,
            code_snippet: config.code_snippet,
            stats_section: config.stats_section,
            size,
        }
    }

    /// Route one input event. Returns `false` when shutdown was requested.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => {
                match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        self.pointer.point_to(mouse.column, mouse.row);
                    }
                    MouseEventKind::ScrollUp => {
                        self.tracker.scroll_by(-WHEEL_SCROLL);
                    }
                    MouseEventKind::ScrollDown => {
                        self.tracker.scroll_by(WHEEL_SCROLL);
                    }
                    _ => {}
                }
                true
            }
            Event::Resize(width, height) => {
                self.size = (*width, *height);
                self.pointer.resize(*width, *height);
                self.tracker.set_viewport_height(*height);
                true
            }
            _ => true,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return false;
            }
            KeyCode::Char('c') => {
                clipboard::copy(&self.code_snippet);
                self.feedback.trigger(now);
            }
            KeyCode::Char('t') => {
                self.themes.cycle(&mut self.prefs);
                self.engine.surface_mut().apply_theme(self.themes.active());
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.tracker.select_index(index);
            }
            KeyCode::Up => {
                self.tracker.scroll_by(-LINE_SCROLL);
            }
            KeyCode::Down => {
                self.tracker.scroll_by(LINE_SCROLL);
            }
            KeyCode::PageUp => {
                self.tracker.scroll_by(-PAGE_SCROLL);
            }
            KeyCode::PageDown => {
                self.tracker.scroll_by(PAGE_SCROLL);
            }
            _ => {}
        }
        true
    }

    /// The motion preference captured at startup.
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// The typewriter engine.
    pub fn engine(&self) -> &Typewriter<TerminalSurface> {
        &self.engine
    }

    /// The section tracker.
    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    /// Advance every tick participant by one frame.
    pub fn advance(&mut self, now: Instant) {
        self.engine.tick(now);
        self.pointer.tick();

        let stats_ratio = self.tracker.ratio_of(&self.stats_section);
        for (_, counter) in &mut self.counters {
            if stats_ratio >= COUNT_THRESHOLD {
                counter.start(now);
            }
            counter.tick(now);
        }

        self.feedback.tick(now);
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that drives and eventually unmounts the app.
pub struct MountHandle {
    pub(crate) app: App,
    running: bool,
}

impl MountHandle {
    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request graceful shutdown; the next [`tick`] returns `false`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// The application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Restore the terminal and consume the handle.
    pub fn unmount(mut self) {
        self.running = false;
        restore_terminal();
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort; unmount() already did this on the happy path.
        restore_terminal();
    }
}

// =============================================================================
// Mount / Tick / Run
// =============================================================================

/// Prepare the terminal and build the application.
///
/// Sets up raw mode, the alternate screen, and mouse capture, loads the
/// preference store, and performs the initial render.
pub fn mount(config: AppConfig) -> io::Result<MountHandle> {
    let prefs = PrefStore::load();
    let size = terminal::size().unwrap_or((80, 24));

    terminal::enable_raw_mode()?;
    execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;

    let mut handle = MountHandle {
        app: App::new(config, prefs, size),
        running: true,
    };
    view::draw(&mut handle.app)?;
    Ok(handle)
}

/// Run one frame: poll input, advance animations, draw.
///
/// Returns `Ok(false)` once shutdown has been requested.
pub fn tick(handle: &mut MountHandle) -> io::Result<bool> {
    if !handle.running {
        return Ok(false);
    }

    if event::poll(FRAME_BUDGET)? {
        let event = event::read()?;
        if !handle.app.handle_event(&event, Instant::now()) {
            handle.running = false;
            return Ok(false);
        }
    }

    handle.app.advance(Instant::now());
    view::draw(&mut handle.app)?;
    Ok(true)
}

/// Blocking frame loop until shutdown.
pub fn run(handle: &mut MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

fn restore_terminal() {
    let _ = execute!(
        stdout(),
        crossterm::cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

// =============================================================================
// Tests
// =============================================================================
