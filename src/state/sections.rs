//! Section Tracker - scroll-driven active-section highlighting.
//!
//! Pages are a vertical sequence of named sections. As the viewport scrolls,
//! the tracker computes each section's visibility ratio and marks the most
//! visible one (meeting a threshold) as active, which drives the nav
//! highlight. Explicit selection (a nav click) wins immediately and also
//! scrolls the section into view.
//!
//! Scroll offsets are clamped to `[0, max_scroll]`; scrolling past a
//! boundary reports `false` so callers can chain or ignore.

/// Minimum visibility ratio for a section to claim the active highlight.
pub const ACTIVE_THRESHOLD: f32 = 0.4;

/// Visibility ratio at which visibility-triggered animations start.
pub const COUNT_THRESHOLD: f32 = 0.5;

/// Rows scrolled per mouse wheel step.
pub const WHEEL_SCROLL: i32 = 3;

/// A named vertical slice of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    /// First row of the section in page coordinates.
    pub top: u16,
    /// Section height in rows.
    pub height: u16,
}

impl Section {
    pub fn new(id: impl Into<String>, top: u16, height: u16) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Tracks scroll position and the active section.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    scroll_offset: u16,
    viewport_height: u16,
    max_scroll: u16,
    active: Option<usize>,
}

impl SectionTracker {
    pub fn new(sections: Vec<Section>, viewport_height: u16) -> Self {
        let max_scroll = content_height(&sections).saturating_sub(viewport_height);
        let mut tracker = Self {
            sections,
            scroll_offset: 0,
            viewport_height,
            max_scroll,
            active: None,
        };
        tracker.recompute();
        tracker
    }

    /// Scroll by a delta amount, clamped.
    ///
    /// Returns `true` if scrolling occurred, `false` if already at boundary.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let new = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(self.max_scroll));
        let new = new as u16;
        if new == self.scroll_offset {
            return false;
        }
        self.scroll_offset = new;
        self.recompute();
        true
    }

    /// Update the viewport height on resize.
    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.max_scroll = content_height(&self.sections).saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll);
        self.recompute();
    }

    /// Fraction of the section currently inside the viewport, in `[0, 1]`.
    pub fn visibility_ratio(&self, index: usize) -> f32 {
        let Some(section) = self.sections.get(index) else {
            return 0.0;
        };
        if section.height == 0 {
            return 0.0;
        }
        let view_top = self.scroll_offset;
        let view_bottom = self.scroll_offset.saturating_add(self.viewport_height);
        let sec_top = section.top;
        let sec_bottom = section.top.saturating_add(section.height);

        let overlap_top = sec_top.max(view_top);
        let overlap_bottom = sec_bottom.min(view_bottom);
        if overlap_bottom <= overlap_top {
            return 0.0;
        }
        f32::from(overlap_bottom - overlap_top) / f32::from(section.height)
    }

    /// Select a section explicitly and scroll it into view.
    ///
    /// Returns `false` for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        self.scroll_offset = self.sections[index].top.min(self.max_scroll);
        self.active = Some(index);
        true
    }

    /// Select a section by position (digit-key navigation).
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.sections.get(index) {
            Some(section) => {
                let id = section.id.clone();
                self.select(&id)
            }
            None => false,
        }
    }

    /// The id of the active section, if any claimed the highlight yet.
    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Look up a section's ratio by id (animation triggers key off this).
    pub fn ratio_of(&self, id: &str) -> f32 {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .map(|i| self.visibility_ratio(i))
            .unwrap_or(0.0)
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Re-pick the active section: the most visible one meeting the
    /// threshold. When no section qualifies the previous highlight stays.
    fn recompute(&mut self) {
        let mut best: Option<(usize, f32)> = None;
        for index in 0..self.sections.len() {
            let ratio = self.visibility_ratio(index);
            if ratio >= ACTIVE_THRESHOLD {
                match best {
                    Some((_, best_ratio)) if best_ratio >= ratio => {}
                    _ => best = Some((index, ratio)),
                }
            }
        }
        if let Some((index, _)) = best {
            self.active = Some(index);
        }
    }
}

fn content_height(sections: &[Section]) -> u16 {
    sections
        .iter()
        .map(|s| s.top.saturating_add(s.height))
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0, 20),
            Section::new("stats", 20, 10),
            Section::new("projects", 30, 30),
            Section::new("contact", 60, 20),
        ]
    }

    #[test]
    fn test_initial_active_is_most_visible() {
        let tracker = SectionTracker::new(page(), 24);
        // "home" fills most of the initial viewport.
        assert_eq!(tracker.active_id(), Some("home"));
    }

    #[test]
    fn test_scroll_moves_highlight() {
        let mut tracker = SectionTracker::new(page(), 24);

        assert!(tracker.scroll_by(30));
        // Viewport rows 30..54 sit inside "projects".
        assert_eq!(tracker.active_id(), Some("projects"));
    }

    #[test]
    fn test_scroll_clamps_at_boundaries() {
        let mut tracker = SectionTracker::new(page(), 24);

        assert!(!tracker.scroll_by(-1));
        assert_eq!(tracker.scroll_offset(), 0);

        assert!(tracker.scroll_by(10_000));
        assert_eq!(tracker.scroll_offset(), tracker.max_scroll());
        assert!(!tracker.scroll_by(1));
    }

    #[test]
    fn test_barely_visible_section_does_not_steal_highlight() {
        let mut tracker = SectionTracker::new(page(), 24);

        // Rows 10..34: "home" shows 10/20 = 0.5, "stats" 10/10 = 1.0,
        // "projects" 4/30 ≈ 0.13 (below threshold).
        tracker.scroll_by(10);
        assert_eq!(tracker.active_id(), Some("stats"));
    }

    #[test]
    fn test_highlight_sticks_when_nothing_qualifies() {
        let sections = vec![Section::new("a", 0, 4), Section::new("b", 100, 4)];
        let mut tracker = SectionTracker::new(sections, 10);
        assert_eq!(tracker.active_id(), Some("a"));

        // Scroll into the empty middle: neither section visible, the old
        // highlight stays.
        tracker.scroll_by(50);
        assert_eq!(tracker.active_id(), Some("a"));
    }

    #[test]
    fn test_select_scrolls_into_view() {
        let mut tracker = SectionTracker::new(page(), 24);

        assert!(tracker.select("contact"));
        assert_eq!(tracker.active_id(), Some("contact"));
        // Clamped: contact.top (60) exceeds max_scroll (80 - 24 = 56).
        assert_eq!(tracker.scroll_offset(), 56);

        assert!(!tracker.select("nope"));
        assert_eq!(tracker.active_id(), Some("contact"));
    }

    #[test]
    fn test_select_index() {
        let mut tracker = SectionTracker::new(page(), 24);
        assert!(tracker.select_index(1));
        assert_eq!(tracker.active_id(), Some("stats"));
        assert!(!tracker.select_index(9));
    }

    #[test]
    fn test_ratio_of() {
        let tracker = SectionTracker::new(page(), 24);
        assert_eq!(tracker.ratio_of("home"), 1.0);
        assert_eq!(tracker.ratio_of("contact"), 0.0);
        assert_eq!(tracker.ratio_of("unknown"), 0.0);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut tracker = SectionTracker::new(page(), 24);
        tracker.scroll_by(10_000);
        assert_eq!(tracker.scroll_offset(), 56);

        tracker.set_viewport_height(80);
        assert_eq!(tracker.max_scroll(), 0);
        assert_eq!(tracker.scroll_offset(), 0);
    }

    #[test]
    fn test_zero_height_section_never_visible() {
        let tracker = SectionTracker::new(vec![Section::new("empty", 0, 0)], 24);
        assert_eq!(tracker.visibility_ratio(0), 0.0);
        assert_eq!(tracker.active_id(), None);
    }
}
