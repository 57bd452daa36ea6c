//! Pointer Trail - eased indicator trailing the pointer position.
//!
//! The trail never jumps to the pointer; each frame it moves a fixed
//! fraction of the remaining distance toward the target, which produces the
//! characteristic smooth chase. Mouse-move events set the target, resize
//! events update the bounds, and the frame loop calls [`PointerTrail::tick`]
//! once per frame.
//!
//! The trail is created disabled when motion is reduced; disabled trails
//! ignore targets and ticks entirely.

/// Fraction of the remaining distance covered per frame.
pub const EASE_AMOUNT: f32 = 0.12;

/// Eased pointer-trailing indicator.
#[derive(Debug, Clone)]
pub struct PointerTrail {
    x: f32,
    y: f32,
    target_x: f32,
    target_y: f32,
    width: u16,
    height: u16,
    enabled: bool,
}

impl PointerTrail {
    /// Create a trail at the origin, bounded by the given area.
    pub fn new(width: u16, height: u16, enabled: bool) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            width,
            height,
            enabled,
        }
    }

    /// Set the chase target from a pointer position, clamped to bounds.
    pub fn point_to(&mut self, x: u16, y: u16) {
        if !self.enabled {
            return;
        }
        self.target_x = f32::from(x.min(self.width.saturating_sub(1)));
        self.target_y = f32::from(y.min(self.height.saturating_sub(1)));
    }

    /// Update bounds on resize, clamping both target and position.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let max_x = f32::from(width.saturating_sub(1));
        let max_y = f32::from(height.saturating_sub(1));
        self.target_x = self.target_x.min(max_x);
        self.target_y = self.target_y.min(max_y);
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
    }

    /// Advance one easing step toward the target.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        self.x += (self.target_x - self.x) * EASE_AMOUNT;
        self.y += (self.target_y - self.y) * EASE_AMOUNT;
    }

    /// Current indicator cell.
    pub fn position(&self) -> (u16, u16) {
        (self.x.round() as u16, self.y.round() as u16)
    }

    /// Current chase target cell.
    pub fn target(&self) -> (u16, u16) {
        (self.target_x.round() as u16, self.target_y.round() as u16)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(trail: &PointerTrail) -> f32 {
        let (tx, ty) = trail.target();
        let (x, y) = trail.position();
        let dx = f32::from(tx) - f32::from(x);
        let dy = f32::from(ty) - f32::from(y);
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn test_converges_toward_target() {
        let mut trail = PointerTrail::new(80, 24, true);
        trail.point_to(40, 12);

        let mut last = distance(&trail);
        for _ in 0..60 {
            trail.tick();
            let now = distance(&trail);
            assert!(now <= last, "trail moved away from target");
            last = now;
        }
        assert_eq!(trail.position(), (40, 12));
    }

    #[test]
    fn test_never_jumps() {
        let mut trail = PointerTrail::new(80, 24, true);
        trail.point_to(50, 20);
        trail.tick();

        // One step covers only a fraction of the distance.
        let (x, y) = trail.position();
        assert!(x < 20);
        assert!(y < 10);
    }

    #[test]
    fn test_target_clamped_to_bounds() {
        let mut trail = PointerTrail::new(10, 5, true);
        trail.point_to(100, 100);
        assert_eq!(trail.target(), (9, 4));
    }

    #[test]
    fn test_resize_clamps_position_and_target() {
        let mut trail = PointerTrail::new(80, 24, true);
        trail.point_to(79, 23);
        for _ in 0..200 {
            trail.tick();
        }
        assert_eq!(trail.position(), (79, 23));

        trail.resize(20, 10);
        assert_eq!(trail.target(), (19, 9));
        assert_eq!(trail.position(), (19, 9));
    }

    #[test]
    fn test_disabled_trail_is_inert() {
        let mut trail = PointerTrail::new(80, 24, false);
        trail.point_to(40, 12);
        for _ in 0..10 {
            trail.tick();
        }
        assert_eq!(trail.position(), (0, 0));
        assert_eq!(trail.target(), (0, 0));
    }
}
