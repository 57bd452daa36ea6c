//! Motion Preference - reduced-motion signal with stored override.
//!
//! Resolved once at startup from two inputs:
//!
//! - the OS-level signal, read from the `FOLIO_REDUCE_MOTION` environment
//!   variable (the terminal analog of a reduced-motion media query), and
//! - an optional override persisted in the preference store: the key
//!   `reduced-motion-override` with value `allow` forces animation despite
//!   the OS signal.
//!
//! The preference is not re-evaluated mid-run; animations consult the value
//! captured at startup for their whole lifetime.

use crate::prefs::PrefStore;

/// Environment variable carrying the OS-level reduced-motion signal.
/// Any non-empty value other than `0` requests reduced motion.
pub const REDUCE_MOTION_ENV: &str = "FOLIO_REDUCE_MOTION";

/// Preference-store key for the animation override.
pub const OVERRIDE_KEY: &str = "reduced-motion-override";

/// Override value that forces animation despite reduced motion.
pub const OVERRIDE_ALLOW: &str = "allow";

/// Resolved motion preference, captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPreference {
    reduce: bool,
    override_allow: bool,
}

impl MotionPreference {
    pub fn new(reduce: bool, override_allow: bool) -> Self {
        Self {
            reduce,
            override_allow,
        }
    }

    /// Full animation, no reduced-motion request.
    pub fn full_motion() -> Self {
        Self::new(false, false)
    }

    /// Reduced motion requested, no override stored.
    pub fn reduced() -> Self {
        Self::new(true, false)
    }

    /// Read the environment signal and the stored override.
    pub fn detect(prefs: &PrefStore) -> Self {
        let reduce = std::env::var(REDUCE_MOTION_ENV)
            .map(|v| !v.is_empty() && v != "0")
            .unwrap_or(false);
        let override_allow = prefs.get(OVERRIDE_KEY) == Some(OVERRIDE_ALLOW);
        Self::new(reduce, override_allow)
    }

    /// Whether animations should run.
    ///
    /// Reduced motion wins unless the stored override allows animation.
    pub fn animations_allowed(&self) -> bool {
        !self.reduce || self.override_allow
    }

    /// The raw reduced-motion signal.
    pub fn is_reduced(&self) -> bool {
        self.reduce
    }

    /// Whether the stored override is active.
    pub fn override_active(&self) -> bool {
        self.override_allow
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_motion_allows_animation() {
        assert!(MotionPreference::full_motion().animations_allowed());
    }

    #[test]
    fn test_reduced_suppresses_animation() {
        assert!(!MotionPreference::reduced().animations_allowed());
    }

    #[test]
    fn test_override_wins_over_reduced() {
        assert!(MotionPreference::new(true, true).animations_allowed());
    }

    #[test]
    fn test_override_without_reduced_is_harmless() {
        assert!(MotionPreference::new(false, true).animations_allowed());
    }

    #[test]
    fn test_detect_reads_override_from_prefs() {
        let mut prefs = PrefStore::in_memory();
        assert!(!MotionPreference::detect(&prefs).override_active());

        prefs.set(OVERRIDE_KEY, OVERRIDE_ALLOW);
        assert!(MotionPreference::detect(&prefs).override_active());

        // Only the exact "allow" value counts.
        prefs.set(OVERRIDE_KEY, "yes please");
        assert!(!MotionPreference::detect(&prefs).override_active());
    }
}
