use tracing::{debug, info};

use super::round_progress;

/// Share of the viewport height over which the hero morphs into the terminal.
pub const DEFAULT_LEAD_IN_FRACTION: f64 = 0.5;

/// Accumulated downward wheel delta needed to break out of the lock.
pub const DEFAULT_RELEASE_THRESHOLD: f64 = 400.0;

/// What a scroll event did to the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MorphUpdate {
    /// Rounded progress did not change; nothing to render.
    Unchanged,
    /// New rounded progress.
    Progressed(f64),
    /// Progress hit 1 while scrolling down. Wheel capture starts.
    Locked,
}

/// What to do with a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Let the page scroll.
    PassThrough,
    /// Swallow the event; the page stays put.
    Captured,
    /// Swallow the event and stop capturing.
    Released,
}

/// Hero-to-terminal morph with a scroll-lock at full progress.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroMorph {
    lead_in_fraction: f64,
    release_threshold: f64,
    progress: f64,
    last_scroll_y: f64,
    locked: bool,
    accumulated: f64,
}

impl Default for HeroMorph {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD_IN_FRACTION, DEFAULT_RELEASE_THRESHOLD)
    }
}

impl HeroMorph {
    pub fn new(lead_in_fraction: f64, release_threshold: f64) -> Self {
        Self {
            lead_in_fraction,
            release_threshold,
            progress: 0.0,
            last_scroll_y: 0.0,
            locked: false,
            accumulated: 0.0,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Records the position found on mount. Never locks, so a page restored
    /// below the hero does not start captured.
    pub fn prime(&mut self, top: f64, viewport_height: f64, scroll_y: f64) {
        self.progress = self.measure(top, viewport_height);
        self.last_scroll_y = scroll_y;
    }

    /// `top` is the hero's bounding-rect top, `scroll_y` the page offset.
    pub fn on_scroll(&mut self, top: f64, viewport_height: f64, scroll_y: f64) -> MorphUpdate {
        let downward = scroll_y > self.last_scroll_y;
        self.last_scroll_y = scroll_y;

        let next = self.measure(top, viewport_height);
        if next == self.progress {
            return MorphUpdate::Unchanged;
        }
        self.progress = next;

        if next >= 1.0 && downward && !self.locked {
            self.locked = true;
            self.accumulated = 0.0;
            info!(scroll_y, "hero scroll lock engaged");
            return MorphUpdate::Locked;
        }

        debug!(progress = next, "hero progress");
        MorphUpdate::Progressed(next)
    }

    /// Feeds one wheel event. Only positive (downward) deltas are captured,
    /// and meeting the threshold is the only way out of the lock.
    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if !self.locked || delta_y <= 0.0 {
            return WheelOutcome::PassThrough;
        }

        self.accumulated += delta_y;
        if self.accumulated >= self.release_threshold {
            self.unlock();
            info!("hero scroll lock released by wheel");
            return WheelOutcome::Released;
        }

        WheelOutcome::Captured
    }

    fn unlock(&mut self) {
        self.locked = false;
        self.accumulated = 0.0;
    }

    fn measure(&self, top: f64, viewport_height: f64) -> f64 {
        let band = viewport_height * self.lead_in_fraction;
        if band <= 0.0 {
            return if top < 0.0 { 1.0 } else { 0.0 };
        }
        round_progress((-top / band).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    /// Hero sits at the page top, so its rect top is `-scroll_y`.
    fn scroll_to(hero: &mut HeroMorph, y: f64) -> MorphUpdate {
        hero.on_scroll(-y, VIEWPORT, y)
    }

    fn locked_hero() -> HeroMorph {
        let mut hero = HeroMorph::default();
        scroll_to(&mut hero, 250.0);
        assert_eq!(scroll_to(&mut hero, 500.0), MorphUpdate::Locked);
        hero
    }

    #[test]
    fn lead_in_is_half_a_viewport() {
        let mut hero = HeroMorph::default();
        assert_eq!(scroll_to(&mut hero, 250.0), MorphUpdate::Progressed(0.5));
        assert_eq!(hero.progress(), 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        let mut hero = HeroMorph::default();
        hero.on_scroll(200.0, VIEWPORT, 0.0);
        assert_eq!(hero.progress(), 0.0);

        scroll_to(&mut hero, 5000.0);
        assert_eq!(hero.progress(), 1.0);
    }

    #[test]
    fn same_rounded_value_is_suppressed() {
        let mut hero = HeroMorph::default();
        scroll_to(&mut hero, 250.0);
        assert_eq!(scroll_to(&mut hero, 251.0), MorphUpdate::Unchanged);
        assert_eq!(hero.progress(), 0.5);
    }

    #[test]
    fn locks_when_saturating_downward() {
        let hero = locked_hero();
        assert!(hero.is_locked());
        assert_eq!(hero.accumulated(), 0.0);
    }

    #[test]
    fn saturating_upward_does_not_lock() {
        let mut hero = HeroMorph::default();
        hero.prime(-100.0, VIEWPORT, 2000.0);
        // Layout shift: the hero jumps to full progress while the page moves up.
        assert_eq!(
            hero.on_scroll(-600.0, VIEWPORT, 1500.0),
            MorphUpdate::Progressed(1.0)
        );
        assert!(!hero.is_locked());
    }

    #[test]
    fn prime_never_locks() {
        let mut hero = HeroMorph::default();
        hero.prime(-3000.0, VIEWPORT, 3000.0);
        assert_eq!(hero.progress(), 1.0);
        assert!(!hero.is_locked());
        assert_eq!(scroll_to(&mut hero, 3100.0), MorphUpdate::Unchanged);
        assert!(!hero.is_locked());
    }

    #[test]
    fn wheel_below_threshold_stays_locked() {
        let mut hero = locked_hero();
        assert_eq!(hero.on_wheel(150.0), WheelOutcome::Captured);
        assert_eq!(hero.on_wheel(249.0), WheelOutcome::Captured);
        assert!(hero.is_locked());
        assert_eq!(hero.accumulated(), 399.0);
    }

    #[test]
    fn wheel_meeting_threshold_releases() {
        let mut hero = locked_hero();
        hero.on_wheel(300.0);
        assert_eq!(hero.on_wheel(100.0), WheelOutcome::Released);
        assert!(!hero.is_locked());
        assert_eq!(hero.accumulated(), 0.0);
        assert_eq!(hero.on_wheel(100.0), WheelOutcome::PassThrough);
    }

    #[test]
    fn upward_wheel_is_never_captured() {
        let mut hero = locked_hero();
        assert_eq!(hero.on_wheel(-120.0), WheelOutcome::PassThrough);
        assert_eq!(hero.accumulated(), 0.0);
        assert!(hero.is_locked());
    }

    #[test]
    fn unlocked_wheel_passes_through() {
        let mut hero = HeroMorph::default();
        assert_eq!(hero.on_wheel(500.0), WheelOutcome::PassThrough);
    }

    #[test]
    fn lock_survives_upward_scroll() {
        let mut hero = locked_hero();
        hero.on_wheel(200.0);
        assert_eq!(hero.on_wheel(-100.0), WheelOutcome::PassThrough);

        assert_eq!(scroll_to(&mut hero, 400.0), MorphUpdate::Progressed(0.8));
        assert!(hero.is_locked());
        assert_eq!(hero.accumulated(), 200.0);

        // Still needs the rest of the threshold to get out.
        assert_eq!(hero.on_wheel(199.0), WheelOutcome::Captured);
        assert_eq!(hero.on_wheel(1.0), WheelOutcome::Released);
        assert!(!hero.is_locked());
    }

    #[test]
    fn returning_to_saturation_while_locked_does_not_relock() {
        let mut hero = locked_hero();
        scroll_to(&mut hero, 300.0);
        assert_eq!(scroll_to(&mut hero, 500.0), MorphUpdate::Progressed(1.0));
        assert!(hero.is_locked());
    }

    #[test]
    fn relocks_only_after_leaving_saturation() {
        let mut hero = locked_hero();
        assert_eq!(hero.on_wheel(400.0), WheelOutcome::Released);

        // Page keeps scrolling; progress stays 1 and is suppressed.
        assert_eq!(scroll_to(&mut hero, 900.0), MorphUpdate::Unchanged);
        assert!(!hero.is_locked());

        // Back into the band, then down again.
        assert_eq!(scroll_to(&mut hero, 300.0), MorphUpdate::Progressed(0.6));
        assert_eq!(scroll_to(&mut hero, 520.0), MorphUpdate::Locked);
    }
}
