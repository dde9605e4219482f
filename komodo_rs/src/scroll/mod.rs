//! Scroll-progress controllers.
//!
//! Both controllers consume plain numbers read from the DOM
//! (`getBoundingClientRect`, `innerHeight`, `scrollY`, wheel `deltaY`) and
//! return what changed. They never touch the DOM themselves.

mod hero;
mod showcase;

pub use hero::{
    DEFAULT_LEAD_IN_FRACTION, DEFAULT_RELEASE_THRESHOLD, HeroMorph, MorphUpdate, WheelOutcome,
};
pub use showcase::{ShowcaseProgress, ShowcaseUpdate, feature_anchor, feature_index};

/// Position of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// `getBoundingClientRect().top`; negative once the section top has
    /// scrolled above the viewport.
    pub top: f64,
    /// Section height in px.
    pub height: f64,
    /// `window.innerHeight` in px.
    pub viewport_height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    /// Distance the viewport has travelled past the section top.
    pub fn scrolled_into(&self) -> f64 {
        -self.top
    }

    /// Distance over which the pinned content stays in view.
    pub fn scrollable_distance(&self) -> f64 {
        self.height - self.viewport_height
    }

    /// Page scroll delta that brings the section to `progress`.
    pub fn scroll_delta_to(&self, progress: f64) -> f64 {
        self.top + progress.clamp(0.0, 1.0) * self.scrollable_distance()
    }
}

/// Rounds to two decimals, the granularity at which progress changes are
/// considered distinct.
pub fn round_progress(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
