use tracing::debug;

use super::SectionGeometry;

/// Maps overall progress to a feature index: `floor(progress × count)`,
/// clamped to the valid range.
pub fn feature_index(progress: f64, count: usize) -> usize {
    let last = count.saturating_sub(1);
    let raw = (progress * count as f64).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(last)
    }
}

/// Progress at the middle of feature `index`'s band; scrolling there makes
/// it the active feature.
pub fn feature_anchor(index: usize, count: usize) -> f64 {
    let count = count.max(1);
    (index.min(count - 1) as f64 + 0.5) / count as f64
}

/// What a scroll event did to the showcase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowcaseUpdate {
    /// Section not engaged (before it or already past it).
    Skipped,
    /// Progress moved, same active feature.
    Progressed,
    /// Progress moved and the active feature changed.
    ActiveChanged { from: usize, to: usize },
}

/// Progress through a pinned section that is `count` viewports tall.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseProgress {
    feature_count: usize,
    progress: f64,
    active: usize,
}

impl ShowcaseProgress {
    pub fn new(feature_count: usize) -> Self {
        Self {
            feature_count: feature_count.max(1),
            progress: 0.0,
            active: 0,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Fractional position within the active feature, in [0, 1).
    pub fn feature_progress(&self) -> f64 {
        (self.progress * self.feature_count as f64).fract()
    }

    pub fn on_scroll(&mut self, geometry: SectionGeometry) -> ShowcaseUpdate {
        let scrolled = geometry.scrolled_into();
        let distance = geometry.scrollable_distance();

        if distance <= 0.0 || scrolled < 0.0 || scrolled > distance {
            return ShowcaseUpdate::Skipped;
        }

        self.progress = scrolled / distance;

        let next = feature_index(self.progress, self.feature_count);
        if next == self.active {
            return ShowcaseUpdate::Progressed;
        }

        let from = self.active;
        self.active = next;
        debug!(from, to = next, progress = self.progress, "showcase feature changed");
        ShowcaseUpdate::ActiveChanged { from, to: next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn at_offset(offset: f64, count: usize) -> SectionGeometry {
        SectionGeometry::new(-offset, count as f64 * VIEWPORT, VIEWPORT)
    }

    #[test]
    fn index_is_floor_then_clamped() {
        assert_eq!(feature_index(0.0, 3), 0);
        assert_eq!(feature_index(0.34, 3), 1);
        assert_eq!(feature_index(0.67, 3), 2);
        assert_eq!(feature_index(0.99, 3), 2);
        assert_eq!(feature_index(1.0, 3), 2);
        assert_eq!(feature_index(-0.5, 3), 0);
        assert_eq!(feature_index(0.5, 0), 0);
    }

    #[test]
    fn anchors_select_their_feature() {
        for count in 1..=5 {
            for index in 0..count {
                assert_eq!(feature_index(feature_anchor(index, count), count), index);
            }
        }
        assert_eq!(feature_anchor(7, 3), feature_anchor(2, 3));
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let mut showcase = ShowcaseProgress::new(3);
        let distance = 2.0 * VIEWPORT;

        assert_eq!(showcase.on_scroll(at_offset(0.0, 3)), ShowcaseUpdate::Progressed);
        assert_eq!(showcase.progress(), 0.0);

        assert_eq!(
            showcase.on_scroll(at_offset(distance, 3)),
            ShowcaseUpdate::ActiveChanged { from: 0, to: 2 }
        );
        assert_eq!(showcase.progress(), 1.0);

        assert_eq!(
            showcase.on_scroll(at_offset(distance + 1.0, 3)),
            ShowcaseUpdate::Skipped
        );
        assert_eq!(showcase.progress(), 1.0);
    }

    #[test]
    fn before_section_is_skipped() {
        let mut showcase = ShowcaseProgress::new(3);
        showcase.on_scroll(at_offset(400.0, 3));
        let progress = showcase.progress();

        assert_eq!(showcase.on_scroll(at_offset(-10.0, 3)), ShowcaseUpdate::Skipped);
        assert_eq!(showcase.progress(), progress);
    }

    #[test]
    fn degenerate_section_is_skipped() {
        let mut showcase = ShowcaseProgress::new(3);
        let flat = SectionGeometry::new(0.0, VIEWPORT, VIEWPORT);
        assert_eq!(showcase.on_scroll(flat), ShowcaseUpdate::Skipped);
        assert_eq!(showcase.progress(), 0.0);
    }

    #[test]
    fn feature_progress_is_fractional_part() {
        let mut showcase = ShowcaseProgress::new(2);
        // distance = 800, offset 600 -> progress 0.75 -> 1.5 features in
        showcase.on_scroll(at_offset(600.0, 2));
        assert_eq!(showcase.active_index(), 1);
        assert!((showcase.feature_progress() - 0.5).abs() < 1e-9);
    }
}
