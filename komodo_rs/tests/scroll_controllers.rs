//! Scroll-driven controllers fed with realistic scroll traces.

use komodo::scroll::{
    HeroMorph, MorphUpdate, SectionGeometry, ShowcaseProgress, ShowcaseUpdate, WheelOutcome,
};
use komodo::showcase::FEATURES;
use pretty_assertions::assert_eq;

const VIEWPORT: f64 = 900.0;

/// Showcase placed `offset_top` px down the page, `count` viewports tall.
fn showcase_geometry(page_scroll: f64, offset_top: f64, count: usize) -> SectionGeometry {
    SectionGeometry::new(offset_top - page_scroll, count as f64 * VIEWPORT, VIEWPORT)
}

#[test]
fn showcase_progress_at_section_bounds() {
    let count = FEATURES.len();
    let offset_top = 3000.0;
    let distance = (count as f64 - 1.0) * VIEWPORT;
    let mut showcase = ShowcaseProgress::new(count);

    showcase.on_scroll(showcase_geometry(offset_top, offset_top, count));
    assert_eq!(showcase.progress(), 0.0);

    showcase.on_scroll(showcase_geometry(offset_top + distance, offset_top, count));
    assert_eq!(showcase.progress(), 1.0);

    let update = showcase.on_scroll(showcase_geometry(offset_top + distance + 50.0, offset_top, count));
    assert_eq!(update, ShowcaseUpdate::Skipped);
    assert_eq!(showcase.progress(), 1.0);
}

#[test]
fn showcase_walks_through_every_feature_in_order() {
    let count = FEATURES.len();
    let offset_top = 1200.0;
    let distance = (count as f64 - 1.0) * VIEWPORT;
    let mut showcase = ShowcaseProgress::new(count);

    let mut changes = Vec::new();
    let mut y = offset_top - 400.0;
    while y <= offset_top + distance + 400.0 {
        if let ShowcaseUpdate::ActiveChanged { from, to } =
            showcase.on_scroll(showcase_geometry(y, offset_top, count))
        {
            changes.push((from, to));
        }
        y += 30.0;
    }

    assert_eq!(changes, vec![(0, 1), (1, 2)]);
    assert_eq!(showcase.active_index(), count - 1);
    assert!((0.0..=1.0).contains(&showcase.progress()));
}

#[test]
fn hero_lock_and_wheel_breakout() {
    let mut hero = HeroMorph::new(0.5, 300.0);
    hero.prime(0.0, VIEWPORT, 0.0);

    let mut locked_at = None;
    for y in (0..=600).step_by(50) {
        let y = y as f64;
        if hero.on_scroll(-y, VIEWPORT, y) == MorphUpdate::Locked {
            locked_at = Some(y);
            break;
        }
    }
    assert_eq!(locked_at, Some(450.0));
    assert!(hero.is_locked());

    let outcomes: Vec<_> = [100.0, -40.0, 100.0, 99.0, 1.0]
        .into_iter()
        .map(|dy| hero.on_wheel(dy))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            WheelOutcome::Captured,
            WheelOutcome::PassThrough,
            WheelOutcome::Captured,
            WheelOutcome::Captured,
            WheelOutcome::Released,
        ]
    );
    assert!(!hero.is_locked());
    assert_eq!(hero.accumulated(), 0.0);
}

#[test]
fn hero_progress_never_leaves_unit_range() {
    let mut hero = HeroMorph::default();
    for y in [-500.0, 0.0, 120.0, 9000.0, 40.0, -20.0] {
        hero.on_scroll(-y, VIEWPORT, y);
        assert!((0.0..=1.0).contains(&hero.progress()), "y = {y}");
    }
}

#[test]
fn hero_lock_holds_through_upward_scrolling() {
    let mut hero = HeroMorph::new(0.5, 300.0);
    hero.prime(0.0, VIEWPORT, 0.0);
    assert_eq!(hero.on_scroll(-450.0, VIEWPORT, 450.0), MorphUpdate::Locked);

    // Upward wheel is not captured, the page scrolls back into the band.
    assert_eq!(hero.on_wheel(-120.0), WheelOutcome::PassThrough);
    for y in [400.0, 300.0, 150.0] {
        hero.on_scroll(-y, VIEWPORT, y);
        assert!(hero.is_locked(), "y = {y}");
    }
    assert_eq!(hero.progress(), 0.33);

    assert_eq!(hero.on_wheel(300.0), WheelOutcome::Released);
    assert!(!hero.is_locked());
}
