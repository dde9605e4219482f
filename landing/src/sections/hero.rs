//! Hero: the KOMODO wordmark fades out while the terminal scales in. Once
//! the terminal fills the screen the page holds still until the reader
//! wheels past the release threshold.

use std::time::Duration;

use komodo::LandingConfig;
use komodo::scroll::{HeroMorph, MorphUpdate, WheelOutcome};
use leptos::{html, prelude::*};
use tracing::debug;
use wasm_bindgen::JsCast;

use super::{KOMODO_ART, KomodoTerminal, LINE_COLORS};
use crate::dom::{self, EventListenerGuard};

type GuardSlot = StoredValue<Option<EventListenerGuard>, LocalStorage>;

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    // Pinned for one viewport, plus the lead-in over which the morph plays.
    let section_height = format!("{}vh", (1.0 + config.hero.lead_in_fraction) * 100.0);

    let morph = StoredValue::new(config.hero.morph());
    let (progress, set_progress) = signal(0.0_f64);
    let (locked, set_locked) = signal(false);

    let section_ref = NodeRef::<html::Section>::new();
    let scroll_guard: GuardSlot = StoredValue::new_local(None);
    let wheel_guard: GuardSlot = StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(section) = section_ref.get() else {
            return;
        };
        if let (Some(geometry), Some(y)) = (dom::section_geometry(&section), dom::scroll_y()) {
            morph.update_value(|m| m.prime(geometry.top, geometry.viewport_height, y));
            set_progress.set(morph.with_value(HeroMorph::progress));
        }

        let on_scroll = move |_: web_sys::Event| {
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let (Some(geometry), Some(y)) = (dom::section_geometry(&section), dom::scroll_y())
            else {
                return;
            };

            match morph.try_update_value(|m| m.on_scroll(geometry.top, geometry.viewport_height, y)) {
                Some(MorphUpdate::Progressed(value)) => set_progress.set(value),
                Some(MorphUpdate::Locked) => {
                    set_progress.set(1.0);
                    set_locked.set(true);
                    wheel_guard.set_value(capture_wheel(morph, set_locked, wheel_guard));
                }
                Some(MorphUpdate::Unchanged) | None => {}
            }
        };
        scroll_guard.set_value(EventListenerGuard::window("scroll", true, on_scroll));
    });

    let art_style = move || {
        let p = progress.get();
        format!("opacity: {:.2}; transform: scale({:.3});", 1.0 - p, 1.0 + p * 0.15)
    };
    let terminal_style = move || {
        let p = progress.get();
        let interactive = if p < 0.5 { "none" } else { "auto" };
        format!(
            "opacity: {p:.2}; transform: scale({:.3}); pointer-events: {interactive};",
            0.6 + p * 0.4
        )
    };

    view! {
        <section id="hero" class="hero" node_ref=section_ref style:height=section_height>
            <div class="hero-sticky">
                <pre class="hero-art" aria-label="KOMODO" style=art_style>
                    {KOMODO_ART
                        .lines()
                        .zip(LINE_COLORS)
                        .map(|(line, color)| view! { <div style:color=color>{line}</div> })
                        .collect_view()}
                </pre>
                <div
                    class="hero-terminal"
                    class:locked=move || locked.get()
                    style=terminal_style
                >
                    <KomodoTerminal />
                </div>
                <Show when=move || locked.get()>
                    <div class="hero-scroll-hint">"Keep scrolling to continue ↓"</div>
                </Show>
            </div>
        </section>
    }
}

/// Non-passive wheel listener that holds the page while the hero is locked.
fn capture_wheel(
    morph: StoredValue<HeroMorph>,
    set_locked: WriteSignal<bool>,
    wheel_guard: GuardSlot,
) -> Option<EventListenerGuard> {
    EventListenerGuard::window("wheel", false, move |ev: web_sys::Event| {
        let Some(wheel) = ev.dyn_ref::<web_sys::WheelEvent>() else {
            return;
        };
        match morph.try_update_value(|m| m.on_wheel(wheel.delta_y())) {
            Some(WheelOutcome::Captured) => ev.prevent_default(),
            Some(WheelOutcome::Released) => {
                ev.prevent_default();
                set_locked.set(false);
                // This closure is owned by the guard; drop it after returning.
                // A lock engaged in the meantime owns a fresh guard, keep it.
                set_timeout(
                    move || {
                        if !morph.with_value(HeroMorph::is_locked) {
                            wheel_guard.set_value(None);
                        }
                    },
                    Duration::ZERO,
                );
            }
            Some(WheelOutcome::PassThrough) | None => {
                debug!(locked = morph.with_value(HeroMorph::is_locked), "wheel passed through");
            }
        }
    })
}
